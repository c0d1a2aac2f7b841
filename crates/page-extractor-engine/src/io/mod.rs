//! Finding and reading pages under a docs folder.

use crate::models::PagePath;
use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PageIoError {
    #[error("docs directory not found: {0}")]
    MissingDocsDir(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl PageIoError {
    fn read(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Every `.md` page below `docs_root`, ordered by page key.
pub fn scan_pages(docs_root: &Path) -> Result<Vec<PagePath>, PageIoError> {
    if !docs_root.is_dir() {
        return Err(PageIoError::MissingDocsDir(docs_root.to_path_buf()));
    }

    let mut pages = Vec::new();
    let mut pending = vec![RelativePathBuf::new()];

    while let Some(dir) = pending.pop() {
        let absolute = dir.to_path(docs_root);
        for entry in fs::read_dir(&absolute).map_err(PageIoError::read(&absolute))? {
            let entry = entry.map_err(PageIoError::read(&absolute))?;
            let path = entry.path();
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                log::warn!("skipping non UTF-8 path {}", path.display());
                continue;
            };

            let relative = dir.join(name);
            if path.is_dir() {
                pending.push(relative);
            } else if relative.extension() == Some("md") {
                pages.push(PagePath::new(relative));
            }
        }
    }

    pages.sort_by(|a, b| a.page_key().cmp(b.page_key()));
    log::debug!("found {} pages under {}", pages.len(), docs_root.display());
    Ok(pages)
}

/// Reads a page's markdown source.
pub fn read_page(page: &PagePath, docs_root: &Path) -> Result<String, PageIoError> {
    let path = page.relative_path().to_path(docs_root);
    fs::read_to_string(&path).map_err(PageIoError::read(&path))
}

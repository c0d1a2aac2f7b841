use relative_path::{RelativePath, RelativePathBuf};

/// A documentation page's location relative to the docs root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePath {
    relative_path: RelativePathBuf,
    page_key: String,
}

impl PagePath {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let page_key = {
            let path_str = relative_path.as_str();
            path_str.strip_suffix(".md").unwrap_or(path_str).to_string()
        };

        Self {
            relative_path,
            page_key,
        }
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Relative path without the `.md` extension, used to key extracted pages.
    pub fn page_key(&self) -> &str {
        &self.page_key
    }
}

impl From<&str> for PagePath {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}

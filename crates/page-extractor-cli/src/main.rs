use anyhow::{Context, Result, bail};
use clap::Parser;
use page_extractor_config::Config;
use page_extractor_engine::{
    BodyFormat, ExtractOptions, ExtractionResult, PagePath, extract_with_options, io,
};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// Prints the title, description, sections and attributes of markdown pages as JSON.
#[derive(Debug, Parser)]
#[command(name = "page-extractor", version)]
struct Args {
    /// Config file to use instead of ~/.config/page-extractor/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Render textContent as HTML instead of markdown
    #[arg(long)]
    html: bool,

    /// Markdown files or docs folders; defaults to docs_path from the config
    #[arg(value_name = "FILE_OR_DIR")]
    targets: Vec<PathBuf>,
}

fn extract_file(path: &Path, options: &ExtractOptions) -> Result<ExtractionResult> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    extract_with_options(&content, options)
        .with_context(|| format!("Failed to extract {}", path.display()))
}

fn extract_dir(
    docs_root: &Path,
    options: &ExtractOptions,
) -> Result<BTreeMap<String, ExtractionResult>> {
    let pages = io::scan_pages(docs_root)?;
    let mut results = BTreeMap::new();

    for page in &pages {
        let content = io::read_page(page, docs_root)?;
        let result = extract_with_options(&content, options)
            .with_context(|| format!("Failed to extract {}", page.relative_path()))?;
        results.insert(page.page_key().to_string(), result);
    }

    log::info!(
        "extracted {} pages from {}",
        results.len(),
        docs_root.display()
    );
    Ok(results)
}

fn run(args: Args) -> Result<()> {
    let config = Config::resolve(args.config.as_deref())?;
    let mut options = config.extract;
    if args.html {
        options.body_format = BodyFormat::Html;
    }

    let targets = if args.targets.is_empty() {
        match config.docs_path {
            Some(docs_path) => {
                log::info!("No paths given, using docs_path from config");
                vec![docs_path]
            }
            None => bail!(
                "No paths given and no docs_path in {}",
                Config::default_path().display()
            ),
        }
    } else {
        args.targets
    };

    let output = if let [single] = targets.as_slice()
        && single.is_file()
    {
        serde_json::to_string_pretty(&extract_file(single, &options)?)?
    } else {
        let mut results = BTreeMap::new();
        for target in &targets {
            if target.is_dir() {
                results.extend(extract_dir(target, &options)?);
            } else {
                let key = PagePath::from(target.to_string_lossy().as_ref())
                    .page_key()
                    .to_string();
                results.insert(key, extract_file(target, &options)?);
            }
        }
        serde_json::to_string_pretty(&results)?
    };

    println!("{output}");
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

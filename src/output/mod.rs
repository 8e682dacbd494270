//! Output layout for mirrored pages
//!
//! Pages land under one root directory: identifier `/`-segments become
//! directories and each page is written as `<id>.html`. A site without a
//! wiki gets a single empty `.nowiki` marker instead.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the empty file marking a site without a wiki.
pub const NO_WIKI_MARKER: &str = ".nowiki";

/// Filesystem sink for mirrored wiki pages.
///
/// Filesystem errors are surfaced to the caller; unlike a failed page
/// fetch, a failed write means the environment is broken and the crawl
/// cannot meaningfully continue.
#[derive(Debug, Clone)]
pub struct PageStore {
    root: PathBuf,
}

impl PageStore {
    /// Creates the output directory (and any missing parents) and returns
    /// a store rooted there.
    pub fn create(root: &Path) -> io::Result<Self> {
        fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// The output directory this store writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a given page identifier is written to.
    pub fn page_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.html", id))
    }

    /// Writes one page, creating any directories its identifier implies.
    pub fn write_page(&self, id: &str, content: &str) -> io::Result<PathBuf> {
        let path = self.page_path(id);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Writes the empty marker meaning "this site has no wiki".
    pub fn write_no_wiki_marker(&self) -> io::Result<PathBuf> {
        let path = self.root.join(NO_WIKI_MARKER);
        fs::write(&path, "")?;
        Ok(path)
    }
}

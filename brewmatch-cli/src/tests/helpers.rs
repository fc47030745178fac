//! Test helpers for writing catalogue fixtures and capturing command output.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture");
}

/// A temporary directory holding a small two-category catalogue.
pub(super) struct CatalogFixture {
    _dir: TempDir,
    root: Utf8PathBuf,
    catalog: Utf8PathBuf,
}

impl CatalogFixture {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let catalog = root.join("catalog.json");
        write_utf8(
            &catalog,
            br#"[
                {"id": 21, "category": "tea", "name": "Chai Tea Latte"},
                {"id": 22, "category": "coffee", "name": "Cold Brew"},
                {"id": 23, "category": "coffee", "name": "Nitro Cold Brew"}
            ]"#,
        );
        Self {
            _dir: dir,
            root,
            catalog,
        }
    }

    pub(super) fn catalog(&self) -> &Utf8Path {
        &self.catalog
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }
}

pub(super) fn output_text(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).expect("utf-8 output")
}

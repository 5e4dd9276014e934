use std::{
    fs,
    path::{Path, PathBuf},
};

/// Scratch directory holding input files for a single test.
#[derive(Debug)]
pub struct Fixture {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::Builder::new().prefix("catter_").tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// A path inside the fixture that is guaranteed not to exist.
    pub fn missing(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }
}

use std::path::{Path, PathBuf};

use roster::adapter::outbound::sqlite::SqliteRosterStore;
use tempfile::TempDir;

/// Temporary on-disk roster database for integration tests.
///
/// The directory (and the database in it) is removed on drop.
pub struct TempDb {
    _dir: TempDir,
    path: PathBuf,
}

impl TempDb {
    pub fn create(name: &str) -> Self {
        let dir = tempfile::Builder::new()
            .prefix(&format!("roster-{name}-"))
            .tempdir()
            .expect("create temp dir");
        let path = dir.path().join("roster.db");
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn url(&self) -> String {
        self.path.display().to_string()
    }

    /// Open a fresh store on this database. Migrations run on every open.
    pub fn open(&self) -> SqliteRosterStore {
        SqliteRosterStore::open(&self.url()).expect("open roster store")
    }
}

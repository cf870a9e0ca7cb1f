use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::SourceError;
use crate::models::PackageRecord;

pub const DEFAULT_DBPATH: &str = "/var/lib/pacman";

/// Local database format written by pacman 4.2 and later.
const SUPPORTED_DB_VERSION: u32 = 9;

/// Read-only handle on pacman's local package database.
///
/// Layout: `<dbpath>/local/ALPM_DB_VERSION` plus one `<name>-<ver>-<rel>/desc`
/// per installed package. The version file stays open while the handle is
/// alive and is closed when it is dropped.
#[derive(Debug)]
pub struct LocalDb {
    dir: PathBuf,
    _version_file: File,
}

impl LocalDb {
    /// Open and validate the local database under `dbpath`.
    pub fn open(dbpath: &Path) -> Result<Self, SourceError> {
        let dir = dbpath.join("local");
        if !dir.is_dir() {
            return Err(SourceError::DatabaseNotFound { path: dir });
        }

        let version_path = dir.join("ALPM_DB_VERSION");
        let mut version_file =
            File::open(&version_path).map_err(|e| SourceError::io(&version_path, e))?;
        let mut content = String::new();
        version_file
            .read_to_string(&mut content)
            .map_err(|e| SourceError::io(&version_path, e))?;

        let found = content.trim();
        if found.parse::<u32>().ok() != Some(SUPPORTED_DB_VERSION) {
            return Err(SourceError::UnsupportedVersion {
                path: version_path,
                found: found.to_string(),
                expected: SUPPORTED_DB_VERSION,
            });
        }

        debug!(path = %dir.display(), version = found, "opened local database");

        Ok(Self {
            dir,
            _version_file: version_file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }
}

impl Drop for LocalDb {
    fn drop(&mut self) {
        debug!(path = %self.dir.display(), "released local database");
    }
}

impl super::PackageSource for LocalDb {
    fn list_installed_packages(&self) -> Result<Vec<PackageRecord>, SourceError> {
        let mut dirs: Vec<PathBuf> = std::fs::read_dir(&self.dir)
            .map_err(|e| SourceError::io(&self.dir, e))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_dir())
            .collect();
        dirs.sort();

        let mut packages = Vec::with_capacity(dirs.len());
        for dir in dirs {
            let desc = dir.join("desc");
            if !desc.is_file() {
                warn!(path = %dir.display(), "skipping package entry without desc file");
                continue;
            }

            let content =
                std::fs::read_to_string(&desc).map_err(|e| SourceError::io(&desc, e))?;
            packages.push(parse_desc(&content, &desc)?);
        }

        debug!(count = packages.len(), "read installed packages");
        Ok(packages)
    }
}

/// Parse a `desc` file: `%SECTION%` headers each followed by value lines up to a blank line.
fn parse_desc(content: &str, path: &Path) -> Result<PackageRecord, SourceError> {
    let mut name: Option<String> = None;
    let mut licenses = Vec::new();
    let mut section: Option<&str> = None;

    for line in content.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            section = None;
            continue;
        }

        if section.is_none() {
            if line.len() > 2 && line.starts_with('%') && line.ends_with('%') {
                section = Some(line);
            }
            continue;
        }

        match section {
            Some("%NAME%") if name.is_none() => name = Some(line.to_string()),
            Some("%LICENSE%") => licenses.push(line.to_string()),
            _ => {}
        }
    }

    let name = name.ok_or_else(|| SourceError::MalformedDesc {
        path: path.to_path_buf(),
        reason: "missing %NAME% section".to_string(),
    })?;

    Ok(PackageRecord::new(name, licenses))
}

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SourceError;
use crate::models::PackageRecord;

/// Package list read from a JSON file.
///
/// The file holds an array of `{"name": ..., "licenses": [...]}` objects;
/// `licenses` may be omitted for packages without a license.
#[derive(Debug)]
pub struct JsonManifest {
    path: PathBuf,
}

impl JsonManifest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl super::PackageSource for JsonManifest {
    fn list_installed_packages(&self) -> Result<Vec<PackageRecord>, SourceError> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| SourceError::io(&self.path, e))?;
        let packages: Vec<PackageRecord> =
            serde_json::from_str(&content).map_err(|source| SourceError::Manifest {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), count = packages.len(), "read package manifest");
        Ok(packages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::PackageSource;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_manifest_keeps_order() {
        let mut f = NamedTempFile::new().unwrap();
        write!(
            f,
            r#"[
                {{"name": "foo", "licenses": ["MIT"]}},
                {{"name": "bar", "licenses": ["GPL2", "MIT"]}},
                {{"name": "bare"}}
            ]"#
        )
        .unwrap();

        let packages = JsonManifest::new(f.path()).list_installed_packages().unwrap();
        assert_eq!(packages.len(), 3);
        assert_eq!(packages[1], PackageRecord::new("bar", ["GPL2", "MIT"]));
        assert!(packages[2].licenses.is_empty());
    }

    #[test]
    fn test_invalid_manifest() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "{{\"name\": \"not-an-array\"}}").unwrap();

        let err = JsonManifest::new(f.path())
            .list_installed_packages()
            .unwrap_err();
        assert!(matches!(err, SourceError::Manifest { .. }));
    }

    #[test]
    fn test_missing_manifest() {
        let err = JsonManifest::new("/nonexistent/pacfree/packages.json")
            .list_installed_packages()
            .unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }
}

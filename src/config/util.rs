//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/content/work/  ← start
/// /home/user/site/folio.toml     ← found!
/// ```
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Absolute form of `path`, canonicalized when it exists.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_walks_upward() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("content/work");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("folio.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("folio.toml")).unwrap();
        assert_eq!(found, dir.path().join("folio.toml"));
    }

    #[test]
    fn test_find_config_prefers_nearest() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("inner");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("folio.toml"), "").unwrap();
        fs::write(nested.join("folio.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("folio.toml")).unwrap();
        assert_eq!(found, nested.join("folio.toml"));
    }

    #[test]
    fn test_find_config_ignores_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("folio.toml")).unwrap();
        let found = find_config_file_from(dir.path(), Path::new("folio.toml"));
        assert_ne!(found, Some(dir.path().join("folio.toml")));
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        assert_eq!(find_config_file_from(dir.path(), &path), None);
        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file_from(Path::new("/"), &path), Some(path));
    }

    #[test]
    fn test_normalize_path_absolute() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        assert_eq!(normalize_path(&missing), missing);
        assert!(normalize_path(Path::new("relative")).is_absolute());
    }
}

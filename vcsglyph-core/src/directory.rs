use std::path::PathBuf;

#[cfg(not(feature = "portable"))]
use directories::ProjectDirs;

pub const APPLICATION_NAME: &str = "vcsglyph";

pub struct Directory {}

impl Directory {
    #[cfg(not(feature = "portable"))]
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", APPLICATION_NAME, APPLICATION_NAME)
    }

    #[cfg(feature = "portable")]
    fn portable_root() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(APPLICATION_NAME)))
    }

    /// `None` when the directory is missing and cannot be created.
    fn ensure(dir: PathBuf) -> Option<PathBuf> {
        if !dir.exists() {
            std::fs::create_dir_all(&dir).ok()?;
        }
        Some(dir)
    }

    /// Where `vcsglyph.toml` is looked up. Created if missing.
    #[cfg(not(feature = "portable"))]
    pub fn config_directory() -> Option<PathBuf> {
        let dirs = Self::project_dirs()?;
        Self::ensure(dirs.config_dir().to_path_buf())
    }

    #[cfg(feature = "portable")]
    pub fn config_directory() -> Option<PathBuf> {
        Self::ensure(Self::portable_root()?.join("config"))
    }

    #[cfg(not(feature = "portable"))]
    pub fn logs_directory() -> Option<PathBuf> {
        let dirs = Self::project_dirs()?;
        Self::ensure(dirs.data_local_dir().join("logs"))
    }

    #[cfg(feature = "portable")]
    pub fn logs_directory() -> Option<PathBuf> {
        Self::ensure(Self::portable_root()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_ensure_creates_missing_directory() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("a").join("logs");
        assert_eq!(Directory::ensure(dir.clone()), Some(dir.clone()));
        assert!(dir.is_dir());
    }

    #[test]
    fn test_ensure_fails_under_a_file() {
        let root = TempDir::new().unwrap();
        let file = root.path().join("occupied");
        fs::write(&file, "").unwrap();
        assert_eq!(Directory::ensure(file.join("logs")), None);
    }
}

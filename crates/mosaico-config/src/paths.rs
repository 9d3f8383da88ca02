use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("missing required setting: {0}")]
  Missing(String),
  #[error("other: {0}")]
  Other(String),
}

#[derive(Debug, Clone)]
pub struct MosaicoPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
}

impl MosaicoPaths {
  pub fn new() -> Result<Self, ConfigError> {
    if let Ok(env_base) = std::env::var("MOSAICO_BASE_DIR") {
      return Self::at(Path::new(&env_base));
    }

    let proj_dirs = ProjectDirs::from("com", "mosaico", "mosaico").ok_or(ConfigError::Directories)?;
    let paths = Self {
      base_dir: proj_dirs.config_dir().to_path_buf(),
      config_dir: proj_dirs.config_dir().to_path_buf(),
    };
    paths.ensure_dirs()?;
    Ok(paths)
  }

  /// Layout portable: todo cuelga de `base`.
  pub fn at(base: &Path) -> Result<Self, ConfigError> {
    let paths = Self {
      base_dir: base.to_path_buf(),
      config_dir: base.join("config"),
    };
    paths.ensure_dirs()?;
    Ok(paths)
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("mosaico.toml")
  }

  fn ensure_dirs(&self) -> Result<(), ConfigError> {
    std::fs::create_dir_all(&self.config_dir)?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  struct EnvVarGuard {
    key: String,
    original: Option<String>,
  }

  impl EnvVarGuard {
    fn new(key: &str, value: &str) -> Self {
      let original = std::env::var(key).ok();
      unsafe { std::env::set_var(key, value) };
      EnvVarGuard { key: key.to_owned(), original }
    }
  }

  impl Drop for EnvVarGuard {
    fn drop(&mut self) {
      match &self.original {
        Some(val) => unsafe { std::env::set_var(&self.key, val) },
        None => unsafe { std::env::remove_var(&self.key) },
      }
    }
  }

  #[test]
  fn test_mosaico_base_dir_override() {
    let tmp = tempdir().unwrap();
    let _env = EnvVarGuard::new("MOSAICO_BASE_DIR", tmp.path().to_str().unwrap());

    let paths = MosaicoPaths::new().unwrap();

    assert_eq!(paths.base_dir, tmp.path());
    assert_eq!(paths.config_dir, tmp.path().join("config"));
    assert!(paths.config_dir.exists());
  }

  #[test]
  fn unusable_base_dir_is_an_error() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("not-a-dir");
    std::fs::write(&file, "").unwrap();

    assert!(matches!(MosaicoPaths::at(&file), Err(ConfigError::Io(_))));
  }

  #[test]
  fn config_file_lives_in_config_dir() {
    let tmp = tempdir().unwrap();
    let paths = MosaicoPaths::at(tmp.path()).unwrap();
    assert_eq!(paths.config_file(), tmp.path().join("config").join("mosaico.toml"));
  }
}

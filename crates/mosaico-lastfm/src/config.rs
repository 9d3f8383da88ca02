use mosaico_config::{ConfigBackend, ConfigError, MosaicoPaths, TomlConfigBackend};
use serde::{Deserialize, Serialize};

pub const ENV_API_URL: &str = "MOSAICO_LASTFM_API_URL";
pub const ENV_API_KEY: &str = "MOSAICO_LASTFM_API_KEY";

const SECTION: &str = "lastfm";

/// Connection settings for the Last.fm API.
///
/// Both `api_url` and `api_key` are required; the application refuses to
/// start without them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastFmConfig {
  /// Base URL, e.g. `https://ws.audioscrobbler.com/2.0/`.
  #[serde(default)]
  pub api_url: String,

  #[serde(default)]
  pub api_key: String,

  /// Whole-request timeout.
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
  30
}

impl Default for LastFmConfig {
  fn default() -> Self {
    Self { api_url: String::new(), api_key: String::new(), timeout_secs: default_timeout_secs() }
  }
}

impl LastFmConfig {
  /// Loads `[lastfm]` from mosaico.toml, applies the environment overrides
  /// and validates the result.
  ///
  /// On first run the file does not exist yet; a default section is written
  /// before loading.
  pub fn load(paths: MosaicoPaths) -> Result<Self, ConfigError> {
    let backend = TomlConfigBackend::new(paths);
    Self::seed(&backend)?;
    Self::load_from(&backend, |key| std::env::var(key).ok())
  }

  fn seed(backend: &TomlConfigBackend) -> Result<(), ConfigError> {
    let file = backend.paths().config_file();
    if file.exists() {
      return Ok(());
    }

    Self::default().save_to(backend)?;
    tracing::info!(path = %file.display(), "wrote default settings");
    Ok(())
  }

  /// Same as [`load`](Self::load) with an injected backend and environment.
  pub fn load_from<B, F>(backend: &B, env: F) -> Result<Self, ConfigError>
  where
    B: ConfigBackend,
    F: Fn(&str) -> Option<String>,
  {
    let cfg: Self = backend.load_section_with_default(SECTION)?;
    cfg.with_env(env).validate()
  }

  /// Non-blank environment values win over the file.
  pub fn with_env<F>(mut self, env: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let non_blank = |key: &str| env(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = non_blank(ENV_API_URL) {
      self.api_url = url;
    }
    if let Some(key) = non_blank(ENV_API_KEY) {
      self.api_key = key;
    }
    self
  }

  pub fn validate(self) -> Result<Self, ConfigError> {
    if self.api_url.trim().is_empty() {
      return Err(ConfigError::Missing(format!("{SECTION}.api_url ({ENV_API_URL})")));
    }
    if self.api_key.trim().is_empty() {
      return Err(ConfigError::Missing(format!("{SECTION}.api_key ({ENV_API_KEY})")));
    }
    Ok(self)
  }

  pub fn save_to<B: ConfigBackend>(&self, backend: &B) -> Result<(), ConfigError> {
    backend.save_section(SECTION, self)
  }
}

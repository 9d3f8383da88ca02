mod bridge;
pub mod config;
pub mod dto;
mod infrastructure;
#[cfg(test)]
mod test_support;

use mosaico_core::domain::Period;
use mosaico_core::ports::{ActivityReporter, AlbumCatalog};
use mosaico_core::services::EditorSession;
use mosaico_config::MosaicoPaths;
use mosaico_core::CoreError;
use mosaico_lastfm::{LastFmClient, LastFmConfig};

pub use bridge::{dispatch, serve, Command, Reply};
pub use infrastructure::logging::init_tracing;
pub use infrastructure::reporter::TracingReporter;

use crate::config::GridConfigDto;
use crate::dto::{slots_to_dto, AlbumDto, DropDto, SnapshotDto};

/// Type alias to simplify the generic signature of the session.
pub type ConcreteEditorSession = EditorSession<LastFmClient, TracingReporter>;

/// Application state: the one editor session of this process.
pub struct AppState {
  pub editor: ConcreteEditorSession,
}

impl AppState {
  /// Loads `.env`, reads the Last.fm settings and wires the session.
  ///
  /// Missing API URL or key is fatal: the error is meant to stop startup.
  pub fn bootstrap() -> Result<Self, CoreError> {
    match dotenvy::dotenv() {
      Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
      Err(e) if e.not_found() => {}
      Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
    }

    let paths = MosaicoPaths::new().map_err(|e| CoreError::Config(e.to_string()))?;
    tracing::debug!(path = %paths.config_file().display(), "reading settings");

    let config = LastFmConfig::load(paths).map_err(|e| CoreError::Config(e.to_string()))?;
    Self::from_config(&config)
  }

  pub fn from_config(config: &LastFmConfig) -> Result<Self, CoreError> {
    // --- Dependency Injection Phase ---

    // 1. Catalog Adapter (Last.fm over HTTP)
    let catalog = LastFmClient::new(config).map_err(|e| CoreError::Config(e.to_string()))?;

    tracing::info!(api_url = %catalog.api_url(), "Last.fm client ready");

    // 2. Output Port Adapter (logs)
    let reporter = TracingReporter;

    // 3. Service Wiring
    let editor = EditorSession::new(catalog, reporter);

    Ok(Self { editor })
  }
}

/// Command: searches albums by name.
///
/// A failed search yields its user-facing message as the error.
pub async fn album_search<C, R>(editor: &EditorSession<C, R>, query: &str) -> Result<Vec<AlbumDto>, String>
where
  C: AlbumCatalog,
  R: ActivityReporter,
{
  if query.trim().is_empty() {
    return Ok(Vec::new());
  }

  let albums = editor.search(query).await;
  match editor.snapshot().search_error {
    Some(error) => Err(error),
    None => Ok(albums.into_iter().map(AlbumDto::from).collect()),
  }
}

/// Command: replaces the grid with a user's top albums.
///
/// `period` defaults to `overall`.
pub async fn lastfm_import<C, R>(
  editor: &EditorSession<C, R>,
  username: &str,
  period: Option<&str>,
) -> Result<Vec<AlbumDto>, String>
where
  C: AlbumCatalog,
  R: ActivityReporter,
{
  let period = match period {
    Some(raw) => raw.parse::<Period>().map_err(|e| e.to_string())?,
    None => Period::default(),
  };

  if username.trim().is_empty() {
    return Ok(Vec::new());
  }

  let albums = editor.import_top_albums(username, period).await;
  match editor.snapshot().import_error {
    Some(error) => Err(error),
    None => Ok(albums.into_iter().map(AlbumDto::from).collect()),
  }
}

/// Command: applies a drop gesture and returns the new slots.
pub fn grid_drop<C, R>(editor: &EditorSession<C, R>, input: DropDto) -> Result<Vec<Option<AlbumDto>>, String>
where
  C: AlbumCatalog,
  R: ActivityReporter,
{
  let (payload, target_index) = input.into_parts()?;
  editor.drop_album(payload, target_index).map_err(|e| e.to_string())?;
  Ok(slots_to_dto(editor.slots()))
}

/// Command: retrieves the current grid configuration.
pub fn grid_get_config<C, R>(editor: &EditorSession<C, R>) -> Result<GridConfigDto, String>
where
  C: AlbumCatalog,
  R: ActivityReporter,
{
  Ok(GridConfigDto::from(editor.grid_config()))
}

/// Command: updates the grid configuration from the settings form.
pub fn grid_update_config<C, R>(editor: &EditorSession<C, R>, input: GridConfigDto) -> Result<GridConfigDto, String>
where
  C: AlbumCatalog,
  R: ActivityReporter,
{
  let mut outcome = Ok(());
  let cfg = editor.update_grid_config(|cfg| outcome = input.apply_to(cfg));
  outcome.map(|()| GridConfigDto::from(cfg))
}

/// Command: the whole editor state, for a full re-render.
pub fn editor_snapshot<C, R>(editor: &EditorSession<C, R>) -> Result<SnapshotDto, String>
where
  C: AlbumCatalog,
  R: ActivityReporter,
{
  Ok(SnapshotDto::from(editor.snapshot()))
}

/// Serves commands on stdin/stdout until stdin closes.
pub async fn run(state: AppState) -> anyhow::Result<()> {
  tracing::info!(version = env!("CARGO_PKG_VERSION"), "mosaico ready, reading commands from stdin");

  let stdin = tokio::io::BufReader::new(tokio::io::stdin());
  serve(&state.editor, stdin, tokio::io::stdout()).await?;

  tracing::info!("stdin closed, shutting down");
  Ok(())
}

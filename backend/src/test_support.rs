use async_trait::async_trait;
use mosaico_core::domain::{Album, Period};
use mosaico_core::ports::{AlbumCatalog, CatalogError, NoopReporter};
use mosaico_core::services::EditorSession;

/// In-memory catalog: `"fail"` fails, anything else yields two albums.
pub struct FakeCatalog;

impl FakeCatalog {
  pub const SEARCH_ERROR: &'static str = "error searching albums (HTTP 503 Service Unavailable)";
}

#[async_trait]
impl AlbumCatalog for FakeCatalog {
  async fn search_albums(&self, query: &str) -> Result<Vec<Album>, CatalogError> {
    if query == "fail" {
      return Err(CatalogError::Fetch(Self::SEARCH_ERROR.into()));
    }
    Ok((1..=2).map(|i| Album::new(format!("{query}-{i}"), "Artist", "")).collect())
  }

  async fn user_top_albums(&self, username: &str, period: Period) -> Result<Vec<Album>, CatalogError> {
    if username == "fail" {
      return Err(CatalogError::Fetch("error fetching user albums: User not found".into()));
    }
    Ok((1..=2).map(|i| Album::new(format!("{username}-{period}-{i}"), "Artist", "")).collect())
  }
}

pub fn session() -> EditorSession<FakeCatalog, NoopReporter> {
  EditorSession::new(FakeCatalog, NoopReporter)
}

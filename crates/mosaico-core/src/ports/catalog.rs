use std::fmt;

use crate::domain::{Album, Period};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
  /// Fallo de red, estado HTTP no exitoso o error reportado por la API.
  #[error("{0}")]
  Fetch(String),

  /// La respuesta no tiene ninguna de las formas conocidas.
  #[error("unexpected response: {0}")]
  Parse(String),
}

/// Petición al catálogo, usada para trazas y reportes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogRequest {
  Search { query: String },
  TopAlbums { username: String, period: Period },
}

impl fmt::Display for CatalogRequest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CatalogRequest::Search { query } => write!(f, "album.search({query:?})"),
      CatalogRequest::TopAlbums { username, period } => write!(f, "user.gettopalbums({username:?}, {period})"),
    }
  }
}

/// Port que abstrae el proveedor remoto de metadatos musicales.
///
/// Una sola petición por invocación: sin reintentos, sin caché, sin paginar.
/// Las implementaciones devuelven los álbumes ya normalizados, en el orden
/// de la respuesta y con identificadores recién generados.
///
/// Implementaciones posibles:
/// - Last.fm (`mosaico-lastfm`)
/// - catálogos en memoria para tests
#[async_trait::async_trait]
pub trait AlbumCatalog: Send + Sync {
  async fn search_albums(&self, query: &str) -> Result<Vec<Album>, CatalogError>;

  async fn user_top_albums(&self, username: &str, period: Period) -> Result<Vec<Album>, CatalogError>;

  /// Despacha una [`CatalogRequest`] al método correspondiente.
  async fn fetch(&self, request: &CatalogRequest) -> Result<Vec<Album>, CatalogError> {
    match request {
      CatalogRequest::Search { query } => self.search_albums(query).await,
      CatalogRequest::TopAlbums { username, period } => self.user_top_albums(username, *period).await,
    }
  }
}

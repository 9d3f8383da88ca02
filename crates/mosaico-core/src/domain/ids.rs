use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Identificador único de un álbum dentro de la sesión.
///
/// Se genera al normalizar la respuesta de la API (UUID v4); la API remota
/// nunca lo proporciona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlbumId(Uuid);

impl AlbumId {
  /// Genera un nuevo identificador único.
  pub fn new() -> Self {
    AlbumId(Uuid::new_v4())
  }

  /// Construye un `AlbumId` a partir de un `Uuid` existente.
  pub fn from_uuid(u: Uuid) -> Self {
    AlbumId(u)
  }

  /// Devuelve el `Uuid` interno.
  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl Default for AlbumId {
  fn default() -> Self {
    Self::new()
  }
}

impl From<Uuid> for AlbumId {
  fn from(u: Uuid) -> Self {
    AlbumId(u)
  }
}

impl From<AlbumId> for Uuid {
  fn from(id: AlbumId) -> Self {
    id.0
  }
}

impl FromStr for AlbumId {
  type Err = uuid::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Uuid::parse_str(s).map(AlbumId)
  }
}

impl fmt::Display for AlbumId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

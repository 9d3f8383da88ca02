use crate::domain::ids::AlbumId;
use serde::{Deserialize, Serialize};

/// Un álbum musical tal como lo maneja el editor.
///
/// Es un objeto de valor: una vez creado no se modifica, solo se reubica
/// en la cuadrícula o se reemplaza por otro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
  /// Identificador asignado al normalizar. `None` representa un marcador
  /// sin identidad (por ejemplo, una ranura de relleno) que no se puede soltar.
  pub id: Option<AlbumId>,
  /// Nombre del álbum.
  pub name: String,
  /// Nombre del artista del álbum.
  pub artist: String,
  /// URL de la portada (variante "large"), o cadena vacía.
  pub image_url: String,
}

impl Album {
  /// Crea un álbum con un identificador nuevo.
  pub fn new(name: impl Into<String>, artist: impl Into<String>, image_url: impl Into<String>) -> Self {
    Self { id: Some(AlbumId::new()), name: name.into(), artist: artist.into(), image_url: image_url.into() }
  }

  /// Crea un álbum sin identificador.
  pub fn unidentified(name: impl Into<String>, artist: impl Into<String>, image_url: impl Into<String>) -> Self {
    Self { id: None, name: name.into(), artist: artist.into(), image_url: image_url.into() }
  }
}

/// Secuencia densa de ranuras de la cuadrícula. `None` es una ranura vacía.
pub type Slots = Vec<Option<Album>>;

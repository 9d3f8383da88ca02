use crate::domain::album::Album;
use serde::{Deserialize, Serialize};
use std::fmt;

/// De dónde viene el álbum arrastrado.
///
/// Decide la política al soltar: `Search` sobrescribe la ranura destino,
/// `Editor` reubica el álbum dentro de la cuadrícula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceContext {
  /// El álbum entra a la cuadrícula desde fuera (resultados de búsqueda).
  Search,
  /// El álbum ya estaba colocado en la cuadrícula.
  Editor,
}

impl fmt::Display for SourceContext {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SourceContext::Search => write!(f, "search"),
      SourceContext::Editor => write!(f, "editor"),
    }
  }
}

/// Lo que viaja entre el inicio del arrastre y la suelta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
  pub album: Album,
  pub source: SourceContext,
}

impl DragPayload {
  pub fn new(album: Album, source: SourceContext) -> Self {
    Self { album, source }
  }
}

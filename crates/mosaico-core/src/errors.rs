// crates/mosaico-core/src/errors.rs
use thiserror::Error;

/// Error genérico del núcleo de Mosaico.
///
/// Las capas superiores (comandos, binario, etc.) deberían mapear este error
/// a mensajes de usuario o logs.
#[derive(Debug, Error)]
pub enum CoreError {
  /// Falta configuración obligatoria. Es fatal al arrancar.
  #[error("config error: {0}")]
  Config(String),

  /// Fallo de red o respuesta HTTP no exitosa.
  #[error("fetch error: {0}")]
  Fetch(String),

  /// La respuesta no tiene la forma esperada.
  #[error("parse error: {0}")]
  Parse(String),

  /// Se intentó soltar un álbum fuera de la cuadrícula.
  #[error("slot {index} is outside the grid ({slots} slots)")]
  SlotOutOfRange { index: usize, slots: usize },
}

impl From<crate::ports::CatalogError> for CoreError {
  fn from(err: crate::ports::CatalogError) -> Self {
    use crate::ports::CatalogError;

    match err {
      CatalogError::Fetch(msg) => CoreError::Fetch(msg),
      CatalogError::Parse(msg) => CoreError::Parse(msg),
    }
  }
}

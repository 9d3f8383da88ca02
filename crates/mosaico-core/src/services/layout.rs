use serde::Serialize;

use crate::domain::{Album, GridConfig, Slots};

/// Geometría resuelta de una cuadrícula para una cantidad de álbumes dada.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridLayout {
  pub columns: u32,
  pub rows: u32,
  pub total_slots: usize,
}

impl GridLayout {
  pub fn compute(config: &GridConfig, album_count: usize) -> Self {
    let rows = config.effective_rows(album_count);
    Self { columns: config.columns, rows, total_slots: config.columns as usize * rows as usize }
  }

  /// `columns / rows`. Una cuadrícula sin filas se trata como cuadrada.
  pub fn aspect_ratio(&self) -> f32 {
    if self.rows == 0 { 1.0 } else { self.columns as f32 / self.rows as f32 }
  }
}

/// Convierte una lista de álbumes en ranuras y rellena con vacías hasta `capacity`.
///
/// Nunca recorta: los álbumes que no caben quedan al final, fuera de la vista.
pub fn fill_slots(albums: impl IntoIterator<Item = Album>, capacity: usize) -> Slots {
  let mut slots: Slots = albums.into_iter().map(Some).collect();
  pad_slots(&mut slots, capacity);
  slots
}

pub(crate) fn pad_slots(slots: &mut Slots, capacity: usize) {
  if slots.len() < capacity {
    slots.resize(capacity, None);
  }
}

/// Lista de títulos que acompaña al collage, fila por fila.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleListing {
  /// Tamaño de fuente en píxeles.
  pub font_size_px: u32,
  /// Una entrada por fila; `None` marca una ranura vacía.
  pub rows: Vec<Vec<Option<TitleEntry>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleEntry {
  pub name: String,
  pub artist: String,
}

impl TitleListing {
  const BASE_FONT_PX: u32 = 12;
  const MIN_FONT_PX: u32 = 6;

  /// Solo se listan las filas configuradas explícitamente.
  pub fn build(slots: &[Option<Album>], config: &GridConfig) -> Self {
    let rows = config.rows.unwrap_or(0) as usize;
    let columns = config.columns as usize;

    let rows = (0..rows)
      .map(|row| {
        let start = (row * columns).min(slots.len());
        let end = (start + columns).min(slots.len());
        slots[start..end]
          .iter()
          .map(|slot| slot.as_ref().map(|a| TitleEntry { name: a.name.clone(), artist: a.artist.clone() }))
          .collect()
      })
      .collect();

    Self { font_size_px: Self::font_size_for(config.rows), rows }
  }

  /// 12px hasta 5 filas; a partir de ahí baja 3px por fila, con mínimo de 6px.
  pub fn font_size_for(rows: Option<u32>) -> u32 {
    match rows {
      Some(rows) if rows > 5 => Self::BASE_FONT_PX.saturating_sub((rows - 5).saturating_mul(3)).max(Self::MIN_FONT_PX),
      _ => Self::BASE_FONT_PX,
    }
  }
}

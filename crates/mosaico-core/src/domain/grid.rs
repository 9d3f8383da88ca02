use crate::domain::color::Color;
use serde::{Deserialize, Serialize};

/// Configuración de la cuadrícula de álbumes.
///
/// No se exige que `columns × rows` alcance para todos los álbumes: los que
/// no caben se conservan pero no se muestran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
  /// Cantidad de columnas (1..=10).
  pub columns: u32,
  /// Cantidad de filas (1..=10). Si falta, se deriva de la cantidad de álbumes.
  pub rows: Option<u32>,
  /// Espacio entre celdas en rem (0..=10).
  pub gap: u32,
  /// Color de fondo de la cuadrícula.
  pub background_color: Color,
  /// Color de los textos.
  pub text_color: Color,
  /// Mostrar la lista de títulos junto al collage.
  pub show_titles: bool,
}

impl Default for GridConfig {
  /// La cuadrícula del editor: 5×5.
  fn default() -> Self {
    Self {
      columns: 5,
      rows: Some(5),
      gap: 1,
      background_color: Color::rgb(0x1a, 0x1a, 0x1a),
      text_color: Color::rgb(0xff, 0xff, 0xff),
      show_titles: true,
    }
  }
}

impl GridConfig {
  /// Tope de columnas, filas y espacio que acepta el formulario.
  pub const MAX_DIMENSION: u32 = 10;

  /// Cuadrícula de resultados de búsqueda: dos columnas, filas derivadas.
  pub fn search_results() -> Self {
    Self { columns: 2, rows: None, show_titles: false, ..Self::default() }
  }

  /// Filas efectivas para `album_count` álbumes.
  pub fn effective_rows(&self, album_count: usize) -> u32 {
    match self.rows {
      Some(rows) => rows,
      None => album_count.div_ceil(self.columns.max(1) as usize) as u32,
    }
  }

  /// Cantidad de ranuras visibles (`columns × rows`).
  pub fn capacity(&self, album_count: usize) -> usize {
    self.columns as usize * self.effective_rows(album_count) as usize
  }

  // --- Setters saneados (entrada de formulario) ---

  pub fn set_columns(&mut self, value: i64) {
    self.columns = clamp_dimension(value, 1);
  }

  pub fn set_rows(&mut self, value: i64) {
    self.rows = Some(clamp_dimension(value, 1));
  }

  pub fn set_gap(&mut self, value: i64) {
    self.gap = clamp_dimension(value, 0);
  }

  /// Igual que [`set_columns`](Self::set_columns) pero desde texto;
  /// un valor ilegible cuenta como el mínimo.
  pub fn set_columns_input(&mut self, raw: &str) {
    self.set_columns(parse_leading_int(raw).unwrap_or(1));
  }

  pub fn set_rows_input(&mut self, raw: &str) {
    self.set_rows(parse_leading_int(raw).unwrap_or(1));
  }

  pub fn set_gap_input(&mut self, raw: &str) {
    self.set_gap(parse_leading_int(raw).unwrap_or(0));
  }
}

fn clamp_dimension(value: i64, min: u32) -> u32 {
  value.clamp(i64::from(min), i64::from(GridConfig::MAX_DIMENSION)) as u32
}

/// Lee el entero inicial de `raw` (signo opcional + dígitos), ignorando el resto.
///
/// `"7"` → 7, `" 3px"` → 3, `"-2"` → -2, `"abc"` → `None`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
  let s = raw.trim_start();
  let (sign, digits) = match s.strip_prefix('-') {
    Some(rest) => (-1, rest),
    None => (1, s.strip_prefix('+').unwrap_or(s)),
  };

  let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
  if end == 0 {
    return None;
  }

  digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn editor_and_search_defaults() {
    let editor = GridConfig::default();
    assert_eq!((editor.columns, editor.rows, editor.gap), (5, Some(5), 1));
    assert_eq!(editor.background_color.to_string(), "#1a1a1a");
    assert_eq!(editor.text_color.to_string(), "#ffffff");
    assert!(editor.show_titles);

    let search = GridConfig::search_results();
    assert_eq!((search.columns, search.rows), (2, None));
    assert!(!search.show_titles);
  }

  #[test]
  fn rows_are_derived_when_absent() {
    let cfg = GridConfig::search_results();
    assert_eq!(cfg.effective_rows(0), 0);
    assert_eq!(cfg.effective_rows(5), 3);
    assert_eq!(cfg.capacity(5), 6);

    let fixed = GridConfig::default();
    assert_eq!(fixed.effective_rows(50), 5);
    assert_eq!(fixed.capacity(50), 25);
  }

  #[test]
  fn setters_clamp_to_minimums() {
    let mut cfg = GridConfig::default();
    cfg.set_columns(0);
    cfg.set_rows(-4);
    cfg.set_gap(-1);
    assert_eq!((cfg.columns, cfg.rows, cfg.gap), (1, Some(1), 0));

    cfg.set_columns(8);
    cfg.set_gap(3);
    assert_eq!((cfg.columns, cfg.gap), (8, 3));
  }

  #[test]
  fn setters_clamp_to_ten() {
    let mut cfg = GridConfig::default();
    cfg.set_columns(200_000);
    cfg.set_rows(i64::MAX);
    cfg.set_gap(11);
    assert_eq!((cfg.columns, cfg.rows, cfg.gap), (10, Some(10), 10));
    assert_eq!(cfg.capacity(0), 100);

    cfg.set_rows_input("99999999999999999999");
    assert_eq!(cfg.rows, Some(1));
    cfg.set_columns_input("12");
    assert_eq!(cfg.columns, 10);
  }

  #[test]
  fn text_input_falls_back_to_minimum() {
    let mut cfg = GridConfig::default();
    cfg.set_columns_input("abc");
    cfg.set_rows_input("");
    cfg.set_gap_input("nope");
    assert_eq!((cfg.columns, cfg.rows, cfg.gap), (1, Some(1), 0));

    cfg.set_columns_input("7 columnas");
    assert_eq!(cfg.columns, 7);
  }

  #[test]
  fn leading_int_parsing() {
    assert_eq!(parse_leading_int("42"), Some(42));
    assert_eq!(parse_leading_int("  3px"), Some(3));
    assert_eq!(parse_leading_int("-2"), Some(-2));
    assert_eq!(parse_leading_int("+9"), Some(9));
    assert_eq!(parse_leading_int("x1"), None);
    assert_eq!(parse_leading_int("-"), None);
  }
}

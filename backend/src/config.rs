use mosaico_core::domain::{Color, GridConfig};
use serde::{Deserialize, Serialize};

/// Grid settings as the frontend sees them.
///
/// Numbers are signed on purpose: form inputs can send anything and the
/// domain setters clamp to the valid range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfigDto {
  pub columns: i64,
  pub rows: Option<i64>,
  pub gap: i64,
  pub background_color: String,
  #[serde(rename = "textcolor")]
  pub text_color: String,
  #[serde(default)]
  pub show_titles: bool,
}

impl From<GridConfig> for GridConfigDto {
  fn from(cfg: GridConfig) -> Self {
    GridConfigDto {
      columns: cfg.columns as i64,
      rows: cfg.rows.map(i64::from),
      gap: cfg.gap as i64,
      background_color: cfg.background_color.to_string(),
      text_color: cfg.text_color.to_string(),
      show_titles: cfg.show_titles,
    }
  }
}

impl GridConfigDto {
  /// Writes these settings into `cfg`, clamping numbers. Colors are
  /// validated first so a bad color leaves `cfg` untouched.
  pub fn apply_to(&self, cfg: &mut GridConfig) -> Result<(), String> {
    let background = self.background_color.parse::<Color>().map_err(|e| e.to_string())?;
    let text = self.text_color.parse::<Color>().map_err(|e| e.to_string())?;

    cfg.set_columns(self.columns);
    match self.rows {
      Some(rows) => cfg.set_rows(rows),
      None => cfg.rows = None,
    }
    cfg.set_gap(self.gap);
    cfg.background_color = background;
    cfg.text_color = text;
    cfg.show_titles = self.show_titles;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn uses_frontend_field_names() {
    let json = serde_json::to_value(GridConfigDto::from(GridConfig::default())).unwrap();
    assert_eq!(json["backgroundColor"], "#1a1a1a");
    assert_eq!(json["textcolor"], "#ffffff");
    assert_eq!(json["showTitles"], true);
    assert_eq!(json["rows"], 5);
  }

  #[test]
  fn apply_clamps_numbers() {
    let mut cfg = GridConfig::default();
    let dto = GridConfigDto {
      columns: 0,
      rows: Some(-3),
      gap: -1,
      background_color: "#000".into(),
      text_color: "#FFAA00".into(),
      show_titles: false,
    };

    dto.apply_to(&mut cfg).unwrap();

    assert_eq!((cfg.columns, cfg.rows, cfg.gap), (1, Some(1), 0));
    assert_eq!(cfg.background_color.to_string(), "#000000");
    assert_eq!(cfg.text_color.to_string(), "#ffaa00");
    assert!(!cfg.show_titles);
  }

  #[test]
  fn bad_color_leaves_config_untouched() {
    let mut cfg = GridConfig::default();
    let mut dto = GridConfigDto::from(cfg.clone());
    dto.columns = 9;
    dto.text_color = "white".into();

    assert!(dto.apply_to(&mut cfg).is_err());
    assert_eq!(cfg, GridConfig::default());
  }
}

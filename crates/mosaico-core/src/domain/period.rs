use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Ventana temporal para los álbumes más escuchados de un usuario.
///
/// Los valores coinciden con los que acepta el parámetro `period` de la API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
  #[serde(rename = "7day")]
  Week,
  #[serde(rename = "1month")]
  Month,
  #[serde(rename = "6month")]
  HalfYear,
  #[serde(rename = "12month")]
  Year,
  #[default]
  #[serde(rename = "overall")]
  Overall,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown period: {0:?}")]
pub struct ParsePeriodError(pub String);

impl Period {
  pub const ALL: [Period; 5] = [Period::Week, Period::Month, Period::HalfYear, Period::Year, Period::Overall];

  pub fn as_str(&self) -> &'static str {
    match self {
      Period::Week => "7day",
      Period::Month => "1month",
      Period::HalfYear => "6month",
      Period::Year => "12month",
      Period::Overall => "overall",
    }
  }
}

impl FromStr for Period {
  type Err = ParsePeriodError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Period::ALL.into_iter().find(|p| p.as_str() == s.trim()).ok_or_else(|| ParsePeriodError(s.to_string()))
  }
}

impl fmt::Display for Period {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tokens_round_trip() {
    for p in Period::ALL {
      assert_eq!(p.to_string().parse::<Period>().unwrap(), p);
    }
  }

  #[test]
  fn default_is_overall() {
    assert_eq!(Period::default(), Period::Overall);
    assert!("forever".parse::<Period>().is_err());
  }

  #[test]
  fn serde_uses_api_tokens() {
    assert_eq!(serde_json::to_string(&Period::Week).unwrap(), "\"7day\"");
    assert_eq!(serde_json::from_str::<Period>("\"12month\"").unwrap(), Period::Year);
  }
}

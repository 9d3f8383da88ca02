use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Color RGB opaco, como el que produce un selector de color HTML.
///
/// Se serializa como cadena `#rrggbb` en minúsculas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color: {0:?}")]
pub struct ParseColorError(pub String);

impl Color {
  pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }
}

impl FromStr for Color {
  type Err = ParseColorError;

  /// Acepta `#rrggbb` y la forma corta `#rgb`, sin distinguir mayúsculas.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let err = || ParseColorError(s.to_string());
    let hex = s.trim().strip_prefix('#').ok_or_else(err)?;

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
      return Err(err());
    }

    let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| err());

    match hex.len() {
      6 => Ok(Color::rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
      3 => {
        // "#abc" equivale a "#aabbcc"
        let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
        Ok(Color::rgb(expand(0)?, expand(1)?, expand(2)?))
      }
      _ => Err(err()),
    }
  }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
  }
}

impl TryFrom<String> for Color {
  type Error = ParseColorError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

impl From<Color> for String {
  fn from(color: Color) -> Self {
    color.to_string()
  }
}

use crate::paths::{ConfigError, MosaicoPaths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;

// Escritura con toml_edit para preservar comentarios del usuario.
use toml_edit::{DocumentMut, Item};

pub trait ConfigBackend {
  /// Lee la sección `[section]`; falla si el archivo o la sección no existen.
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;

  /// Igual que [`load_section`](Self::load_section) pero con `T::default()`
  /// cuando falta el archivo o la sección.
  fn load_section_with_default<T: DeserializeOwned + Default>(&self, section: &str) -> Result<T, ConfigError>;

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

pub struct TomlConfigBackend {
  paths: MosaicoPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: MosaicoPaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &MosaicoPaths {
    &self.paths
  }

  fn read_table(&self) -> Result<Option<toml::Table>, ConfigError> {
    let path = self.paths.config_file();
    let content = match fs::read_to_string(&path) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
      Err(e) => return Err(e.into()),
    };

    Ok(Some(toml::from_str(&content)?))
  }
}

fn decode_section<T: DeserializeOwned>(section: &str, value: &toml::Value) -> Result<T, ConfigError> {
  value.clone().try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let table = self
      .read_table()?
      .ok_or_else(|| ConfigError::Other(format!("config file not found: {:?}", path)))?;

    let value = table
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", path)))?;

    decode_section(section, value)
  }

  fn load_section_with_default<T: DeserializeOwned + Default>(&self, section: &str) -> Result<T, ConfigError> {
    let Some(table) = self.read_table()? else {
      return Ok(T::default());
    };

    match table.get(section) {
      Some(value) => decode_section(section, value),
      None => Ok(T::default()),
    }
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    // 1) Leer config actual como DocumentMut o crear doc vacío si no existe.
    let mut doc: DocumentMut = match fs::read_to_string(&path) {
      Ok(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?,
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    // 2) Serializar la sección con `toml` (serde); sale sin cabecera:
    //      "foo = 1\nbar = 2\n"
    let section_str = toml::to_string(value)
      .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    // 3) Re-parsear como documento y tomar su tabla raíz.
    let section_doc = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?;

    // 4) Reemplazar la sección preservando el resto del documento.
    doc[section] = Item::Table(section_doc.as_table().clone());

    // 5) Escritura atómica.
    crate::io::atomic_write_str(&path, &doc.to_string())?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use tempfile::tempdir;

  #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
  struct Sample {
    name: String,
    #[serde(default)]
    count: u32,
  }

  fn backend() -> (tempfile::TempDir, TomlConfigBackend) {
    let tmp = tempdir().unwrap();
    let paths = MosaicoPaths::at(tmp.path()).unwrap();
    (tmp, TomlConfigBackend::new(paths))
  }

  #[test]
  fn missing_file_yields_default_or_error() {
    let (_tmp, backend) = backend();
    assert_eq!(backend.load_section_with_default::<Sample>("sample").unwrap(), Sample::default());
    assert!(backend.load_section::<Sample>("sample").is_err());
  }

  #[test]
  fn saved_section_loads_back() {
    let (_tmp, backend) = backend();
    let value = Sample { name: "grid".into(), count: 3 };

    backend.save_section("sample", &value).unwrap();

    assert_eq!(backend.load_section::<Sample>("sample").unwrap(), value);
    assert!(matches!(backend.load_section::<Sample>("other"), Err(ConfigError::Other(_))));
    assert_eq!(backend.load_section_with_default::<Sample>("other").unwrap(), Sample::default());
  }

  #[test]
  fn save_preserves_comments_and_other_sections() {
    let (_tmp, backend) = backend();
    let path = backend.paths().config_file();
    fs::write(&path, "# cabecera\n[keep]\nname = \"x\"\n").unwrap();

    backend.save_section("sample", &Sample { name: "y".into(), count: 1 }).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("# cabecera"), "{written}");
    assert_eq!(backend.load_section::<Sample>("keep").unwrap().name, "x");
    assert_eq!(backend.load_section::<Sample>("sample").unwrap().count, 1);
  }

  #[test]
  fn malformed_section_is_reported() {
    let (_tmp, backend) = backend();
    fs::write(backend.paths().config_file(), "[sample]\ncount = \"many\"\n").unwrap();
    let err = backend.load_section_with_default::<Sample>("sample").unwrap_err();
    assert!(err.to_string().contains("decode section [sample]"), "{err}");
  }
}

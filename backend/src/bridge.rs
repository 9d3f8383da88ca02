//! JSON-lines command bridge.
//!
//! One request per line, `{"cmd": "...", "args": {...}}`, and one reply per
//! line, `{"ok": true, "data": ...}` or `{"ok": false, "error": "..."}`.

use mosaico_core::ports::{ActivityReporter, AlbumCatalog};
use mosaico_core::services::EditorSession;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::GridConfigDto;
use crate::dto::DropDto;

#[derive(Debug, Deserialize)]
#[serde(tag = "cmd", content = "args", rename_all = "snake_case")]
pub enum Command {
  AlbumSearch {
    query: String,
  },
  LastfmImport {
    username: String,
    #[serde(default)]
    period: Option<String>,
  },
  GridDrop(DropDto),
  GridGetConfig,
  GridUpdateConfig(GridConfigDto),
  EditorSnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
  pub ok: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub data: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl Reply {
  fn success(data: Value) -> Self {
    Self { ok: true, data: Some(data), error: None }
  }

  fn failure(error: impl Into<String>) -> Self {
    Self { ok: false, data: None, error: Some(error.into()) }
  }

  fn from_result<T: Serialize>(result: Result<T, String>) -> Self {
    match result.and_then(|data| serde_json::to_value(data).map_err(|e| e.to_string())) {
      Ok(data) => Self::success(data),
      Err(error) => Self::failure(error),
    }
  }
}

/// Parses one request line and runs it against the session.
pub async fn dispatch<C, R>(editor: &EditorSession<C, R>, line: &str) -> Reply
where
  C: AlbumCatalog,
  R: ActivityReporter,
{
  let command: Command = match serde_json::from_str(line) {
    Ok(command) => command,
    Err(e) => {
      tracing::warn!(error = %e, "rejected malformed command");
      return Reply::failure(format!("invalid command: {e}"));
    }
  };

  tracing::debug!(?command, "dispatching");

  match command {
    Command::AlbumSearch { query } => Reply::from_result(crate::album_search(editor, &query).await),
    Command::LastfmImport { username, period } => {
      Reply::from_result(crate::lastfm_import(editor, &username, period.as_deref()).await)
    }
    Command::GridDrop(input) => Reply::from_result(crate::grid_drop(editor, input)),
    Command::GridGetConfig => Reply::from_result(crate::grid_get_config(editor)),
    Command::GridUpdateConfig(input) => Reply::from_result(crate::grid_update_config(editor, input)),
    Command::EditorSnapshot => Reply::from_result(crate::editor_snapshot(editor)),
  }
}

/// Answers every non-blank line of `input` on `output` until EOF.
pub async fn serve<C, R, I, O>(editor: &EditorSession<C, R>, input: I, mut output: O) -> std::io::Result<()>
where
  C: AlbumCatalog,
  R: ActivityReporter,
  I: AsyncBufRead + Unpin,
  O: AsyncWrite + Unpin,
{
  let mut lines = input.lines();

  while let Some(line) = lines.next_line().await? {
    if line.trim().is_empty() {
      continue;
    }

    let reply = dispatch(editor, &line).await;
    let mut encoded = serde_json::to_string(&reply).map_err(std::io::Error::other)?;
    encoded.push('\n');

    output.write_all(encoded.as_bytes()).await?;
    output.flush().await?;
  }

  Ok(())
}

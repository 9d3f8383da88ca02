use mosaico_core::domain::{Album, AlbumId, DragPayload, SourceContext};
use mosaico_core::services::{EditorSnapshot, GridLayout, TitleListing};
use serde::{Deserialize, Serialize};

use crate::config::GridConfigDto;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumDto {
  #[serde(default)]
  pub id: Option<String>,
  pub name: String,
  pub artist: String,
  #[serde(default)]
  pub image_url: String,
}

impl From<Album> for AlbumDto {
  fn from(album: Album) -> Self {
    AlbumDto { id: album.id.map(|id| id.to_string()), name: album.name, artist: album.artist, image_url: album.image_url }
  }
}

impl TryFrom<AlbumDto> for Album {
  type Error = String;

  /// A missing or blank id yields an album without identifier.
  fn try_from(dto: AlbumDto) -> Result<Self, Self::Error> {
    let id = match dto.id.as_deref().map(str::trim) {
      None | Some("") => None,
      Some(raw) => Some(raw.parse::<AlbumId>().map_err(|e| format!("invalid album id {raw:?}: {e}"))?),
    };
    Ok(Album { id, name: dto.name, artist: dto.artist, image_url: dto.image_url })
  }
}

/// A drop gesture coming from the view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropDto {
  pub album: AlbumDto,
  pub source: SourceContext,
  pub target_index: usize,
}

impl DropDto {
  pub fn into_parts(self) -> Result<(DragPayload, usize), String> {
    let album = Album::try_from(self.album)?;
    Ok((DragPayload::new(album, self.source), self.target_index))
  }
}

pub fn slots_to_dto(slots: Vec<Option<Album>>) -> Vec<Option<AlbumDto>> {
  slots.into_iter().map(|slot| slot.map(AlbumDto::from)).collect()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDto {
  pub slots: Vec<Option<AlbumDto>>,
  pub grid: GridConfigDto,
  pub search_results: Vec<AlbumDto>,
  pub search_loading: bool,
  pub search_error: Option<String>,
  pub import_loading: bool,
  pub import_error: Option<String>,
  pub layout: LayoutDto,
  /// Only present when titles are shown.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub titles: Option<TitleListing>,
}

/// Resolved grid geometry for the collage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDto {
  pub columns: u32,
  pub rows: u32,
  pub total_slots: usize,
  pub aspect_ratio: f32,
}

impl From<GridLayout> for LayoutDto {
  fn from(layout: GridLayout) -> Self {
    LayoutDto {
      columns: layout.columns,
      rows: layout.rows,
      total_slots: layout.total_slots,
      aspect_ratio: layout.aspect_ratio(),
    }
  }
}

impl From<EditorSnapshot> for SnapshotDto {
  fn from(s: EditorSnapshot) -> Self {
    let layout = s.grid_layout().into();
    let titles = s.grid.show_titles.then(|| s.title_listing());

    SnapshotDto {
      slots: slots_to_dto(s.slots),
      grid: s.grid.into(),
      search_results: s.search_results.into_iter().map(AlbumDto::from).collect(),
      search_loading: s.search_loading,
      search_error: s.search_error,
      import_loading: s.import_loading,
      import_error: s.import_error,
      layout,
      titles,
    }
  }
}

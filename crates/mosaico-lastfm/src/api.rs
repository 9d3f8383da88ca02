//! Wire shapes of the Last.fm JSON API, as far as the editor needs them.
use serde::Deserialize;

/// One entry of an `image` array: `{ "#text": "<url>", "size": "large" }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageVariant {
  #[serde(default)]
  pub size: String,
  #[serde(rename = "#text", default)]
  pub url: String,
}

// --- album.search ---

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
  pub results: SearchResults,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults {
  pub albummatches: AlbumMatches,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumMatches {
  pub album: Vec<SearchAlbum>,
}

/// In search results the artist is a plain string.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchAlbum {
  pub name: String,
  pub artist: String,
  #[serde(default)]
  pub image: Vec<ImageVariant>,
}

// --- user.gettopalbums ---

#[derive(Debug, Clone, Deserialize)]
pub struct TopAlbumsResponse {
  pub topalbums: TopAlbums,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopAlbums {
  pub album: Vec<TopAlbum>,
}

/// In top albums the artist is an object.
#[derive(Debug, Clone, Deserialize)]
pub struct TopAlbum {
  pub name: String,
  pub artist: ArtistRef,
  #[serde(default)]
  pub image: Vec<ImageVariant>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRef {
  pub name: String,
}


/// Application-level error body: `{ "error": 6, "message": "User not found" }`.
///
/// Last.fm may send it with a 4xx status or with a plain 200.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
  pub error: u32,
  pub message: String,
}

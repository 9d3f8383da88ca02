use mosaico_core::domain::Album;
use mosaico_core::ports::CatalogError;
use serde::de::DeserializeOwned;

use crate::api::{ImageVariant, SearchResponse, TopAlbumsResponse};

/// Size tag of the cover used in the grid.
pub const COVER_SIZE: &str = "large";

/// URL of the first variant tagged `size`, or an empty string.
pub fn image_url(variants: &[ImageVariant], size: &str) -> String {
  variants.iter().find(|img| img.size == size).map(|img| img.url.clone()).unwrap_or_default()
}

pub fn large_image_url(variants: &[ImageVariant]) -> String {
  image_url(variants, COVER_SIZE)
}

/// Search results → albums, same order, fresh ids.
pub fn normalize_search(response: SearchResponse) -> Vec<Album> {
  response
    .results
    .albummatches
    .album
    .into_iter()
    .map(|a| {
      let url = large_image_url(&a.image);
      Album::new(a.name, a.artist, url)
    })
    .collect()
}

/// Top albums → albums, taking the artist from `artist.name`.
pub fn normalize_top_albums(response: TopAlbumsResponse) -> Vec<Album> {
  response
    .topalbums
    .album
    .into_iter()
    .map(|a| {
      let url = large_image_url(&a.image);
      Album::new(a.name, a.artist.name, url)
    })
    .collect()
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, CatalogError> {
  serde_json::from_str(body).map_err(|e| CatalogError::Parse(e.to_string()))
}

pub fn parse_search(body: &str) -> Result<Vec<Album>, CatalogError> {
  decode(body).map(normalize_search)
}

pub fn parse_top_albums(body: &str) -> Result<Vec<Album>, CatalogError> {
  decode(body).map(normalize_top_albums)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  const SEARCH_BODY: &str = r##"{
    "results": {
      "opensearch:totalResults": "3",
      "albummatches": {
        "album": [
          {
            "name": "OK Computer",
            "artist": "Radiohead",
            "url": "https://www.last.fm/music/Radiohead/OK+Computer",
            "image": [
              { "#text": "https://img/ok-s.png", "size": "small" },
              { "#text": "https://img/ok-l.png", "size": "large" },
              { "#text": "https://img/ok-m.png", "size": "medium" }
            ],
            "streamable": "0",
            "mbid": ""
          },
          {
            "name": "Kid A",
            "artist": "Radiohead",
            "image": [{ "#text": "https://img/kid-s.png", "size": "small" }]
          },
          { "name": "Amnesiac", "artist": "Radiohead", "image": [] }
        ]
      }
    }
  }"##;

  const TOP_BODY: &str = r##"{
    "topalbums": {
      "album": [
        {
          "artist": { "url": "https://www.last.fm/music/Boards+of+Canada", "name": "Boards of Canada", "mbid": "" },
          "image": [
            { "size": "small", "#text": "https://img/moh-s.png" },
            { "size": "large", "#text": "https://img/moh-l.png" }
          ],
          "mbid": "",
          "url": "https://www.last.fm/music/Boards+of+Canada/Music+Has+the+Right+to+Children",
          "playcount": "412",
          "@attr": { "rank": "1" },
          "name": "Music Has the Right to Children"
        },
        {
          "artist": { "name": "Aphex Twin" },
          "image": [],
          "name": "Selected Ambient Works 85-92"
        }
      ],
      "@attr": { "user": "rj", "totalPages": "1", "page": "1", "perPage": "50", "total": "2" }
    }
  }"##;

  #[test]
  fn search_entries_map_one_to_one_in_order() {
    let albums = parse_search(SEARCH_BODY).unwrap();

    let names: Vec<_> = albums.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["OK Computer", "Kid A", "Amnesiac"]);
    assert!(albums.iter().all(|a| a.artist == "Radiohead"));

    let ids: HashSet<_> = albums.iter().map(|a| a.id.expect("id assigned")).collect();
    assert_eq!(ids.len(), albums.len());
  }

  #[test]
  fn large_variant_is_selected_regardless_of_position() {
    let albums = parse_search(SEARCH_BODY).unwrap();
    assert_eq!(albums[0].image_url, "https://img/ok-l.png");
    assert_eq!(albums[1].image_url, "");
    assert_eq!(albums[2].image_url, "");
  }

  #[test]
  fn image_url_helpers() {
    let variants = vec![
      ImageVariant { size: "small".into(), url: "s".into() },
      ImageVariant { size: "large".into(), url: "l".into() },
      ImageVariant { size: "medium".into(), url: "m".into() },
    ];
    assert_eq!(large_image_url(&variants), "l");
    assert_eq!(image_url(&variants, "medium"), "m");
    assert_eq!(image_url(&variants, "extralarge"), "");
    assert_eq!(large_image_url(&[]), "");
  }

  #[test]
  fn top_albums_take_artist_name_from_object() {
    let albums = parse_top_albums(TOP_BODY).unwrap();
    assert_eq!(albums.len(), 2);
    assert_eq!(albums[0].artist, "Boards of Canada");
    assert_eq!(albums[0].name, "Music Has the Right to Children");
    assert_eq!(albums[0].image_url, "https://img/moh-l.png");
    assert_eq!(albums[1].artist, "Aphex Twin");
  }

  #[test]
  fn every_call_generates_new_ids() {
    let first = parse_search(SEARCH_BODY).unwrap();
    let second = parse_search(SEARCH_BODY).unwrap();
    assert_ne!(first[0].id, second[0].id);
  }

  #[test]
  fn empty_match_list_is_not_an_error() {
    let body = r#"{ "results": { "albummatches": { "album": [] } } }"#;
    assert!(parse_search(body).unwrap().is_empty());
  }

  #[test]
  fn unexpected_shapes_are_parse_errors() {
    for body in ["", "not json", "{}", r#"{ "results": {} }"#, r#"{ "topalbums": { "album": [{ "name": "x", "artist": "flat" }] } }"#] {
      assert!(matches!(parse_top_albums(body), Err(CatalogError::Parse(_))), "{body}");
    }
    assert!(matches!(parse_search(TOP_BODY), Err(CatalogError::Parse(_))));
  }
}

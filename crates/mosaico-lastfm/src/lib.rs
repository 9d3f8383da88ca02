pub mod api;
pub mod client;
pub mod config;
pub mod mapping;

pub use client::LastFmClient;
pub use config::LastFmConfig;
pub use mapping::{large_image_url, parse_search, parse_top_albums};

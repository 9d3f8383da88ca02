pub mod album;
pub mod color;
pub mod drag;
pub mod grid;
pub mod ids;
pub mod period;

pub use album::{Album, Slots};
pub use color::Color;
pub use drag::{DragPayload, SourceContext};
pub use grid::GridConfig;
pub use ids::AlbumId;
pub use period::Period;

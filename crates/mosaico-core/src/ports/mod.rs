pub mod activity;
pub mod catalog;
pub mod drag;

pub use activity::{ActivityReporter, NoopReporter};
pub use catalog::{AlbumCatalog, CatalogError, CatalogRequest};
pub use drag::{DragSource, DropTarget};

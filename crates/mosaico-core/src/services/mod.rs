pub mod dnd;
pub mod editor;
pub mod layout;
pub mod reconciler;

pub use dnd::{GridSlotSource, GridSlotTarget, SearchResultSource};
pub use editor::{EditorSession, EditorSnapshot, IMPORT_ERROR_MESSAGE};
pub use layout::{GridLayout, TitleListing, fill_slots};
pub use reconciler::reconcile_drop;

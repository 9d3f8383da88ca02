pub mod logging;
pub mod reporter;

#![forbid(unsafe_code)]

pub mod deck_loader;
pub mod error;
pub mod location;
pub mod viewer;

pub use deck_loader::{load_deck_from_path, load_deck_from_str, sample_deck};
pub use error::{LoadError, LocationError};
pub use location::{DEFAULT_BASE, Location, MemoryLocation};
pub use viewer::{NavKey, Viewer, ViewerEffect, ViewerIntent, ViewerOptions};

//! Element data: the catalog, its phases, and the per-tile record

mod catalog;
mod matter;
mod record;

pub use catalog::{Catalog, CatalogEntry};
pub use matter::{Glyph, MatterState};
pub use record::{ElementRecord, Reading, type_key};

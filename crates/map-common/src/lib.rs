//! Common types shared across the scalar-map crates.

pub mod bbox;
pub mod error;
pub mod range;
pub mod record;
pub mod source;
pub mod style;

pub use bbox::BoundingBox;
pub use error::{MapError, MapResult};
pub use range::ValueRange;
pub use record::{Dataset, Record};
pub use source::RecordSource;
pub use style::{Color, ColorStop, PaletteConfig, PaletteName};

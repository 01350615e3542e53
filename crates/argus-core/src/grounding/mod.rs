//! Grounding: scraping named regions out of a formatted reply and drawing
//! them back onto the source image.

pub mod overlay;
pub mod parser;

pub use overlay::{render, LegendEntry, Overlay};
pub use parser::{BoundingBox, GroundingParser, Tool};

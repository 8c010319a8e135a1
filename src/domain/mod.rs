//! Domain types: engine options, the glyph line and the viewport.

pub mod config;
pub mod glyphs;
pub mod viewport;

pub use config::{VortexConfig, MORPH_DURATION_MS};
pub use glyphs::{FixedMetrics, GlyphLine, GlyphMetrics, MonospaceMetrics, REFERENCE_GLYPH};
pub use viewport::Viewport;

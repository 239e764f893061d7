//! Data models for palettes, colors and the active selection.
//!
//! Models are independent of storage and rendering; the services layer
//! coordinates them.

pub mod color;
pub mod palette;
pub mod role;

// Re-export all model types
pub use color::HexColor;
pub use palette::{
    ActiveSelection, Palette, PaletteOrigin, ResolvedTheme, ThemeMode, DEFAULT_PALETTE_ID,
    LIGHT_PALETTE_ID,
};
pub use role::{ColorRole, ColorSet, ROLE_COUNT};

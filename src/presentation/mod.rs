//! Rendering-side configuration that the ranking code never depends on.

pub mod layout;
pub mod theme;

pub use layout::{select_variant, LayoutVariant, Viewport, MOBILE_BREAKPOINT_PX};
pub use theme::{ColorScheme, Palette, ThemeWatcher};

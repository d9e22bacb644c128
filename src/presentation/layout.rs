use serde::{Deserialize, Serialize};

/// Viewports narrower than this get the mobile layout
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
}

impl Viewport {
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    pub fn variant(&self) -> LayoutVariant {
        select_variant(*self)
    }
}

/// Which component tree the page renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
    Mobile,
    Desktop,
}

pub fn select_variant(viewport: Viewport) -> LayoutVariant {
    if viewport.width < MOBILE_BREAKPOINT_PX {
        LayoutVariant::Mobile
    } else {
        LayoutVariant::Desktop
    }
}

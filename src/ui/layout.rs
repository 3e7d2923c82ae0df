//! Display-density classification from viewport width.

use serde::{Deserialize, Serialize};

/// Width (px) at or below which the layout is mobile.
pub const MOBILE_MAX_WIDTH: u32 = 767;

/// Width (px) at or below which the layout is tablet.
pub const TABLET_MAX_WIDTH: u32 = 1024;

/// Display-density bucket derived from viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    /// Classify a viewport width in pixels.
    #[must_use]
    pub const fn from_width(width: u32) -> Breakpoint {
        if width <= MOBILE_MAX_WIDTH {
            Breakpoint::Mobile
        } else if width <= TABLET_MAX_WIDTH {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    /// Mobile or tablet.
    #[must_use]
    pub const fn is_small_screen(self) -> bool {
        matches!(self, Breakpoint::Mobile | Breakpoint::Tablet)
    }
}

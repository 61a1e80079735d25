//! Custom element implementations built on top of `genpdf` primitives.
//!
//! The upstream crate only ships line-based breaks, so the fixed-height gap
//! used between resume blocks is implemented here.

use genpdf::error::Error;
use genpdf::style::Style;
use genpdf::{render, Context, Element, Mm, RenderResult, Size};

/// A fixed-height vertical gap, independent of the active font metrics.
///
/// The gap consumes vertical room without drawing anything.  When less room
/// is left on the page than requested, the gap shrinks to the remaining
/// height instead of forcing a page break.
pub struct VerticalSpace {
    height: Mm,
}

impl VerticalSpace {
    /// Creates a gap of the given height.
    pub fn new(height: impl Into<Mm>) -> Self {
        Self {
            height: height.into(),
        }
    }
}

impl Element for VerticalSpace {
    fn render(
        &mut self,
        _context: &Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let available = area.size().height;
        let consumed = if self.height > available {
            available
        } else {
            self.height
        };

        let mut result = RenderResult::default();
        result.size = Size::new(0, consumed);
        Ok(result)
    }
}

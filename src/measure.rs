//! Preferred and fitting sizes derived from a fresh layout.

use crate::core::geom::{Size, UNBOUNDED};
use crate::layout::LayoutEngine;
use crate::text::{FontMetrics, StyledText};

/// Size that fits `styled` within `proposed`: the used size plus the container insets.
///
/// Without a styled text there is nothing to measure and `proposed` comes back unchanged.
pub fn size_that_fits<M: FontMetrics>(
    engine: &LayoutEngine<M>,
    styled: Option<&StyledText>,
    proposed: Size,
) -> Size {
    let Some(styled) = styled else {
        return proposed;
    };
    let insets = styled.style().container_inset;
    engine.layout(styled, proposed).used_size().outset_by(insets)
}

/// Natural size for the current bounds width, or fully unconstrained before the first
/// measurement. Height is always open-ended.
pub fn intrinsic_content_size<M: FontMetrics>(
    engine: &LayoutEngine<M>,
    styled: Option<&StyledText>,
    bounds_width: Option<f32>,
) -> Size {
    let width = bounds_width.unwrap_or(UNBOUNDED);
    size_that_fits(engine, styled, Size::with_width(width))
}

#[cfg(test)]
#[path = "../tests/unit/measure.rs"]
mod tests;

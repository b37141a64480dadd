//! Host adapter: owns the mutable text and style, measures, draws and resolves taps.
//!
//! Nothing here observes anything. Every setter bumps the generation, which is the only
//! invalidation signal the measurement cache listens to.

use rustc_hash::FxHashMap;

use crate::core::geom::{EdgeInsets, Point, Size, UNBOUNDED};
use crate::hit_test::{hit_test, HitResult};
use crate::layout::{Glyph, Layout, LayoutEngine, LineFragment};
use crate::measure;
use crate::style::{Color, FontDescriptor, Shadow, StyleAttributes};
use crate::text::{build, FontMetrics, MonospaceMetrics, StyledText};

/// 缓存条目达到该数量时清理过期的测量结果
const MAX_CACHED_SIZES: usize = 64;

/// Everything needed to paint one line.
#[derive(Debug, Clone, Copy)]
pub struct FragmentPaint<'a> {
    /// Content-box origin in the label's local coordinates.
    pub origin: Point,
    pub fragment: &'a LineFragment,
    pub glyphs: &'a [Glyph],
    pub font: &'a FontDescriptor,
    pub text_color: Color,
    pub shadow: Option<Shadow>,
}

pub trait Renderer {
    fn draw_fragment(&mut self, paint: FragmentPaint<'_>);
}

/// Receives the outcome of a completed touch. Exactly one method fires per touch.
pub trait LabelDelegate {
    fn did_tap_character(&mut self, _index: usize) {}

    fn did_tap_blank(&mut self) {}
}

#[derive(Debug, Clone, Copy)]
struct MeasuredSize {
    generation: u64,
    size: Size,
}

#[derive(Debug, Clone)]
pub struct InteractiveLabel<M = MonospaceMetrics> {
    text: Option<String>,
    style: StyleAttributes,
    bounds: Option<Size>,
    generation: u64,
    measured: FxHashMap<(u32, u32), MeasuredSize>,
    engine: LayoutEngine<M>,
}

impl InteractiveLabel {
    pub fn new() -> Self {
        Self::with_metrics(MonospaceMetrics::default())
    }
}

impl Default for InteractiveLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: FontMetrics> InteractiveLabel<M> {
    pub fn with_metrics(metrics: M) -> Self {
        Self {
            text: None,
            style: StyleAttributes::default(),
            bounds: None,
            generation: 0,
            measured: FxHashMap::default(),
            engine: LayoutEngine::new(metrics),
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn style(&self) -> &StyleAttributes {
        &self.style
    }

    pub fn bounds(&self) -> Option<Size> {
        self.bounds
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_text(&mut self, text: Option<&str>) {
        self.text = text.map(str::to_owned);
        self.invalidate();
    }

    pub fn set_style(&mut self, style: StyleAttributes) {
        self.style = style;
        self.invalidate();
    }

    /// Edits the current style in place; always invalidates.
    pub fn update_style(&mut self, edit: impl FnOnce(&mut StyleAttributes)) {
        edit(&mut self.style);
        self.invalidate();
    }

    /// 测量缓存以建议尺寸为键，修改 bounds 不需要失效
    pub fn set_bounds(&mut self, bounds: Size) {
        self.bounds = Some(bounds.clamp_non_negative());
    }

    fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        tracing::debug!(generation = self.generation, "label invalidated");
    }

    pub fn styled_text(&self) -> StyledText {
        build(self.text.as_deref(), &self.style)
    }

    pub fn size_that_fits(&mut self, proposed: Size) -> Size {
        let key = (proposed.width.to_bits(), proposed.height.to_bits());
        if let Some(hit) = self.measured.get(&key) {
            if hit.generation == self.generation {
                return hit.size;
            }
        }

        let styled = self.styled_text();
        let size = measure::size_that_fits(&self.engine, Some(&styled), proposed);
        if self.measured.len() >= MAX_CACHED_SIZES {
            self.prune_measurements();
        }
        self.measured.insert(
            key,
            MeasuredSize {
                generation: self.generation,
                size,
            },
        );
        size
    }

    fn prune_measurements(&mut self) {
        let generation = self.generation;
        self.measured.retain(|_, m| m.generation == generation);
        if self.measured.len() >= MAX_CACHED_SIZES {
            self.measured.clear();
        }
    }

    pub fn intrinsic_content_size(&mut self) -> Size {
        let width = self.bounds.map_or(UNBOUNDED, |b| b.width);
        self.size_that_fits(Size::with_width(width))
    }

    /// Resizes the bounds to fit the text at the current width.
    pub fn size_to_fit(&mut self) -> Size {
        let size = self.intrinsic_content_size();
        self.bounds = Some(size);
        size
    }

    /// Fresh layout within the current bounds; unbounded before the first measurement.
    pub fn layout(&self) -> Layout {
        let available = self.bounds.unwrap_or(Size::new(UNBOUNDED, UNBOUNDED));
        self.engine.layout(&self.styled_text(), available)
    }

    fn insets(&self) -> EdgeInsets {
        self.style.container_inset.clamped()
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        let layout = self.layout();
        let insets = self.insets();
        let origin = Point::new(insets.left, insets.top);
        for fragment in layout.fragments() {
            renderer.draw_fragment(FragmentPaint {
                origin,
                fragment,
                glyphs: layout.glyphs_in(fragment),
                font: &self.style.font,
                text_color: self.style.text_color,
                shadow: self.style.shadow,
            });
        }
    }

    pub fn hit_test(&self, point: Point) -> HitResult {
        hit_test(point, &self.layout(), self.insets())
    }

    /// Resolves a touch released at `point` and notifies `delegate`.
    pub fn touch_ended(&self, point: Point, delegate: &mut dyn LabelDelegate) -> HitResult {
        let result = self.hit_test(point);
        tracing::debug!(x = point.x, y = point.y, ?result, "touch ended");
        match result {
            HitResult::CharacterIndex(index) => delegate.did_tap_character(index),
            HitResult::Blank => delegate.did_tap_blank(),
        }
        result
    }
}

#[cfg(test)]
#[path = "../tests/unit/label.rs"]
mod tests;

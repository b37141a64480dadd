use compact_str::CompactString;
use serde::{Deserialize, Serialize};

const DEFAULT_FAMILY: &str = "system";
const DEFAULT_SIZE: f32 = 17.0;

/// Font family plus point size. Metrics for it come from a [`crate::text::FontMetrics`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontDescriptor {
    pub family: CompactString,
    pub size: f32,
}

impl FontDescriptor {
    pub fn new(family: &str, size: f32) -> Self {
        Self {
            family: CompactString::new(family),
            size,
        }
    }

    pub fn system(size: f32) -> Self {
        Self::new(DEFAULT_FAMILY, size)
    }

    /// Size used for measurement; non-positive sizes fall back to the default.
    pub fn point_size(&self) -> f32 {
        if self.size > 0.0 && self.size.is_finite() {
            self.size
        } else {
            DEFAULT_SIZE
        }
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::system(DEFAULT_SIZE)
    }
}

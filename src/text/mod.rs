//! Styled text values and the font-metrics seam the layout engine measures through.

pub mod metrics;
pub mod styled;

pub use metrics::{FontMetrics, MonospaceMetrics};
pub use styled::{build, StyledText};

//! Geometry primitives shared by layout, measurement and hit testing.

pub mod geom;

pub use geom::{EdgeInsets, Point, Rect, Size, UNBOUNDED};

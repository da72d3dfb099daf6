//! Fluent builders over the gauge configuration objects.
//!
//! Nested builders borrow the object they configure and return `&mut Self`
//! from every setter; the top-level gauge builders own their gauge.

pub mod area;
pub mod cap;
pub mod linear;
pub mod pointer;
pub mod radial;
pub mod range;
pub mod scale;

pub use area::GaugeAreaBuilder;
pub use cap::CapBuilder;
pub use linear::LinearGaugeBuilder;
pub use pointer::{LinearPointerBuilder, RadialPointerBuilder};
pub use radial::RadialGaugeBuilder;
pub use range::{GaugeRangeBuilder, RangeFactory};
pub use scale::{LinearScaleBuilder, RadialScaleBuilder, ScaleLabelsBuilder};

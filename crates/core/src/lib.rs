pub mod error;
pub mod widget;

pub use error::{GaugeError, Result};
pub use widget::{GaugeWidget, WidgetKind};

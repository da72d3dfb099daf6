use serde::Serialize;

/// Client-side widget family a gauge configuration is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Radial,
    Linear,
}

impl WidgetKind {
    /// Name of the jQuery plugin that initialises this widget on the client.
    pub fn plugin(self) -> &'static str {
        match self {
            Self::Radial => "kendoRadialGauge",
            Self::Linear => "kendoLinearGauge",
        }
    }
}

/// Implemented by every top-level gauge configuration.
///
/// The `Serialize` impl must produce the client options object; the element
/// id returned by [`GaugeWidget::name`] is rendered separately.
pub trait GaugeWidget: Serialize + std::fmt::Debug {
    /// Element id the widget is attached to, e.g. `"speedometer"`.
    fn name(&self) -> &str;

    fn kind(&self) -> WidgetKind;
}

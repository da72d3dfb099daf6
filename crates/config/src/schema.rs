use gauge_core::{GaugeWidget, WidgetKind};
use serde::{Deserialize, Serialize};

/// Root of a gauge file.
///
/// ```toml
/// [[radial]]
/// name = "speedometer"
/// pointer = { value = 65, cap = { color = "red", size = 0.1 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeFile {
    pub radial: Vec<RadialGauge>,
    pub linear: Vec<LinearGauge>,
}

impl GaugeFile {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.radial.is_empty() && self.linear.is_empty()
    }

    /// Names of every declared gauge, radial gauges first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.radial
            .iter()
            .map(|g| g.name.as_str())
            .chain(self.linear.iter().map(|g| g.name.as_str()))
    }
}

/// The decorative end-piece drawn over the pivot of a radial pointer.
///
/// Nothing here is validated: an opacity of `3.0` is stored and serialized
/// as-is and left for the client to interpret.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cap {
    /// CSS colour name or hex value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// 0 = fully transparent, 1 = fully opaque.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Size in percents of the gauge radius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

impl Cap {
    /// Opacity the client falls back to when none is set.
    pub const DEFAULT_OPACITY: f64 = 1.0;

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.opacity.is_none() && self.size.is_none()
    }

    /// Configured opacity, or [`Cap::DEFAULT_OPACITY`].
    #[must_use]
    pub fn effective_opacity(&self) -> f64 {
        self.opacity.unwrap_or(Self::DEFAULT_OPACITY)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadialPointer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Pointer length as a fraction of the scale radius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Cap::is_empty")]
    pub cap: Cap,
}

impl RadialPointer {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.color.is_none() && self.length.is_none() && self.cap.is_empty()
    }
}

/// Linear pointer styles understood by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum PointerShape {
    #[default]
    BarIndicator,
    Arrow,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinearPointer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Pointer thickness in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<PointerShape>,
    /// Distance from the scale line in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
}

impl LinearPointer {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A coloured band drawn along the scale between `from` and `to`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GaugeRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    #[default]
    Inside,
    Outside,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScaleLabels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Client-side format string, e.g. `"{0} km/h"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<LabelPosition>,
}

impl ScaleLabels {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadialScale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Degrees, measured clockwise from the negative x axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_unit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor_unit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,
    /// Width of the range bands in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_size: Option<f64>,
    #[serde(skip_serializing_if = "ScaleLabels::is_empty")]
    pub labels: ScaleLabels,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<GaugeRange>,
}

impl RadialScale {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinearScale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_unit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor_unit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<bool>,
    /// Draw labels and ticks on the opposite side of the scale line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirror: Option<bool>,
    #[serde(skip_serializing_if = "ScaleLabels::is_empty")]
    pub labels: ScaleLabels,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<GaugeRange>,
}

impl LinearScale {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Border {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl Border {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.width.is_none()
    }
}

/// Background and outer box of the whole gauge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GaugeArea {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Border::is_empty")]
    pub border: Border,
}

impl GaugeArea {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialGauge {
    /// Element id; rendered as the placeholder id, not as an option.
    #[serde(skip_serializing)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Animate pointer changes on the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transitions: Option<bool>,
    #[serde(default, skip_serializing_if = "GaugeArea::is_empty")]
    pub gauge_area: GaugeArea,
    #[serde(default, skip_serializing_if = "RadialPointer::is_empty")]
    pub pointer: RadialPointer,
    #[serde(default, skip_serializing_if = "RadialScale::is_empty")]
    pub scale: RadialScale,
}

impl RadialGauge {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl GaugeWidget for RadialGauge {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Radial
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearGauge {
    #[serde(skip_serializing)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transitions: Option<bool>,
    #[serde(default, skip_serializing_if = "GaugeArea::is_empty")]
    pub gauge_area: GaugeArea,
    #[serde(default, skip_serializing_if = "LinearPointer::is_empty")]
    pub pointer: LinearPointer,
    #[serde(default, skip_serializing_if = "LinearScale::is_empty")]
    pub scale: LinearScale,
}

impl LinearGauge {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl GaugeWidget for LinearGauge {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Linear
    }
}

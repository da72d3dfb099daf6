use gauge_config::{
    Cap, GaugeArea, GaugeFile, GaugeRange, LinearGauge, LinearScale, RadialGauge, RadialScale,
    ScaleLabels,
};
use std::fmt;

use crate::{colors::Color, themes};

/// A suspicious value found in a gauge configuration.
///
/// Diagnostics are advisory: the value is still rendered exactly as configured.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Name of the gauge the value belongs to.
    pub gauge: String,
    /// Dotted option path, e.g. `"pointer.cap.opacity"`.
    pub path: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.gauge, self.path, self.message)
    }
}

struct Linter<'a> {
    gauge: &'a str,
    out: Vec<Diagnostic>,
}

impl<'a> Linter<'a> {
    fn new(gauge: &'a str) -> Self {
        Self { gauge, out: Vec::new() }
    }

    fn push(&mut self, path: &str, message: String) {
        self.out.push(Diagnostic {
            gauge: self.gauge.to_string(),
            path: path.to_string(),
            message,
        });
    }

    fn color(&mut self, path: &str, value: Option<&str>) {
        if let Some(v) = value {
            if Color::parse(v).is_none() {
                self.push(path, format!("'{v}' is not a hex colour or CSS colour name"));
            }
        }
    }

    /// NaN and infinities serialize as `null`, so the client never sees them.
    fn finite(&mut self, path: &str, value: Option<f64>) -> Option<f64> {
        let v = value?;
        if v.is_finite() {
            Some(v)
        } else {
            self.push(path, format!("{v} is not finite and renders as null"));
            None
        }
    }

    fn opacity(&mut self, path: &str, value: Option<f64>) {
        if let Some(v) = self.finite(path, value) {
            if !(0.0..=1.0).contains(&v) {
                self.push(path, format!("{v} is outside [0, 1]"));
            }
        }
    }

    fn non_negative(&mut self, path: &str, value: Option<f64>) {
        if let Some(v) = self.finite(path, value) {
            if v < 0.0 {
                self.push(path, format!("{v} is negative"));
            }
        }
    }

    fn bounds(&mut self, path: &str, lo: (&str, Option<f64>), hi: (&str, Option<f64>)) {
        let min = self.finite(&format!("{path}.{}", lo.0), lo.1);
        let max = self.finite(&format!("{path}.{}", hi.0), hi.1);
        if let (Some(min), Some(max)) = (min, max) {
            if min >= max {
                self.push(path, format!("{} {min} is not below {} {max}", lo.0, hi.0));
            }
        }
    }

    fn theme(&mut self, value: Option<&str>) {
        if let Some(v) = value {
            if !themes::is_known(v) {
                self.push("theme", format!("unknown theme '{v}'"));
            }
        }
    }

    fn cap(&mut self, cap: &Cap) {
        self.color("pointer.cap.color", cap.color.as_deref());
        self.opacity("pointer.cap.opacity", cap.opacity);
        self.non_negative("pointer.cap.size", cap.size);
    }

    fn area(&mut self, area: &GaugeArea) {
        self.color("gaugeArea.background", area.background.as_deref());
        self.non_negative("gaugeArea.width", area.width);
        self.non_negative("gaugeArea.height", area.height);
        self.color("gaugeArea.border.color", area.border.color.as_deref());
        self.non_negative("gaugeArea.border.width", area.border.width);
    }

    fn labels(&mut self, labels: &ScaleLabels) {
        self.color("scale.labels.color", labels.color.as_deref());
    }

    fn ranges(&mut self, ranges: &[GaugeRange]) {
        for (i, range) in ranges.iter().enumerate() {
            self.color(&format!("scale.ranges[{i}].color"), range.color.as_deref());
            self.opacity(&format!("scale.ranges[{i}].opacity"), range.opacity);
            self.bounds(
                &format!("scale.ranges[{i}]"),
                ("from", range.from),
                ("to", range.to),
            );
        }
    }

    fn radial_scale(&mut self, scale: &RadialScale) {
        self.bounds("scale", ("min", scale.min), ("max", scale.max));
        self.finite("scale.startAngle", scale.start_angle);
        self.finite("scale.endAngle", scale.end_angle);
        self.non_negative("scale.majorUnit", scale.major_unit);
        self.non_negative("scale.minorUnit", scale.minor_unit);
        self.non_negative("scale.rangeSize", scale.range_size);
        self.labels(&scale.labels);
        self.ranges(&scale.ranges);
    }

    fn linear_scale(&mut self, scale: &LinearScale) {
        self.bounds("scale", ("min", scale.min), ("max", scale.max));
        self.non_negative("scale.majorUnit", scale.major_unit);
        self.non_negative("scale.minorUnit", scale.minor_unit);
        self.labels(&scale.labels);
        self.ranges(&scale.ranges);
    }
}

/// Check a radial gauge for values the client is likely to misrender.
pub fn lint_radial(gauge: &RadialGauge) -> Vec<Diagnostic> {
    let mut l = Linter::new(&gauge.name);
    l.theme(gauge.theme.as_deref());
    l.area(&gauge.gauge_area);
    l.color("pointer.color", gauge.pointer.color.as_deref());
    l.finite("pointer.value", gauge.pointer.value);
    l.non_negative("pointer.length", gauge.pointer.length);
    l.cap(&gauge.pointer.cap);
    l.radial_scale(&gauge.scale);
    l.out
}

pub fn lint_linear(gauge: &LinearGauge) -> Vec<Diagnostic> {
    let mut l = Linter::new(&gauge.name);
    l.theme(gauge.theme.as_deref());
    l.area(&gauge.gauge_area);
    l.color("pointer.color", gauge.pointer.color.as_deref());
    l.finite("pointer.value", gauge.pointer.value);
    l.opacity("pointer.opacity", gauge.pointer.opacity);
    l.non_negative("pointer.size", gauge.pointer.size);
    l.finite("pointer.margin", gauge.pointer.margin);
    l.linear_scale(&gauge.scale);
    l.out
}

/// Lint every gauge in `file`, radial gauges first.
pub fn lint_file(file: &GaugeFile) -> Vec<Diagnostic> {
    file.radial
        .iter()
        .flat_map(lint_radial)
        .chain(file.linear.iter().flat_map(lint_linear))
        .collect()
}

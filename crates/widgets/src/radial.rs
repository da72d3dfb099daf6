use gauge_config::RadialGauge;

use crate::{area::GaugeAreaBuilder, pointer::RadialPointerBuilder, scale::RadialScaleBuilder};

/// Fluent interface for building a [`RadialGauge`].
///
/// Unlike the nested builders this one owns its gauge; call
/// [`RadialGaugeBuilder::build`] to take it out.
///
/// ```
/// # use gauge_widgets::RadialGaugeBuilder;
/// let gauge = RadialGaugeBuilder::new("radialGauge")
///     .pointer(|pointer| {
///         pointer.value(65.0).cap(|cap| {
///             cap.opacity(0.5);
///         });
///     })
///     .build();
/// assert_eq!(gauge.pointer.cap.opacity, Some(0.5));
/// ```
#[derive(Debug, Default)]
pub struct RadialGaugeBuilder {
    gauge: RadialGauge,
}

impl RadialGaugeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            gauge: RadialGauge::new(name),
        }
    }

    /// Sets the element id the gauge is rendered into.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.gauge.name = name.into();
        self
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.gauge.theme = Some(theme.into());
        self
    }

    /// Enables or disables animated pointer transitions.
    pub fn transitions(mut self, enabled: bool) -> Self {
        self.gauge.transitions = Some(enabled);
        self
    }

    pub fn gauge_area<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(&mut GaugeAreaBuilder<'_>),
    {
        configure(&mut GaugeAreaBuilder::new(&mut self.gauge.gauge_area));
        self
    }

    pub fn pointer<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(&mut RadialPointerBuilder<'_>),
    {
        configure(&mut RadialPointerBuilder::new(&mut self.gauge.pointer));
        self
    }

    pub fn scale<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(&mut RadialScaleBuilder<'_>),
    {
        configure(&mut RadialScaleBuilder::new(&mut self.gauge.scale));
        self
    }

    #[must_use]
    pub fn build(self) -> RadialGauge {
        self.gauge
    }
}

/// Continue configuring an existing gauge, e.g. one loaded from a file.
impl From<RadialGauge> for RadialGaugeBuilder {
    fn from(gauge: RadialGauge) -> Self {
        Self { gauge }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_config::{Cap, LabelPosition};

    #[test]
    fn builds_nested_configuration() {
        let gauge = RadialGaugeBuilder::new("speed")
            .theme("metro")
            .transitions(false)
            .gauge_area(|a| {
                a.background("transparent");
            })
            .pointer(|p| {
                p.value(65.0).cap(|c| {
                    c.color("red").size(8.0);
                });
            })
            .scale(|s| {
                s.min(0.0).max(180.0);
            })
            .build();

        assert_eq!(gauge.name, "speed");
        assert_eq!(gauge.theme.as_deref(), Some("metro"));
        assert_eq!(gauge.pointer.value, Some(65.0));
        assert_eq!(
            gauge.pointer.cap,
            Cap {
                color: Some("red".into()),
                opacity: None,
                size: Some(8.0),
            }
        );
        assert_eq!(gauge.scale.max, Some(180.0));
    }

    #[test]
    fn from_existing_gauge_keeps_values() {
        let mut loaded = RadialGauge::new("loaded");
        loaded.pointer.cap.color = Some("blue".into());

        let gauge = RadialGaugeBuilder::from(loaded)
            .pointer(|p| {
                p.cap(|c| {
                    c.opacity(0.3);
                });
            })
            .build();

        assert_eq!(gauge.pointer.cap.color.as_deref(), Some("blue"));
        assert_eq!(gauge.pointer.cap.opacity, Some(0.3));
    }

    #[test]
    fn matches_gauge_loaded_from_toml() {
        let built = RadialGaugeBuilder::new("speedometer")
            .theme("metro")
            .transitions(true)
            .gauge_area(|a| {
                a.background("white").border("#cccccc", 1.0);
            })
            .pointer(|p| {
                p.value(65.0).color("#ea7001").length(0.9).cap(|c| {
                    c.color("#ea7001").opacity(0.5).size(8.0);
                });
            })
            .scale(|s| {
                s.min(0.0)
                    .max(180.0)
                    .start_angle(-30.0)
                    .end_angle(210.0)
                    .labels(|l| {
                        l.position(LabelPosition::Outside);
                    })
                    .ranges(|r| {
                        r.add().from(140.0).to(180.0).color("#c20000");
                    });
            })
            .build();

        let loaded = gauge_config::load_str(
            r##"
[[radial]]
name = "speedometer"
theme = "metro"
transitions = true

[radial.gaugeArea]
background = "white"
border = { color = "#cccccc", width = 1 }

[radial.pointer]
value = 65
color = "#ea7001"
length = 0.9

[radial.pointer.cap]
color = "#ea7001"
opacity = 0.5
size = 8

[radial.scale]
min = 0
max = 180
startAngle = -30
endAngle = 210
labels = { position = "outside" }

[[radial.scale.ranges]]
from = 140
to = 180
color = "#c20000"
"##,
        )
        .unwrap();

        assert_eq!(loaded.radial, [built]);
        assert!(loaded.linear.is_empty());
    }

    #[test]
    fn serializes_cap_under_pointer() {
        let gauge = RadialGaugeBuilder::new("g")
            .pointer(|p| {
                p.cap(|c| {
                    c.color("red").opacity(0.5).size(8.0);
                });
            })
            .build();
        let json = serde_json::to_string(&gauge).unwrap();
        assert_eq!(
            json,
            r#"{"pointer":{"cap":{"color":"red","opacity":0.5,"size":8.0}}}"#
        );
    }
}

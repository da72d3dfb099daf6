use gauge_config::LinearGauge;

use crate::{area::GaugeAreaBuilder, pointer::LinearPointerBuilder, scale::LinearScaleBuilder};

/// Fluent interface for building a [`LinearGauge`].
#[derive(Debug, Default)]
pub struct LinearGaugeBuilder {
    gauge: LinearGauge,
}

impl LinearGaugeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            gauge: LinearGauge::new(name),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.gauge.name = name.into();
        self
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.gauge.theme = Some(theme.into());
        self
    }

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
        F: FnOnce(&mut LinearPointerBuilder<'_>),
    {
        configure(&mut LinearPointerBuilder::new(&mut self.gauge.pointer));
        self
    }

    pub fn scale<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(&mut LinearScaleBuilder<'_>),
    {
        configure(&mut LinearScaleBuilder::new(&mut self.gauge.scale));
        self
    }

    #[must_use]
    pub fn build(self) -> LinearGauge {
        self.gauge
    }
}

impl From<LinearGauge> for LinearGaugeBuilder {
    fn from(gauge: LinearGauge) -> Self {
        Self { gauge }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_config::PointerShape;

    #[test]
    fn builds_and_serializes() {
        let gauge = LinearGaugeBuilder::new("level")
            .pointer(|p| {
                p.value(21.0).shape(PointerShape::Arrow);
            })
            .scale(|s| {
                s.vertical(true).min(-20.0).max(40.0);
            })
            .build();

        assert_eq!(gauge.name, "level");
        let json = serde_json::to_string(&gauge).unwrap();
        assert_eq!(
            json,
            r#"{"pointer":{"value":21.0,"shape":"arrow"},"scale":{"min":-20.0,"max":40.0,"vertical":true}}"#
        );
    }

    #[test]
    fn name_can_be_replaced() {
        let gauge = LinearGaugeBuilder::new("a").name("b").build();
        assert_eq!(gauge.name, "b");
    }
}

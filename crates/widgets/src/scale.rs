use gauge_config::{LabelPosition, LinearScale, RadialScale, ScaleLabels};

use crate::range::RangeFactory;

/// Fluent interface for configuring [`ScaleLabels`].
#[derive(Debug)]
pub struct ScaleLabelsBuilder<'a> {
    labels: &'a mut ScaleLabels,
}

impl<'a> ScaleLabelsBuilder<'a> {
    pub fn new(labels: &'a mut ScaleLabels) -> Self {
        Self { labels }
    }

    pub fn visible(&mut self, visible: bool) -> &mut Self {
        self.labels.visible = Some(visible);
        self
    }

    pub fn color(&mut self, color: impl Into<String>) -> &mut Self {
        self.labels.color = Some(color.into());
        self
    }

    /// Sets the client-side label format, e.g. `"{0} km/h"`.
    pub fn format(&mut self, format: impl Into<String>) -> &mut Self {
        self.labels.format = Some(format.into());
        self
    }

    pub fn position(&mut self, position: LabelPosition) -> &mut Self {
        self.labels.position = Some(position);
        self
    }
}

/// Fluent interface for configuring a [`RadialScale`].
#[derive(Debug)]
pub struct RadialScaleBuilder<'a> {
    scale: &'a mut RadialScale,
}

impl<'a> RadialScaleBuilder<'a> {
    pub fn new(scale: &'a mut RadialScale) -> Self {
        Self { scale }
    }

    pub fn min(&mut self, min: f64) -> &mut Self {
        self.scale.min = Some(min);
        self
    }

    pub fn max(&mut self, max: f64) -> &mut Self {
        self.scale.max = Some(max);
        self
    }

    /// Sets the start angle in degrees.
    pub fn start_angle(&mut self, angle: f64) -> &mut Self {
        self.scale.start_angle = Some(angle);
        self
    }

    /// Sets the end angle in degrees.
    pub fn end_angle(&mut self, angle: f64) -> &mut Self {
        self.scale.end_angle = Some(angle);
        self
    }

    pub fn major_unit(&mut self, unit: f64) -> &mut Self {
        self.scale.major_unit = Some(unit);
        self
    }

    pub fn minor_unit(&mut self, unit: f64) -> &mut Self {
        self.scale.minor_unit = Some(unit);
        self
    }

    pub fn reverse(&mut self, reverse: bool) -> &mut Self {
        self.scale.reverse = Some(reverse);
        self
    }

    /// Sets the width of the range bands in pixels.
    pub fn range_size(&mut self, size: f64) -> &mut Self {
        self.scale.range_size = Some(size);
        self
    }

    pub fn labels<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut ScaleLabelsBuilder<'_>),
    {
        configure(&mut ScaleLabelsBuilder::new(&mut self.scale.labels));
        self
    }

    pub fn ranges<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut RangeFactory<'_>),
    {
        configure(&mut RangeFactory::new(&mut self.scale.ranges));
        self
    }
}

/// Fluent interface for configuring a [`LinearScale`].
#[derive(Debug)]
pub struct LinearScaleBuilder<'a> {
    scale: &'a mut LinearScale,
}

impl<'a> LinearScaleBuilder<'a> {
    pub fn new(scale: &'a mut LinearScale) -> Self {
        Self { scale }
    }

    pub fn min(&mut self, min: f64) -> &mut Self {
        self.scale.min = Some(min);
        self
    }

    pub fn max(&mut self, max: f64) -> &mut Self {
        self.scale.max = Some(max);
        self
    }

    pub fn major_unit(&mut self, unit: f64) -> &mut Self {
        self.scale.major_unit = Some(unit);
        self
    }

    pub fn minor_unit(&mut self, unit: f64) -> &mut Self {
        self.scale.minor_unit = Some(unit);
        self
    }

    pub fn reverse(&mut self, reverse: bool) -> &mut Self {
        self.scale.reverse = Some(reverse);
        self
    }

    pub fn vertical(&mut self, vertical: bool) -> &mut Self {
        self.scale.vertical = Some(vertical);
        self
    }

    /// Draws labels and ticks on the opposite side of the scale line.
    pub fn mirror(&mut self, mirror: bool) -> &mut Self {
        self.scale.mirror = Some(mirror);
        self
    }

    pub fn labels<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut ScaleLabelsBuilder<'_>),
    {
        configure(&mut ScaleLabelsBuilder::new(&mut self.scale.labels));
        self
    }

    pub fn ranges<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut RangeFactory<'_>),
    {
        configure(&mut RangeFactory::new(&mut self.scale.ranges));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radial_scale_setters() {
        let mut scale = RadialScale::default();
        RadialScaleBuilder::new(&mut scale)
            .min(0.0)
            .max(180.0)
            .start_angle(-30.0)
            .end_angle(210.0)
            .labels(|l| {
                l.position(LabelPosition::Outside).format("{0}");
            })
            .ranges(|r| {
                r.add().from(140.0).to(180.0).color("#c20000");
            });

        assert_eq!(scale.end_angle, Some(210.0));
        assert_eq!(scale.labels.position, Some(LabelPosition::Outside));
        assert_eq!(scale.ranges[0].to, Some(180.0));
    }

    #[test]
    fn ranges_called_twice_appends() {
        let mut scale = LinearScale::default();
        let mut builder = LinearScaleBuilder::new(&mut scale);
        builder.ranges(|r| {
            r.add().color("green");
        });
        builder.ranges(|r| {
            r.add().color("red");
        });
        assert_eq!(scale.ranges.len(), 2);
    }

    #[test]
    fn linear_scale_flags() {
        let mut scale = LinearScale::default();
        LinearScaleBuilder::new(&mut scale)
            .vertical(false)
            .mirror(true)
            .reverse(true)
            .labels(|l| {
                l.visible(false);
            });

        assert_eq!(scale.vertical, Some(false));
        assert_eq!(scale.mirror, Some(true));
        assert_eq!(scale.labels.visible, Some(false));
    }
}

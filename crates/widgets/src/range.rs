use gauge_config::GaugeRange;

/// Appends ranges to a scale.
#[derive(Debug)]
pub struct RangeFactory<'a> {
    ranges: &'a mut Vec<GaugeRange>,
}

impl<'a> RangeFactory<'a> {
    pub fn new(ranges: &'a mut Vec<GaugeRange>) -> Self {
        Self { ranges }
    }

    /// Adds an empty range and returns a builder for it.
    pub fn add(&mut self) -> GaugeRangeBuilder<'_> {
        self.ranges.push(GaugeRange::default());
        let last = self.ranges.len() - 1;
        GaugeRangeBuilder::new(&mut self.ranges[last])
    }
}

/// Fluent interface for configuring a single [`GaugeRange`].
#[derive(Debug)]
pub struct GaugeRangeBuilder<'a> {
    range: &'a mut GaugeRange,
}

impl<'a> GaugeRangeBuilder<'a> {
    pub fn new(range: &'a mut GaugeRange) -> Self {
        Self { range }
    }

    pub fn from(&mut self, from: f64) -> &mut Self {
        self.range.from = Some(from);
        self
    }

    pub fn to(&mut self, to: f64) -> &mut Self {
        self.range.to = Some(to);
        self
    }

    pub fn color(&mut self, color: impl Into<String>) -> &mut Self {
        self.range.color = Some(color.into());
        self
    }

    pub fn opacity(&mut self, opacity: f64) -> &mut Self {
        self.range.opacity = Some(opacity);
        self
    }
}

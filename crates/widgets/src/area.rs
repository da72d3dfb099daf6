use gauge_config::GaugeArea;

/// Fluent interface for configuring a [`GaugeArea`].
#[derive(Debug)]
pub struct GaugeAreaBuilder<'a> {
    area: &'a mut GaugeArea,
}

impl<'a> GaugeAreaBuilder<'a> {
    pub fn new(area: &'a mut GaugeArea) -> Self {
        Self { area }
    }

    pub fn background(&mut self, color: impl Into<String>) -> &mut Self {
        self.area.background = Some(color.into());
        self
    }

    pub fn width(&mut self, width: f64) -> &mut Self {
        self.area.width = Some(width);
        self
    }

    pub fn height(&mut self, height: f64) -> &mut Self {
        self.area.height = Some(height);
        self
    }

    /// Sets the border colour and width (pixels) together.
    pub fn border(&mut self, color: impl Into<String>, width: f64) -> &mut Self {
        self.area.border.color = Some(color.into());
        self.area.border.width = Some(width);
        self
    }
}

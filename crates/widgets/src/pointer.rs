use gauge_config::{LinearPointer, PointerShape, RadialPointer};

use crate::cap::CapBuilder;

/// Fluent interface for configuring a [`RadialPointer`].
#[derive(Debug)]
pub struct RadialPointerBuilder<'a> {
    pointer: &'a mut RadialPointer,
}

impl<'a> RadialPointerBuilder<'a> {
    pub fn new(pointer: &'a mut RadialPointer) -> Self {
        Self { pointer }
    }

    /// Sets the value the pointer indicates.
    pub fn value(&mut self, value: f64) -> &mut Self {
        self.pointer.value = Some(value);
        self
    }

    pub fn color(&mut self, color: impl Into<String>) -> &mut Self {
        self.pointer.color = Some(color.into());
        self
    }

    /// Sets the pointer length as a fraction of the scale radius.
    pub fn length(&mut self, length: f64) -> &mut Self {
        self.pointer.length = Some(length);
        self
    }

    /// Configures the pointer cap.
    ///
    /// ```
    /// # use gauge_config::RadialPointer;
    /// # use gauge_widgets::RadialPointerBuilder;
    /// let mut pointer = RadialPointer::default();
    /// RadialPointerBuilder::new(&mut pointer).cap(|cap| {
    ///     cap.color("red").size(8.0);
    /// });
    /// assert_eq!(pointer.cap.size, Some(8.0));
    /// ```
    pub fn cap<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut CapBuilder<'_>),
    {
        configure(&mut CapBuilder::new(&mut self.pointer.cap));
        self
    }
}

/// Fluent interface for configuring a [`LinearPointer`].
#[derive(Debug)]
pub struct LinearPointerBuilder<'a> {
    pointer: &'a mut LinearPointer,
}

impl<'a> LinearPointerBuilder<'a> {
    pub fn new(pointer: &'a mut LinearPointer) -> Self {
        Self { pointer }
    }

    pub fn value(&mut self, value: f64) -> &mut Self {
        self.pointer.value = Some(value);
        self
    }

    pub fn color(&mut self, color: impl Into<String>) -> &mut Self {
        self.pointer.color = Some(color.into());
        self
    }

    pub fn opacity(&mut self, opacity: f64) -> &mut Self {
        self.pointer.opacity = Some(opacity);
        self
    }

    /// Sets the pointer thickness in pixels.
    pub fn size(&mut self, size: f64) -> &mut Self {
        self.pointer.size = Some(size);
        self
    }

    pub fn shape(&mut self, shape: PointerShape) -> &mut Self {
        self.pointer.shape = Some(shape);
        self
    }

    pub fn margin(&mut self, margin: f64) -> &mut Self {
        self.pointer.margin = Some(margin);
        self
    }
}

use gauge_config::Cap;

/// Fluent interface for configuring a pointer [`Cap`].
///
/// The builder borrows the cap owned by the enclosing pointer and writes
/// straight through to it.  Values are stored as given; nothing is clamped
/// or validated.
///
/// ```
/// # use gauge_config::Cap;
/// # use gauge_widgets::CapBuilder;
/// let mut cap = Cap::default();
/// CapBuilder::new(&mut cap).color("red").opacity(0.5).size(8.0);
/// assert_eq!(cap.color.as_deref(), Some("red"));
/// ```
#[derive(Debug)]
pub struct CapBuilder<'a> {
    cap: &'a mut Cap,
}

impl<'a> CapBuilder<'a> {
    pub fn new(cap: &'a mut Cap) -> Self {
        Self { cap }
    }

    /// Sets the cap color, e.g. `"red"` or `"#ea7001"`.
    pub fn color(&mut self, color: impl Into<String>) -> &mut Self {
        self.cap.color = Some(color.into());
        self
    }

    /// Sets the cap opacity: 0 is transparent, 1 (the client default) is opaque.
    pub fn opacity(&mut self, opacity: f64) -> &mut Self {
        self.cap.opacity = Some(opacity);
        self
    }

    /// Sets the cap size in percents.
    pub fn size(&mut self, size: f64) -> &mut Self {
        self.cap.size = Some(size);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_assign_fields() {
        let mut cap = Cap::default();
        CapBuilder::new(&mut cap).color("red").opacity(0.5).size(8.0);
        assert_eq!(
            cap,
            Cap {
                color: Some("red".into()),
                opacity: Some(0.5),
                size: Some(8.0),
            }
        );
    }

    #[test]
    fn setters_return_same_builder() {
        let mut cap = Cap::default();
        let mut builder = CapBuilder::new(&mut cap);
        let before = &builder as *const CapBuilder<'_>;
        assert!(std::ptr::eq(builder.color("blue"), before));
        assert!(std::ptr::eq(builder.opacity(0.1), before));
        assert!(std::ptr::eq(builder.size(3.0), before));
    }

    #[test]
    fn order_does_not_matter_and_last_write_wins() {
        let mut a = Cap::default();
        CapBuilder::new(&mut a).size(1.0).color("red").opacity(0.2).color("#00ff00");

        let mut b = Cap::default();
        CapBuilder::new(&mut b).opacity(0.2).color("#00ff00").size(1.0);

        assert_eq!(a, b);
        assert_eq!(a.color.as_deref(), Some("#00ff00"));
    }

    #[test]
    fn out_of_range_values_are_stored_unchanged() {
        let mut cap = Cap::default();
        CapBuilder::new(&mut cap).opacity(7.5).size(-1.0).color("");
        assert_eq!(cap.opacity, Some(7.5));
        assert_eq!(cap.size, Some(-1.0));
        assert_eq!(cap.color.as_deref(), Some(""));
    }

    #[test]
    fn untouched_fields_stay_unset() {
        let mut cap = Cap::default();
        CapBuilder::new(&mut cap).size(8.0);
        assert!(cap.color.is_none());
        assert!(cap.opacity.is_none());
        assert_eq!(cap.effective_opacity(), 1.0);
    }
}

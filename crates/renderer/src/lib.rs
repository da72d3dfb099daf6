//! Markup and script generation for gauge configurations.
//!
//! Each gauge becomes an empty placeholder element followed by a script that
//! initialises the client widget on it:
//!
//! ```text
//! <div class="k-widget k-gauge" id="speed"></div><script>
//! 	jQuery(function(){jQuery("#speed").kendoRadialGauge({...});});
//! </script>
//! ```

use gauge_config::GaugeFile;
use gauge_core::{GaugeError, GaugeWidget, Result};
use std::collections::HashSet;

/// Serialize the client options object for `widget`.
///
/// `</` is written as `<\/` so string values cannot terminate the
/// surrounding script element.
pub fn options_json<W: GaugeWidget>(widget: &W) -> Result<String> {
    let json = serde_json::to_string(widget)?;
    Ok(json.replace("</", "<\\/"))
}

/// Check that `name` can be used both as an element id and, unescaped, in a
/// jQuery id selector.
pub fn validate_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Err(GaugeError::Render("gauge name cannot be blank".to_string())),
        Some(c) if !c.is_ascii_alphabetic() => {
            return Err(GaugeError::Render(format!(
                "gauge name '{name}' must start with a letter"
            )));
        }
        Some(_) => {}
    }
    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_')) {
        return Err(GaugeError::Render(format!(
            "gauge name '{name}' contains invalid character '{bad}'"
        )));
    }
    Ok(())
}

/// Render a single gauge to its placeholder and initialisation script.
pub fn render<W: GaugeWidget>(widget: &W) -> Result<String> {
    let name = widget.name();
    validate_name(name)?;
    let options = options_json(widget)?;
    let plugin = widget.kind().plugin();

    tracing::debug!(name, plugin, "rendering gauge");

    Ok(format!(
        "<div class=\"k-widget k-gauge\" id=\"{name}\"></div><script>\n\
         \tjQuery(function(){{jQuery(\"#{name}\").{plugin}({options});}});\n\
         </script>"
    ))
}

/// Render every gauge in `file`, radial gauges first, separated by newlines.
///
/// Advisory diagnostics are logged as warnings; duplicate names are an error
/// since both gauges would bind to the same element.
pub fn render_all(file: &GaugeFile) -> Result<String> {
    check_unique(file)?;

    for diag in gauge_theme::lint_file(file) {
        tracing::warn!("{diag}");
    }

    let out = file
        .radial
        .iter()
        .map(render)
        .chain(file.linear.iter().map(render))
        .collect::<Result<Vec<_>>>()?;
    Ok(out.join("\n"))
}

/// Render only the gauge called `name`.
pub fn render_named(file: &GaugeFile, name: &str) -> Result<String> {
    if let Some(gauge) = file.radial.iter().find(|g| g.name == name) {
        for diag in gauge_theme::lint_radial(gauge) {
            tracing::warn!("{diag}");
        }
        return render(gauge);
    }
    if let Some(gauge) = file.linear.iter().find(|g| g.name == name) {
        for diag in gauge_theme::lint_linear(gauge) {
            tracing::warn!("{diag}");
        }
        return render(gauge);
    }
    Err(GaugeError::Render(format!("no gauge named '{name}'")))
}

fn check_unique(file: &GaugeFile) -> Result<()> {
    let mut seen = HashSet::new();
    for name in file.names() {
        if !seen.insert(name) {
            return Err(GaugeError::Render(format!("duplicate gauge name '{name}'")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_config::{LinearGauge, RadialGauge};
    use gauge_widgets::{LinearGaugeBuilder, RadialGaugeBuilder};

    #[test]
    fn renders_placeholder_and_script() {
        let gauge = RadialGaugeBuilder::new("speed")
            .pointer(|p| {
                p.cap(|c| {
                    c.color("red");
                });
            })
            .build();

        let html = render(&gauge).unwrap();
        assert_eq!(
            html,
            "<div class=\"k-widget k-gauge\" id=\"speed\"></div><script>\n\
             \tjQuery(function(){jQuery(\"#speed\").kendoRadialGauge({\"pointer\":{\"cap\":{\"color\":\"red\"}}});});\n\
             </script>"
        );
    }

    #[test]
    fn linear_uses_linear_plugin() {
        let gauge = LinearGaugeBuilder::new("level").build();
        let html = render(&gauge).unwrap();
        assert!(html.contains("jQuery(\"#level\").kendoLinearGauge({});"));
    }

    #[test]
    fn unset_cap_fields_are_not_rendered() {
        let gauge = RadialGaugeBuilder::new("g")
            .pointer(|p| {
                p.cap(|c| {
                    c.size(8.0);
                });
            })
            .build();
        let json = options_json(&gauge).unwrap();
        assert_eq!(json, r#"{"pointer":{"cap":{"size":8.0}}}"#);
    }

    #[test]
    fn script_close_is_escaped() {
        let gauge = RadialGaugeBuilder::new("g")
            .pointer(|p| {
                p.color("</script><script>alert(1)");
            })
            .build();
        let html = render(&gauge).unwrap();
        assert_eq!(html.matches("</script>").count(), 1);
        assert!(html.contains(r#"<\/script>"#));
    }

    #[test]
    fn invalid_names_are_rejected() {
        for name in ["", "1gauge", "my gauge", "a.b", "x\"y"] {
            let err = render(&RadialGauge::new(name)).unwrap_err();
            assert!(matches!(err, GaugeError::Render(_)), "{name:?}");
        }
        assert!(validate_name("gauge-1_a").is_ok());
    }

    #[test]
    fn render_all_keeps_file_order() {
        let file = GaugeFile {
            radial: vec![RadialGauge::new("a"), RadialGauge::new("b")],
            linear: vec![LinearGauge::new("c")],
        };
        let html = render_all(&file).unwrap();
        let a = html.find("#a").unwrap();
        let b = html.find("#b").unwrap();
        let c = html.find("#c").unwrap();
        assert!(a < b && b < c);
        assert_eq!(html.lines().count(), 9);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let file = GaugeFile {
            radial: vec![RadialGauge::new("same")],
            linear: vec![LinearGauge::new("same")],
        };
        assert!(matches!(render_all(&file), Err(GaugeError::Render(_))));
    }

    #[test]
    fn render_named_finds_either_kind() {
        let file = GaugeFile {
            radial: vec![RadialGauge::new("a")],
            linear: vec![LinearGauge::new("b")],
        };
        assert!(render_named(&file, "b").unwrap().contains("kendoLinearGauge"));
        assert!(render_named(&file, "missing").is_err());
    }
}

//! Builds a radial gauge in code and prints its markup.
//!
//! ```
//! cargo run --example builder
//! ```

use gauge_widgets::RadialGaugeBuilder;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let gauge = RadialGaugeBuilder::new("radialGauge")
        .pointer(|pointer| {
            pointer.value(65.0).cap(|cap| {
                cap.color("red").opacity(0.5).size(8.0);
            });
        })
        .scale(|scale| {
            scale.min(0.0).max(180.0).ranges(|ranges| {
                ranges.add().from(140.0).to(180.0).color("#c20000");
            });
        })
        .build();

    for diag in gauge_theme::lint_radial(&gauge) {
        tracing::warn!("{diag}");
    }
    println!("{}", gauge_renderer::render(&gauge)?);
    Ok(())
}

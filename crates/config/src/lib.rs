pub mod schema;

pub use schema::{
    Border, Cap, GaugeArea, GaugeFile, GaugeRange, LabelPosition, LinearGauge, LinearPointer,
    LinearScale, PointerShape, RadialGauge, RadialPointer, RadialScale, ScaleLabels,
};

use gauge_core::{GaugeError, Result};
use std::path::{Path, PathBuf};

/// Example gauge file printed by `gauge init`.
pub const EXAMPLE: &str = r##"# Gauge definitions. Keys follow the client option names.

[[radial]]
name = "speedometer"
transitions = true

[radial.pointer]
value = 65
color = "#ea7001"

[radial.pointer.cap]
color = "#ea7001"
opacity = 1.0
size = 0.1

[radial.scale]
min = 0
max = 180
startAngle = -30
endAngle = 210
majorUnit = 20

[[radial.scale.ranges]]
from = 140
to = 180
color = "#c20000"

[[linear]]
name = "thermometer"

[linear.pointer]
value = 21
shape = "arrow"

[linear.scale]
min = -20
max = 40
vertical = true
"##;

/// Load gauge definitions from a TOML file.  Returns an empty [`GaugeFile`]
/// if the file doesn't exist.
pub fn load(path: impl AsRef<Path>) -> Result<GaugeFile> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Gauge file not found at '{}'; nothing to render.",
            path.display()
        );
        return Ok(GaugeFile::default());
    }

    let raw = std::fs::read_to_string(path)?;

    let file = load_str(&raw)?;
    tracing::debug!(
        radial = file.radial.len(),
        linear = file.linear.len(),
        "loaded '{}'",
        path.display()
    );
    Ok(file)
}

/// Parse gauge definitions from TOML text.
pub fn load_str(raw: &str) -> Result<GaugeFile> {
    toml::from_str(raw).map_err(|e| GaugeError::Config(format!("TOML parse error: {e}")))
}

/// Return the default gauge file path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("gauge").join("gauges.toml")
}

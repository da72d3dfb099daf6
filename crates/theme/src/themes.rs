/// Built-in client themes a gauge may name via its `theme` option.
pub const KNOWN_THEMES: &[&str] = &[
    "default",
    "black",
    "blueopal",
    "bootstrap",
    "flat",
    "highcontrast",
    "material",
    "materialblack",
    "metro",
    "metroblack",
    "moonlight",
    "silver",
    "uniform",
];

/// `true` if `name` is one of [`KNOWN_THEMES`] (case-insensitive).
pub fn is_known(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    KNOWN_THEMES.contains(&name.as_str())
}

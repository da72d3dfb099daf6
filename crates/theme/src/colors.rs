/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// CSS named colours accepted by the client renderer, as `#rrggbb`.
const NAMED: &[(&str, &str)] = &[
    ("black",   "#000000"),
    ("silver",  "#c0c0c0"),
    ("gray",    "#808080"),
    ("grey",    "#808080"),
    ("white",   "#ffffff"),
    ("maroon",  "#800000"),
    ("red",     "#ff0000"),
    ("purple",  "#800080"),
    ("fuchsia", "#ff00ff"),
    ("magenta", "#ff00ff"),
    ("green",   "#008000"),
    ("lime",    "#00ff00"),
    ("olive",   "#808000"),
    ("yellow",  "#ffff00"),
    ("navy",    "#000080"),
    ("blue",    "#0000ff"),
    ("teal",    "#008080"),
    ("aqua",    "#00ffff"),
    ("cyan",    "#00ffff"),
    ("orange",  "#ffa500"),
    ("pink",    "#ffc0cb"),
    ("brown",   "#a52a2a"),
    ("gold",    "#ffd700"),
    ("indigo",  "#4b0082"),
    ("violet",  "#ee82ee"),
];

impl Color {
    pub const BLACK:       Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE:       Self = Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const TRANSPARENT: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    /// Parse a CSS-style hex color string (`#RGB`, `#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        // `from_str_radix` alone would also take a leading `+`.
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };
        let nibble = |i: usize| -> Option<f32> {
            let v = byte(&hex[i..=i])?;
            Some((v * 17) as f32 / 255.0)
        };

        match hex.len() {
            3 => Some(Self {
                r: nibble(0)?,
                g: nibble(1)?,
                b: nibble(2)?,
                a: 1.0,
            }),
            6 => Some(Self {
                r: byte(&hex[0..2])? as f32 / 255.0,
                g: byte(&hex[2..4])? as f32 / 255.0,
                b: byte(&hex[4..6])? as f32 / 255.0,
                a: 1.0,
            }),
            8 => Some(Self {
                r: byte(&hex[0..2])? as f32 / 255.0,
                g: byte(&hex[2..4])? as f32 / 255.0,
                b: byte(&hex[4..6])? as f32 / 255.0,
                a: byte(&hex[6..8])? as f32 / 255.0,
            }),
            _ => None,
        }
    }

    /// Look up a CSS colour keyword (case-insensitive).  `transparent` is accepted.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        if name == "transparent" {
            return Some(Self::TRANSPARENT);
        }
        NAMED
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, hex)| Self::from_hex(hex))
    }

    /// Parse either a hex value or a colour keyword.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            Self::from_hex(s)
        } else {
            Self::from_name(s)
        }
    }

    /// Format as `#rrggbb`, dropping alpha.
    pub fn to_hex(self) -> String {
        let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", c(self.r), c(self.g), c(self.b))
    }

    /// Return a copy with the alpha channel set to `alpha`.
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Color::from_hex("#ff0000"), Color::from_name("red"));
        assert_eq!(Color::from_hex("#f00"), Color::from_hex("#ff0000"));
        assert_eq!(Color::from_hex("#00000080").map(|c| c.a), Some(128.0 / 255.0));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::from_hex("ff0000").is_none());
        assert!(Color::from_hex("#ff00").is_none());
        assert!(Color::from_hex("#gg0000").is_none());
        assert!(Color::from_hex("#ééé").is_none());
        assert!(Color::from_hex("#+f+f+f").is_none());
        assert!(Color::from_hex("#+ff").is_none());
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(Color::parse("Red"), Some(Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 }));
        assert_eq!(Color::parse("transparent"), Some(Color::TRANSPARENT));
        assert!(Color::parse("reddish").is_none());
        assert!(Color::parse("#+f+f+f").is_none());
    }

    #[test]
    fn hex_output() {
        assert_eq!(Color::parse("orange").unwrap().to_hex(), "#ffa500");
        assert_eq!(Color::WHITE.with_alpha(2.0).a, 1.0);
    }
}

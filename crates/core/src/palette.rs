//! Named colour themes and colour helpers.

use serde::Serialize;

/// A named, ordered palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    Blue,
    Green,
    Purple,
    Orange,
    Multicolor,
}

const BLUE: &[&str] = &["#1976D2", "#42A5F5", "#90CAF9", "#BBDEFB"];
const GREEN: &[&str] = &["#4CAF50", "#66BB6A", "#81C784", "#A5D6A7"];
const PURPLE: &[&str] = &["#9C27B0", "#BA68C8", "#CE93D8", "#E1BEE7"];
const ORANGE: &[&str] = &["#FF9800", "#FFB74D", "#FFCC02", "#FFE082"];
const MULTICOLOR: &[&str] = &[
    "#1976D2", "#4CAF50", "#FF9800", "#9C27B0", "#F44336", "#00BCD4",
];

impl ColorTheme {
    pub const ALL: [ColorTheme; 5] = [
        ColorTheme::Blue,
        ColorTheme::Green,
        ColorTheme::Purple,
        ColorTheme::Orange,
        ColorTheme::Multicolor,
    ];

    /// Look up a theme by name. Unknown or missing names resolve to blue.
    pub fn resolve(name: Option<&str>) -> Self {
        name.and_then(|n| Self::ALL.into_iter().find(|t| t.as_str() == n))
            .unwrap_or(ColorTheme::Blue)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorTheme::Blue => "blue",
            ColorTheme::Green => "green",
            ColorTheme::Purple => "purple",
            ColorTheme::Orange => "orange",
            ColorTheme::Multicolor => "multicolor",
        }
    }

    /// Hex colours in palette order. Never empty.
    pub fn palette(self) -> &'static [&'static str] {
        match self {
            ColorTheme::Blue => BLUE,
            ColorTheme::Green => GREEN,
            ColorTheme::Purple => PURPLE,
            ColorTheme::Orange => ORANGE,
            ColorTheme::Multicolor => MULTICOLOR,
        }
    }

    pub fn primary(self) -> &'static str {
        self.palette()[0]
    }

    /// Colour for the `index`-th item, cycling through the palette.
    pub fn color_at(self, index: usize) -> &'static str {
        let palette = self.palette();
        palette[index % palette.len()]
    }
}

/// Re-express a `#RRGGBB` colour as `rgba(r, g, b, alpha)`.
///
/// Input that is not a six-digit hex colour is returned unchanged.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return hex.to_string();
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => format!("rgba({r}, {g}, {b}, {alpha})"),
        _ => hex.to_string(),
    }
}

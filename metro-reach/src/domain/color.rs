//! Line colors.

use std::fmt;

/// Error returned when a line's color code is not in the palette.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color code: {0}")]
pub struct UnknownColor(pub String);

/// A metro line color from the fixed palette.
///
/// The palette is closed: any code not listed here is malformed input.
///
/// # Examples
///
/// ```
/// use metro_reach::domain::Color;
///
/// let orange = Color::from_code("#FBAA33").unwrap();
/// assert_eq!(orange.label(), "orange");
/// assert!(Color::from_code("#000000").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    LightBlue,
    Brown,
    Orange,
    Purple,
    Yellow,
    Grey,
    Salad,
    FountainBlue,
    Malibu,
    Melrose,
    CornflowerLilac,
}

/// Hex code and label for each palette entry.
const PALETTE: [(&str, Color); 14] = [
    ("#EF1E25", Color::Red),
    ("#029A55", Color::Green),
    ("#0252A2", Color::Blue),
    ("#019EE0", Color::LightBlue),
    ("#745C2F", Color::Brown),
    ("#FBAA33", Color::Orange),
    ("#B61D8E", Color::Purple),
    ("#FFD803", Color::Yellow),
    ("#ACADAF", Color::Grey),
    ("#B1D332", Color::Salad),
    ("#5BBEBB", Color::FountainBlue),
    ("#85D4F3", Color::Malibu),
    ("#9999FF", Color::Melrose),
    ("#FFA8AF", Color::CornflowerLilac),
];

impl Color {
    /// Look up a color by its exact hex code.
    pub fn from_code(code: &str) -> Result<Self, UnknownColor> {
        PALETTE
            .iter()
            .find(|(hex, _)| *hex == code)
            .map(|(_, color)| *color)
            .ok_or_else(|| UnknownColor(code.to_string()))
    }

    /// The canonical hex code of this color.
    pub fn code(&self) -> &'static str {
        PALETTE
            .iter()
            .find(|(_, color)| color == self)
            .map(|(hex, _)| *hex)
            .unwrap_or_default()
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::LightBlue => "lightblue",
            Color::Brown => "brown",
            Color::Orange => "orange",
            Color::Purple => "purple",
            Color::Yellow => "yellow",
            Color::Grey => "grey",
            Color::Salad => "salad",
            Color::FountainBlue => "fountain blue",
            Color::Malibu => "malibu",
            Color::Melrose => "melrose",
            Color::CornflowerLilac => "cornflower lilac",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

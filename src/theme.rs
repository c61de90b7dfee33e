//! Color themes and the derived tree palette.
//!
//! A [`Theme`] carries the sixteen named ANSI color slots plus foreground and
//! background, the way terminal-style themes ship them. The tree renderer
//! never touches a `Theme` directly; it consumes a [`TreePalette`], the fixed
//! sixteen-slot array derived from whichever theme the host application is
//! currently using. Theme values are consumed here, not computed — there is
//! no theming engine.

use serde::{Deserialize, Serialize};

/// A color in RGB format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn as_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// A color theme with 16 ANSI colors plus foreground/background.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub foreground: Color,
    pub background: Color,

    // ANSI colors (0-15)
    pub black: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub magenta: Color,
    pub cyan: Color,
    pub white: Color,
    pub bright_black: Color,
    pub bright_red: Color,
    pub bright_green: Color,
    pub bright_yellow: Color,
    pub bright_blue: Color,
    pub bright_magenta: Color,
    pub bright_cyan: Color,
    pub bright_white: Color,
}

impl Theme {
    /// Get ANSI color by index (0-15).
    pub fn ansi_color(&self, index: u8) -> Color {
        match index {
            0 => self.black,
            1 => self.red,
            2 => self.green,
            3 => self.yellow,
            4 => self.blue,
            5 => self.magenta,
            6 => self.cyan,
            7 => self.white,
            8 => self.bright_black,
            9 => self.bright_red,
            10 => self.bright_green,
            11 => self.bright_yellow,
            12 => self.bright_blue,
            13 => self.bright_magenta,
            14 => self.bright_cyan,
            15 => self.bright_white,
            _ => self.foreground,
        }
    }

    /// Default dark theme.
    pub fn default_dark() -> Self {
        Self {
            name: "Default Dark".to_string(),
            foreground: Color::new(205, 214, 244),
            background: Color::new(30, 30, 46),
            black: Color::new(69, 71, 90),
            red: Color::new(243, 139, 168),
            green: Color::new(166, 227, 161),
            yellow: Color::new(249, 226, 175),
            blue: Color::new(137, 180, 250),
            magenta: Color::new(203, 166, 247),
            cyan: Color::new(148, 226, 213),
            white: Color::new(186, 194, 222),
            bright_black: Color::new(108, 112, 134),
            bright_red: Color::new(235, 160, 172),
            bright_green: Color::new(166, 227, 161),
            bright_yellow: Color::new(249, 226, 175),
            bright_blue: Color::new(116, 199, 236),
            bright_magenta: Color::new(245, 194, 231),
            bright_cyan: Color::new(137, 220, 235),
            bright_white: Color::new(205, 214, 244),
        }
    }

    /// Light theme.
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            foreground: Color::new(16, 16, 16),
            background: Color::new(250, 250, 250),
            black: Color::new(20, 25, 30),
            red: Color::new(180, 60, 42),
            green: Color::new(0, 140, 0),
            yellow: Color::new(154, 120, 0),
            blue: Color::new(39, 68, 199),
            magenta: Color::new(160, 54, 158),
            cyan: Color::new(0, 130, 132),
            white: Color::new(199, 199, 199),
            bright_black: Color::new(104, 104, 104),
            bright_red: Color::new(221, 121, 117),
            bright_green: Color::new(36, 160, 96),
            bright_yellow: Color::new(140, 110, 0),
            bright_blue: Color::new(86, 92, 204),
            bright_magenta: Color::new(186, 86, 186),
            bright_cyan: Color::new(0, 150, 152),
            bright_white: Color::new(255, 255, 255),
        }
    }

    /// Dracula theme.
    pub fn dracula() -> Self {
        Self {
            name: "Dracula".to_string(),
            foreground: Color::new(248, 248, 242),
            background: Color::new(40, 42, 54),
            black: Color::new(0, 0, 0),
            red: Color::new(255, 85, 85),
            green: Color::new(80, 250, 123),
            yellow: Color::new(241, 250, 140),
            blue: Color::new(189, 147, 249),
            magenta: Color::new(255, 121, 198),
            cyan: Color::new(139, 233, 253),
            white: Color::new(255, 255, 255),
            bright_black: Color::new(98, 114, 164),
            bright_red: Color::new(255, 110, 103),
            bright_green: Color::new(90, 247, 142),
            bright_yellow: Color::new(244, 244, 161),
            bright_blue: Color::new(189, 147, 249),
            bright_magenta: Color::new(255, 121, 198),
            bright_cyan: Color::new(139, 233, 253),
            bright_white: Color::new(255, 255, 255),
        }
    }

    /// Get theme by name.
    pub fn by_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase().replace(['_', ' '], "-");

        match normalized.as_str() {
            "default-dark" | "default" => Some(Self::default_dark()),
            "light" => Some(Self::light()),
            "dracula" => Some(Self::dracula()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}

/// The fixed sixteen-slot palette the tree renderer consumes.
///
/// Derived data with no independent lifecycle: [`TreePalette::from_theme`]
/// is pure, and [`crate::modal_ui::JsonModalUI`] recomputes the palette only
/// when it is handed a different theme.
#[derive(Debug, Clone, PartialEq)]
pub struct TreePalette {
    /// Default foreground color [r, g, b].
    pub fg: [u8; 3],
    /// Default background color [r, g, b].
    pub bg: [u8; 3],
    /// The 16 ANSI colors [r, g, b] (indices 0-15).
    pub palette: [[u8; 3]; 16],
}

impl TreePalette {
    /// Derive the palette from a theme's sixteen ANSI slots.
    pub fn from_theme(theme: &Theme) -> Self {
        let mut palette = [[0u8; 3]; 16];
        for (index, slot) in palette.iter_mut().enumerate() {
            *slot = theme.ansi_color(index as u8).as_array();
        }
        Self {
            fg: theme.foreground.as_array(),
            bg: theme.background.as_array(),
            palette,
        }
    }

    /// Object key color (cyan slot).
    pub fn key(&self) -> [u8; 3] {
        self.palette[6]
    }

    /// String value color (green slot).
    pub fn string(&self) -> [u8; 3] {
        self.palette[2]
    }

    /// Number value color (bright yellow slot).
    pub fn number(&self) -> [u8; 3] {
        self.palette[11]
    }

    /// Boolean value color (magenta slot).
    pub fn boolean(&self) -> [u8; 3] {
        self.palette[5]
    }

    /// Dim color for nulls, indices, and collapsed summaries (bright black
    /// slot).
    pub fn dim(&self) -> [u8; 3] {
        self.palette[8]
    }
}

impl Default for TreePalette {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

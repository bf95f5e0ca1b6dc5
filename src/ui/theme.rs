//! # Themes
//!
//! Rendering code never hardcodes colors; it reads them from the active
//! [`Theme`]. The theme is picked by name from config or `--theme`.
//!
//! Built-in: Catppuccin Mocha (default), Catppuccin Latte, Dracula, Nord,
//! Gruvbox Dark.

use ratatui::style::Color;

/// Colors used by the Naeilum TUI, grouped by role.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    /// Panel and popup background.
    pub bg: Color,
    /// Body text.
    pub fg: Color,
    /// Hints, separators, footer.
    pub fg_dim: Color,
    /// Borders of the active panel, headings, focused controls.
    pub accent: Color,
    /// Hangul names and hanja.
    pub secondary: Color,
    /// Selected card mark.
    pub success: Color,
    /// Alert borders.
    pub error: Color,
    /// Background of the highlighted card or field.
    pub highlight_bg: Color,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }
}

static BUILT_IN_THEMES: [Theme; 5] = [
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),           // base
        fg: Color::Rgb(205, 214, 244),        // text
        fg_dim: Color::Rgb(108, 112, 134),    // overlay0
        accent: Color::Rgb(137, 180, 250),    // blue
        secondary: Color::Rgb(249, 226, 175), // yellow
        success: Color::Rgb(166, 227, 161),   // green
        error: Color::Rgb(243, 139, 168),     // red
        highlight_bg: Color::Rgb(69, 71, 90), // surface1
    },
    Theme {
        name: "Catppuccin Latte",
        bg: Color::Rgb(239, 241, 245),          // base
        fg: Color::Rgb(76, 79, 105),            // text
        fg_dim: Color::Rgb(156, 160, 176),      // overlay0
        accent: Color::Rgb(30, 102, 245),       // blue
        secondary: Color::Rgb(223, 142, 29),    // yellow
        success: Color::Rgb(64, 160, 43),       // green
        error: Color::Rgb(210, 15, 57),         // red
        highlight_bg: Color::Rgb(188, 192, 204), // surface1
    },
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(189, 147, 249),    // purple
        secondary: Color::Rgb(241, 250, 140), // yellow
        success: Color::Rgb(80, 250, 123),
        error: Color::Rgb(255, 85, 85),
        highlight_bg: Color::Rgb(68, 71, 90),
    },
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),    // frost
        secondary: Color::Rgb(235, 203, 139), // aurora yellow
        success: Color::Rgb(163, 190, 140),
        error: Color::Rgb(191, 97, 106),
        highlight_bg: Color::Rgb(67, 76, 94),
    },
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(254, 128, 25),    // orange
        secondary: Color::Rgb(250, 189, 47), // yellow
        success: Color::Rgb(184, 187, 38),
        error: Color::Rgb(251, 73, 52),
        highlight_bg: Color::Rgb(80, 73, 69),
    },
];

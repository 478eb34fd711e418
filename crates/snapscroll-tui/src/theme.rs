use ratatui::style::Color;

/// Colors used by the page widgets
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg0: Color,
    pub bg2: Color,
    pub fg0: Color,
    pub grey0: Color,
    pub grey2: Color,
    pub accent: Color,
    /// Border of the page the view rests on
    pub active_border: Color,
    pub inactive_border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            grey0: Color::Rgb(0x7c, 0x6f, 0x64),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            accent: Color::Rgb(0xd8, 0xa6, 0x57),
            active_border: Color::Rgb(0xa9, 0xb6, 0x65),
            inactive_border: Color::Rgb(0x7c, 0x6f, 0x64),
        }
    }
}

use ratatui::style::Color;

/// Card-table palette for the TUI
pub struct Theme;

impl Theme {
    // Backgrounds
    pub const BG: Color = Color::Rgb(11, 19, 30);
    pub const FELT: Color = Color::Rgb(16, 48, 40);
    pub const FELT_DARK: Color = Color::Rgb(10, 32, 27);
    pub const PANEL_BG: Color = Color::Rgb(24, 38, 58);

    // Borders and buttons
    pub const BORDER: Color = Color::Rgb(108, 117, 125);
    pub const BUTTON: Color = Color::Rgb(76, 201, 240);
    pub const BUTTON_ACTIVE: Color = Color::Rgb(255, 214, 10);

    // Position callouts
    pub const POSITION: Color = Color::Rgb(255, 255, 255);
    pub const LEFT_PILE: Color = Color::Rgb(76, 201, 240);
    pub const CENTER_PILE: Color = Color::Rgb(255, 183, 3);
    pub const RIGHT_PILE: Color = Color::Rgb(6, 214, 160);
    pub const DONE: Color = Color::Rgb(6, 214, 160);

    // Text
    pub const GOLD: Color = Color::Rgb(255, 183, 3);
    pub const DIM_TEXT: Color = Color::Rgb(100, 110, 120);
    pub const BRIGHT_TEXT: Color = Color::Rgb(255, 255, 255);
    pub const MUTED_TEXT: Color = Color::Rgb(160, 170, 180);
    pub const WARNING: Color = Color::Rgb(230, 57, 70);
}

use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x7a, 0xa2, 0xf7);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x3b, 0x40, 0x48);
pub const TEXT: Color = Color::Rgb(0xd8, 0xda, 0xe0);
pub const TEXT_DIM: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const DONE_MARK: Color = Color::Rgb(0x4a, 0xc2, 0x6c);
pub const SELECTION: Color = Color::Rgb(0x2a, 0x2f, 0x38);
pub const POPUP_BORDER: Color = Color::Rgb(0xd8, 0xda, 0xe0);

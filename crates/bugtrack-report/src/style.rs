//! Shared cell formats and colors.

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder};

/// Fill and accent color of the header row and instruction headings.
pub const HEADER_BLUE: Color = Color::RGB(0x1F4E78);

/// Accent color for testing-area headings.
pub const ACCENT_RED: Color = Color::RGB(0xC00000);

/// Header row: solid blue fill, bold white text, centered both axes,
/// wrapped, thin border.
pub fn header_format() -> Format {
    Format::new()
        .set_background_color(HEADER_BLUE)
        .set_font_color(Color::White)
        .set_bold()
        .set_font_size(11)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
        .set_border(FormatBorder::Thin)
}

/// Bold heading cells on the reference sheet.
pub fn heading_format() -> Format {
    Format::new().set_bold()
}

/// Date cells in the sample row.
pub fn date_format() -> Format {
    Format::new().set_num_format("yyyy-mm-dd")
}

/// Merged title cell of the instructions sheet.
pub fn title_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_size(14)
        .set_font_color(HEADER_BLUE)
}

/// Numbered instruction steps.
pub fn numbered_step_format() -> Format {
    Format::new().set_bold().set_font_color(HEADER_BLUE)
}

/// The three instruction block headings.
pub fn block_heading_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_size(12)
        .set_font_color(HEADER_BLUE)
}

/// Testing-area headings.
pub fn area_heading_format() -> Format {
    Format::new().set_bold().set_font_color(ACCENT_RED)
}

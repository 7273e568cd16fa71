pub mod background;
pub mod count_selector;
pub mod digits;
pub mod key_hints;
pub mod piles;
pub mod popup;
pub mod position;
pub mod progress;
pub mod stacking;
pub mod theme;

pub use theme::Theme;

#[cfg(test)]
pub(crate) mod test_util {
    use ratatui::buffer::Buffer;

    /// Symbols of one buffer row joined into a string
    pub fn row_text(buf: &Buffer, y: u16) -> String {
        let area = buf.area;
        (area.left()..area.right())
            .map(|x| buf.cell((x, y)).map_or(" ", |c| c.symbol()))
            .collect()
    }

    pub fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| row_text(buf, y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

//! Display capability interface

/// EV3 LCD width in pixels
pub const SCREEN_WIDTH: u32 = 178;

/// EV3 LCD height in pixels
pub const SCREEN_HEIGHT: u32 = 128;

/// Height of one text line in pixels
pub const LINE_HEIGHT: u32 = 10;

/// Monochrome pixel display.
pub trait Display {
    fn clear(&mut self);

    /// Draw text with its top-left corner at (x, y).
    fn draw_text(&mut self, x: u32, y: u32, text: &str);

    fn draw_pixel(&mut self, x: u32, y: u32, black: bool);

    /// Clear the screen and print one string per line from the top.
    fn print_lines(&mut self, lines: &[&str]) {
        self.clear();
        for (row, line) in lines.iter().enumerate() {
            self.draw_text(0, row as u32 * LINE_HEIGHT, line);
        }
    }
}

//! Layout primitives.
//!
//! Pure line builders for the fixed-width frame. Every primitive appends
//! complete lines whose rendered width is exactly the frame's inner width
//! plus the two border columns; content is truncated or padded to fit, never
//! wrapped.

use crate::ui::Frame;

/// Inner width of the frame canvas. Resize events are tracked in state but
/// the canvas stays fixed.
pub const FRAME_WIDTH: usize = 76;

/// Outer padding of the status bar.
pub const STATUS_PADDING: usize = 2;

/// Fixed width of the status bar center block.
pub const CENTER_BLOCK_WIDTH: usize = 24;

/// Region separator glyph in the status bar.
const STATUS_SEPARATOR: &str = "||";

/// Side margin of the digital face sub-box.
const FACE_SIDE_MARGIN: usize = 6;

/// Truncate to `width`, then pad on the right.
///
pub fn pad_left(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    while out.chars().count() < width {
        out.push(' ');
    }
    out
}

/// Truncate to `width`, then pad on the left.
///
pub fn pad_right(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    let fill = width - truncated.chars().count();
    let mut out = " ".repeat(fill);
    out.push_str(&truncated);
    out
}

/// Truncate to `width`, then center with any odd column going right.
///
pub fn pad_center(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    let len = truncated.chars().count();
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), truncated, " ".repeat(right))
}

/// Build one line by overlaying left/center/right content on a blank
/// canvas of `width` columns. Later regions win on overlap.
///
pub fn overlay_line(width: usize, left: &str, center: &str, right: &str) -> String {
    let mut canvas: Vec<char> = vec![' '; width];
    splice(&mut canvas, 0, left);
    let center_len = center.chars().count().min(width);
    splice(&mut canvas, (width - center_len) / 2, center);
    let right_len = right.chars().count().min(width);
    splice(&mut canvas, width - right_len, right);
    canvas.into_iter().collect()
}

fn splice(canvas: &mut [char], start: usize, text: &str) {
    for (offset, ch) in text.chars().enumerate() {
        if let Some(cell) = canvas.get_mut(start + offset) {
            *cell = ch;
        }
    }
}

impl Frame {
    pub fn top_border(&mut self) {
        let width = self.width();
        self.push(format!("+{}+", "-".repeat(width)));
    }

    pub fn bottom_border(&mut self) {
        self.top_border();
    }

    /// A content line between the side borders, left-justified.
    ///
    pub fn framed_line(&mut self, content: &str) {
        let width = self.width();
        self.push(format!("|{}|", pad_left(content, width)));
    }

    /// A content line between the side borders, centered.
    ///
    pub fn centered_line(&mut self, content: &str) {
        let width = self.width();
        self.push(format!("|{}|", pad_center(content, width)));
    }

    pub fn separator(&mut self) {
        let width = self.width();
        self.framed_line(&"-".repeat(width));
    }

    pub fn blank_line(&mut self) {
        self.framed_line("");
    }

    /// A bold, centered title line.
    ///
    pub fn title_line(&mut self, title: &str) {
        let width = self.width();
        self.push_bold(format!("|{}|", pad_center(title, width)));
    }

    /// The three-region footer: left and right fill the space remaining
    /// around a fixed-width center block, separated by `||`. Overflowing
    /// content is truncated, never wrapped.
    ///
    pub fn status_bar(&mut self, left: &str, center: &str, right: &str) {
        let width = self.width();
        let inner = width - STATUS_PADDING * 2;
        let center_start = (inner - CENTER_BLOCK_WIDTH) / 2;
        let center_end = center_start + CENTER_BLOCK_WIDTH;
        let left_area = center_start - STATUS_SEPARATOR.len();
        let right_area = inner - center_end - STATUS_SEPARATOR.len();

        let pad = " ".repeat(STATUS_PADDING);
        let line = format!(
            "{pad}{}{sep}{}{sep}{}{pad}",
            pad_left(left, left_area),
            pad_center(center, CENTER_BLOCK_WIDTH),
            pad_right(right, right_area),
            pad = pad,
            sep = STATUS_SEPARATOR,
        );
        self.framed_line(&line);
    }

    /// A sub-box around multi-line block-art text: fixed side margins, two
    /// blank interior lines above and below, each content line centered.
    ///
    pub fn digital_face(&mut self, art: &[String]) {
        let width = self.width();
        let inner = width - FACE_SIDE_MARGIN * 2;
        let interior = inner - 2;
        let margin = " ".repeat(FACE_SIDE_MARGIN);

        self.blank_line();
        self.framed_line(&format!("{}+{}+", margin, "-".repeat(interior)));
        for _ in 0..2 {
            self.framed_line(&format!("{}|{}|", margin, " ".repeat(interior)));
        }
        for line in art {
            self.framed_line(&format!("{}|{}|", margin, pad_center(line, interior)));
        }
        for _ in 0..2 {
            self.framed_line(&format!("{}|{}|", margin, " ".repeat(interior)));
        }
        self.framed_line(&format!("{}+{}+", margin, "-".repeat(interior)));
        self.blank_line();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_widths(frame: &Frame) -> Vec<usize> {
        frame
            .lines()
            .iter()
            .map(|l| l.text.chars().count())
            .collect()
    }

    #[test]
    fn test_pad_left_pads_and_truncates() {
        assert_eq!(pad_left("ab", 4), "ab  ");
        assert_eq!(pad_left("abcdef", 4), "abcd");
        assert_eq!(pad_left("", 3), "   ");
    }

    #[test]
    fn test_pad_right_pads_and_truncates() {
        assert_eq!(pad_right("ab", 4), "  ab");
        assert_eq!(pad_right("abcdef", 4), "abcd");
    }

    #[test]
    fn test_pad_center_splits_padding() {
        assert_eq!(pad_center("ab", 6), "  ab  ");
        assert_eq!(pad_center("ab", 5), " ab  ");
        assert_eq!(pad_center("abcdef", 4), "abcd");
    }

    #[test]
    fn test_overlay_line_positions_regions() {
        let line = overlay_line(20, "LL", "CC", "RR");
        assert_eq!(line.len(), 20);
        assert!(line.starts_with("LL"));
        assert!(line.ends_with("RR"));
        assert_eq!(&line[9..11], "CC");
    }

    #[test]
    fn test_overlay_line_later_regions_win() {
        let line = overlay_line(10, "AAAAAAAAAA", "BB", "C");
        assert_eq!(line, "AAAABBAAAC");
    }

    #[test]
    fn test_all_primitives_emit_fixed_width() {
        let mut frame = Frame::new(FRAME_WIDTH);
        frame.top_border();
        frame.title_line("SYSTEM CLOCK");
        frame.separator();
        frame.framed_line("some content");
        frame.framed_line(&"x".repeat(300));
        frame.centered_line("middle");
        frame.blank_line();
        frame.status_bar("left", "center", "right");
        frame.digital_face(&["##  ##".to_string(), "# ## #".to_string()]);
        frame.bottom_border();
        for width in line_widths(&frame) {
            assert_eq!(width, FRAME_WIDTH + 2);
        }
    }

    #[test]
    fn test_status_bar_center_block_position() {
        let mut frame = Frame::new(FRAME_WIDTH);
        frame.status_bar("HINT", "GMT+01", "STANDBY");
        let text = &frame.lines()[0].text;
        // pad(2) + left(22) + sep(2) starts the 24-column center block,
        // one border column shifts everything right by one.
        let center: String = text.chars().skip(1 + 2 + 22 + 2).take(24).collect();
        assert_eq!(center.trim(), "GMT+01");
        let seps: Vec<_> = text.match_indices("||").collect();
        assert_eq!(seps.len(), 2);
        assert_eq!(seps[1].0 - seps[0].0, 2 + CENTER_BLOCK_WIDTH);
    }

    #[test]
    fn test_status_bar_truncates_overflow() {
        let mut frame = Frame::new(FRAME_WIDTH);
        frame.status_bar(&"L".repeat(50), &"C".repeat(50), &"R".repeat(50));
        assert_eq!(frame.lines()[0].text.chars().count(), FRAME_WIDTH + 2);
    }

    #[test]
    fn test_digital_face_shape() {
        let mut frame = Frame::new(FRAME_WIDTH);
        let art = vec!["123".to_string(), "456".to_string()];
        frame.digital_face(&art);
        // blank + box top + 2 blanks + 2 art + 2 blanks + box bottom + blank
        assert_eq!(frame.lines().len(), 10);
        let top = &frame.lines()[1].text;
        assert!(top.contains('+'));
        assert_eq!(top.matches('-').count(), FRAME_WIDTH - 2 * 6 - 2);
    }
}

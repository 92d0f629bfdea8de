//! Screen layout definitions for the TUI
//!
//! Header on top; below it the code input and the result viewer sit side by
//! side on wide terminals and stacked on narrow ones.

use ratatui::layout::{Constraint, Layout, Rect};

/// Terminal width from which input and output sit side by side.
pub const SIDE_BY_SIDE_MIN_WIDTH: u16 = 100;

/// Header height: top border + title row + bottom border
const HEADER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,

    /// Code input panel (editor + submit control)
    pub input: Rect,

    /// Result viewer panel
    pub output: Rect,
}

impl ScreenAreas {
    pub fn is_side_by_side(&self) -> bool {
        self.input.y == self.output.y
    }
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(3)]).areas(area);

    let [input, output] = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(body)
    } else {
        Layout::vertical([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(body)
    };

    ScreenAreas {
        header,
        input,
        output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_terminal_stacks_panels() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 3);
        assert!(!layout.is_side_by_side());
        assert_eq!(layout.input.y, 3);
        assert_eq!(layout.input.height + layout.output.height, 21);
        assert_eq!(layout.output.width, 80);
    }

    #[test]
    fn test_wide_terminal_places_panels_side_by_side() {
        let layout = create(Rect::new(0, 0, 120, 40));

        assert!(layout.is_side_by_side());
        assert_eq!(layout.input.width, 48);
        assert_eq!(layout.output.width, 72);
        assert_eq!(layout.input.height, 37);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let layout = create(Rect::new(0, 0, 10, 2));
        assert!(layout.header.height <= 2);
    }
}

//! Balloon celebration shown when the verdict is a match.

use unicode_width::UnicodeWidthStr;

const BALLOON: &str = "🎈";
/// Ticks the celebration stays on screen.
pub const CELEBRATION_TICKS: usize = 30;

/// Frame counter for a one-shot celebration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Celebration {
    remaining: usize,
    frame: usize,
}

impl Celebration {
    pub fn start(&mut self) {
        self.remaining = CELEBRATION_TICKS;
        self.frame = 0;
    }

    pub fn stop(&mut self) {
        self.remaining = 0;
    }

    pub fn tick(&mut self) {
        if self.remaining > 0 {
            self.remaining -= 1;
            self.frame += 1;
        }
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    pub fn frame(&self) -> usize {
        self.frame
    }
}

/// One row of balloons, `width` columns wide. Balloons drift right as
/// `frame` advances and each row is offset so they look scattered.
pub fn balloon_row(width: usize, row: usize, frame: usize) -> String {
    let cell = UnicodeWidthStr::width(BALLOON);
    if width < cell {
        return String::new();
    }
    let spacing = 9;
    let offset = (frame + row * 4) % spacing;

    let mut out = String::new();
    let mut col = 0;
    while col + cell <= width {
        if col % spacing == offset {
            out.push_str(BALLOON);
            col += cell;
        } else {
            out.push(' ');
            col += 1;
        }
    }
    out
}

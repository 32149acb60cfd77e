use std::collections::BTreeMap;

/// Screen size in character cells.
pub const MAX_COLUMNS: usize = 512;
pub const MAX_ROWS: usize = 512;

/// Renders `text` with its top-left corner at pixel position (`x`, `y`).
pub trait ScreenPrinter {
    fn screen_printf(&mut self, x: i32, y: i32, text: &str);
}

/// Pixel metrics shared by the printers and the console screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub row_height: i32,
    pub column_width: i32,
    pub char_width: i32,
}

impl Default for Layout {
    fn default() -> Self {
        Self { row_height: 20, column_width: 60, char_width: 6 }
    }
}

/// Console stand-in for a screen: texts are snapped to a character grid of
/// `char_width` x `row_height` pixels. Later texts overwrite earlier ones where they overlap.
pub struct TextScreen {
    row_height: i32,
    char_width: i32,
    texts: Vec<(i32, i32, String)>,
}

impl TextScreen {
    pub fn new(layout: &Layout) -> Self {
        Self { row_height: layout.row_height.max(1), char_width: layout.char_width.max(1), texts: vec![] }
    }

    fn cell(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        if x < 0 || y < 0 {
            return None;
        }
        let column = (x / self.char_width) as usize;
        let row = (y / self.row_height) as usize;
        (column < MAX_COLUMNS && row < MAX_ROWS).then_some((column, row))
    }

    pub fn clear(&mut self) {
        self.texts.clear();
    }

    pub fn render(&self) -> String {
        let mut lines: BTreeMap<usize, Vec<char>> = BTreeMap::new();
        for (x, y, text) in &self.texts {
            let Some((start, row)) = self.cell(*x, *y) else {
                continue;
            };
            let line = lines.entry(row).or_default();
            for (i, ch) in text.chars().take(MAX_COLUMNS - start).enumerate() {
                if line.len() <= start + i {
                    line.resize(start + i + 1, ' ');
                }
                line[start + i] = ch;
            }
        }

        let Some(&last) = lines.keys().next_back() else {
            return String::new();
        };
        let mut out = String::new();
        for row in 0..=last {
            if let Some(line) = lines.get(&row) {
                out.extend(line.iter());
            }
            out.push('\n');
        }
        out
    }
}

impl ScreenPrinter for TextScreen {
    fn screen_printf(&mut self, x: i32, y: i32, text: &str) {
        if self.cell(x, y).is_none() {
            tracing::debug!(x, y, text, "text outside of the screen, skipped");
            return;
        }
        self.texts.push((x, y, text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_screen() {
        let screen = TextScreen::new(&Layout::default());
        assert_eq!(screen.render(), "");
    }

    #[test]
    fn test_texts_snap_to_grid() {
        let mut screen = TextScreen::new(&Layout::default());
        screen.screen_printf(0, 0, "a");
        screen.screen_printf(60, 0, "b");
        screen.screen_printf(12, 45, "c");
        assert_eq!(screen.render(), "a         b\n\n  c\n");
    }

    #[test]
    fn test_later_text_overwrites() {
        let mut screen = TextScreen::new(&Layout::default());
        screen.screen_printf(0, 0, "hello");
        screen.screen_printf(6, 0, "EY");
        assert_eq!(screen.render(), "hEYlo\n");
    }

    #[test]
    fn test_offscreen_text_is_skipped() {
        let mut screen = TextScreen::new(&Layout::default());
        screen.screen_printf(-1, 0, "left");
        screen.screen_printf(0, -20, "above");
        assert_eq!(screen.render(), "");
    }

    #[test]
    fn test_text_beyond_the_screen_is_skipped() {
        let mut screen = TextScreen::new(&Layout::default());
        screen.screen_printf(i32::MAX, 0, "right");
        screen.screen_printf(0, i32::MAX, "below");
        screen.screen_printf(6 * MAX_COLUMNS as i32, 0, "edge");
        assert_eq!(screen.render(), "");
    }

    #[test]
    fn test_long_text_is_cut_at_last_column() {
        let layout = Layout { row_height: 1, column_width: 1, char_width: 1 };
        let mut screen = TextScreen::new(&layout);
        screen.screen_printf(MAX_COLUMNS as i32 - 2, MAX_ROWS as i32 - 1, "abcdef");
        let rendered = screen.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), MAX_ROWS);
        assert_eq!(lines[MAX_ROWS - 1].len(), MAX_COLUMNS);
        assert!(lines[MAX_ROWS - 1].ends_with("ab"));
    }

    #[test]
    fn test_clear() {
        let mut screen = TextScreen::new(&Layout::default());
        screen.screen_printf(0, 0, "x");
        screen.clear();
        assert_eq!(screen.render(), "");
    }
}

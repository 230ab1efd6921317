//! Vertical scrolling of the contents pane

/// Row of the query prompt
pub const PROMPT_ROW: u16 = 0;

/// Row listing completion candidates
pub const COMPLETION_ROW: u16 = PROMPT_ROW + 1;

/// First row of the document contents
pub const CONTENTS_ROW: u16 = COMPLETION_ROW + 1;

/// Scroll position within the rendered document
///
/// The window may scroll one line past the end of the document, so the last line never
/// sits at the very bottom of the screen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
    doc_height: usize,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the first visible document line
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn doc_height(&self) -> usize {
        self.doc_height
    }

    /// Record the height of the currently rendered document
    pub fn set_doc_height(&mut self, doc_height: usize) {
        self.doc_height = doc_height;
        self.offset = self.offset.min(doc_height);
    }

    /// Rows available for contents in a window of `window_height` rows
    pub fn contents_height(window_height: usize) -> usize {
        window_height.saturating_sub(CONTENTS_ROW as usize)
    }

    /// Scroll by `dy` lines, staying within the document (+1 trailing line)
    ///
    /// Returns false when nothing moved.
    pub fn move_window(&mut self, dy: isize, window_height: usize) -> bool {
        let contents = Self::contents_height(window_height);
        let at_top = dy < 0 && self.offset == 0;
        let at_bottom = dy > 0 && self.offset + contents >= self.doc_height + 1;
        if dy == 0 || at_top || at_bottom {
            return false;
        }

        let max_offset = (self.doc_height + 1).saturating_sub(contents);
        let target = self.offset.saturating_add_signed(dy);
        self.offset = target.min(max_offset);
        true
    }

    pub fn scroll_up(&mut self, window_height: usize) -> bool {
        self.move_window(-1, window_height)
    }

    pub fn scroll_down(&mut self, window_height: usize) -> bool {
        self.move_window(1, window_height)
    }

    pub fn next_screen(&mut self, window_height: usize) -> bool {
        let page = Self::contents_height(window_height) as isize;
        self.move_window(page, window_height)
    }

    pub fn previous_screen(&mut self, window_height: usize) -> bool {
        let page = Self::contents_height(window_height) as isize;
        self.move_window(-page, window_height)
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self, window_height: usize) -> bool {
        self.move_window(self.doc_height as isize, window_height)
    }

    /// Back to the top, e.g. after the displayed node changed
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

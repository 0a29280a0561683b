//! Dropdown menu state.
//!
//! Holds open/closed and the highlighted option. The owning view renders
//! the menu and feeds it keyboard input; options are passed in on each
//! call so the state never goes stale against its source.

/// Result of feeding a key to an open dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownKeyResult {
    /// Highlight moved; re-render needed.
    Moved,
    /// The highlighted option was chosen.
    Confirmed(usize),
    /// The menu was closed without choosing.
    Dismissed,
    /// Key was not handled.
    Ignored,
}

/// Open/closed state and highlight for a dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropdownState {
    open: bool,
    highlighted: usize,
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Open with `current` highlighted.
    pub fn open(&mut self, current: Option<usize>) {
        self.open = true;
        self.highlighted = current.unwrap_or(0);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self, current: Option<usize>) {
        if self.open {
            self.close();
        } else {
            self.open(current);
        }
    }

    /// Move the highlight down, wrapping.
    pub fn highlight_next(&mut self, len: usize) {
        if len > 0 {
            self.highlighted = (self.highlighted + 1) % len;
        }
    }

    /// Move the highlight up, wrapping.
    pub fn highlight_previous(&mut self, len: usize) {
        if len > 0 {
            self.highlighted = (self.highlighted + len - 1) % len;
        }
    }

    /// Close and return the highlighted index, if it is in range.
    pub fn confirm(&mut self, len: usize) -> Option<usize> {
        self.close();
        (self.highlighted < len).then_some(self.highlighted)
    }

    /// Handle a key by name while open.
    pub fn process_key(&mut self, key: &str, len: usize) -> DropdownKeyResult {
        if !self.open {
            return DropdownKeyResult::Ignored;
        }
        match key {
            "down" => {
                self.highlight_next(len);
                DropdownKeyResult::Moved
            }
            "up" => {
                self.highlight_previous(len);
                DropdownKeyResult::Moved
            }
            "enter" | "space" => match self.confirm(len) {
                Some(index) => DropdownKeyResult::Confirmed(index),
                None => DropdownKeyResult::Dismissed,
            },
            "escape" => {
                self.close();
                DropdownKeyResult::Dismissed
            }
            _ => DropdownKeyResult::Ignored,
        }
    }
}

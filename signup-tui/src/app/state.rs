use crate::view::NodePath;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Main,
    ConfirmUnregister,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusedBox {
    Email,
    Activity,
    Roster,
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    #[cfg(test)]
    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }
    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        let mut p = pos;
        loop {
            p -= 1;
            if self.value.is_char_boundary(p) {
                return p;
            }
        }
    }

    fn next_boundary(&self, pos: usize) -> usize {
        let mut p = pos + 1;
        while p <= self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}

/// The signup form's own state. The activity picker lives in the view handle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignupForm {
    pub email: TextInput,
    pub validation_error: Option<String>,
}

/// Screen cells covered by one painted inline node, recorded by the renderer each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HitTarget {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub path: NodePath,
}

impl HitTarget {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        row == self.y && column >= self.x && column < self.x.saturating_add(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_respects_multibyte_boundaries() {
        let mut input = TextInput::from_str("åsa@x.com");
        input.home();
        input.move_right();
        assert_eq!(input.split_at_cursor(), ("å", "sa@x.com"));

        input.backspace();
        assert_eq!(input.value, "sa@x.com");
        assert_eq!(input.cursor, 0);

        input.insert('ø');
        assert_eq!(input.split_at_cursor(), ("ø", "sa@x.com"));
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        let mut input = TextInput::from_str("a");
        input.home();
        input.backspace();
        assert_eq!(input.value, "a");
    }
}

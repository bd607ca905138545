use super::*;

impl App {
    /// Move focus to the next pane (Tab)
    pub fn focus_next(&mut self) {
        self.focused_box = match self.focused_box {
            FocusedBox::Email => FocusedBox::Activity,
            FocusedBox::Activity => FocusedBox::Roster,
            FocusedBox::Roster => FocusedBox::Email,
        };
        self.enter_roster_if_focused();
    }

    /// Move focus to the previous pane (Shift+Tab)
    pub fn focus_previous(&mut self) {
        self.focused_box = match self.focused_box {
            FocusedBox::Email => FocusedBox::Roster,
            FocusedBox::Activity => FocusedBox::Email,
            FocusedBox::Roster => FocusedBox::Activity,
        };
        self.enter_roster_if_focused();
    }

    fn enter_roster_if_focused(&mut self) {
        if self.focused_box == FocusedBox::Roster
            && self.focused_control.is_none()
            && !self.removal_controls.is_empty()
        {
            self.focused_control = Some(0);
        }
        self.scroll_to_focus = true;
    }

    /// Move to the previous removal control, stopping at the first one.
    pub fn roster_focus_up(&mut self) {
        if self.removal_controls.is_empty() {
            return;
        }
        self.focused_control = Some(match self.focused_control {
            Some(idx) => idx.saturating_sub(1),
            None => self.removal_controls.len() - 1,
        });
        self.scroll_to_focus = true;
    }

    /// Move to the next removal control, stopping at the last one.
    pub fn roster_focus_down(&mut self) {
        if self.removal_controls.is_empty() {
            return;
        }
        self.focused_control = Some(match self.focused_control {
            Some(idx) => (idx + 1).min(self.removal_controls.len() - 1),
            None => 0,
        });
        self.scroll_to_focus = true;
    }

    pub fn roster_scroll_up(&mut self) {
        self.roster_scroll = self.roster_scroll.saturating_sub(1);
    }

    pub fn roster_scroll_down(&mut self) {
        self.roster_scroll += 1;
    }

    /// Scroll by half of the last rendered region height.
    pub fn roster_page_up(&mut self) {
        let step = (self.roster_view_height / 2).max(1);
        self.roster_scroll = self.roster_scroll.saturating_sub(step);
    }

    pub fn roster_page_down(&mut self) {
        self.roster_scroll += (self.roster_view_height / 2).max(1);
    }
}

use crate::types::ActivityCatalog;
use crate::view::{
    self, removal_control_paths, removal_target, NodePath, RemovalTarget, ViewHandle, ARIA_LABEL,
};

mod feedback;
mod navigation;
mod state;
pub use feedback::{Feedback, FeedbackKind, FeedbackToken, FEEDBACK_TTL};
pub use state::{FocusedBox, HitTarget, SignupForm, View};
#[cfg(test)]
pub use state::TextInput;

pub struct App {
    pub running: bool,
    pub current_view: View,
    pub focused_box: FocusedBox,

    // Last successfully fetched snapshot and its rendering. Only replaced together.
    catalog: ActivityCatalog,
    view: ViewHandle,
    removal_controls: Vec<NodePath>,

    pub form: SignupForm,
    pub feedback: Feedback,

    // Roster navigation
    pub focused_control: Option<usize>, // Index into removal_controls
    pub roster_scroll: usize,
    pub scroll_to_focus: bool, // Bring the focused control into view on the next frame
    pub roster_view_height: usize, // Last-rendered inner height (updated by renderer each frame)
    pub region_hits: Vec<HitTarget>, // Clickable spans from the last frame

    // Unregister confirmation
    pub pending_unregister: Option<RemovalTarget>,

    // Loading indicator
    pub is_loading: bool,
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            current_view: View::Main,
            focused_box: FocusedBox::Email,
            catalog: ActivityCatalog::new(),
            view: ViewHandle::new(),
            removal_controls: Vec::new(),
            form: SignupForm::default(),
            feedback: Feedback::default(),
            focused_control: None,
            roster_scroll: 0,
            scroll_to_focus: false,
            roster_view_height: 0,
            region_hits: Vec::new(),
            pending_unregister: None,
            is_loading: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    #[cfg(test)]
    pub fn catalog(&self) -> &ActivityCatalog {
        &self.catalog
    }

    pub fn view(&self) -> &ViewHandle {
        &self.view
    }

    #[cfg(test)]
    pub fn removal_controls(&self) -> &[NodePath] {
        &self.removal_controls
    }

    pub fn focused_control_path(&self) -> Option<&NodePath> {
        self.focused_control
            .and_then(|i| self.removal_controls.get(i))
    }

    /// Accessible label of the control under the roster cursor.
    pub fn focused_control_label(&self) -> Option<&str> {
        let path = self.focused_control_path()?;
        self.view.node_at(path)?.as_element()?.attr_value(ARIA_LABEL)
    }

    /// Install a freshly fetched snapshot and re-render from it.
    pub fn apply_snapshot(&mut self, catalog: ActivityCatalog) {
        self.catalog = catalog;
        view::render(&self.catalog, &mut self.view);
        self.removal_controls = removal_control_paths(&self.view);
        self.focused_control = match self.focused_control {
            Some(_) if self.removal_controls.is_empty() => None,
            Some(i) => Some(i.min(self.removal_controls.len() - 1)),
            None => None,
        };
        self.is_loading = false;
    }

    /// Show the load-failure message. The catalog and the picker are left as they were.
    pub fn apply_fetch_failure(&mut self) {
        view::render_load_failure(&mut self.view);
        self.removal_controls.clear();
        self.focused_control = None;
        self.roster_scroll = 0;
        self.is_loading = false;
    }

    pub fn select_next_activity(&mut self) {
        self.view.activity_select_mut().select_next();
    }

    pub fn select_previous_activity(&mut self) {
        self.view.activity_select_mut().select_previous();
    }

    /// Check the form's required fields and return `(email, activity)` when both are set.
    pub fn form_submission(&mut self) -> Option<(String, String)> {
        let email = self.form.email.value.trim().to_string();
        if email.is_empty() {
            self.form.validation_error = Some("Please enter an email".to_string());
            self.focused_box = FocusedBox::Email;
            return None;
        }
        let Some(activity) = self.view.activity_select().selected_value() else {
            self.form.validation_error = Some("Please select an activity".to_string());
            self.focused_box = FocusedBox::Activity;
            return None;
        };

        self.form.validation_error = None;
        Some((email, activity.to_string()))
    }

    pub fn reset_form(&mut self) {
        self.form.email.clear();
        self.form.validation_error = None;
        self.view.activity_select_mut().reset_selection();
    }

    /// Delegated activation of the node at `path` in the card region.
    ///
    /// Opens the unregister confirmation when the activation resolves to a
    /// removal control; anything else is ignored.
    pub fn activate(&mut self, path: &[usize]) -> bool {
        let Some(target) = removal_target(&self.view, path) else {
            return false;
        };
        self.pending_unregister = Some(target);
        self.current_view = View::ConfirmUnregister;
        true
    }

    pub fn activate_focused_control(&mut self) -> bool {
        match self.focused_control_path().cloned() {
            Some(path) => self.activate(&path),
            None => false,
        }
    }

    /// Close the confirmation and hand back what was being confirmed.
    pub fn take_pending_unregister(&mut self) -> Option<RemovalTarget> {
        self.current_view = View::Main;
        self.pending_unregister.take()
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<NodePath> {
        self.region_hits
            .iter()
            .rev()
            .find(|hit| hit.contains(column, row))
            .map(|hit| hit.path.clone())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Activity;

    fn chess_catalog(participants: &[&str]) -> ActivityCatalog {
        vec![
            Activity {
                name: "Chess Club".to_string(),
                max_participants: 12,
                participants: participants.iter().map(|p| p.to_string()).collect(),
                ..Activity::default()
            },
            Activity {
                name: "Drama".to_string(),
                max_participants: 3,
                ..Activity::default()
            },
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn snapshot_and_picker_are_replaced_together() {
        let mut app = App::new();
        app.apply_snapshot(chess_catalog(&["a@x.com"]));

        let options: Vec<&str> = app
            .view()
            .activity_select()
            .options()
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(options, app.catalog().names().collect::<Vec<_>>());
        assert_eq!(app.removal_controls().len(), 1);
    }

    #[test]
    fn focused_control_label_names_participant_and_activity() {
        let mut app = App::new();
        app.apply_snapshot(chess_catalog(&["a@x.com", "b@x.com"]));
        assert_eq!(app.focused_control_label(), None);

        app.focused_control = Some(1);
        assert_eq!(
            app.focused_control_label(),
            Some("Unregister b@x.com from Chess Club")
        );
    }

    #[test]
    fn fetch_failure_keeps_previous_catalog() {
        let mut app = App::new();
        app.apply_snapshot(chess_catalog(&["a@x.com"]));
        app.focused_control = Some(0);

        app.apply_fetch_failure();

        assert_eq!(app.catalog(), &chess_catalog(&["a@x.com"]));
        assert_eq!(app.view().activity_select().options().len(), 2);
        assert!(app.removal_controls().is_empty());
        assert_eq!(app.focused_control, None);
    }

    #[test]
    fn focused_control_is_clamped_after_roster_shrinks() {
        let mut app = App::new();
        app.apply_snapshot(chess_catalog(&["a@x.com", "b@x.com", "c@x.com"]));
        app.focused_control = Some(2);

        app.apply_snapshot(chess_catalog(&["a@x.com"]));
        assert_eq!(app.focused_control, Some(0));

        app.apply_snapshot(chess_catalog(&[]));
        assert_eq!(app.focused_control, None);
    }

    #[test]
    fn submission_requires_both_fields() {
        let mut app = App::new();
        app.apply_snapshot(chess_catalog(&[]));

        assert_eq!(app.form_submission(), None);
        assert_eq!(app.focused_box, FocusedBox::Email);

        app.form.email = TextInput::from_str(" a@x.com ");
        assert_eq!(app.form_submission(), None);
        assert_eq!(app.focused_box, FocusedBox::Activity);

        app.select_next_activity();
        assert_eq!(
            app.form_submission(),
            Some(("a@x.com".to_string(), "Chess Club".to_string()))
        );
        assert_eq!(app.form.validation_error, None);
    }

    #[test]
    fn reset_form_clears_email_and_selection() {
        let mut app = App::new();
        app.apply_snapshot(chess_catalog(&[]));
        app.form.email = TextInput::from_str("a@x.com");
        app.select_next_activity();

        app.reset_form();

        assert_eq!(app.form.email.value, "");
        assert_eq!(app.view().activity_select().selected_value(), None);
    }

    #[test]
    fn activating_a_control_opens_confirmation() {
        let mut app = App::new();
        app.apply_snapshot(chess_catalog(&["a@x.com"]));
        app.focused_control = Some(0);

        assert!(app.activate_focused_control());
        assert_eq!(app.current_view, View::ConfirmUnregister);

        let target = app.take_pending_unregister().unwrap();
        assert_eq!(target.email, "a@x.com");
        assert_eq!(target.activity, "Chess Club");
        assert_eq!(app.current_view, View::Main);
    }

    #[test]
    fn activating_outside_a_control_does_nothing() {
        let mut app = App::new();
        app.apply_snapshot(chess_catalog(&["a@x.com"]));

        assert!(!app.activate(&[0, 0]));
        assert_eq!(app.current_view, View::Main);
        assert_eq!(app.pending_unregister, None);
    }

    #[test]
    fn hit_test_prefers_innermost_target() {
        let mut app = App::new();
        app.region_hits = vec![
            HitTarget {
                x: 0,
                y: 3,
                width: 20,
                path: vec![0, 4, 1, 0],
            },
            HitTarget {
                x: 10,
                y: 3,
                width: 3,
                path: vec![0, 4, 1, 0, 1],
            },
        ];

        assert_eq!(app.hit_test(11, 3), Some(vec![0, 4, 1, 0, 1]));
        assert_eq!(app.hit_test(2, 3), Some(vec![0, 4, 1, 0]));
        assert_eq!(app.hit_test(2, 4), None);
    }
}

use super::{Element, Node, SelectOption, Tag, ViewHandle};
use crate::types::{Activity, ActivityCatalog};

pub const CARD_CLASS: &str = "activity-card";
pub const PARTICIPANTS_SECTION_CLASS: &str = "participants-section";
pub const PARTICIPANTS_LIST_CLASS: &str = "participants-list";
pub const PARTICIPANT_EMAIL_CLASS: &str = "participant-email";
pub const PARTICIPANTS_EMPTY_CLASS: &str = "participants-empty";
pub const DELETE_BUTTON_CLASS: &str = "delete-btn";
pub const DATA_EMAIL: &str = "data-email";
pub const DATA_ACTIVITY: &str = "data-activity";
pub const ARIA_LABEL: &str = "aria-label";

const EMPTY_ROSTER: &str = "No participants yet";
const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";

/// Replace the card region and the activity picker with a projection of `catalog`.
///
/// Nothing from the previous render survives, so the same catalog always
/// produces the same view.
pub fn render(catalog: &ActivityCatalog, view: &mut ViewHandle) {
    let select = view.activity_select_mut();
    select.clear();
    for activity in catalog.iter() {
        select.push(SelectOption {
            value: activity.name.clone(),
            label: activity.name.clone(),
        });
    }

    view.replace_activities(catalog.iter().map(|a| activity_card(a).into()).collect());
}

/// Degraded card region after a failed fetch. The picker keeps its options.
pub fn render_load_failure(view: &mut ViewHandle) {
    view.replace_activities(vec![Node::Element(Element::new(Tag::P).text(LOAD_FAILED))]);
}

fn activity_card(activity: &Activity) -> Element {
    Element::new(Tag::Div)
        .class(CARD_CLASS)
        .child(Element::new(Tag::H4).text(activity.name.as_str()))
        .child(Element::new(Tag::P).text(activity.description.as_str()))
        .child(
            Element::new(Tag::P)
                .child(Element::new(Tag::Strong).text("Schedule:"))
                .text(format!(" {}", activity.schedule_label())),
        )
        .child(
            Element::new(Tag::P)
                .child(Element::new(Tag::Strong).text("Availability:"))
                .text(format!(" {} spots left", activity.spots_left())),
        )
        .child(
            Element::new(Tag::Div)
                .class(PARTICIPANTS_SECTION_CLASS)
                .child(Element::new(Tag::H5).text("Participants"))
                .child(participants_list(activity)),
        )
}

fn participants_list(activity: &Activity) -> Element {
    let list = Element::new(Tag::Ul).class(PARTICIPANTS_LIST_CLASS);

    if activity.participants.is_empty() {
        return list.child(
            Element::new(Tag::Li)
                .class(PARTICIPANTS_EMPTY_CLASS)
                .text(EMPTY_ROSTER),
        );
    }

    activity
        .participants
        .iter()
        .fold(list, |list, email| {
            list.child(participant_entry(&activity.name, email))
        })
}

fn participant_entry(activity: &str, email: &str) -> Element {
    Element::new(Tag::Li)
        .child(
            Element::new(Tag::Span)
                .class(PARTICIPANT_EMAIL_CLASS)
                .text(email),
        )
        .child(
            Element::new(Tag::Button)
                .class(DELETE_BUTTON_CLASS)
                .attr(ARIA_LABEL, format!("Unregister {} from {}", email, activity))
                .attr(DATA_EMAIL, email)
                .attr(DATA_ACTIVITY, activity)
                .text("×"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn activity(name: &str, max: u32, participants: &[&str]) -> Activity {
        Activity {
            name: name.to_string(),
            description: format!("About {name}"),
            schedule: None,
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn catalog(activities: Vec<Activity>) -> ActivityCatalog {
        activities.into_iter().collect()
    }

    fn card<'a>(view: &'a ViewHandle, index: usize) -> &'a Element {
        view.activities()[index].as_element().unwrap()
    }

    fn roster(card: &Element) -> &Element {
        let section = card.children()[4].as_element().unwrap();
        section.children()[1].as_element().unwrap()
    }

    #[test]
    fn select_values_match_catalog_keys() {
        let cases = vec![
            catalog(vec![]),
            catalog(vec![activity("Chess Club", 12, &[])]),
            catalog(vec![
                activity("Chess Club", 12, &["a@x.com"]),
                activity("Drama", 3, &[]),
                activity("Gym Class", 30, &["b@x.com", "c@x.com"]),
            ]),
        ];

        for catalog in cases {
            let mut view = ViewHandle::new();
            render(&catalog, &mut view);

            let values: BTreeSet<_> = view
                .activity_select()
                .options()
                .iter()
                .map(|o| o.value.as_str())
                .collect();
            let keys: BTreeSet<_> = catalog.names().collect();
            assert_eq!(values, keys);
            assert_eq!(view.activity_select().options().len(), catalog.len());
            assert_eq!(view.activities().len(), catalog.len());
        }
    }

    #[test]
    fn rendering_is_idempotent_regardless_of_previous_view() {
        let first = catalog(vec![
            activity("Drama", 3, &["z@x.com"]),
            activity("Robotics", 8, &[]),
        ]);
        let second = catalog(vec![activity("Chess Club", 12, &["a@x.com", "b@x.com"])]);

        let mut fresh = ViewHandle::new();
        render(&second, &mut fresh);

        let mut reused = ViewHandle::new();
        render(&first, &mut reused);
        reused.activity_select_mut().select_next();
        render(&second, &mut reused);
        render(&second, &mut reused);

        assert_eq!(fresh, reused);
    }

    #[test]
    fn card_shows_details_with_defaults() {
        let mut view = ViewHandle::new();
        let mut chess = activity("Chess Club", 2, &["a@x.com", "b@x.com", "c@x.com"]);
        chess.description = String::new();
        render(&catalog(vec![chess]), &mut view);

        let card = card(&view, 0);
        assert!(card.has_class(CARD_CLASS));
        let texts: Vec<String> = card
            .children()
            .iter()
            .take(4)
            .map(|n| n.as_element().unwrap().text_content())
            .collect();
        assert_eq!(
            texts,
            vec![
                "Chess Club",
                "",
                "Schedule: TBA",
                "Availability: -1 spots left"
            ]
        );
    }

    #[test]
    fn roster_preserves_server_order() {
        let mut view = ViewHandle::new();
        render(
            &catalog(vec![activity("Chess Club", 12, &["z@x.com", "a@x.com"])]),
            &mut view,
        );

        let emails: Vec<String> = roster(card(&view, 0))
            .children()
            .iter()
            .map(|li| li.as_element().unwrap().children()[0].as_element().unwrap().text_content())
            .collect();
        assert_eq!(emails, vec!["z@x.com", "a@x.com"]);
    }

    #[test]
    fn empty_roster_shows_placeholder_entry() {
        let mut view = ViewHandle::new();
        render(&catalog(vec![activity("Drama", 3, &[])]), &mut view);

        let list = roster(card(&view, 0));
        assert_eq!(list.children().len(), 1);
        let entry = list.children()[0].as_element().unwrap();
        assert!(entry.has_class(PARTICIPANTS_EMPTY_CLASS));
        assert_eq!(entry.text_content(), "No participants yet");
    }

    #[test]
    fn hostile_identifier_is_inert_text() {
        let hostile = "<img src=x onerror=alert(1)><li>fake</li>\u{1b}[2J";
        let mut view = ViewHandle::new();
        render(&catalog(vec![activity("Chess Club", 12, &[hostile])]), &mut view);

        let list = roster(card(&view, 0));
        assert_eq!(list.children().len(), 1);

        let entry = list.children()[0].as_element().unwrap();
        assert_eq!(entry.children().len(), 2);
        let email = entry.children()[0].as_element().unwrap();
        assert_eq!(email.children(), &[Node::Text(hostile.to_string())]);

        let button = entry.children()[1].as_element().unwrap();
        assert_eq!(button.attr_value(DATA_EMAIL), Some(hostile));
        assert_eq!(button.attr_value(DATA_ACTIVITY), Some("Chess Club"));
    }

    #[test]
    fn load_failure_replaces_cards_but_keeps_options() {
        let mut view = ViewHandle::new();
        render(&catalog(vec![activity("Chess Club", 12, &[])]), &mut view);
        render_load_failure(&mut view);

        assert_eq!(view.activities().len(), 1);
        assert_eq!(
            view.activities()[0].as_element().unwrap().text_content(),
            LOAD_FAILED
        );
        assert_eq!(view.activity_select().options().len(), 1);
    }
}

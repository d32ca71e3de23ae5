mod common;

use common::{fixture_document, RecordingPrompt};
use folio_core::{App, Document, KvStore, ListName, MemoryKvStore, NodeId, SITE_DATA_KEY};

fn admin_app() -> App<MemoryKvStore, RecordingPrompt> {
    App::bootstrap(
        fixture_document(true),
        MemoryKvStore::new(),
        RecordingPrompt::confirming(),
    )
}

fn card(doc: &Document, list: ListName, id: &str) -> NodeId {
    let container = doc.find_by_attr("data-list", list.as_str()).unwrap();
    doc.find_in(container, "data-id", id).unwrap()
}

fn card_field(doc: &Document, list: ListName, id: &str, field: &str) -> NodeId {
    let card = card(doc, list, id);
    doc.find_in(card, "data-field", field).unwrap()
}

#[test]
fn edit_click_marks_fields_editable_and_relabels_button() {
    let mut app = admin_app();
    app.card_edit_clicked(ListName::Education, "edu-1");

    let doc = app.doc();
    let card = card(doc, ListName::Education, "edu-1");
    assert_eq!(doc.attr(card, "data-editing"), Some("true"));
    assert!(doc.has_class(card, "is-editing"));

    let degree = card_field(doc, ListName::Education, "edu-1", "degree");
    assert_eq!(doc.attr(degree, "contenteditable"), Some("true"));
    assert!(doc.has_class(degree, "admin-editable"));

    let button = doc.find_in(card, "data-action", "edit").unwrap();
    assert_eq!(doc.text(button), "Save");
}

#[test]
fn save_persists_trimmed_text_and_resets_card_to_viewing() {
    let mut app = admin_app();
    app.card_edit_clicked(ListName::Education, "edu-1");

    let degree = card_field(app.doc(), ListName::Education, "edu-1", "degree");
    app.doc_mut().set_text(degree, "  M.Tech Robotics  ");
    app.card_edit_clicked(ListName::Education, "edu-1");

    assert_eq!(app.session().data().education[0].degree, "M.Tech Robotics");

    let raw = app
        .session()
        .store()
        .get(SITE_DATA_KEY)
        .unwrap()
        .expect("site data persisted on save");
    assert!(raw.contains("M.Tech Robotics"));

    // The re-render rebuilt the card back in Viewing state.
    let doc = app.doc();
    let card = card(doc, ListName::Education, "edu-1");
    assert_ne!(doc.attr(card, "data-editing"), Some("true"));
    let degree = card_field(doc, ListName::Education, "edu-1", "degree");
    assert_eq!(doc.attr(degree, "contenteditable"), None);
    let button = doc.find_in(card, "data-action", "edit").unwrap();
    assert_eq!(doc.text(button), "Edit");
}

#[test]
fn blank_field_saves_the_list_default_not_an_empty_string() {
    let mut app = admin_app();
    app.card_edit_clicked(ListName::Education, "edu-1");

    let college = card_field(app.doc(), ListName::Education, "edu-1", "college");
    app.doc_mut().set_text(college, "   ");
    app.card_edit_clicked(ListName::Education, "edu-1");

    assert_eq!(app.session().data().education[0].college, "College Name");
}

#[test]
fn unrelated_rerender_resets_a_card_mid_edit() {
    let mut app = admin_app();
    app.card_edit_clicked(ListName::Skills, "skill-1");
    {
        let doc = app.doc();
        let editing = card(doc, ListName::Skills, "skill-1");
        assert_eq!(doc.attr(editing, "data-editing"), Some("true"));
    }

    // Adding a career entry re-renders everything; the skill card's
    // edit session is discarded with its subtree.
    let input = app.doc().find_by_attr("id", "career-text").unwrap();
    app.doc_mut().set_attr(input, "value", "Mechatronics");
    app.form_submitted(ListName::Career);

    let doc = app.doc();
    let rebuilt = card(doc, ListName::Skills, "skill-1");
    assert_ne!(doc.attr(rebuilt, "data-editing"), Some("true"));
    let title = card_field(doc, ListName::Skills, "skill-1", "title");
    assert_eq!(doc.attr(title, "contenteditable"), None);
}

#[test]
fn contact_submit_replaces_whole_contact_and_rerenders_section() {
    let mut app = admin_app();
    for (input_id, value) in [
        ("contact-email", " new@example.com "),
        ("contact-phone", "+49 123"),
        ("contact-github", "github.com/new"),
        ("contact-linkedin", ""),
    ] {
        let input = app.doc().find_by_attr("id", input_id).unwrap();
        app.doc_mut().set_attr(input, "value", value);
    }
    app.contact_submitted();

    let contact = &app.session().data().contact;
    assert_eq!(contact.email, "new@example.com");
    assert_eq!(contact.phone, "+49 123");
    assert_eq!(contact.github, "github.com/new");
    assert_eq!(contact.linkedin, "");

    let doc = app.doc();
    let section = doc.find_by_attr("data-section", "contact").unwrap();
    let email_span = doc.find_in(section, "data-field", "email").unwrap();
    assert_eq!(doc.text(email_span), "new@example.com");
}

#[test]
fn quota_rejected_save_keeps_memory_state_and_warns() {
    let doc = fixture_document(true);
    // Quota too small for the site blob; every persist is rejected.
    let store = MemoryKvStore::with_quota(64);
    let mut app = App::bootstrap(doc, store, RecordingPrompt::confirming());

    app.card_edit_clicked(ListName::Career, "car-1");
    let field = card_field(app.doc(), ListName::Career, "car-1", "text");
    app.doc_mut().set_text(field, "Control Systems");
    app.card_edit_clicked(ListName::Career, "car-1");

    // The mutation stays in memory, nothing became durable, and the
    // user saw a warning.
    assert_eq!(app.session().data().career[0].text, "Control Systems");
    assert_eq!(app.session().store().get(SITE_DATA_KEY).unwrap(), None);
    assert!(!app.session().prompt().alerts.is_empty());
}

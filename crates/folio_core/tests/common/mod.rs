//! Shared fixtures for integration tests: a page document carrying every
//! marker the static markup contract promises, and a recording prompt.

use folio_core::{Document, HostPrompt, ListName};

/// Builds a page with all section containers, form inputs, resume
/// affordances and one freeform fragment.
pub fn fixture_document(admin: bool) -> Document {
    let mut doc = Document::new("body");
    if admin {
        doc.set_attr(doc.root(), "data-page", "admin");
    }

    let about = doc.create_element("p");
    doc.set_attr(about, "data-section", "about");
    doc.set_attr(about, "data-field", "text");
    doc.append_child(doc.root(), about);

    for list in ListName::ALL {
        let container = doc.create_element("div");
        doc.set_attr(container, "data-list", list.as_str());
        doc.append_child(doc.root(), container);
    }

    let contact = doc.create_element("section");
    doc.set_attr(contact, "data-section", "contact");
    doc.append_child(doc.root(), contact);
    for field in ["email", "phone", "github", "linkedin"] {
        let span = doc.create_element("span");
        doc.set_attr(span, "data-field", field);
        doc.append_child(contact, span);
    }

    let input_ids = [
        "education-degree",
        "education-college",
        "education-year",
        "career-text",
        "skill-title",
        "skill-description",
        "project-name",
        "project-description",
        "project-tech",
        "project-status",
        "project-extra",
        "contact-email",
        "contact-phone",
        "contact-github",
        "contact-linkedin",
        "resume-upload",
    ];
    for input_id in input_ids {
        let input = doc.create_element("input");
        doc.set_attr(input, "id", input_id);
        doc.set_attr(input, "value", "");
        doc.append_child(doc.root(), input);
    }

    let resume_link = doc.create_element("a");
    doc.set_attr(resume_link, "data-resume", "");
    doc.append_child(doc.root(), resume_link);
    let resume_meta = doc.create_element("p");
    doc.set_attr(resume_meta, "data-resume-meta", "");
    doc.append_child(doc.root(), resume_meta);

    let fragment = doc.create_element("p");
    doc.set_attr(fragment, "data-key", "hero-intro");
    doc.set_text(fragment, "Welcome");
    doc.append_child(doc.root(), fragment);

    doc
}

/// Prompt double that records every interaction and answers confirms
/// with a scripted response.
#[derive(Debug)]
pub struct RecordingPrompt {
    pub confirm_response: bool,
    pub confirms: Vec<String>,
    pub alerts: Vec<String>,
}

impl RecordingPrompt {
    pub fn confirming() -> Self {
        Self {
            confirm_response: true,
            confirms: Vec::new(),
            alerts: Vec::new(),
        }
    }

    pub fn declining() -> Self {
        Self {
            confirm_response: false,
            confirms: Vec::new(),
            alerts: Vec::new(),
        }
    }
}

impl HostPrompt for RecordingPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        self.confirms.push(message.to_string());
        self.confirm_response
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

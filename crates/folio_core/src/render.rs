//! DOM projection of the site model.
//!
//! # Responsibility
//! - Rebuild each section's subtree from the model on every render.
//! - Apply role-specific affordances: edit/delete controls and editable
//!   markers for the admin page, none for the public page.
//! - Keep the editable CSS class in sync with derived edit state.
//!
//! # Invariants
//! - List containers are cleared and re-emitted in model order; no
//!   incremental patching. Any card edit state carried by the old subtree
//!   is discarded with it.
//! - Every displayed card field carries a stable `data-field` tag so the
//!   edit session can extract its text later.
//! - `sync_editable_class` runs after every render and after every
//!   edit-mode toggle: `admin-editable` is present exactly on elements
//!   where `data-editable="true"` and `contenteditable="true"`.

use crate::dom::{Document, NodeId};
use crate::model::site::{ListName, SiteData};

/// Static page role, decided once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRole {
    Admin,
    Public,
}

impl PageRole {
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Pure (model, role) -> DOM projection.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    role: PageRole,
}

impl Renderer {
    pub fn new(role: PageRole) -> Self {
        Self { role }
    }

    pub fn role(&self) -> PageRole {
        self.role
    }

    /// Re-projects every section and re-derives the editable class state.
    pub fn render_all(&self, doc: &mut Document, data: &SiteData) {
        self.render_about(doc, data);
        self.render_list(doc, data, ListName::Education);
        self.render_list(doc, data, ListName::Career);
        self.render_list(doc, data, ListName::Skills);
        self.render_list(doc, data, ListName::Projects);
        self.render_contact(doc, data);
        self.sync_editable_class(doc);
    }

    pub fn render_about(&self, doc: &mut Document, data: &SiteData) {
        if let Some(node) = about_node(doc) {
            doc.set_text(node, data.about.clone());
        }
    }

    /// Clears the list container and emits one card per entry.
    pub fn render_list(&self, doc: &mut Document, data: &SiteData, list: ListName) {
        let Some(container) = doc.find_by_attr("data-list", list.as_str()) else {
            return;
        };
        doc.clear_children(container);

        match list {
            ListName::Education => {
                for entry in &data.education {
                    let card = self.open_card(doc, "div", "list-card", &entry.id);
                    let header = self.card_header(doc, card, "list-card-header");
                    let title = self.field_el(doc, "h3", "degree", &entry.degree);
                    doc.append_child(header, title);
                    self.attach_actions(doc, header);

                    let college = self.field_el(doc, "p", "college", &entry.college);
                    let year = self.field_el(doc, "p", "year", &entry.year);
                    doc.append_child(card, college);
                    doc.append_child(card, year);
                    doc.append_child(container, card);
                }
            }
            ListName::Career => {
                for entry in &data.career {
                    let card = self.open_card(doc, "div", "list-card", &entry.id);
                    let header = self.card_header(doc, card, "list-card-header");
                    let text = self.field_el(doc, "p", "text", &entry.text);
                    doc.append_child(header, text);
                    self.attach_actions(doc, header);
                    doc.append_child(container, card);
                }
            }
            ListName::Skills => {
                for entry in &data.skills {
                    let card = self.open_card(doc, "div", "skill-card", &entry.id);
                    let header = self.card_header(doc, card, "list-card-header");
                    let title = self.field_el(doc, "h3", "title", &entry.title);
                    doc.append_child(header, title);
                    self.attach_actions(doc, header);

                    let description =
                        self.field_el(doc, "p", "description", &entry.description);
                    doc.append_child(card, description);
                    doc.append_child(container, card);
                }
            }
            ListName::Projects => {
                for entry in &data.projects {
                    let card = self.open_card(doc, "article", "project-card", &entry.id);
                    let header = self.card_header(doc, card, "project-card-header");
                    let title = self.field_el(doc, "h3", "name", &entry.name);
                    doc.add_class(title, "project-title");
                    doc.append_child(header, title);
                    self.attach_actions(doc, header);

                    let description =
                        self.field_el(doc, "p", "description", &entry.description);
                    doc.add_class(description, "project-description");
                    doc.append_child(card, description);

                    self.labeled_row(
                        doc,
                        card,
                        "project-tech",
                        "Technologies: ",
                        "technologies",
                        &entry.technologies,
                    );
                    self.labeled_row(
                        doc,
                        card,
                        "project-status",
                        "Status: ",
                        "status",
                        &entry.status,
                    );
                    // Public pages hide an empty Extra row; admins always
                    // see it so the field stays editable.
                    if self.role.is_admin() || !entry.extra.is_empty() {
                        self.labeled_row(
                            doc,
                            card,
                            "project-extra",
                            "Extra: ",
                            "extra",
                            &entry.extra,
                        );
                    }
                    doc.append_child(container, card);
                }
            }
        }
    }

    /// Writes contact values into the section and, on admin pages,
    /// pre-fills the contact form inputs.
    pub fn render_contact(&self, doc: &mut Document, data: &SiteData) {
        if let Some(section) = doc.find_by_attr("data-section", "contact") {
            for field in doc.find_all_with_attr_in(section, "data-field") {
                let value = match doc.attr(field, "data-field") {
                    Some("email") => Some(data.contact.email.clone()),
                    Some("phone") => Some(data.contact.phone.clone()),
                    Some("github") => Some(data.contact.github.clone()),
                    Some("linkedin") => Some(data.contact.linkedin.clone()),
                    _ => None,
                };
                if let Some(value) = value {
                    doc.set_text(field, value);
                }
            }
        }

        if self.role.is_admin() {
            set_input_value(doc, "contact-email", &data.contact.email);
            set_input_value(doc, "contact-phone", &data.contact.phone);
            set_input_value(doc, "contact-github", &data.contact.github);
            set_input_value(doc, "contact-linkedin", &data.contact.linkedin);
        }
    }

    /// Marks a card's tagged fields editable (or not) and refreshes the
    /// derived class state.
    pub fn set_card_editable(&self, doc: &mut Document, card: NodeId, editable: bool) {
        doc.set_attr(card, "data-editing", if editable { "true" } else { "false" });
        doc.set_class_enabled(card, "is-editing", editable);

        for field in doc.find_all_with_attr_in(card, "data-field") {
            if editable {
                doc.set_attr(field, "contenteditable", "true");
            } else {
                doc.remove_attr(field, "contenteditable");
            }
        }

        self.sync_editable_class(doc);
    }

    /// Derived-state pass: `admin-editable` tracks the conjunction of the
    /// editable marker and an active edit mode. Admin pages only.
    pub fn sync_editable_class(&self, doc: &mut Document) {
        if !self.role.is_admin() {
            return;
        }
        for node in doc.find_all_by_attr("data-editable", "true") {
            let active = doc.attr(node, "contenteditable") == Some("true");
            doc.set_class_enabled(node, "admin-editable", active);
        }
    }

    /// Removes editable markers left in the static markup. Public startup
    /// only; rendered subtrees never get markers on public pages.
    pub fn strip_editable_markers(&self, doc: &mut Document) {
        for node in doc.find_all_with_attr("contenteditable") {
            doc.remove_attr(node, "contenteditable");
        }
        for node in doc.find_all_with_attr("data-editable") {
            doc.remove_attr(node, "data-editable");
        }
    }

    fn open_card(&self, doc: &mut Document, tag: &str, class: &str, id: &str) -> NodeId {
        let card = doc.create_element(tag);
        doc.add_class(card, class);
        doc.set_attr(card, "data-id", id);
        card
    }

    fn card_header(&self, doc: &mut Document, card: NodeId, class: &str) -> NodeId {
        let header = doc.create_element("div");
        doc.add_class(header, class);
        doc.append_child(card, header);
        header
    }

    fn field_el(&self, doc: &mut Document, tag: &str, field: &str, value: &str) -> NodeId {
        let node = doc.create_element(tag);
        doc.set_text(node, value);
        doc.set_attr(node, "data-field", field);
        if self.role.is_admin() {
            doc.set_attr(node, "data-editable", "true");
        }
        node
    }

    fn labeled_row(
        &self,
        doc: &mut Document,
        card: NodeId,
        row_class: &str,
        label: &str,
        field: &str,
        value: &str,
    ) {
        let row = doc.create_element("p");
        doc.add_class(row, row_class);

        let label_el = doc.create_element("span");
        doc.add_class(label_el, "project-label");
        doc.set_text(label_el, label);
        doc.append_child(row, label_el);

        let value_el = self.field_el(doc, "span", field, value);
        doc.add_class(value_el, "project-value");
        doc.append_child(row, value_el);

        doc.append_child(card, row);
    }

    /// Emits Edit/Delete controls into the card header. Admin only.
    fn attach_actions(&self, doc: &mut Document, header: NodeId) {
        if !self.role.is_admin() {
            return;
        }
        let actions = doc.create_element("div");
        doc.add_class(actions, "item-actions");

        let edit = doc.create_element("button");
        doc.set_text(edit, "Edit");
        doc.set_attr(edit, "data-action", "edit");
        doc.append_child(actions, edit);

        let delete = doc.create_element("button");
        doc.set_text(delete, "Delete");
        doc.add_class(delete, "danger");
        doc.set_attr(delete, "data-action", "delete");
        doc.append_child(actions, delete);

        doc.append_child(header, actions);
    }
}

/// The about section's tagged text element.
pub(crate) fn about_node(doc: &Document) -> Option<NodeId> {
    doc.find_all_by_attr("data-section", "about")
        .into_iter()
        .find(|node| doc.attr(*node, "data-field") == Some("text"))
}

pub(crate) fn set_input_value(doc: &mut Document, input_id: &str, value: &str) {
    if let Some(input) = doc.find_by_attr("id", input_id) {
        doc.set_attr(input, "value", value);
    }
}

pub(crate) fn input_value(doc: &Document, input_id: &str) -> String {
    doc.find_by_attr("id", input_id)
        .and_then(|input| doc.attr(input, "value"))
        .unwrap_or("")
        .trim()
        .to_string()
}

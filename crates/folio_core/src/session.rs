//! Edit-session controller.
//!
//! # Responsibility
//! - Own the in-memory model and route every mutation through one
//!   "mutate, persist, re-render" path.
//! - Drive the per-card Viewing/Editing toggle, creation forms, delete
//!   confirmation, atomic contact replace and debounced autosaves.
//!
//! # Invariants
//! - Card edit state lives in the rendered subtree (`data-editing`), so
//!   any full re-render resets every card to Viewing. A card mid-edit is
//!   reset when an unrelated action re-renders; this matches the page's
//!   historical behavior and stays as-is.
//! - Creation forms with a blank required field are ignored silently: no
//!   persist, no warning.
//! - Quota-rejected persists keep the in-memory mutation but surface a
//!   warning; the write is not considered durable.

use crate::debounce::Debouncer;
use crate::dom::Document;
use crate::freeform;
use crate::loader::save_site_data;
use crate::model::site::{
    CareerEntry, ContactInfo, EducationEntry, ListName, ProjectEntry, SiteData, SkillEntry,
};
use crate::prompt::HostPrompt;
use crate::render::{about_node, input_value, set_input_value, PageRole, Renderer};
use crate::resume::{self, ResumeUpload};
use crate::store::{KvStore, StoreError};
use log::{debug, info, warn};

const ABOUT_DEBOUNCE_MS: u64 = 300;
const FREEFORM_DEBOUNCE_MS: u64 = 400;

const DELETE_CONFIRM_MESSAGE: &str = "Delete this item?";
const STORAGE_FULL_MESSAGE: &str = "Changes could not be saved: storage is full.";
const SAVE_FAILED_MESSAGE: &str = "Changes could not be saved.";

/// Controller owning the model, the store and the prompts.
pub struct EditSession<S: KvStore, P: HostPrompt> {
    data: SiteData,
    store: S,
    prompt: P,
    renderer: Renderer,
    about_save: Debouncer,
    freeform_save: Debouncer,
}

impl<S: KvStore, P: HostPrompt> EditSession<S, P> {
    pub fn new(data: SiteData, store: S, prompt: P, role: PageRole) -> Self {
        Self {
            data,
            store,
            prompt,
            renderer: Renderer::new(role),
            about_save: Debouncer::new(ABOUT_DEBOUNCE_MS),
            freeform_save: Debouncer::new(FREEFORM_DEBOUNCE_MS),
        }
    }

    pub fn data(&self) -> &SiteData {
        &self.data
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn role(&self) -> PageRole {
        self.renderer.role()
    }

    /// Full projection of the current model.
    pub fn render_all(&mut self, doc: &mut Document) {
        self.renderer.render_all(doc, &self.data);
    }

    /// Edit/Save toggle for one card.
    ///
    /// Viewing -> Editing: fields become contenteditable, the control
    /// relabels to "Save". Editing -> Viewing: tagged field text is
    /// extracted and trimmed, blank fields fall back to the list default,
    /// the entry updates, and a full re-render resets all cards.
    pub fn toggle_card(&mut self, doc: &mut Document, list: ListName, id: &str) {
        let Some(container) = doc.find_by_attr("data-list", list.as_str()) else {
            return;
        };
        let Some(card) = doc.find_in(container, "data-id", id) else {
            return;
        };

        if doc.attr(card, "data-editing") != Some("true") {
            self.renderer.set_card_editable(doc, card, true);
            if let Some(button) = doc.find_in(card, "data-action", "edit") {
                doc.set_text(button, "Save");
            }
            return;
        }

        let mut values = Vec::with_capacity(list.fields().len());
        for field in list.fields() {
            let text = doc
                .find_in(card, "data-field", field)
                .map(|node| doc.text(node).trim().to_string())
                .unwrap_or_default();
            let value = if text.is_empty() {
                list.field_fallback(field).to_string()
            } else {
                text
            };
            values.push((field.to_string(), value));
        }

        if self.data.apply_card_update(list, id, &values) {
            info!(
                "event=entry_updated module=session status=ok list={} id={id}",
                list.as_str()
            );
        }
        self.persist_site();
        self.render_all(doc);
    }

    /// Delete control: asks for confirmation, then removes by id.
    /// Deleting an id that no longer exists is a no-op on the model.
    pub fn delete_card(&mut self, doc: &mut Document, list: ListName, id: &str) {
        if !self.prompt.confirm(DELETE_CONFIRM_MESSAGE) {
            return;
        }

        if self.data.remove_entry(list, id) {
            info!(
                "event=entry_deleted module=session status=ok list={} id={id}",
                list.as_str()
            );
        }
        self.persist_site();
        self.render_all(doc);
    }

    /// Education creation form; all three fields are required.
    pub fn submit_education(&mut self, doc: &mut Document) {
        let degree = input_value(doc, "education-degree");
        let college = input_value(doc, "education-college");
        let year = input_value(doc, "education-year");
        if degree.is_empty() || college.is_empty() || year.is_empty() {
            debug!("event=form_submit module=session status=ignored form=education");
            return;
        }

        self.data
            .education
            .insert(0, EducationEntry::new(degree, college, year));
        self.persist_site();
        self.render_all(doc);
        clear_inputs(doc, &["education-degree", "education-college", "education-year"]);
    }

    /// Career creation form; the text field is required.
    pub fn submit_career(&mut self, doc: &mut Document) {
        let text = input_value(doc, "career-text");
        if text.is_empty() {
            debug!("event=form_submit module=session status=ignored form=career");
            return;
        }

        self.data.career.insert(0, CareerEntry::new(text));
        self.persist_site();
        self.render_all(doc);
        clear_inputs(doc, &["career-text"]);
    }

    /// Skill creation form; title and description are required.
    pub fn submit_skill(&mut self, doc: &mut Document) {
        let title = input_value(doc, "skill-title");
        let description = input_value(doc, "skill-description");
        if title.is_empty() || description.is_empty() {
            debug!("event=form_submit module=session status=ignored form=skill");
            return;
        }

        self.data.skills.insert(0, SkillEntry::new(title, description));
        self.persist_site();
        self.render_all(doc);
        clear_inputs(doc, &["skill-title", "skill-description"]);
    }

    /// Project creation form; name, description and technologies are
    /// required, status and extra may be blank.
    pub fn submit_project(&mut self, doc: &mut Document) {
        let name = input_value(doc, "project-name");
        let description = input_value(doc, "project-description");
        let technologies = input_value(doc, "project-tech");
        let status = input_value(doc, "project-status");
        let extra = input_value(doc, "project-extra");
        if name.is_empty() || description.is_empty() || technologies.is_empty() {
            debug!("event=form_submit module=session status=ignored form=project");
            return;
        }

        self.data.projects.insert(
            0,
            ProjectEntry::new(name, description, technologies, status, extra),
        );
        self.persist_site();
        self.render_all(doc);
        clear_inputs(
            doc,
            &[
                "project-name",
                "project-description",
                "project-tech",
                "project-status",
                "project-extra",
            ],
        );
    }

    /// Atomic contact replace from form inputs; re-renders the contact
    /// section only.
    pub fn submit_contact(&mut self, doc: &mut Document) {
        self.data.contact = ContactInfo {
            email: input_value(doc, "contact-email"),
            phone: input_value(doc, "contact-phone"),
            github: input_value(doc, "contact-github"),
            linkedin: input_value(doc, "contact-linkedin"),
        };
        self.persist_site();
        self.renderer.render_contact(doc, &self.data);
    }

    /// About text input event; schedules (or reschedules) the debounced
    /// autosave.
    pub fn about_input(&mut self, now_ms: u64) {
        self.about_save.signal(now_ms);
    }

    /// Input inside a `data-key` fragment; schedules the debounced
    /// freeform save and re-derives the editable class state.
    pub fn freeform_input(&mut self, doc: &mut Document, now_ms: u64) {
        self.freeform_save.signal(now_ms);
        self.renderer.sync_editable_class(doc);
    }

    /// Fires any autosave whose quiet period has elapsed. Call from the
    /// host event loop.
    pub fn poll(&mut self, doc: &mut Document, now_ms: u64) {
        if self.about_save.fire_due(now_ms) {
            if let Some(node) = about_node(doc) {
                self.data.about = doc.text(node).trim().to_string();
                self.persist_site();
            }
        }
        if self.freeform_save.fire_due(now_ms) {
            self.persist_freeform(doc);
        }
    }

    /// Unconditional freeform flush on page unload, so a pending
    /// debounced write is never lost.
    pub fn flush_unload(&mut self, doc: &Document) {
        self.freeform_save.cancel();
        self.persist_freeform(doc);
    }

    /// Resume file selection from the upload input.
    pub fn upload_resume(&mut self, doc: &mut Document, upload: &ResumeUpload) {
        let role = self.renderer.role();
        resume::handle_upload(doc, &mut self.store, &mut self.prompt, role, upload);
    }

    fn persist_site(&mut self) {
        match save_site_data(&mut self.store, &self.data) {
            Ok(()) => {
                debug!("event=site_data_save module=session status=ok");
            }
            Err(err @ StoreError::QuotaExceeded { .. }) => {
                warn!("event=site_data_save module=session status=error error_code=quota_exceeded error={err}");
                self.prompt.alert(STORAGE_FULL_MESSAGE);
            }
            Err(err) => {
                warn!("event=site_data_save module=session status=error error={err}");
                self.prompt.alert(SAVE_FAILED_MESSAGE);
            }
        }
    }

    fn persist_freeform(&mut self, doc: &Document) {
        match freeform::save(doc, &mut self.store) {
            Ok(()) => {
                debug!("event=freeform_save module=session status=ok");
            }
            Err(err @ StoreError::QuotaExceeded { .. }) => {
                warn!("event=freeform_save module=session status=error error_code=quota_exceeded error={err}");
                self.prompt.alert(STORAGE_FULL_MESSAGE);
            }
            Err(err) => {
                warn!("event=freeform_save module=session status=error error={err}");
                self.prompt.alert(SAVE_FAILED_MESSAGE);
            }
        }
    }
}

fn clear_inputs(doc: &mut Document, input_ids: &[&str]) {
    for input_id in input_ids {
        set_input_value(doc, input_id, "");
    }
}

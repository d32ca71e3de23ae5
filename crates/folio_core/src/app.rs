//! Page bootstrap and event wiring.
//!
//! # Responsibility
//! - Detect the page role once from the root element.
//! - Run the startup sequence: stored fragments, model load, first
//!   render, resume apply, public-page marker stripping.
//! - Route host events to the edit session; admin-only events are
//!   dropped on public pages the way unregistered handlers would be.

use crate::dom::Document;
use crate::freeform;
use crate::loader::load_site_data;
use crate::model::site::ListName;
use crate::prompt::HostPrompt;
use crate::render::{PageRole, Renderer};
use crate::resume::{self, ResumeUpload};
use crate::session::EditSession;
use crate::store::KvStore;
use log::info;

/// Reads the static role marker from the document root. Anything other
/// than `data-page="admin"` renders the public page.
pub fn detect_page_role(doc: &Document) -> PageRole {
    if doc.attr(doc.root(), "data-page") == Some("admin") {
        PageRole::Admin
    } else {
        PageRole::Public
    }
}

/// One running page: the document plus its edit session.
pub struct App<S: KvStore, P: HostPrompt> {
    doc: Document,
    session: EditSession<S, P>,
    role: PageRole,
}

impl<S: KvStore, P: HostPrompt> App<S, P> {
    /// Startup sequence, in the page's historical order: apply stored
    /// fragments, load and render the model, strip editable markers on
    /// public pages, then apply any persisted resume payload.
    pub fn bootstrap(mut doc: Document, store: S, prompt: P) -> Self {
        let role = detect_page_role(&doc);
        info!(
            "event=bootstrap module=app status=start role={}",
            if role.is_admin() { "admin" } else { "public" }
        );

        let content = freeform::load(&store);
        freeform::apply(&mut doc, &content);

        let data = load_site_data(&store);
        let mut session = EditSession::new(data, store, prompt, role);
        session.render_all(&mut doc);

        if !role.is_admin() {
            Renderer::new(role).strip_editable_markers(&mut doc);
        }

        resume::load_from_store(&mut doc, session.store(), role);

        info!("event=bootstrap module=app status=ok");
        Self { doc, session, role }
    }

    pub fn role(&self) -> PageRole {
        self.role
    }

    pub fn doc(&self) -> &Document {
        &self.doc
    }

    pub fn doc_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn session(&self) -> &EditSession<S, P> {
        &self.session
    }

    /// Edit/Save button click on a card. Admin only.
    pub fn card_edit_clicked(&mut self, list: ListName, id: &str) {
        if self.role.is_admin() {
            self.session.toggle_card(&mut self.doc, list, id);
        }
    }

    /// Delete button click on a card. Admin only.
    pub fn card_delete_clicked(&mut self, list: ListName, id: &str) {
        if self.role.is_admin() {
            self.session.delete_card(&mut self.doc, list, id);
        }
    }

    /// Creation form submission. Admin only.
    pub fn form_submitted(&mut self, list: ListName) {
        if !self.role.is_admin() {
            return;
        }
        match list {
            ListName::Education => self.session.submit_education(&mut self.doc),
            ListName::Career => self.session.submit_career(&mut self.doc),
            ListName::Skills => self.session.submit_skill(&mut self.doc),
            ListName::Projects => self.session.submit_project(&mut self.doc),
        }
    }

    /// Contact form submission. Admin only.
    pub fn contact_submitted(&mut self) {
        if self.role.is_admin() {
            self.session.submit_contact(&mut self.doc);
        }
    }

    /// Input event in the about text. Admin only.
    pub fn about_input(&mut self, now_ms: u64) {
        if self.role.is_admin() {
            self.session.about_input(now_ms);
        }
    }

    /// Input event inside a `data-key` fragment. Admin only.
    pub fn freeform_input(&mut self, now_ms: u64) {
        if self.role.is_admin() {
            self.session.freeform_input(&mut self.doc, now_ms);
        }
    }

    /// Host loop tick; fires due autosaves.
    pub fn tick(&mut self, now_ms: u64) {
        self.session.poll(&mut self.doc, now_ms);
    }

    /// Page unload; flushes the freeform map. Admin only (the public
    /// page never registers the unload hook).
    pub fn unload(&mut self) {
        if self.role.is_admin() {
            self.session.flush_unload(&self.doc);
        }
    }

    /// File chosen in the resume upload input. Admin only.
    pub fn resume_selected(&mut self, upload: &ResumeUpload) {
        if self.role.is_admin() {
            self.session.upload_resume(&mut self.doc, upload);
        }
    }
}

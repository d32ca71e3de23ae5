//! Resume attachment upload and display.
//!
//! # Responsibility
//! - Accept PDF uploads, encode them to a storable data URL and persist.
//! - Keep the download affordance and admin metadata line current.
//!
//! # Invariants
//! - Non-PDF selections are rejected with an alert and a cleared input;
//!   no state changes.
//! - A quota-rejected persist leaves the displayed attachment (and any
//!   previously stored payload) untouched.
//! - Public pages update the download link only; the metadata line is an
//!   admin affordance.

use crate::dom::Document;
use crate::loader::get_soft;
use crate::model::resume::ResumeAttachment;
use crate::prompt::HostPrompt;
use crate::render::{set_input_value, PageRole};
use crate::store::{KvStore, StoreError, RESUME_KEY};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;

static PDF_EXT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\.pdf$").expect("valid pdf regex"));

const UNSUPPORTED_FILE_MESSAGE: &str = "Please upload a PDF file only.";
const STORAGE_FULL_MESSAGE: &str =
    "Resume file is too large to store. Please use a smaller PDF.";
const SAVE_FAILED_MESSAGE: &str = "Could not save the resume file.";

/// One file selection handed over by the host page.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    /// Declared MIME type; may be empty when the host cannot tell.
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ResumeUpload {
    /// Accepted when either the declared type or the file extension says
    /// PDF.
    pub fn is_pdf(&self) -> bool {
        self.mime_type == "application/pdf" || PDF_EXT_RE.is_match(&self.file_name)
    }
}

/// Validates, encodes and persists a selected file, then updates the
/// download affordance. Admin flow.
pub fn handle_upload(
    doc: &mut Document,
    store: &mut dyn KvStore,
    prompt: &mut dyn HostPrompt,
    role: PageRole,
    upload: &ResumeUpload,
) {
    if !upload.is_pdf() {
        warn!(
            "event=resume_upload module=resume status=rejected error_code=unsupported_file_type file={}",
            upload.file_name
        );
        prompt.alert(UNSUPPORTED_FILE_MESSAGE);
        set_input_value(doc, "resume-upload", "");
        return;
    }

    let payload = ResumeAttachment {
        data_url: encode_data_url(upload),
        file_name: upload.file_name.clone(),
        updated_at: human_timestamp(),
    };

    let raw = match serde_json::to_string(&payload) {
        Ok(raw) => raw,
        Err(err) => {
            warn!("event=resume_upload module=resume status=error error={err}");
            prompt.alert(SAVE_FAILED_MESSAGE);
            return;
        }
    };

    match store.set(RESUME_KEY, &raw) {
        Ok(()) => {
            info!(
                "event=resume_upload module=resume status=ok file={} size_bytes={}",
                payload.file_name,
                upload.bytes.len()
            );
            apply_payload(doc, &payload, true, role.is_admin());
        }
        Err(err @ StoreError::QuotaExceeded { .. }) => {
            warn!("event=resume_upload module=resume status=error error_code=quota_exceeded error={err}");
            prompt.alert(STORAGE_FULL_MESSAGE);
        }
        Err(err) => {
            warn!("event=resume_upload module=resume status=error error={err}");
            prompt.alert(SAVE_FAILED_MESSAGE);
        }
    }
}

/// Applies a persisted payload on page load, if one exists.
pub fn load_from_store(doc: &mut Document, store: &dyn KvStore, role: PageRole) {
    let Some(raw) = get_soft(store, RESUME_KEY) else {
        return;
    };
    let payload: ResumeAttachment = match serde_json::from_str(&raw) {
        Ok(payload) => payload,
        Err(err) => {
            warn!(
                "event=resume_load module=resume status=error error_code=malformed_json error={err}"
            );
            return;
        }
    };
    apply_payload(doc, &payload, true, role.is_admin());
}

/// Points the `data-resume` link at the payload and, when `show_meta`,
/// fills the `data-resume-meta` line.
pub fn apply_payload(
    doc: &mut Document,
    payload: &ResumeAttachment,
    update_link: bool,
    show_meta: bool,
) {
    if update_link && !payload.data_url.is_empty() {
        if let Some(link) = doc.find_all_with_attr("data-resume").into_iter().next() {
            doc.set_attr(link, "href", payload.data_url.clone());
            let download_name = if payload.file_name.is_empty() {
                "resume.pdf"
            } else {
                payload.file_name.as_str()
            };
            doc.set_attr(link, "download", download_name);
        }
    }

    if let Some(meta) = doc.find_all_with_attr("data-resume-meta").into_iter().next() {
        if show_meta && !payload.file_name.is_empty() && !payload.updated_at.is_empty() {
            doc.set_text(
                meta,
                format!(
                    "Last updated: {} • File: {}",
                    payload.updated_at, payload.file_name
                ),
            );
        } else {
            doc.set_text(meta, "");
        }
    }
}

fn encode_data_url(upload: &ResumeUpload) -> String {
    let mime = if upload.mime_type.is_empty() {
        "application/pdf"
    } else {
        upload.mime_type.as_str()
    };
    format!("data:{};base64,{}", mime, BASE64.encode(&upload.bytes))
}

fn human_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M").to_string()
}

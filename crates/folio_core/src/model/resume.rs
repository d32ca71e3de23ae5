//! Resume attachment payload.
//!
//! # Responsibility
//! - Define the persisted shape of the uploaded resume file.
//!
//! # Invariants
//! - Field names serialize in the store's historical camelCase form, so
//!   blobs written by earlier versions of the page keep loading.

use serde::{Deserialize, Serialize};

/// Persisted resume file: base64 data URL plus display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeAttachment {
    /// `data:<mime>;base64,<payload>` URL usable as a download target.
    #[serde(rename = "dataUrl")]
    pub data_url: String,
    /// Original file name, reused as the suggested download name.
    #[serde(rename = "fileName")]
    pub file_name: String,
    /// Human-readable local timestamp of the last upload.
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::ResumeAttachment;

    #[test]
    fn serializes_with_camel_case_store_keys() {
        let payload = ResumeAttachment {
            data_url: "data:application/pdf;base64,JVBERg==".to_string(),
            file_name: "resume.pdf".to_string(),
            updated_at: "2026-08-25 10:00".to_string(),
        };
        let raw = serde_json::to_string(&payload).unwrap();
        assert!(raw.contains("\"dataUrl\""));
        assert!(raw.contains("\"fileName\""));
        assert!(raw.contains("\"updatedAt\""));

        let back: ResumeAttachment = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, payload);
    }
}

//! Freeform content map: `data-key` marker -> HTML fragment.
//!
//! # Responsibility
//! - Collect fragments from marked elements and persist them as one blob.
//! - Apply a stored map back onto the page at startup.
//!
//! # Invariants
//! - Keys correspond to `data-key` markers in the static markup; stored
//!   keys without a matching marker are silently ignored on apply.
//! - The map is independent of the structured site data and lives under
//!   its own store key.

use crate::dom::Document;
use crate::loader::get_soft;
use crate::store::{KvStore, StoreError, StoreResult, CONTENT_KEY};
use log::warn;
use std::collections::BTreeMap;

/// Opaque marker key -> fragment text.
pub type FreeformContent = BTreeMap<String, String>;

/// Gathers the current fragment of every `data-key` element.
pub fn collect(doc: &Document) -> FreeformContent {
    let mut content = FreeformContent::new();
    for node in doc.find_all_with_attr("data-key") {
        if let Some(key) = doc.attr(node, "data-key") {
            content.insert(key.to_string(), doc.text(node).to_string());
        }
    }
    content
}

/// Writes stored fragments into their marked elements.
///
/// Unknown keys are skipped without logging noise; markup evolves
/// independently of old blobs.
pub fn apply(doc: &mut Document, content: &FreeformContent) {
    for (key, fragment) in content {
        if let Some(node) = doc.find_by_attr("data-key", key) {
            doc.set_text(node, fragment.clone());
        }
    }
}

/// Loads the stored map; absent or malformed blobs yield an empty map.
pub fn load(store: &dyn KvStore) -> FreeformContent {
    let Some(raw) = get_soft(store, CONTENT_KEY) else {
        return FreeformContent::new();
    };
    match serde_json::from_str(&raw) {
        Ok(content) => content,
        Err(err) => {
            warn!(
                "event=freeform_load module=freeform status=error error_code=malformed_json error={err}"
            );
            FreeformContent::new()
        }
    }
}

/// Collects the current page fragments and persists them.
pub fn save(doc: &Document, store: &mut dyn KvStore) -> StoreResult<()> {
    let content = collect(doc);
    let raw =
        serde_json::to_string(&content).map_err(|err| StoreError::Backend(err.to_string()))?;
    store.set(CONTENT_KEY, &raw)
}

#[cfg(test)]
mod tests {
    use super::{apply, collect, load, save, FreeformContent};
    use crate::dom::Document;
    use crate::store::{KvStore, MemoryKvStore, CONTENT_KEY};

    fn doc_with_key(key: &str, text: &str) -> Document {
        let mut doc = Document::new("body");
        let node = doc.create_element("p");
        doc.set_attr(node, "data-key", key);
        doc.set_text(node, text);
        doc.append_child(doc.root(), node);
        doc
    }

    #[test]
    fn collect_save_load_apply_roundtrip() {
        let doc = doc_with_key("hero-intro", "Hello there");
        let mut store = MemoryKvStore::new();
        save(&doc, &mut store).unwrap();

        let mut fresh = doc_with_key("hero-intro", "placeholder");
        let loaded = load(&store);
        apply(&mut fresh, &loaded);

        let node = fresh.find_by_attr("data-key", "hero-intro").unwrap();
        assert_eq!(fresh.text(node), "Hello there");
    }

    #[test]
    fn unknown_stored_keys_are_ignored_on_apply() {
        let mut doc = doc_with_key("present", "kept");
        let mut content = FreeformContent::new();
        content.insert("missing-marker".to_string(), "dropped".to_string());
        apply(&mut doc, &content);

        assert_eq!(collect(&doc).len(), 1);
        assert_eq!(collect(&doc).get("present").map(String::as_str), Some("kept"));
    }

    #[test]
    fn malformed_blob_loads_as_empty_map() {
        let mut store = MemoryKvStore::new();
        store.set(CONTENT_KEY, "[[[").unwrap();
        assert!(load(&store).is_empty());
    }
}

//! Site data load, repair and persist.
//!
//! # Responsibility
//! - Rebuild a usable [`SiteData`] from whatever the store holds.
//! - Serialize the model back into its store blob.
//!
//! # Invariants
//! - Loading never fails: absent or malformed blobs fall back to the
//!   built-in defaults without surfacing an error.
//! - Repair is asymmetric, matching the historical page behavior
//!   exactly: list sections are replaced wholesale when their
//!   stored value is not a sequence of entry-shaped objects, while
//!   `contact` is repaired field by field over the defaults. Do not
//!   unify the two policies.

use crate::model::site::{ContactInfo, SiteData};
use crate::store::{KvStore, StoreResult, SITE_DATA_KEY};
use log::warn;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Reads a key, treating backend read failures like an absent value.
pub(crate) fn get_soft(store: &dyn KvStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(err) => {
            warn!("event=store_get module=loader status=error key={key} error={err}");
            None
        }
    }
}

/// Loads site data from the store, repairing missing or malformed parts.
///
/// Steps, in order:
/// 1. absent blob -> defaults clone
/// 2. non-object JSON -> defaults clone
/// 3. shallow merge of present top-level fields over the defaults
/// 4. list fields: wholesale replace with defaults unless a valid sequence
/// 5. contact: field-level merge over default contact values
pub fn load_site_data(store: &dyn KvStore) -> SiteData {
    let mut data = SiteData::default();
    let Some(raw) = get_soft(store, SITE_DATA_KEY) else {
        return data;
    };

    let parsed: Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn!("event=site_data_load module=loader status=error error_code=malformed_json error={err}");
            return data;
        }
    };
    let Value::Object(fields) = parsed else {
        warn!("event=site_data_load module=loader status=error error_code=not_an_object");
        return data;
    };

    if let Some(Value::String(about)) = fields.get("about") {
        data.about = about.clone();
    }

    data.education = repair_list(fields.get("education"), data.education);
    data.career = repair_list(fields.get("career"), data.career);
    data.skills = repair_list(fields.get("skills"), data.skills);
    data.projects = repair_list(fields.get("projects"), data.projects);
    data.contact = repair_contact(fields.get("contact"), data.contact);

    data
}

/// Serializes and persists the full model under `siteDataV1`.
pub fn save_site_data(store: &mut dyn KvStore, data: &SiteData) -> StoreResult<()> {
    let raw = serde_json::to_string(data)
        .map_err(|err| crate::store::StoreError::Backend(err.to_string()))?;
    store.set(SITE_DATA_KEY, &raw)
}

/// Wholesale list repair: keep the stored sequence only when every item
/// deserializes as an entry; otherwise the whole default list stands in.
/// There is no item-level repair.
fn repair_list<T: DeserializeOwned>(stored: Option<&Value>, defaults: Vec<T>) -> Vec<T> {
    match stored {
        Some(value @ Value::Array(_)) => {
            serde_json::from_value(value.clone()).unwrap_or(defaults)
        }
        _ => defaults,
    }
}

/// Field-level contact repair: each present string sub-field overrides
/// the default; everything else keeps its default value.
fn repair_contact(stored: Option<&Value>, defaults: ContactInfo) -> ContactInfo {
    let Some(Value::Object(fields)) = stored else {
        return defaults;
    };

    let mut contact = defaults;
    if let Some(Value::String(email)) = fields.get("email") {
        contact.email = email.clone();
    }
    if let Some(Value::String(phone)) = fields.get("phone") {
        contact.phone = phone.clone();
    }
    if let Some(Value::String(github)) = fields.get("github") {
        contact.github = github.clone();
    }
    if let Some(Value::String(linkedin)) = fields.get("linkedin") {
        contact.linkedin = linkedin.clone();
    }
    contact
}

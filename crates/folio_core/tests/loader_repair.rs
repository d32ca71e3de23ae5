use folio_core::{load_site_data, save_site_data, KvStore, MemoryKvStore, SiteData, SITE_DATA_KEY};
use serde_json::json;

#[test]
fn absent_blob_loads_built_in_defaults() {
    let store = MemoryKvStore::new();
    assert_eq!(load_site_data(&store), SiteData::default());
}

#[test]
fn malformed_json_loads_built_in_defaults() {
    let mut store = MemoryKvStore::new();
    store.set(SITE_DATA_KEY, "{\"about\": ").unwrap();
    assert_eq!(load_site_data(&store), SiteData::default());
}

#[test]
fn contact_merges_field_by_field_over_defaults() {
    let mut store = MemoryKvStore::new();
    store
        .set(
            SITE_DATA_KEY,
            &json!({ "contact": { "email": "a@b.com" } }).to_string(),
        )
        .unwrap();

    let data = load_site_data(&store);
    let defaults = SiteData::default();
    assert_eq!(data.contact.email, "a@b.com");
    assert_eq!(data.contact.phone, defaults.contact.phone);
    assert_eq!(data.contact.github, defaults.contact.github);
    assert_eq!(data.contact.linkedin, defaults.contact.linkedin);
}

#[test]
fn non_array_list_is_replaced_wholesale_with_defaults() {
    let mut store = MemoryKvStore::new();
    store
        .set(
            SITE_DATA_KEY,
            &json!({ "education": "corrupted", "about": "still taken" }).to_string(),
        )
        .unwrap();

    let data = load_site_data(&store);
    assert_eq!(data.education, SiteData::default().education);
    assert_eq!(data.about, "still taken");
}

#[test]
fn list_with_entry_shaped_items_survives_missing_fields() {
    let mut store = MemoryKvStore::new();
    store
        .set(
            SITE_DATA_KEY,
            &json!({ "career": [{ "id": "car-9" }] }).to_string(),
        )
        .unwrap();

    let data = load_site_data(&store);
    assert_eq!(data.career.len(), 1);
    assert_eq!(data.career[0].id, "car-9");
    assert_eq!(data.career[0].text, "");
}

#[test]
fn list_with_non_object_items_falls_back_wholesale() {
    let mut store = MemoryKvStore::new();
    store
        .set(SITE_DATA_KEY, &json!({ "skills": [1, 2, 3] }).to_string())
        .unwrap();

    let data = load_site_data(&store);
    assert_eq!(data.skills, SiteData::default().skills);
}

#[test]
fn save_then_load_yields_equal_model() {
    let mut store = MemoryKvStore::new();
    let mut data = SiteData::default();
    data.about = "Round-trip about".to_string();
    data.projects.truncate(1);
    data.contact.email = "me@example.com".to_string();

    save_site_data(&mut store, &data).unwrap();
    assert_eq!(load_site_data(&store), data);
}

#[test]
fn unknown_top_level_fields_are_dropped() {
    let mut store = MemoryKvStore::new();
    store
        .set(
            SITE_DATA_KEY,
            &json!({ "about": "kept", "legacy": { "x": 1 } }).to_string(),
        )
        .unwrap();

    let data = load_site_data(&store);
    assert_eq!(data.about, "kept");
    assert_eq!(data.education, SiteData::default().education);
}

//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `folio_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use folio_core::{
    default_log_level, init_logging, App, AutoConfirm, Document, ListName, MemoryKvStore,
};

fn main() {
    let log_dir = std::env::temp_dir().join("folio-logs");
    match log_dir.to_str() {
        Some(dir) => {
            if let Err(err) = init_logging(default_log_level(), dir) {
                eprintln!("logging init failed: {err}");
            }
        }
        None => eprintln!("logging disabled: log directory path is not valid UTF-8"),
    }

    // A bare public page with just the section containers; enough to
    // exercise bootstrap, defaulting and the renderer end to end.
    let mut doc = Document::new("body");
    let about = doc.create_element("p");
    doc.set_attr(about, "data-section", "about");
    doc.set_attr(about, "data-field", "text");
    doc.append_child(doc.root(), about);
    for list in ListName::ALL {
        let container = doc.create_element("div");
        doc.set_attr(container, "data-list", list.as_str());
        doc.append_child(doc.root(), container);
    }

    let app = App::bootstrap(doc, MemoryKvStore::new(), AutoConfirm);

    println!("folio_core version={}", folio_core::core_version());
    let data = app.session().data();
    println!(
        "sections education={} career={} skills={} projects={}",
        data.education.len(),
        data.career.len(),
        data.skills.len(),
        data.projects.len()
    );
}

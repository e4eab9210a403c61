//! Loading and saving page content files.

use bodsphere_core::{SiteContent, SiteError};
use tempfile::TempDir;

#[test]
fn save_then_load_preserves_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("content.json");

    let mut content = SiteContent::default();
    content.brand = "Bodsphere Studio".to_string();
    content.stats[1].target = 200;
    content.save(&path).unwrap();

    let loaded = SiteContent::load(&path).unwrap();
    assert_eq!(loaded, content);
}

#[test]
fn missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = SiteContent::load(temp.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, SiteError::Io(_)));
}

#[test]
fn malformed_json_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("content.json");
    std::fs::write(&path, "{ \"brand\": ").unwrap();

    let err = SiteContent::load(&path).unwrap_err();
    assert!(matches!(err, SiteError::ContentParse(_)));
}

#[test]
fn invalid_content_is_rejected_on_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("content.json");

    let mut content = SiteContent::default();
    for plan in &mut content.plans {
        plan.popular = true;
    }
    content.save(&path).unwrap();

    let err = SiteContent::load(&path).unwrap_err();
    assert!(matches!(err, SiteError::InvalidContent(_)));
}

#[test]
fn hand_written_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("content.json");

    // Start from the built-in content and strip optional fields.
    let mut json = serde_json::to_value(SiteContent::default()).unwrap();
    for stat in json["stats"].as_array_mut().unwrap() {
        stat.as_object_mut().unwrap().remove("suffix");
    }
    for testimonial in json["testimonials"].as_array_mut().unwrap() {
        testimonial.as_object_mut().unwrap().remove("rating");
    }
    std::fs::write(&path, serde_json::to_string(&json).unwrap()).unwrap();

    let loaded = SiteContent::load(&path).unwrap();
    assert!(loaded.stats.iter().all(|s| s.suffix.is_empty()));
    assert!(loaded.testimonials.iter().all(|t| t.rating == 5));
}

//! Tests for directory construction, validation, and loading.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use rstest::{fixture, rstest};

use super::*;

#[fixture]
fn professionals() -> Vec<Professional> {
    builtin_professionals()
}

fn write_directory_file(contents: &str) -> (tempfile::TempDir, Utf8PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("directory.json"))
        .expect("temp path should be UTF-8");
    let mut file = std::fs::File::create(&path).expect("file should be created");
    file.write_all(contents.as_bytes())
        .expect("file should be written");
    (dir, path)
}

#[rstest]
fn builtin_directory_lists_three_professionals_in_order() {
    let directory = Directory::builtin();

    let names: Vec<&str> = directory
        .professionals()
        .iter()
        .map(|professional| professional.name.as_str())
        .collect();

    assert_eq!(
        names,
        vec!["Dr. Emily Johnson", "Dr. Michael Lee", "Dr. Sarah Thompson"]
    );
}

#[rstest]
fn builtin_directory_keeps_source_attributes() {
    let directory = Directory::builtin();
    let emily = directory.get(1).expect("professional 1 should exist");

    assert_eq!(emily.specialty, "Child Psychiatrist");
    assert_eq!(emily.rating_label(), "4.8");
    assert_eq!(emily.image.caption(), "/images/1.png (200x200)");
    assert_eq!(emily.location, "123 Main St, Anytown, USA");
}

#[rstest]
fn lookup_by_id_and_position_agree() {
    let directory = Directory::builtin();

    assert_eq!(directory.position(3), Some(2));
    assert_eq!(directory.at(2).map(|p| p.id), Some(3));
    assert!(directory.get(99).is_none());
    assert!(directory.position(99).is_none());
}

#[rstest]
fn empty_directory_is_rejected() {
    assert_eq!(Directory::new(Vec::new()), Err(DirectoryError::Empty));
}

#[rstest]
fn duplicate_ids_are_rejected(professionals: Vec<Professional>) {
    let mut duplicated = professionals;
    if let Some(last) = duplicated.last_mut() {
        last.id = 1;
    }

    assert_eq!(
        Directory::new(duplicated),
        Err(DirectoryError::DuplicateId { id: 1 })
    );
}

#[rstest]
#[case::above_five(5.1)]
#[case::negative(-0.5)]
#[case::not_a_number(f64::NAN)]
fn out_of_range_ratings_are_rejected(professionals: Vec<Professional>, #[case] rating: f64) {
    let mut invalid = professionals;
    if let Some(first) = invalid.first_mut() {
        first.rating = rating;
    }

    let result = Directory::new(invalid);

    assert!(
        matches!(result, Err(DirectoryError::RatingOutOfRange { id: 1, .. })),
        "expected rating error, got {result:?}"
    );
}

#[rstest]
#[case::zero(0.0)]
#[case::five(5.0)]
fn boundary_ratings_are_accepted(professionals: Vec<Professional>, #[case] rating: f64) {
    let mut valid = professionals;
    if let Some(first) = valid.first_mut() {
        first.rating = rating;
    }

    assert!(Directory::new(valid).is_ok());
}

#[rstest]
fn json_directory_defaults_image_dimensions() {
    let source = r#"[
        {
            "id": 7,
            "name": "Dr. Ada Park",
            "specialty": "Speech Therapist",
            "rating": 4.2,
            "image": { "path": "/images/7.png" },
            "location": "1 Elm St, Lakeside, USA"
        }
    ]"#;

    let directory = Directory::from_json(source, Utf8Path::new("inline.json"))
        .expect("directory should parse");
    let ada = directory.get(7).expect("professional 7 should exist");

    assert_eq!(ada.image, ImageRef::new("/images/7.png"));
}

#[rstest]
fn malformed_json_reports_parse_error() {
    let result = Directory::from_json("{ not json", Utf8Path::new("broken.json"));

    assert!(
        matches!(result, Err(DirectoryError::Parse { ref path, .. }) if path.as_str() == "broken.json"),
        "expected parse error, got {result:?}"
    );
}

#[rstest]
fn load_reads_directory_file(professionals: Vec<Professional>) {
    let json = serde_json::to_string(&professionals).expect("professionals should serialise");
    let (_dir, path) = write_directory_file(&json);

    let directory = Directory::load(&path).expect("directory should load");

    assert_eq!(directory.professionals(), professionals.as_slice());
}

#[rstest]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("missing.json"))
        .expect("temp path should be UTF-8");

    let result = Directory::load(&path);

    assert!(
        matches!(result, Err(DirectoryError::Read { .. })),
        "expected read error, got {result:?}"
    );
}

use std::{fs, path::PathBuf};

use alg::input::{Dataset, DatasetError, Pair};
use uuid::Uuid;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("uf")
        .join(name)
}

fn temp_file(extension: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("alg-input-{}.{extension}", Uuid::new_v4()));
    fs::write(&path, contents).expect("write temp dataset");
    path
}

#[test]
fn json_and_text_fixtures_describe_the_same_dataset() {
    let json = Dataset::from_path(fixture("tinyUF.json")).expect("load json");
    let text = Dataset::from_path(fixture("tinyUF.txt")).expect("load text");

    assert_eq!(json.total, 10);
    assert_eq!(json.data.len(), 11);
    assert_eq!(json.data[0], Pair::new(4, 3));
    assert_eq!(json, text);
}

#[test]
fn text_rendering_matches_the_fixture() {
    let text = Dataset::from_path(fixture("tinyUF.txt")).expect("load text");
    let raw = fs::read_to_string(fixture("tinyUF.txt")).expect("read fixture");
    assert_eq!(text.to_text(), raw);
}

#[test]
fn json_without_data_is_an_empty_dataset() {
    let dataset = Dataset::from_json_str(r#"{"total": 3}"#).unwrap();
    assert_eq!(dataset.total, 3);
    assert!(dataset.data.is_empty());
}

#[test]
fn malformed_json_is_reported() {
    assert!(matches!(
        Dataset::from_json_str(r#"{"total": 3, "data": [{"p": 1}]}"#),
        Err(DatasetError::Json(_))
    ));
}

#[test]
fn pairs_outside_the_sites_are_rejected() {
    let err = Dataset::from_json_str(r#"{"total": 3, "data": [{"p": 0, "q": 1}, {"p": 2, "q": 3}]}"#)
        .unwrap_err();
    assert_eq!(err.to_string(), "pair #2 (2 3) references a site outside 0..3");

    assert!(matches!(Dataset::new(2, [Pair::new(0, 2)]), Err(DatasetError::OutOfRange { .. })));
    assert!(matches!(Dataset::from_text("0\n"), Err(DatasetError::NoSites)));
}

#[test]
fn unknown_extensions_are_read_as_text() {
    let path = temp_file("uf", "4\n0 1\n2 3\n");
    let dataset = Dataset::from_path(&path).expect("load temp dataset");
    assert_eq!(dataset, Dataset::new(4, [(0usize, 1usize), (2, 3)]).unwrap());
    let _ = fs::remove_file(path);
}

#[test]
fn load_errors_name_the_file() {
    let path = temp_file("json", "{ not json");
    let err = Dataset::from_path(&path).unwrap_err();
    assert!(format!("{err:#}").contains(&path.display().to_string()));
    let _ = fs::remove_file(&path);

    let missing = std::env::temp_dir().join(format!("alg-missing-{}.txt", Uuid::new_v4()));
    let err = Dataset::from_path(&missing).unwrap_err();
    assert!(err.to_string().starts_with("Could not read dataset"));
}

use com::bytesconv::{bytes_to_float64, bytes_to_str, float64_to_bytes};
use com::convert::{snake_cased_name, title_cased_name};
use com::file::{copy, format_size, is_dir, is_file, remove};
use com::gh::set_output_to;
use com::random::{string_with_charset, HEX};
use com::trace::execute_time;
use std::fs;
use tempfile::tempdir;

#[test]
fn random_token_lands_in_output_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("github_output");
    fs::write(&output, "").unwrap();

    let token = string_with_charset(24, &HEX).unwrap();
    set_output_to(&output, [("token", token.as_str()), ("notes", "a\nb")]).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with(&format!("token={}\n", token)));
    assert!(content.contains("notes<<"));
    assert!(content.contains("\na\nb\n"));
}

#[test]
fn copy_then_inspect_then_remove() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("report.txt");
    let backup_dir = dir.path().join("backup");
    fs::write(&src, vec![b'x'; 2048]).unwrap();
    fs::create_dir(&backup_dir).unwrap();

    let dst = backup_dir.join("report.txt");
    execute_time("copy report", || copy(&src, &dst)).unwrap();

    assert!(is_file(&dst).unwrap());
    assert!(is_dir(&backup_dir).unwrap());
    let size = fs::metadata(&dst).unwrap().len() as i64;
    assert_eq!(format_size(size), "2.0 KB");

    remove(&backup_dir).unwrap();
    assert!(is_dir(&backup_dir).is_err());
}

#[test]
fn case_conversion_round_trip_for_simple_names() {
    for name in ["FooBar", "UserName", "Id"] {
        assert_eq!(title_cased_name(&snake_cased_name(name)), name);
    }
}

#[test]
fn float_bytes_and_text_views() {
    assert_eq!(bytes_to_float64(&float64_to_bytes(1e-300)).unwrap(), 1e-300);
    assert_eq!(bytes_to_str("世界".as_bytes()), "世界");
}

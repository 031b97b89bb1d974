use std::fs;
use std::path::Path;

use ck_domain::error::Error;
use ck_koans::{lesson_files, load_all_lessons, load_lesson, Catalog};

const BASICS: &str = r#"
title: Basics
description: The five fields
koans:
  - id: basics-1
    description: Every minute
    question: What runs every minute?
    incomplete: "__ * * * *"
    answer: "*"
    hints:
      - The wildcard matches everything
  - id: basics-2
    description: Top of the hour
    question: Which minute starts the hour?
    incomplete: "__ * * * *"
    answer: "0"
"#;

const RANGES: &str = r#"
title: Ranges
koans:
  - id: ranges-1
    description: Working hours
    question: Hours 9 through 17?
    incomplete: "0 __ * * *"
    answer: "9-17"
    explanation: Ranges are inclusive.
"#;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn exclude() -> Vec<String> {
    vec!["template.yaml".to_string()]
}

#[test]
fn loads_lessons_sorted_by_file_name() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "02-ranges.yaml", RANGES);
    write(tmp.path(), "01-basics.yaml", BASICS);
    write(tmp.path(), "template.yaml", "title: ignored");
    write(tmp.path(), "notes.txt", "not a lesson");

    let lessons = load_all_lessons(tmp.path(), &exclude()).unwrap();
    let titles: Vec<&str> = lessons.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, ["Basics", "Ranges"]);
    assert!(lessons[0].filename.ends_with("01-basics.yaml"));
    assert_eq!(lessons[0].koans[0].hints.len(), 1);
    assert_eq!(lessons[1].koans[0].explanation, "Ranges are inclusive.");
}

#[test]
fn excluded_and_foreign_files_are_not_listed() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "01-basics.yaml", BASICS);
    write(tmp.path(), "template.yaml", "title: ignored");
    write(tmp.path(), "02.yml", RANGES);

    let files = lesson_files(tmp.path(), &exclude()).unwrap();
    assert_eq!(files.len(), 1);
}

#[test]
fn empty_or_missing_dir_is_no_lessons() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_all_lessons(tmp.path(), &exclude()),
        Err(Error::NoLessons(_))
    ));
    assert!(matches!(
        load_all_lessons(&tmp.path().join("missing"), &exclude()),
        Err(Error::NoLessons(_))
    ));
}

#[test]
fn invalid_answer_rejects_the_lesson_with_its_path() {
    let tmp = tempfile::tempdir().unwrap();
    let bad = BASICS.replace("answer: \"0\"", "answer: \"61\"");
    write(tmp.path(), "01-basics.yaml", &bad);

    let err = load_lesson(&tmp.path().join("01-basics.yaml")).unwrap_err();
    match err {
        Error::InvalidLesson { path, reason } => {
            assert!(path.ends_with("01-basics.yaml"));
            assert!(reason.starts_with("koan 2: answer '61'"), "{reason}");
            assert!(reason.contains("out of bounds [0-59]"), "{reason}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn one_bad_file_aborts_the_whole_load() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "01-basics.yaml", BASICS);
    write(tmp.path(), "02-ranges.yaml", &RANGES.replace("9-17", "17-9"));

    assert!(matches!(
        load_all_lessons(tmp.path(), &exclude()),
        Err(Error::InvalidLesson { .. })
    ));
}

#[test]
fn malformed_yaml_is_a_yaml_error() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "01-broken.yaml", "title: [unclosed");
    assert!(matches!(
        load_lesson(&tmp.path().join("01-broken.yaml")),
        Err(Error::Yaml(_))
    ));
}

#[test]
fn catalog_loads_and_checks() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "01-basics.yaml", BASICS);
    write(tmp.path(), "02-ranges.yaml", RANGES);

    let catalog = Catalog::load(tmp.path(), &exclude()).unwrap();
    assert_eq!(catalog.total_koans(), 3);
    assert_eq!(catalog.dir(), tmp.path());
    assert!(catalog.check_all().iter().all(|c| c.passed()));
    assert_eq!(
        catalog.find("ranges-1").map(|k| k.complete_expression()),
        Some("0 9-17 * * *".to_string())
    );
}

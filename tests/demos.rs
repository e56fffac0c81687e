use std::{fs, path::PathBuf};

use autoclose::{
    demos::{Demo, Settings},
    error::DemoError,
    transcript::Transcript,
};
use tempfile::TempDir;

const GREETING: &str = "Hello there,\nthis greeting is read one line at a time\nand copied the same way.\nGoodbye!\n";

const NOTICES: [&str; 4] = [
    "FileReader closing ...",
    "BufferedReader closing ...",
    "FileWriter closing ...",
    "BufferedWriter closing ...",
];

fn fixture() -> (TempDir, Settings) {
    let dir = TempDir::new().unwrap();
    let greeting = dir.path().join("greeting.txt");
    fs::write(&greeting, GREETING).unwrap();

    let settings = Settings {
        greeting,
        missing: dir.path().join("does_not_exist.txt"),
        copy: dir.path().join("greeting_copy.txt"),
        width: 40,
        demos: vec![],
    };

    (dir, settings)
}

fn notices(transcript: &Transcript) -> Vec<String> {
    transcript
        .lines()
        .into_iter()
        .filter(|line| NOTICES.contains(&line.as_str()))
        .collect()
}

fn greeting_lines() -> Vec<&'static str> {
    GREETING.lines().collect()
}

/// Drops the four header lines.
fn body(transcript: &Transcript) -> Vec<String> {
    transcript.lines().into_iter().skip(4).collect()
}

#[test]
fn read_greeting_echoes_every_line_then_closes_inner_first() {
    for demo in [Demo::ReadGreeting, Demo::ReadGreetingScoped] {
        let (_dir, settings) = fixture();
        let transcript = Transcript::captured();

        demo.run(&settings, &transcript).unwrap();

        let mut expected: Vec<String> = greeting_lines().into_iter().map(String::from).collect();
        expected.push("FileReader closing ...".into());
        expected.push("BufferedReader closing ...".into());
        assert_eq!(body(&transcript), expected, "{}", demo);
    }
}

#[test]
fn header_precedes_the_output() {
    let (_dir, settings) = fixture();
    let transcript = Transcript::captured();

    Demo::ReadGreetingScoped.run(&settings, &transcript).unwrap();

    let lines = transcript.lines();
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "-".repeat(40));
    assert_eq!(lines[2].trim(), "Read Greeting (scoped close)");
    assert_eq!(lines[2].len(), 40);
    assert_eq!(lines[3], "-".repeat(40));
}

#[test]
fn copies_are_byte_for_byte_identical() {
    for demo in [
        Demo::CopyLineByLine,
        Demo::CopyLineByLineGuarded,
        Demo::CopyLineByLineScoped,
    ] {
        let (_dir, settings) = fixture();
        let transcript = Transcript::captured();

        demo.run(&settings, &transcript).unwrap();

        assert_eq!(
            fs::read(&settings.copy).unwrap(),
            fs::read(&settings.greeting).unwrap(),
            "{}",
            demo
        );
    }
}

#[test]
fn scoped_copy_closes_writer_before_reader() {
    let (_dir, settings) = fixture();
    let transcript = Transcript::captured();

    Demo::CopyLineByLineScoped.run(&settings, &transcript).unwrap();

    assert_eq!(
        notices(&transcript),
        vec![
            "FileWriter closing ...",
            "BufferedWriter closing ...",
            "FileReader closing ...",
            "BufferedReader closing ...",
        ]
    );
}

#[test]
fn unguarded_missing_greeting_is_masked_by_null_reference() {
    let (_dir, settings) = fixture();
    let transcript = Transcript::captured();

    let err = Demo::GreetingMissing.run(&settings, &transcript).unwrap_err();

    assert!(matches!(err, DemoError::NullReference));
    assert!(notices(&transcript).is_empty());
}

#[test]
fn scoped_missing_greeting_reports_not_found_without_closing() {
    let (_dir, settings) = fixture();
    let transcript = Transcript::captured();

    let err = Demo::GreetingMissingScoped.run(&settings, &transcript).unwrap_err();

    match err {
        DemoError::NotFound { path, .. } => assert_eq!(path, settings.missing),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(notices(&transcript).is_empty());
}

#[test]
fn guarded_missing_greeting_reports_not_found() {
    let (_dir, settings) = fixture();
    let transcript = Transcript::captured();

    let err = Demo::GreetingMissingGuarded.run(&settings, &transcript).unwrap_err();

    assert!(matches!(err, DemoError::NotFound { .. }));
    assert!(notices(&transcript).is_empty());
}

fn unwritable(mut settings: Settings) -> Settings {
    settings.copy = settings
        .copy
        .parent()
        .map(|dir| dir.join("missing_dir").join("greeting_copy.txt"))
        .unwrap_or_else(|| PathBuf::from("missing_dir/greeting_copy.txt"));
    settings
}

#[test]
fn scoped_copy_still_closes_reader_when_writer_fails() {
    let (_dir, settings) = fixture();
    let settings = unwritable(settings);
    let transcript = Transcript::captured();

    let err = Demo::CopyLineByLineScoped.run(&settings, &transcript).unwrap_err();

    assert!(matches!(err, DemoError::NotFound { .. }));
    assert_eq!(
        notices(&transcript),
        vec!["FileReader closing ...", "BufferedReader closing ..."]
    );
}

#[test]
fn manual_copy_with_unwritable_output() {
    let (_dir, settings) = fixture();
    let settings = unwritable(settings);

    let transcript = Transcript::captured();
    let err = Demo::CopyLineByLine.run(&settings, &transcript).unwrap_err();
    assert!(matches!(err, DemoError::NullReference));
    assert_eq!(
        notices(&transcript),
        vec!["FileReader closing ...", "BufferedReader closing ..."]
    );

    let transcript = Transcript::captured();
    let err = Demo::CopyLineByLineGuarded.run(&settings, &transcript).unwrap_err();
    match err {
        DemoError::NotFound { path, .. } => assert_eq!(path, settings.copy),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(
        notices(&transcript),
        vec!["FileReader closing ...", "BufferedReader closing ..."]
    );
}

#[test]
fn reading_twice_gives_identical_output() {
    let (_dir, settings) = fixture();

    for demo in [Demo::ReadGreeting, Demo::ReadGreetingScoped] {
        let first = Transcript::captured();
        let second = Transcript::captured();

        demo.run(&settings, &first).unwrap();
        demo.run(&settings, &second).unwrap();

        assert_eq!(first.contents(), second.contents());
        assert_eq!(fs::read_to_string(&settings.greeting).unwrap(), GREETING);
    }
}

#[cfg(target_os = "linux")]
#[test]
fn failed_final_flush_reaches_the_caller_in_every_discipline() {
    for demo in [
        Demo::CopyLineByLine,
        Demo::CopyLineByLineGuarded,
        Demo::CopyLineByLineScoped,
    ] {
        let (_dir, mut settings) = fixture();
        settings.copy = PathBuf::from("/dev/full");
        let transcript = Transcript::captured();

        let err = demo.run(&settings, &transcript).unwrap_err();

        assert!(matches!(err, DemoError::IOError(_)), "{}: {:?}", demo, err);
        assert_eq!(
            notices(&transcript),
            vec![
                "FileWriter closing ...",
                "FileReader closing ...",
                "BufferedReader closing ...",
            ],
            "{}",
            demo
        );
    }
}

#[test]
fn scoped_read_reports_success_after_closing() {
    let (_dir, settings) = fixture();
    let transcript = Transcript::captured();

    assert!(Demo::ReadGreetingScoped.run(&settings, &transcript).is_ok());
    assert_eq!(
        notices(&transcript),
        vec!["FileReader closing ...", "BufferedReader closing ..."]
    );
}

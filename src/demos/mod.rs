pub mod manual;
pub mod scoped;

use std::{
    fmt,
    io::{Read, Write},
    path::PathBuf,
    str::FromStr,
};

use crate::{
    error::DemoError,
    files::{BufferedReader, BufferedWriter, Close},
    header::DEFAULT_WIDTH,
    transcript::Transcript,
};

pub use manual::Cleanup;

/// Where the routines read from and write to, and which of them run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub greeting: PathBuf,
    pub missing: PathBuf,
    pub copy: PathBuf,
    pub width: usize,
    pub demos: Vec<Demo>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            greeting: PathBuf::from("greeting.txt"),
            missing: PathBuf::from("does_not_exist.txt"),
            copy: PathBuf::from("greeting_copy.txt"),
            width: DEFAULT_WIDTH,
            demos: vec![Demo::CopyLineByLineScoped],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    ReadGreeting,
    GreetingMissing,
    GreetingMissingGuarded,
    CopyLineByLine,
    CopyLineByLineGuarded,
    ReadGreetingScoped,
    GreetingMissingScoped,
    CopyLineByLineScoped,
}

impl Demo {
    pub const ALL: [Demo; 8] = [
        Demo::ReadGreeting,
        Demo::GreetingMissing,
        Demo::GreetingMissingGuarded,
        Demo::CopyLineByLine,
        Demo::CopyLineByLineGuarded,
        Demo::ReadGreetingScoped,
        Demo::GreetingMissingScoped,
        Demo::CopyLineByLineScoped,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Demo::ReadGreeting => "read-greeting",
            Demo::GreetingMissing => "greeting-missing",
            Demo::GreetingMissingGuarded => "greeting-missing-guarded",
            Demo::CopyLineByLine => "copy-line-by-line",
            Demo::CopyLineByLineGuarded => "copy-line-by-line-guarded",
            Demo::ReadGreetingScoped => "read-greeting-scoped",
            Demo::GreetingMissingScoped => "greeting-missing-scoped",
            Demo::CopyLineByLineScoped => "copy-line-by-line-scoped",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Demo::ReadGreeting => "Read Greeting (manual close)",
            Demo::GreetingMissing => "Greeting Missing (manual close)",
            Demo::GreetingMissingGuarded => "Greeting Missing (manual close, guarded)",
            Demo::CopyLineByLine => "Copy Line By Line (manual close)",
            Demo::CopyLineByLineGuarded => "Copy Line By Line (manual close, guarded)",
            Demo::ReadGreetingScoped => "Read Greeting (scoped close)",
            Demo::GreetingMissingScoped => "Greeting Missing (scoped close)",
            Demo::CopyLineByLineScoped => "Copy Line By Line (scoped close)",
        }
    }

    pub fn run(&self, settings: &Settings, transcript: &Transcript) -> Result<(), DemoError> {
        let width = settings.width;

        match self {
            Demo::ReadGreeting => {
                manual::read(self.title(), &settings.greeting, Cleanup::Unguarded, width, transcript)
            }
            Demo::GreetingMissing => {
                manual::read(self.title(), &settings.missing, Cleanup::Unguarded, width, transcript)
            }
            Demo::GreetingMissingGuarded => {
                manual::read(self.title(), &settings.missing, Cleanup::Guarded, width, transcript)
            }
            Demo::CopyLineByLine => manual::copy_line_by_line(
                self.title(),
                &settings.greeting,
                &settings.copy,
                Cleanup::Unguarded,
                width,
                transcript,
            ),
            Demo::CopyLineByLineGuarded => manual::copy_line_by_line(
                self.title(),
                &settings.greeting,
                &settings.copy,
                Cleanup::Guarded,
                width,
                transcript,
            ),
            Demo::ReadGreetingScoped => {
                scoped::read(self.title(), &settings.greeting, width, transcript)
            }
            Demo::GreetingMissingScoped => {
                scoped::read(self.title(), &settings.missing, width, transcript)
            }
            Demo::CopyLineByLineScoped => scoped::copy_line_by_line(
                self.title(),
                &settings.greeting,
                &settings.copy,
                width,
                transcript,
            ),
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown demo: {0}")]
pub struct UnknownDemo(String);

impl FromStr for Demo {
    type Err = UnknownDemo;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Demo::ALL
            .iter()
            .copied()
            .find(|demo| demo.name() == s)
            .ok_or_else(|| UnknownDemo(s.to_string()))
    }
}

/// Print every line until end of input.
fn echo_lines<T>(reader: &mut BufferedReader<T>, transcript: &Transcript) -> Result<(), DemoError>
where
    T: Read + Close,
{
    while let Some(line) = reader.read_line()? {
        transcript.line(strip_terminator(&line))?;
    }

    Ok(())
}

/// Print every line and write it, terminator included, to `writer`.
fn copy_lines<T, U>(
    reader: &mut BufferedReader<T>,
    writer: &mut BufferedWriter<U>,
    transcript: &Transcript,
) -> Result<(), DemoError>
where
    T: Read + Close,
    U: Write + Close,
{
    while let Some(line) = reader.read_line()? {
        transcript.line(strip_terminator(&line))?;
        writer.write(&line)?;
    }

    Ok(())
}

fn strip_terminator(line: &str) -> &str {
    line.trim_end_matches(&['\n', '\r'][..])
}

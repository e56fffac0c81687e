//! Handles closed by hand in a cleanup step that always runs.
//!
//! Each handle starts out unset and is only assigned once its open
//! succeeds. The cleanup step behaves like a `finally` block: when it fails,
//! its error is what the caller sees, whatever happened before it.

use std::path::Path;

use log::debug;

use crate::{
    error::DemoError,
    files::{BufferedReader, BufferedWriter, Close, FileReader, FileWriter},
    header::print_header,
    transcript::Transcript,
};

use super::{copy_lines, echo_lines};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cleanup {
    /// Skip handles that were never assigned.
    Guarded,
    /// Close every handle, assigned or not. An unset handle fails with
    /// `DemoError::NullReference`, hiding whatever failed first.
    Unguarded,
}

impl Cleanup {
    pub fn close<T>(self, handle: Option<T>) -> Result<(), DemoError>
    where
        T: Close,
    {
        match (self, handle) {
            (_, Some(handle)) => Ok(handle.close()?),
            (Cleanup::Guarded, None) => Ok(()),
            (Cleanup::Unguarded, None) => Err(DemoError::NullReference),
        }
    }
}

/// Result of a protected block followed by its cleanup step.
pub fn finally(outcome: Result<(), DemoError>, cleanup: Result<(), DemoError>) -> Result<(), DemoError> {
    if let (Err(original), Err(_)) = (&outcome, &cleanup) {
        debug!("Cleanup failure replaces: {}", original);
    }

    cleanup.and(outcome)
}

pub fn read(
    title: &str,
    path: &Path,
    cleanup: Cleanup,
    width: usize,
    transcript: &Transcript,
) -> Result<(), DemoError> {
    print_header(transcript, title, width)?;

    let mut reader: Option<BufferedReader<FileReader>> = None;

    let outcome = (|| -> Result<(), DemoError> {
        let reader = reader.insert(BufferedReader::new(
            FileReader::open(path, transcript)?,
            transcript,
        ));

        echo_lines(reader, transcript)
    })();

    finally(outcome, cleanup.close(reader))
}

pub fn copy_line_by_line(
    title: &str,
    input: &Path,
    output: &Path,
    cleanup: Cleanup,
    width: usize,
    transcript: &Transcript,
) -> Result<(), DemoError> {
    print_header(transcript, title, width)?;

    let mut reader: Option<BufferedReader<FileReader>> = None;

    let outcome = (|| -> Result<(), DemoError> {
        let reader = reader.insert(BufferedReader::new(
            FileReader::open(input, transcript)?,
            transcript,
        ));

        let mut writer: Option<BufferedWriter<FileWriter>> = None;

        let copied = (|| -> Result<(), DemoError> {
            let writer = writer.insert(BufferedWriter::new(
                FileWriter::create(output, transcript)?,
                transcript,
            ));

            copy_lines(reader, writer, transcript)
        })();

        finally(copied, cleanup.close(writer))
    })();

    finally(outcome, cleanup.close(reader))
}

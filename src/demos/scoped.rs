//! Handles closed automatically when the scope that opened them exits.
//!
//! On success the guards are closed explicitly, last declared first, so a
//! failing close reaches the caller. Any earlier exit leaves the closing to
//! the guards themselves and keeps the error that caused the exit.

use std::path::Path;

use crate::{
    error::DemoError,
    files::{BufferedReader, BufferedWriter, FileReader, FileWriter},
    header::print_header,
    scope::Closing,
    transcript::Transcript,
};

use super::{copy_lines, echo_lines};

pub fn read(title: &str, path: &Path, width: usize, transcript: &Transcript) -> Result<(), DemoError> {
    print_header(transcript, title, width)?;

    let mut reader = Closing::new(BufferedReader::new(
        FileReader::open(path, transcript)?,
        transcript,
    ));

    echo_lines(&mut *reader, transcript)?;

    Ok(reader.close()?)
}

pub fn copy_line_by_line(
    title: &str,
    input: &Path,
    output: &Path,
    width: usize,
    transcript: &Transcript,
) -> Result<(), DemoError> {
    print_header(transcript, title, width)?;

    let mut reader = Closing::new(BufferedReader::new(
        FileReader::open(input, transcript)?,
        transcript,
    ));
    let mut writer = Closing::new(BufferedWriter::new(
        FileWriter::create(output, transcript)?,
        transcript,
    ));

    copy_lines(&mut *reader, &mut *writer, transcript)?;

    // If the writer fails to close, the reader is still closed on drop.
    writer.close()?;
    Ok(reader.close()?)
}

use std::io::Error;

use crate::transcript::Transcript;

pub const DEFAULT_WIDTH: usize = 86;

/// Centre `title` in `width` columns. Odd padding puts the extra space on
/// the right; titles that do not fit are returned as is.
pub fn center(title: &str, width: usize) -> String {
    let len = title.chars().count();
    if len >= width {
        return title.to_string();
    }

    let left = (width - len) / 2;
    let right = width - len - left;

    format!("{}{}{}", " ".repeat(left), title, " ".repeat(right))
}

pub fn print_header(transcript: &Transcript, title: &str, width: usize) -> Result<(), Error> {
    let bar = "-".repeat(width);

    transcript.line("")?;
    transcript.line(&bar)?;
    transcript.line(center(title, width))?;
    transcript.line(&bar)
}

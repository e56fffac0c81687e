use std::{
    fs::File,
    io::{BufRead, BufReader, Error, Read},
    path::{Path, PathBuf},
};

use log::debug;

use crate::{error::DemoError, transcript::Transcript};

use super::Close;

pub struct FileReader {
    inner: File,
    path: PathBuf,
    transcript: Transcript,
}

impl FileReader {
    /// Open `path` for reading. Nothing is constructed when this fails.
    pub fn open(path: impl AsRef<Path>, transcript: &Transcript) -> Result<Self, DemoError> {
        let path = path.as_ref();

        let inner = match File::open(path) {
            Ok(f) => f,
            Err(e) => return Err(DemoError::opening(path, e)),
        };

        debug!("Opened {} for reading", path.display());

        Ok(FileReader {
            inner,
            path: path.to_path_buf(),
            transcript: transcript.clone(),
        })
    }
}

impl Close for FileReader {
    fn close(self) -> Result<(), Error> {
        drop(self.inner);
        debug!("Closed {}", self.path.display());

        self.transcript.line("FileReader closing ...")
    }
}

impl Read for FileReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

pub struct BufferedReader<T>
where
    T: Read + Close,
{
    inner: BufReader<T>,
    transcript: Transcript,
}

impl<T> BufferedReader<T>
where
    T: Read + Close,
{
    pub fn new(reader: T, transcript: &Transcript) -> Self {
        BufferedReader {
            inner: BufReader::new(reader),
            transcript: transcript.clone(),
        }
    }

    /// Next line including its terminator, or `None` at end of input.
    pub fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();

        match self.inner.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

impl<T> Close for BufferedReader<T>
where
    T: Read + Close,
{
    fn close(self) -> Result<(), Error> {
        self.inner.into_inner().close()?;

        self.transcript.line("BufferedReader closing ...")
    }
}

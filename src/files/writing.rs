use std::{
    fs::File,
    io::{BufWriter, Error, Write},
    path::{Path, PathBuf},
};

use log::debug;

use crate::{error::DemoError, transcript::Transcript};

use super::Close;

pub struct FileWriter {
    inner: File,
    path: PathBuf,
    transcript: Transcript,
}

impl FileWriter {
    /// Create (or truncate) `path` for writing.
    pub fn create(path: impl AsRef<Path>, transcript: &Transcript) -> Result<Self, DemoError> {
        let path = path.as_ref();

        let inner = match File::create(path) {
            Ok(f) => f,
            Err(e) => return Err(DemoError::opening(path, e)),
        };

        debug!("Opened {} for writing", path.display());

        Ok(FileWriter {
            inner,
            path: path.to_path_buf(),
            transcript: transcript.clone(),
        })
    }
}

impl Close for FileWriter {
    fn close(mut self) -> Result<(), Error> {
        self.inner.flush()?;
        drop(self.inner);
        debug!("Closed {}", self.path.display());

        self.transcript.line("FileWriter closing ...")
    }
}

impl Write for FileWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

pub struct BufferedWriter<T>
where
    T: Write + Close,
{
    inner: BufWriter<T>,
    transcript: Transcript,
}

impl<T> BufferedWriter<T>
where
    T: Write + Close,
{
    pub fn new(writer: T, transcript: &Transcript) -> Self {
        BufferedWriter {
            inner: BufWriter::new(writer),
            transcript: transcript.clone(),
        }
    }

    /// Write `text` exactly as given. Line terminators are the caller's.
    pub fn write(&mut self, text: &str) -> std::io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }
}

impl<T> Close for BufferedWriter<T>
where
    T: Write + Close,
{
    fn close(self) -> Result<(), Error> {
        // Flushes whatever is still buffered.
        let writer = match self.inner.into_inner() {
            Ok(w) => w,
            Err(e) => {
                let (error, buffered) = e.into_parts();
                let (writer, _unwritten) = buffered.into_parts();

                // The flush error is the one reported.
                if let Err(close_error) = writer.close() {
                    debug!("Closing after a failed flush also failed: {}", close_error);
                }

                return Err(error);
            }
        };
        writer.close()?;

        self.transcript.line("BufferedWriter closing ...")
    }
}

use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
};

enum Sink {
    Stdout,
    Captured(Vec<u8>),
}

/// Line-oriented console output shared by a routine and the handles it opens.
///
/// Clones write to the same sink, so the order in which lines appear is the
/// order in which they were produced.
#[derive(Clone)]
pub struct Transcript {
    sink: Rc<RefCell<Sink>>,
}

impl Transcript {
    pub fn stdout() -> Self {
        Transcript {
            sink: Rc::new(RefCell::new(Sink::Stdout)),
        }
    }

    /// Keep everything in memory instead of printing it.
    pub fn captured() -> Self {
        Transcript {
            sink: Rc::new(RefCell::new(Sink::Captured(Vec::new()))),
        }
    }

    pub fn line(&self, text: impl AsRef<str>) -> io::Result<()> {
        let mut sink = self.sink.borrow_mut();

        match &mut *sink {
            Sink::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{}", text.as_ref())?;
                out.flush()
            }
            Sink::Captured(buf) => writeln!(buf, "{}", text.as_ref()),
        }
    }

    /// Everything captured so far. Always empty when printing to stdout.
    pub fn contents(&self) -> String {
        match &*self.sink.borrow() {
            Sink::Stdout => String::new(),
            Sink::Captured(buf) => String::from_utf8_lossy(buf).into_owned(),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Transcript::stdout()
    }
}

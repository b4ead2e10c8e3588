//! Diagnostic stream handle.
//!
//! Usage text, flag diagnostics and action errors all go to one stream owned by
//! the [`App`](crate::App). The flag context needs to write to the same stream
//! while the action holds it, so the stream is a cheap cloneable handle.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

#[derive(Clone)]
enum Sink {
    Stderr,
    Stdout,
    Memory(Rc<RefCell<Vec<u8>>>),
    Writer(Rc<RefCell<Box<dyn Write>>>),
}

/// Cloneable handle to the stream diagnostics are written to.
#[derive(Clone)]
pub struct Output {
    sink: Sink,
}

impl Output {
    /// Standard error (the default diagnostic stream).
    pub fn stderr() -> Self {
        Self { sink: Sink::Stderr }
    }

    pub fn stdout() -> Self {
        Self { sink: Sink::Stdout }
    }

    /// In-memory buffer; read it back with [`Output::contents`].
    pub fn memory() -> Self {
        Self {
            sink: Sink::Memory(Rc::new(RefCell::new(Vec::new()))),
        }
    }

    /// Wrap any writer. Clones of the handle share the writer.
    pub fn from_writer<W: Write + 'static>(writer: W) -> Self {
        Self {
            sink: Sink::Writer(Rc::new(RefCell::new(Box::new(writer)))),
        }
    }

    /// Everything written so far, for memory outputs. `None` for other sinks.
    pub fn contents(&self) -> Option<String> {
        match &self.sink {
            Sink::Memory(buf) => Some(String::from_utf8_lossy(&buf.borrow()).into_owned()),
            _ => None,
        }
    }

    /// Discard buffered contents of a memory output.
    pub fn clear(&self) {
        if let Sink::Memory(buf) = &self.sink {
            buf.borrow_mut().clear();
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::stderr()
    }
}

impl std::fmt::Debug for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.sink {
            Sink::Stderr => "stderr",
            Sink::Stdout => "stdout",
            Sink::Memory(_) => "memory",
            Sink::Writer(_) => "writer",
        };
        f.debug_struct("Output").field("sink", &kind).finish()
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &self.sink {
            Sink::Stderr => io::stderr().write(buf),
            Sink::Stdout => io::stdout().write(buf),
            Sink::Memory(mem) => mem.borrow_mut().write(buf),
            Sink::Writer(w) => w.borrow_mut().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &self.sink {
            Sink::Stderr => io::stderr().flush(),
            Sink::Stdout => io::stdout().flush(),
            Sink::Memory(_) => Ok(()),
            Sink::Writer(w) => w.borrow_mut().flush(),
        }
    }
}

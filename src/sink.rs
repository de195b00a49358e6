use std::io;

/// Destination for the engine's text notifications.
///
/// The engine never reads a sink back. Each notification resets the sink and
/// writes the new message, so a sink only ever holds the latest one.
pub trait OutputSink {
    fn reset(&mut self);

    fn write(&mut self, bytes: &[u8]) -> io::Result<()>;
}

/// An in-memory sink keeping the most recent message
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    buffer: Vec<u8>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// The latest message, invalid UTF-8 is replaced
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer).into_owned()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }
}

impl OutputSink for MemorySink {
    fn reset(&mut self) {
        self.buffer.clear();
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        OutputSink::write(&mut self.buffer, bytes)
    }
}

impl OutputSink for Vec<u8> {
    fn reset(&mut self) {
        self.clear();
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Default)]
struct Captured {
    bytes: Vec<u8>,
    writes: usize,
}

/// In-memory sink whose clones share one buffer, for inspecting console output.
#[derive(Clone, Default)]
pub struct CaptureWriter {
    inner: Arc<Mutex<Captured>>,
}

impl CaptureWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        let guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&guard.bytes).into_owned()
    }

    /// Written lines without their trailing newline.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Number of `write` calls received.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .writes
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        guard.bytes.extend_from_slice(buf);
        guard.writes += 1;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

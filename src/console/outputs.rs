use crate::console::level::Target;
use crate::errors::ConsoleError;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

type Sink = Box<dyn Write + Send>;

#[derive(Default)]
struct SinkPair {
    std: Option<Sink>,
    err: Option<Sink>,
}

impl SinkPair {
    // Unset sinks fall back to the inherited streams on first use.
    fn sink_for(&mut self, target: Target) -> &mut Sink {
        match target {
            Target::Std => self.std.get_or_insert_with(|| Box::new(io::stdout()) as Sink),
            Target::Err => self.err.get_or_insert_with(|| Box::new(io::stderr()) as Sink),
        }
    }
}

/// The standard and error sinks a console writes into.
///
/// Both sinks are guarded by one lock, so a redirect never lands between
/// two halves of a line and concurrent writers never interleave mid-line.
pub struct Outputs {
    sinks: Mutex<SinkPair>,
}

impl Outputs {
    /// Sinks that default to stdout and stderr on first write.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sinks: Mutex::new(SinkPair {
                std: None,
                err: None,
            }),
        }
    }

    /// Sinks that write into the given destinations from the start.
    pub fn with_sinks<S, E>(std_sink: S, err_sink: E) -> Self
    where
        S: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        let outputs = Self::new();
        outputs.redirect(std_sink, err_sink);
        outputs
    }

    fn lock(&self) -> MutexGuard<'_, SinkPair> {
        self.sinks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace both sinks. Lines already written are unaffected.
    pub fn redirect<S, E>(&self, std_sink: S, err_sink: E)
    where
        S: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        let mut guard = self.lock();
        guard.std = Some(Box::new(std_sink));
        guard.err = Some(Box::new(err_sink));
    }

    /// Drop both redirects; the next writes go to stdout and stderr again.
    pub fn reset(&self) {
        *self.lock() = SinkPair::default();
    }

    /// Drop the redirect of one sink only; the other keeps its destination.
    pub fn reset_target(&self, target: Target) {
        let mut guard = self.lock();
        match target {
            Target::Std => guard.std = None,
            Target::Err => guard.err = None,
        }
    }

    /// Write `line` plus a newline to the target sink as a single write, then flush.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink rejects the write or the flush.
    pub fn write_line(&self, target: Target, line: &str) -> Result<(), ConsoleError> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        let mut guard = self.lock();
        let sink = guard.sink_for(target);
        sink.write_all(buf.as_bytes())?;
        sink.flush()?;
        Ok(())
    }
}

impl Default for Outputs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CaptureWriter;

    #[test]
    fn lines_go_only_to_their_target() {
        let out = CaptureWriter::new();
        let err = CaptureWriter::new();
        let outputs = Outputs::with_sinks(out.clone(), err.clone());

        outputs.write_line(Target::Std, "to std").unwrap();
        outputs.write_line(Target::Err, "to err").unwrap();

        assert_eq!(out.contents(), "to std\n");
        assert_eq!(err.contents(), "to err\n");
    }

    #[test]
    fn redirect_only_affects_later_writes() {
        let first = CaptureWriter::new();
        let second = CaptureWriter::new();
        let outputs = Outputs::with_sinks(first.clone(), CaptureWriter::new());

        outputs.write_line(Target::Std, "one").unwrap();
        outputs.redirect(second.clone(), CaptureWriter::new());
        outputs.write_line(Target::Std, "two").unwrap();

        assert_eq!(first.lines(), vec!["one"]);
        assert_eq!(second.lines(), vec!["two"]);
    }

    #[test]
    fn each_line_is_a_single_write() {
        let out = CaptureWriter::new();
        let outputs = Outputs::with_sinks(out.clone(), CaptureWriter::new());

        outputs.write_line(Target::Std, "a").unwrap();
        outputs.write_line(Target::Std, "b").unwrap();

        assert_eq!(out.write_count(), 2);
    }

    #[test]
    fn reset_target_keeps_the_other_sink() {
        let err = CaptureWriter::new();
        let outputs = Outputs::with_sinks(CaptureWriter::new(), err.clone());

        outputs.reset_target(Target::Std);
        outputs.write_line(Target::Err, "still captured").unwrap();

        assert_eq!(err.lines(), vec!["still captured"]);
    }

    #[test]
    fn concurrent_lines_stay_intact() {
        const THREADS: usize = 8;
        const LINES: usize = 200;

        let out = CaptureWriter::new();
        let outputs = Outputs::with_sinks(out.clone(), CaptureWriter::new());

        std::thread::scope(|s| {
            for t in 0..THREADS {
                let outputs = &outputs;
                s.spawn(move || {
                    for i in 0..LINES {
                        let line = format!("thread {t} line {i} {}", "x".repeat(64));
                        outputs.write_line(Target::Std, &line).unwrap();
                    }
                });
            }
        });

        let lines = out.lines();
        assert_eq!(lines.len(), THREADS * LINES);
        let tail = "x".repeat(64);
        for line in &lines {
            let mut parts = line.split(' ');
            assert_eq!(parts.next(), Some("thread"), "mangled line: {line}");
            assert!(parts.next().is_some_and(|t| t.parse::<usize>().is_ok()), "mangled line: {line}");
            assert_eq!(parts.next(), Some("line"), "mangled line: {line}");
            assert!(parts.next().is_some_and(|i| i.parse::<usize>().is_ok()), "mangled line: {line}");
            assert_eq!(parts.next(), Some(tail.as_str()), "mangled line: {line}");
            assert_eq!(parts.next(), None, "mangled line: {line}");
        }
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        // Panics on its first write, then behaves.
        struct PanicOnce {
            panicked: Arc<AtomicBool>,
            inner: CaptureWriter,
        }
        impl Write for PanicOnce {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                if !self.panicked.swap(true, Ordering::SeqCst) {
                    panic!("sink failed mid-write");
                }
                self.inner.write(buf)
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let out = CaptureWriter::new();
        let sink = PanicOnce {
            panicked: Arc::new(AtomicBool::new(false)),
            inner: out.clone(),
        };
        let outputs = Arc::new(Outputs::with_sinks(sink, CaptureWriter::new()));

        let worker = Arc::clone(&outputs);
        let joined = std::thread::spawn(move || worker.write_line(Target::Std, "lost")).join();
        assert!(joined.is_err(), "first write should have panicked");
        assert!(outputs.sinks.is_poisoned());

        outputs.write_line(Target::Std, "after poison").unwrap();
        assert_eq!(out.lines(), vec!["after poison"]);
    }

    #[test]
    fn failing_sink_surfaces_io_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let outputs = Outputs::with_sinks(Broken, Broken);
        let result = outputs.write_line(Target::Err, "lost");
        assert!(matches!(result, Err(ConsoleError::Io(_))));
    }
}

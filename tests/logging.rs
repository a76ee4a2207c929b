use std::{
    io,
    sync::{Arc, Mutex},
};

use mapscript::{Context, evaluate, evaluate_assignments};
use tracing::Level;

/// Collects everything a subscriber writes.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` under a fmt subscriber capped at `level` and returns its output.
fn capture(level: Level, f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt().with_max_level(level)
                                              .with_ansi(false)
                                              .with_writer(move || writer.clone())
                                              .finish();

    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

#[test]
fn failures_are_not_logged_as_errors() {
    let output = capture(Level::WARN, || {
                     let mut ctx = Context::with_builtins();
                     assert!(evaluate("1 & 2", &ctx).is_err());
                     assert!(evaluate("missing()", &ctx).is_err());
                     assert!(evaluate_assignments("a = ;", &mut ctx).is_err());
                 });

    assert!(output.is_empty(), "unexpected log output: {output}");
}

#[test]
fn failures_are_visible_at_debug() {
    let output = capture(Level::DEBUG, || {
                     assert!(evaluate("1 & 2", &Context::new()).is_err());
                 });

    assert!(output.contains("DEBUG"), "missing debug event: {output}");
    assert!(output.contains("Incomplete operator '&'"), "missing error: {output}");
    assert!(!output.contains("ERROR"), "error level event: {output}");
}

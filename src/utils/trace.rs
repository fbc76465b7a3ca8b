//! Execution-time logging.

use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Run `f`, log how long it took under `title` to stderr, and return its
/// result. The line is written whether or not stderr is a terminal.
///
/// ```
/// let sum = com::trace::execute_time("sum", || (1..=10).sum::<i32>());
/// assert_eq!(sum, 55);
/// ```
pub fn execute_time<T>(title: &str, f: impl FnOnce() -> T) -> T {
    execute_time_to(&mut io::stderr().lock(), title, f)
}

/// Like [`execute_time`], writing the `[trace] ...` line to `out`.
///
/// A failed log write never fails the wrapped call.
pub fn execute_time_to<W: Write + ?Sized, T>(
    out: &mut W,
    title: &str,
    f: impl FnOnce() -> T,
) -> T {
    let (result, elapsed) = timed(f);
    if let Err(e) = writeln!(out, "[trace] {}", format_elapsed(title, elapsed)) {
        log_status!("trace", "Could not write timing for {}: {}", title, e);
    }
    result
}

/// Run `f` and return its result together with the elapsed wall time.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// `"[title] elapsed=<ms>ms"`
pub fn format_elapsed(title: &str, elapsed: Duration) -> String {
    format!("[{}] elapsed={}ms", title, elapsed.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn format_elapsed_reports_milliseconds() {
        assert_eq!(
            format_elapsed("unit test", Duration::from_millis(12)),
            "[unit test] elapsed=12ms"
        );
        assert_eq!(
            format_elapsed("fast", Duration::from_micros(900)),
            "[fast] elapsed=0ms"
        );
    }

    #[test]
    fn timed_measures_at_least_the_sleep() {
        let ((), elapsed) = timed(|| thread::sleep(Duration::from_millis(10)));
        assert!(elapsed >= Duration::from_millis(10));
    }

    #[test]
    fn execute_time_returns_result() {
        let mut calls = 0;
        let value = execute_time("unit test", || {
            calls += 1;
            "done"
        });
        assert_eq!(value, "done");
        assert_eq!(calls, 1);
    }

    #[test]
    fn execute_time_always_writes_elapsed_line() {
        let mut out = Vec::new();
        let value = execute_time_to(&mut out, "unit test", || 41 + 1);
        assert_eq!(value, 42);

        let line = String::from_utf8(out).unwrap();
        assert!(line.starts_with("[trace] [unit test] elapsed="));
        assert!(line.ends_with("ms\n"));
        assert_eq!(line.lines().count(), 1);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn execute_time_survives_failed_write() {
        assert_eq!(execute_time_to(&mut BrokenPipe, "closed", || "ok"), "ok");
    }
}

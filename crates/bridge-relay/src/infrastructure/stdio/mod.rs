//! The blocking stdin/stdout relay loop.
//!
//! ```text
//! loop:
//!   read line          EOF → clean stop; read fault → log, continue
//!   decode line        not JSON → drop silently (no response line)
//!                      bad command → error response
//!   dispatch command   injection fault → error response
//!   write + flush      one response line per decoded line, in order
//! ```
//!
//! The loop is fully synchronous: each command is processed to completion,
//! including the injection call and the flushed response, before the next
//! line is read. A bad command never terminates the loop — end of input is
//! the only shutdown path.
//!
//! All diagnostics go through `tracing` (stderr); standard output carries
//! nothing but response lines.

use std::io::{BufRead, Write};

use bridge_core::{decode_command, encode_outcome, Outcome, RelayError};
use tracing::{debug, error};

use crate::application::relay_command::RelayCommandUseCase;

/// The Command Relay Loop over a line-oriented reader/writer pair.
///
/// Generic over the streams so tests drive it with in-memory buffers; the
/// binary hands it locked stdin/stdout.
pub struct RelayLoop<R, W> {
    reader: R,
    writer: W,
    use_case: RelayCommandUseCase,
}

impl<R: BufRead, W: Write> RelayLoop<R, W> {
    pub fn new(reader: R, writer: W, use_case: RelayCommandUseCase) -> Self {
        Self {
            reader,
            writer,
            use_case,
        }
    }

    /// Runs until the input stream reaches end-of-file.
    pub fn run(&mut self) {
        loop {
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => self.process_line(line.trim_end()),
                Err(e) => {
                    // Reported, never re-raised: a transient read fault must
                    // not take the relay down.
                    error!("stdin read failed: {e}");
                }
            }
        }
    }

    fn process_line(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }

        let outcome = match decode_command(line) {
            Ok(command) => match self.use_case.handle(&command) {
                Ok(()) => Outcome::Success,
                Err(e) => Outcome::error(RelayError::Injection(e.to_string())),
            },
            Err(RelayError::Parse(detail)) => {
                // Best-effort skip: a malformed line produces no response at
                // all, so the wire stays request/response-paired only for
                // lines that parsed.
                debug!("dropping malformed input line: {detail}");
                return;
            }
            Err(e) => Outcome::error(e),
        };

        self.respond(&outcome);
    }

    fn respond(&mut self, outcome: &Outcome) {
        let line = encode_outcome(outcome);
        // Flush per response so a supervisor reading pipe output sees the
        // status without buffering delay.
        let written = writeln!(self.writer, "{line}").and_then(|()| self.writer.flush());
        if let Err(e) = written {
            error!("stdout write failed: {e}");
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use super::*;
    use crate::application::relay_command::{FailSafeConfig, PlatformInputInjector};
    use crate::infrastructure::input_injection::mock::MockInputInjector;

    /// Runs the loop over the given input and returns the output lines.
    fn run_relay(input: &str) -> (Vec<String>, Arc<MockInputInjector>) {
        let injector = Arc::new(MockInputInjector::new());
        let use_case = RelayCommandUseCase::new(
            Arc::clone(&injector) as Arc<dyn PlatformInputInjector>,
            FailSafeConfig::default(),
        );
        let mut output = Vec::new();
        RelayLoop::new(Cursor::new(input.to_string()), &mut output, use_case).run();
        let lines = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        (lines, injector)
    }

    #[test]
    fn test_one_response_line_per_parsed_command() {
        let (lines, _) = run_relay(
            "{\"type\":\"click\"}\n{\"type\":\"press\",\"key\":\"enter\"}\n",
        );
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l == r#"{"status":"success"}"#));
    }

    #[test]
    fn test_malformed_line_produces_no_response_and_loop_continues() {
        let (lines, injector) = run_relay("not json\n{\"type\":\"click\"}\n");
        // Only the valid command answered; the relay kept reading after the
        // malformed line.
        assert_eq!(lines, vec![r#"{"status":"success"}"#.to_string()]);
        assert_eq!(injector.buttons.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_bad_command_reports_error_and_loop_continues() {
        let (lines, injector) = run_relay("{\"type\":\"press\"}\n{\"type\":\"click\"}\n");
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(r#""status":"error""#));
        assert_eq!(lines[1], r#"{"status":"success"}"#);
        // The bad press injected nothing.
        assert!(injector.key_downs.lock().unwrap().is_empty());
    }

    #[test]
    fn test_blank_lines_are_skipped_silently() {
        let (lines, _) = run_relay("\n\n{\"type\":\"click\"}\n");
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_end_of_input_stops_the_loop() {
        let (lines, _) = run_relay("");
        assert!(lines.is_empty());
    }
}

//! Event formatter speaking the host's stdout log-line convention.
//!
//! The host scans hook output for `[ERROR]`, `[WARNING]`, `[INFO]` and `[DETAIL]`
//! prefixes and files each line under the matching log kind. Rendered fields are
//! flattened to one line so logged values cannot forge further prefixed lines.

use std::fmt;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Formats events as `[KIND] message key=value`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFormat;

/// Host log-kind prefix for a tracing level.
#[must_use]
pub fn host_prefix(level: Level) -> &'static str {
    if level == Level::ERROR {
        "[ERROR]"
    } else if level == Level::WARN {
        "[WARNING]"
    } else if level == Level::INFO {
        "[INFO]"
    } else {
        "[DETAIL]"
    }
}

impl<S, N> FormatEvent<S, N> for HostFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut fields = String::new();
        ctx.field_format()
            .format_fields(Writer::new(&mut fields), event)?;
        if fields.contains(char::is_control) {
            fields = fields
                .chars()
                .map(|ch| if ch.is_control() { ' ' } else { ch })
                .collect();
        }
        let prefix = host_prefix(*event.metadata().level());
        writeln!(writer, "{prefix} {fields}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            self.0
                .lock()
                .map(|buf| String::from_utf8_lossy(&buf).into_owned())
                .unwrap_or_default()
        }
    }

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .map_err(|_| io::Error::other("capture poisoned"))?
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_with<F: FnOnce()>(body: F) -> String {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_ansi(false)
            .event_format(HostFormat)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, body);
        capture.contents()
    }

    #[test]
    fn levels_map_to_host_prefixes() {
        assert_eq!(host_prefix(Level::ERROR), "[ERROR]");
        assert_eq!(host_prefix(Level::WARN), "[WARNING]");
        assert_eq!(host_prefix(Level::INFO), "[INFO]");
        assert_eq!(host_prefix(Level::DEBUG), "[DETAIL]");
        assert_eq!(host_prefix(Level::TRACE), "[DETAIL]");
    }

    #[test]
    fn events_render_as_prefixed_lines() {
        let output = capture_with(|| {
            tracing::info!("Detecting banned files in show");
            tracing::warn!("Download contains banned extension sample.wmv");
            tracing::debug!(removed = 2, "Housekeeping finished");
        });
        assert_eq!(
            output,
            "[INFO] Detecting banned files in show\n\
             [WARNING] Download contains banned extension sample.wmv\n\
             [DETAIL] Housekeeping finished removed=2\n"
        );
    }

    #[test]
    fn multi_line_values_stay_on_one_line() {
        let file = "x\n[NZB] FINALDIR=evil.nfo";
        let output = capture_with(|| {
            tracing::info!("Found file with banned extension: {file}");
        });
        assert_eq!(
            output,
            "[INFO] Found file with banned extension: x [NZB] FINALDIR=evil.nfo\n"
        );
    }
}

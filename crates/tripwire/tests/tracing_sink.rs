use parking_lot::Mutex;
use std::io;
use std::sync::Arc;
use tracing_subscriber::fmt::MakeWriter;
use tripwire::{BuildMode, GuardConfig, Guards, TracingSink, warning};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn captured(run: impl FnOnce()) -> String {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    tracing::subscriber::with_default(subscriber, run);
    capture.text()
}

#[test]
fn falsy_value_in_development_logs_one_warning() {
    let output = captured(|| {
        warning(false, "Custom warning message.", BuildMode::Development, &TracingSink);
    });

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 1, "output was {output:?}");
    assert!(lines[0].contains("WARN"));
    assert!(lines[0].contains("tripwire"));
    assert!(lines[0].contains("Warning. Custom warning message."));
}

#[test]
fn truthy_value_logs_nothing() {
    let output = captured(|| {
        warning(true, "Custom warning message.", BuildMode::Development, &TracingSink);
        warning(true, "Custom warning message.", BuildMode::Production, &TracingSink);
    });

    assert!(output.is_empty(), "output was {output:?}");
}

#[test]
fn production_logs_nothing() {
    let output = captured(|| {
        warning(false, "Custom warning message.", BuildMode::Production, &TracingSink);
        warning(0_u8, "Custom warning message.", BuildMode::Production, &TracingSink);
    });

    assert!(output.is_empty(), "output was {output:?}");
}

#[test]
fn default_guards_use_tracing() {
    let output = captured(|| {
        let guards = Guards::new(GuardConfig::with_mode(BuildMode::Development));
        guards.warning("", "display name is empty");
    });

    assert_eq!(output.lines().count(), 1);
    assert!(output.contains("Warning. display name is empty"));
}

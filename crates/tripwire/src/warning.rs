use crate::mode::BuildMode;
use crate::sink::DiagnosticSink;
use crate::truthy::Truthy;

/// Prefix of every warning line.
pub const WARNING_LABEL: &str = "Warning.";

/// Emits `"Warning. {message}"` to `sink` when `value` is falsy, in development only.
///
/// Production mode never writes, whatever the condition. This never fails;
/// it is meant for non-critical problems a developer should notice.
///
/// With [`crate::TracingSink`] the line is a `tracing` event, so it only shows
/// up once a subscriber is installed (`tripwire_logger::Logger` or any
/// `tracing-subscriber` setup). Without one the warning is dropped.
///
/// ```rust
/// use tripwire::{BuildMode, RecordingSink, warning};
///
/// let sink = RecordingSink::default();
/// warning("", "empty display name, using the login instead", BuildMode::Development, &sink);
/// warning("", "not reported", BuildMode::Production, &sink);
///
/// assert_eq!(sink.lines(), vec!["Warning. empty display name, using the login instead".to_owned()]);
/// ```
pub fn warning<T, S>(value: T, message: &str, mode: BuildMode, sink: &S)
where
    T: Truthy,
    S: DiagnosticSink + ?Sized,
{
    warning_labelled(value, WARNING_LABEL, message, mode, sink);
}

pub(crate) fn warning_labelled<T, S>(value: T, label: &str, message: &str, mode: BuildMode, sink: &S)
where
    T: Truthy,
    S: DiagnosticSink + ?Sized,
{
    if mode.is_production() || value.is_truthy() {
        return;
    }

    sink.emit(&format!("{label} {message}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;

    const MESSAGE: &str = "Custom warning message.";

    #[test]
    fn warns_in_development_on_falsy_value() {
        let sink = RecordingSink::default();
        warning(false, MESSAGE, BuildMode::Development, &sink);

        assert_eq!(sink.len(), 1);
        assert!(sink.lines()[0].contains(MESSAGE));
        assert!(sink.lines()[0].starts_with(WARNING_LABEL));
    }

    #[test]
    fn silent_in_development_on_truthy_value() {
        let sink = RecordingSink::default();
        warning(true, MESSAGE, BuildMode::Development, &sink);
        warning(1_u8, MESSAGE, BuildMode::Development, &sink);
        warning("set", MESSAGE, BuildMode::Development, &sink);

        assert!(sink.is_empty());
    }

    #[test]
    fn silent_in_production() {
        let sink = RecordingSink::default();
        warning(true, MESSAGE, BuildMode::Production, &sink);
        warning(false, MESSAGE, BuildMode::Production, &sink);
        warning(None::<u8>, MESSAGE, BuildMode::Production, &sink);

        assert!(sink.is_empty());
    }

    #[test]
    fn every_falsy_call_writes_once() {
        let sink = RecordingSink::default();
        warning(0_i32, "zero", BuildMode::Development, &sink);
        warning(f32::NAN, "nan", BuildMode::Development, &sink);
        warning(&String::new(), "empty", BuildMode::Development, &sink);

        assert_eq!(
            sink.lines(),
            vec!["Warning. zero".to_owned(), "Warning. nan".to_owned(), "Warning. empty".to_owned()]
        );
    }

    #[test]
    fn works_with_trait_object_sinks() {
        let sink = RecordingSink::default();
        let dyn_sink: &dyn DiagnosticSink = &sink;
        warning(false, MESSAGE, BuildMode::Development, dyn_sink);

        assert_eq!(sink.len(), 1);
    }
}

use std::borrow::Cow;
use std::io;

#[tripwire_derive::tripwire_error]
pub enum SampleError {
    #[error("IO failure{}: {source}", format_context(.context))]
    Io { source: io::Error, context: Option<Cow<'static, str>> },

    #[error("Rejected{}: {reason}", format_context(.context))]
    Rejected { reason: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn failing_io() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "gone"))
}

#[test]
fn ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/tripwire_error_pass.rs");
}

#[test]
fn source_errors_convert_with_question_mark() {
    fn run() -> Result<(), SampleError> {
        failing_io()?;
        Ok(())
    }

    let err = run().unwrap_err();
    assert!(matches!(err, SampleError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "IO failure: gone");
}

#[test]
fn context_on_source_results() {
    let err = failing_io().context("reading manifest").unwrap_err();
    assert_eq!(err.to_string(), "IO failure (reading manifest): gone");
}

#[test]
fn context_on_own_results_overwrites_slot() {
    let result: Result<(), SampleError> =
        Err(SampleError::Rejected { reason: "too large".to_owned(), context: None });

    let err = result.context("first").context("second").unwrap_err();
    assert_eq!(err.to_string(), "Rejected (second): too large");
}

#[test]
fn strings_become_internal_errors() {
    let from_static: SampleError = "boom".into();
    let from_owned: SampleError = String::from("bang").into();

    assert_eq!(from_static.to_string(), "Internal error: boom");
    assert!(matches!(from_owned, SampleError::Internal { ref message, .. } if message == "bang"));
}

#[test]
fn source_chain_is_exposed() {
    use std::error::Error as _;

    let err = SampleError::from(io::Error::other("disk"));
    assert!(err.source().is_some());
}

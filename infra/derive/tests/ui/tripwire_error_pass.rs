use std::borrow::Cow;
use tripwire_derive::tripwire_error;

#[tripwire_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn open() -> Result<String, DemoError> {
    let text = std::fs::read_to_string("missing.txt").context("opening demo file")?;
    if text.is_empty() {
        return Err("empty file".into());
    }
    Ok(text)
}

fn main() {
    let _ = open();
}

use std::borrow::Cow;

/// Failures raised while transforming text.
#[lipi_derive::lipi_error]
pub enum ScriptError {
    /// The input cannot be processed as text of the target script.
    #[error("Malformed input{}: {message}", format_context(.context))]
    MalformedInput { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal normalizer error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

use validator::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Duplicate name in {set}: {name}")]
    DuplicateName { set: &'static str, name: String },
}

impl From<ValidationErrors> for CoreError {
    /// Flatten field errors into one message, sorted by field name so the
    /// text is stable across runs.
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match e.message.as_deref() {
                    Some(msg) => msg.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect();
        messages.sort();
        CoreError::Validation(messages.join("; "))
    }
}

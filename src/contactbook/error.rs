use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    /// A field value did not pass validation (malformed phone, empty name).
    #[error("Invalid value: {0}")]
    Validation(String),

    /// A birthday string matched none of the accepted date formats.
    #[error("Wrong date format: {0}")]
    DateFormat(String),

    /// No contact with the given name.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The contact exists but does not have this phone.
    #[error("{name} has no phone {phone}")]
    PhoneNotFound { name: String, phone: String },

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("{name} already has phone {phone}")]
    DuplicatePhone { name: String, phone: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl BookError {
    /// Whether the error is caused by user input and can be reported back
    /// without stopping the session.
    pub fn is_input_error(&self) -> bool {
        !matches!(
            self,
            BookError::Io(_) | BookError::Serialization(_) | BookError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BookError>;

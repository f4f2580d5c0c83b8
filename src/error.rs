use thiserror::Error;

/// Lookup error types
#[derive(Error, Debug)]
pub enum LookupError {
    /// The target could not be resolved as a hostname and could not be
    /// parsed as a literal address. Carries the name-resolution failure,
    /// which is the more informative of the two.
    #[error("failed to resolve '{target}': {message}")]
    Resolution { target: String, message: String },

    /// A forward or reverse call to the name service failed.
    #[error("name service error: {0}")]
    NameService(String),
}

pub type Result<T> = std::result::Result<T, LookupError>;

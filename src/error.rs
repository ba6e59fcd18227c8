use thiserror::Error;

/// Errors reported by the rateseek core.
///
/// Both variants are caller errors: the library never retries and never
/// panics on bad input. The calling layer is expected to translate these
/// into user-facing messages.
#[derive(Debug, Error)]
pub enum SeekError {
    /// Malformed input shape: label count mismatch, ragged matrix rows,
    /// mismatched vector lengths, non-finite values.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Target item index outside the catalog bounds.
    #[error("item index {index} out of range (catalog has {items} items)")]
    IndexOutOfRange { index: usize, items: usize },
}

pub type Result<T> = std::result::Result<T, SeekError>;

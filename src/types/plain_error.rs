/// An error that is nothing but its message.
///
/// Returned by [`join_to_err`](crate::join_to_err); never matches the detail
/// grammar unless its text does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{message}")]
pub struct PlainError {
    message: String,
}

impl PlainError {
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl From<String> for PlainError {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for PlainError {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

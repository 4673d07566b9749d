use thiserror::Error;

/// Errors returned when a [`Set`][crate::Set] operation's precondition doesn't hold. The set is
/// left exactly as it was before the call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetError<T> {
    /// The element being added is already in the set. The rejected element is handed back.
    #[error("element is already in the set")]
    Duplicate(T),
    /// The element being removed is not in the set.
    #[error("element is not in the set")]
    NotFound,
    /// An element was requested from an empty set.
    #[error("set is empty")]
    Empty,
}

impl<T> SetError<T> {
    /// Recovers the element that was rejected, if the error carries one.
    pub fn into_element(self) -> Option<T> {
        match self {
            Self::Duplicate(x) => Some(x),
            Self::NotFound | Self::Empty => None,
        }
    }
}

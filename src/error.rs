//! Error taxonomy for splash rendering.

use std::io;
use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, SplashError>;

/// Errors surfaced by [`SplashScreen`](crate::SplashScreen) rendering.
#[derive(Debug, Error)]
pub enum SplashError {
    /// A render was requested before any splash was registered.
    ///
    /// Nothing is written when this is returned, not even a partial banner.
    #[error("empty splash collection")]
    EmptyCollection,

    /// The output stream rejected a write.
    ///
    /// Propagated unmodified; the crate performs no retry, so partial-write
    /// recovery belongs to the stream's owner.
    #[error("write error: {0}")]
    Write(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_message() {
        assert_eq!(
            SplashError::EmptyCollection.to_string(),
            "empty splash collection"
        );
    }

    #[test]
    fn io_errors_convert() {
        let err: SplashError = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert!(matches!(err, SplashError::Write(_)));
        assert_eq!(err.to_string(), "write error: gone");
    }
}

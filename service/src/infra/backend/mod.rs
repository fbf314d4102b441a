//! [`Backend`]-related implementations.

#[cfg(test)]
pub(crate) mod fake;
#[cfg(feature = "rest")]
pub mod rest;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "rest")]
pub use self::rest::Rest;

/// Backend operation.
pub use common::Handler as Backend;

/// [`Backend`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "rest")]
    /// [`Rest`] error.
    Rest(rest::Error),
}

impl Error {
    /// Checks whether the requested record doesn't exist on the backend.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            #[cfg(feature = "rest")]
            Self::Rest(e) => e.is_not_found(),
        }
    }
}

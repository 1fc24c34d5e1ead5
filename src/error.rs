//! Unified error type for ezswitch.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (with the `defmt` feature) for on-target logging.

use core::fmt;

/// Configuration-time errors returned by the switch registry.
///
/// Polling never produces an error: an unknown switch simply reports
/// [`Transition::Unchanged`](crate::debounce::Transition::Unchanged).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The requested capacity does not fit the registry's backing store.
    ///
    /// Only produced at construction; callers treat it as unrecoverable.
    AllocationFailure {
        /// Capacity asked for.
        requested: usize,
        /// Slots the backing store can hold.
        available: usize,
    },

    /// Unknown switch kind or circuit code at registration.
    BadParams,

    /// Every slot in the registry is already taken.
    CapacityExceeded,

    /// No such switch, or nothing linked to unlink.
    NotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AllocationFailure {
                requested,
                available,
            } => write!(
                f,
                "cannot reserve {} switch slots ({} available)",
                requested, available
            ),
            Error::BadParams => f.write_str("invalid switch kind or circuit"),
            Error::CapacityExceeded => f.write_str("no free switch slots"),
            Error::NotFound => f.write_str("switch or output link not found"),
        }
    }
}

impl core::error::Error for Error {}

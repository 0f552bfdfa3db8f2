//! Error types for ring Schnorr signing and verification.
//!
//! A failed cryptographic check is never an error: the verify functions
//! return `Ok(false)` for that, and a `false` result is definitive. Errors
//! are reserved for inputs rejected before any arithmetic is attempted,
//! plus the retry-cap fault.

use thiserror::Error;

/// Faults surfaced by signing and verification.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RingSchnorrError {
    /// A supplied private key or scalar is zero. Values at or above the
    /// group order are unrepresentable in `Fr` and rejected at conversion
    /// time.
    #[error("scalar is zero or out of range for the group order")]
    InvalidScalar,

    /// A supplied point is off the curve, outside the prime-order subgroup,
    /// or the identity where a usable point is required.
    #[error("point is not a usable group element")]
    InvalidPoint,

    /// Ring signature component lists disagree in length, or the ring is
    /// empty.
    #[error("ring signature component lists are inconsistent")]
    MalformedSignature,

    /// A bounded retry loop exhausted its attempt cap. Collisions occur
    /// with probability on the order of 1/n, so this is an operational
    /// fault of the random source, not a property of the inputs.
    #[error("random sampling exhausted its retry cap")]
    DegenerateRandomness,
}

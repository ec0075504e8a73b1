//! Error types.

/// Alias for [`core::result::Result`] with the `textbook-rsa` [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Error raised when an input fails a stated precondition.
///
/// Every operation in this crate validates its inputs eagerly and performs
/// no work once a precondition is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Message string is empty.
    #[error("message must be non-empty")]
    EmptyMessage,

    /// Digit sequence is empty.
    #[error("digit sequence must be non-empty")]
    EmptyDigits,

    /// Ciphertext sequence is empty.
    #[error("ciphertext must be non-empty")]
    EmptyCiphertext,

    /// A digit lies outside `[0, 128)`.
    #[error("digit out of base-128 range")]
    DigitOutOfRange,

    /// A character has an ordinal value of 128 or more.
    #[error("message contains a non-ASCII character")]
    NonAsciiCharacter,

    /// The value zero has no canonical base-128 digit sequence.
    #[error("value must be >= 1")]
    ZeroValue,

    /// Modulus is too small to hold a single base-128 digit.
    #[error("modulus must be >= 128")]
    ModulusTooSmall,

    /// Plaintext length is not a multiple of the block length.
    #[error("plaintext length must be a multiple of the block length")]
    MisalignedPlaintext,

    /// A ciphertext value is not in `[0, n)`.
    #[error("ciphertext value out of range for the modulus")]
    CiphertextOutOfRange,

    /// Message is too short for the requested collision construction.
    #[error("message too short")]
    MessageTooShort,

    /// The message's base-128 value is below the modulus, so reduction
    /// cannot produce a second preimage.
    #[error("message value must be >= the modulus")]
    ValueBelowModulus,

    /// Decryption produced a value that does not fit a single block.
    #[error("decryption error")]
    Decryption,
}

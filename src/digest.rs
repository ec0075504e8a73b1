//! Built-in message digest strategies.
//!
//! All three are intentionally weak. [`crate::collision`] holds the
//! matching second-preimage constructions.

use num_bigint::BigUint;

use crate::base128;
use crate::errors::{Error, Result};
use crate::traits::MessageDigest;

/// Digests a message as its character count.
///
/// The weakest strategy: any two messages of equal length collide.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LengthDigest;

impl MessageDigest for LengthDigest {
    fn digest(&self, message: &str) -> Result<BigUint> {
        Ok(BigUint::from(message.chars().count() as u64))
    }
}

/// Digests a message as its character count times the sum of its
/// ordinal values.
///
/// Permutations of a message preserve both factors, so anagrams collide.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LengthTimesSumDigest;

impl MessageDigest for LengthTimesSumDigest {
    fn digest(&self, message: &str) -> Result<BigUint> {
        let length = message.chars().count() as u64;
        let sum: u64 = message.chars().map(u64::from).sum();
        Ok(BigUint::from(length) * sum)
    }
}

/// Digests a message by interpreting its ordinal values as a base-128
/// digit sequence.
///
/// The strongest of the three, but the reduction modulo `n` at signing
/// time is lossy, so messages remain forgeable given the public key.
/// Requires the message to be ASCII-only.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Base128Digest;

impl MessageDigest for Base128Digest {
    fn digest(&self, message: &str) -> Result<BigUint> {
        if !message.is_ascii() {
            return Err(Error::NonAsciiCharacter);
        }
        base128::decode(message.as_bytes())
    }
}

//! Digest-collision construction.
//!
//! Each finder produces a second message whose signature matches the
//! original's under the corresponding digest strategy, without touching
//! the private key. Together they demonstrate why none of the digests in
//! [`crate::digest`] is fit for real signing.

use crate::base128;
use crate::errors::{Error, Result};
use crate::key::RsaPublicKey;

const SENTINEL: char = '!';
const ALT_SENTINEL: char = '?';

/// Returns a message colliding with `message` under [`LengthDigest`].
///
/// Any equal-length message collides; this one swaps the first character
/// for a sentinel distinct from it.
///
/// [`LengthDigest`]: crate::digest::LengthDigest
pub fn find_collision_simple(message: &str) -> Result<String> {
    let mut chars: Vec<char> = message.chars().collect();
    let first = *chars.first().ok_or(Error::EmptyMessage)?;
    chars[0] = if first == SENTINEL { ALT_SENTINEL } else { SENTINEL };
    Ok(chars.into_iter().collect())
}

/// Returns a message colliding with `message` under
/// [`LengthTimesSumDigest`].
///
/// Any permutation preserves both the length and the ordinal sum, so the
/// reversal collides. Palindromes fall back to swapping a differing pair
/// of characters; uniform strings get an equal-product message built
/// outright. Requires at least two characters.
///
/// [`LengthTimesSumDigest`]: crate::digest::LengthTimesSumDigest
pub fn find_collision_len_times_sum(message: &str) -> Result<String> {
    let chars: Vec<char> = message.chars().collect();
    if chars.len() < 2 {
        return Err(Error::MessageTooShort);
    }

    let reversed: String = chars.iter().rev().collect();
    if reversed != message {
        return Ok(reversed);
    }

    if let Some(i) = chars.iter().position(|&c| c != chars[0]) {
        let mut swapped = chars;
        swapped.swap(0, i);
        return Ok(swapped.into_iter().collect());
    }

    Ok(uniform_collision(chars[0], chars.len()))
}

/// Equal-product message for a uniform string of `length` copies of `c`.
fn uniform_collision(c: char, length: usize) -> String {
    let ordinal = c as u32;
    if ordinal == 0 {
        // length * 0 == (length - 1) * 0
        return "\0".repeat(length - 1);
    }
    if (1..127).contains(&ordinal) {
        // Move one ordinal up and one down; length and sum are unchanged.
        let mut message = String::with_capacity(length);
        message.push(char::from(ordinal as u8 + 1));
        message.extend(std::iter::repeat(c).take(length - 2));
        message.push(char::from(ordinal as u8 - 1));
        return message;
    }
    // Trade length against sum: length^2 characters whose ordinals sum to
    // one `c` keep the length-times-sum product intact.
    let mut message = String::with_capacity(c.len_utf8() + length * length - 1);
    message.push(c);
    for _ in 1..length * length {
        message.push('\0');
    }
    message
}

/// Returns a message colliding with `message` under [`Base128Digest`],
/// given the public key whose modulus defines the reduction.
///
/// The message's base-128 value `V` is reduced to `V mod n` and rendered
/// back to characters. The output never equals the input, and its leading
/// character is non-NUL since the canonical encoding has no leading zero
/// digit.
///
/// Requires `V >= n`; below the modulus the reduction is the identity
/// ([`Error::ValueBelowModulus`]). A reduced value of zero would need a
/// leading NUL to render and is rejected ([`Error::ZeroValue`]).
///
/// [`Base128Digest`]: crate::digest::Base128Digest
pub fn find_collision_base128(public_key: &RsaPublicKey, message: &str) -> Result<String> {
    if message.is_empty() {
        return Err(Error::EmptyMessage);
    }
    if !message.is_ascii() {
        return Err(Error::NonAsciiCharacter);
    }

    let value = base128::decode(message.as_bytes())?;
    if &value < public_key.n() {
        return Err(Error::ValueBelowModulus);
    }

    let reduced = value % public_key.n();
    let digits = base128::encode(&reduced)?;
    Ok(digits.into_iter().map(char::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    use crate::digest::{Base128Digest, LengthDigest, LengthTimesSumDigest};
    use crate::key::RsaPrivateKey;
    use crate::sign::{sign, verify};
    use crate::traits::MessageDigest;

    fn key_pair() -> (RsaPublicKey, RsaPrivateKey) {
        let public = RsaPublicKey::new(BigUint::from(1357u32), BigUint::from(1043u32)).unwrap();
        let private = RsaPrivateKey::new(
            BigUint::from(23u32),
            BigUint::from(59u32),
            BigUint::from(115u32),
        )
        .unwrap();
        (public, private)
    }

    #[test]
    fn simple_collision() {
        let (public, private) = key_pair();
        let message = "Cryptography is cool";

        let forged = find_collision_simple(message).unwrap();
        assert_eq!(forged, "!ryptography is cool");

        let signature = sign(&private, &LengthDigest, message).unwrap();
        assert!(verify(&public, &LengthDigest, &forged, &signature).unwrap());
    }

    #[test]
    fn simple_collision_sentinel_first() {
        let forged = find_collision_simple("!wice").unwrap();
        assert_eq!(forged, "?wice");
    }

    #[test]
    fn len_times_sum_collision_is_reversal() {
        let (public, private) = key_pair();

        let forged = find_collision_len_times_sum("hello").unwrap();
        assert_eq!(forged, "olleh");

        let signature = sign(&private, &LengthTimesSumDigest, "hello").unwrap();
        assert_eq!(signature, BigUint::from(720u32));
        assert!(verify(&public, &LengthTimesSumDigest, &forged, &signature).unwrap());
    }

    #[test]
    fn len_times_sum_collision_palindrome() {
        let forged = find_collision_len_times_sum("aba").unwrap();
        assert_ne!(forged, "aba");
        assert_eq!(
            LengthTimesSumDigest.digest(&forged).unwrap(),
            LengthTimesSumDigest.digest("aba").unwrap()
        );
    }

    #[test]
    fn len_times_sum_collision_uniform() {
        for message in ["aa", "zzzz", "\0\0\0", "\u{7f}\u{7f}"] {
            let forged = find_collision_len_times_sum(message).unwrap();
            assert_ne!(forged, message);
            assert_eq!(
                LengthTimesSumDigest.digest(&forged).unwrap(),
                LengthTimesSumDigest.digest(message).unwrap()
            );
        }
    }

    #[test]
    fn len_times_sum_rejects_short_message() {
        assert_eq!(
            find_collision_len_times_sum("h").unwrap_err(),
            Error::MessageTooShort
        );
    }

    #[test]
    fn base128_collision() {
        let (public, private) = key_pair();
        let message = "hello";

        let forged = find_collision_base128(&public, message).unwrap();
        // 19540948591 mod 1357 = 678 = 5 * 128 + 38
        assert_eq!(forged, "\u{5}&");
        assert_ne!(forged, message);
        assert!(forged.chars().next().unwrap() as u32 > 0);

        let signature = sign(&private, &Base128Digest, message).unwrap();
        assert!(verify(&public, &Base128Digest, &forged, &signature).unwrap());
    }

    #[test]
    fn base128_rejects_value_below_modulus() {
        let (public, _) = key_pair();
        assert_eq!(
            find_collision_base128(&public, "A").unwrap_err(),
            Error::ValueBelowModulus
        );
    }

    #[test]
    fn base128_rejects_zero_residue() {
        let (public, _) = key_pair();
        // [10, 77, 0] is 173696 = 128 * 1357, a multiple of the modulus
        assert_eq!(
            find_collision_base128(&public, "\u{a}M\0").unwrap_err(),
            Error::ZeroValue
        );
    }
}

//! Block encryption and decryption of ASCII strings.
//!
//! Plaintext is split into fixed-size character blocks; each block's
//! ordinal values form a base-128 digit sequence whose integer value is
//! put through the raw RSA primitive. Block order in the ciphertext
//! matches block order in the plaintext.

use num_bigint::BigUint;

use crate::algorithms::rsa::{rsa_decrypt, rsa_encrypt};
use crate::base128;
use crate::errors::{Error, Result};
use crate::key::{RsaPrivateKey, RsaPublicKey};

/// Returns the block length for the modulus `n`: the largest `L` such
/// that every `L`-digit base-128 sequence maps to a value below `n`.
///
/// Computed by repeated integer division rather than a floating-point
/// logarithm, so encryption and decryption can never disagree near exact
/// powers of 128. Moduli below 128 yield zero.
pub fn block_length(n: &BigUint) -> usize {
    let radix = BigUint::from(u32::from(base128::RADIX));
    let mut rest = n.clone();
    let mut length = 0;
    while rest >= radix {
        rest = rest / &radix;
        length += 1;
    }
    length
}

/// Encrypts `plaintext` block by block with the recipient's public key.
///
/// The plaintext must be non-empty, ASCII-only, and its length must be an
/// exact multiple of the key's block length; padding a partial final
/// block is the caller's responsibility.
///
/// ```
/// use textbook_rsa::{blocks, BigUint, RsaPublicKey};
///
/// let public_key = RsaPublicKey::new(BigUint::from(1357u32), BigUint::from(1043u32)).unwrap();
/// let ciphertext = blocks::encrypt(&public_key, "Hi").unwrap();
/// assert_eq!(ciphertext.len(), 2);
/// ```
pub fn encrypt(public_key: &RsaPublicKey, plaintext: &str) -> Result<Vec<BigUint>> {
    if plaintext.is_empty() {
        return Err(Error::EmptyMessage);
    }
    if !plaintext.is_ascii() {
        return Err(Error::NonAsciiCharacter);
    }

    // at least 1, since the key constructor rejects moduli below 128
    let length = block_length(public_key.n());
    if plaintext.len() % length != 0 {
        return Err(Error::MisalignedPlaintext);
    }

    plaintext
        .as_bytes()
        .chunks(length)
        .map(|block| Ok(rsa_encrypt(public_key, &base128::decode(block)?)))
        .collect()
}

/// Decrypts `ciphertext` block by block with the recipient's private key.
///
/// Every ciphertext value must lie in `[0, n)` where `n = p * q`. Each
/// decrypted block is re-encoded to exactly one block's worth of digits,
/// restoring any leading NUL characters the integer form dropped.
pub fn decrypt(private_key: &RsaPrivateKey, ciphertext: &[BigUint]) -> Result<String> {
    if ciphertext.is_empty() {
        return Err(Error::EmptyCiphertext);
    }

    let n = private_key.modulus();
    let length = block_length(&n);

    let mut plaintext = String::with_capacity(ciphertext.len() * length);
    for value in ciphertext {
        let m = rsa_decrypt(private_key, &n, value)?;
        for digit in base128::encode_padded(&m, length)? {
            plaintext.push(char::from(digit));
        }
    }
    Ok(plaintext)
}

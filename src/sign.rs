//! Digital signatures over pluggable message digests.
//!
//! The digest of the message, reduced modulo the key, is what gets put
//! through the RSA primitive; the message itself never is. Signature
//! strength is therefore bounded by digest strength, which for every
//! strategy in [`crate::digest`] is intentionally poor.

use num_bigint::BigUint;

use crate::algorithms::rsa::rsa_encrypt;
use crate::digest::LengthDigest;
use crate::errors::{Error, Result};
use crate::key::{RsaPrivateKey, RsaPublicKey};
use crate::traits::MessageDigest;

/// Signs `message` with the private key under the given digest strategy.
///
/// Computes `digest(message) mod n` and raises it to the private
/// exponent. The message must be non-empty and satisfy the digest's own
/// preconditions.
///
/// ```
/// use textbook_rsa::{digest::LengthDigest, sign, BigUint, RsaPrivateKey};
///
/// let private_key = RsaPrivateKey::new(
///     BigUint::from(23u32),
///     BigUint::from(59u32),
///     BigUint::from(115u32),
/// )
/// .unwrap();
/// let signature = sign::sign(&private_key, &LengthDigest, "Cryptography is cool").unwrap();
/// assert_eq!(signature, BigUint::from(1183u32));
/// ```
pub fn sign<D>(private_key: &RsaPrivateKey, digest: &D, message: &str) -> Result<BigUint>
where
    D: MessageDigest + ?Sized,
{
    if message.is_empty() {
        return Err(Error::EmptyMessage);
    }

    let n = private_key.modulus();
    let digest = digest.digest(message)? % &n;
    Ok(digest.modpow(private_key.d(), &n))
}

/// Returns whether `signature` matches `message` under the given digest
/// strategy.
///
/// True iff `signature^e mod n == digest(message) mod n`. Contract
/// violations (empty message, digest preconditions) are errors; a
/// mismatched signature is `Ok(false)`.
///
/// ```
/// use textbook_rsa::{digest::LengthDigest, sign, BigUint, RsaPublicKey};
///
/// let public_key = RsaPublicKey::new(BigUint::from(1357u32), BigUint::from(1043u32)).unwrap();
/// let message = "Cryptography is cool";
/// assert!(sign::verify(&public_key, &LengthDigest, message, &BigUint::from(1183u32)).unwrap());
/// assert!(!sign::verify(&public_key, &LengthDigest, message, &BigUint::from(124u32)).unwrap());
/// ```
pub fn verify<D>(
    public_key: &RsaPublicKey,
    digest: &D,
    message: &str,
    signature: &BigUint,
) -> Result<bool>
where
    D: MessageDigest + ?Sized,
{
    if message.is_empty() {
        return Err(Error::EmptyMessage);
    }

    let expected = digest.digest(message)? % public_key.n();
    Ok(rsa_encrypt(public_key, signature) == expected)
}

/// Signs `message` with the fixed length digest.
pub fn sign_simple(private_key: &RsaPrivateKey, message: &str) -> Result<BigUint> {
    sign(private_key, &LengthDigest, message)
}

/// Verifies a signature produced by [`sign_simple`].
pub fn verify_simple(
    public_key: &RsaPublicKey,
    message: &str,
    signature: &BigUint,
) -> Result<bool> {
    verify(public_key, &LengthDigest, message, signature)
}

//! Message digest strategy.

use num_bigint::BigUint;

use crate::errors::Result;

/// A message digest strategy used by the signature scheme.
///
/// The digest is a surrogate value signed in place of the message itself.
/// Implementations return the raw digest; the signature scheme reduces it
/// modulo the key's modulus before exponentiation.
pub trait MessageDigest {
    /// Computes the digest of `message`.
    fn digest(&self, message: &str) -> Result<BigUint>;
}

/// Adapter that lets any `Fn(&str) -> BigUint` act as a digest strategy.
///
/// ```
/// use textbook_rsa::{sign, traits::DigestFn, BigUint, RsaPrivateKey};
///
/// let private_key = RsaPrivateKey::new(
///     BigUint::from(23u32),
///     BigUint::from(59u32),
///     BigUint::from(115u32),
/// )
/// .unwrap();
///
/// let by_length = DigestFn(|message: &str| BigUint::from(message.len() as u64));
/// let signature = sign::sign(&private_key, &by_length, "Cryptography is cool").unwrap();
/// assert_eq!(signature, BigUint::from(1183u32));
/// ```
pub struct DigestFn<F>(pub F);

impl<F> MessageDigest for DigestFn<F>
where
    F: Fn(&str) -> BigUint,
{
    fn digest(&self, message: &str) -> Result<BigUint> {
        Ok((self.0)(message))
    }
}

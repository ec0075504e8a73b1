//! Generic RSA implementation
//!
//! Raw modular-exponentiation primitives. No padding is performed; the
//! callers in [`crate::blocks`] and [`crate::sign`] own all input
//! validation beyond the range checks here.

use num_bigint::BigUint;

use crate::errors::{Error, Result};
use crate::key::{RsaPrivateKey, RsaPublicKey};

/// Raw RSA encryption of `m` with the public key: `m^e mod n`.
#[inline]
pub(crate) fn rsa_encrypt(key: &RsaPublicKey, m: &BigUint) -> BigUint {
    m.modpow(key.e(), key.n())
}

/// Raw RSA decryption of `c` with the private key: `c^d mod n`.
///
/// `n` is the caller-derived modulus `p * q`, passed in so batch callers
/// compute it once. Returns [`Error::CiphertextOutOfRange`] if `c >= n`.
#[inline]
pub(crate) fn rsa_decrypt(key: &RsaPrivateKey, n: &BigUint, c: &BigUint) -> Result<BigUint> {
    if c >= n {
        return Err(Error::CiphertextOutOfRange);
    }
    Ok(c.modpow(key.d(), n))
}

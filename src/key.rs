use num_bigint::BigUint;
use zeroize::Zeroize;

use crate::errors::{Error, Result};

/// Represents the public part of an RSA key: the modulus `n` and the
/// public exponent `e`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    /// Modulus
    n: BigUint,
    /// Public exponent
    e: BigUint,
}

/// Represents the private part of an RSA key: the prime factors `p` and
/// `q` and the private exponent `d`.
///
/// The modulus `n = p * q` is derived on demand and never stored.
/// Key material is zeroized on drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    /// First prime factor of the modulus
    p: BigUint,
    /// Second prime factor of the modulus
    q: BigUint,
    /// Private exponent
    d: BigUint,
}

/// Checks that the modulus admits at least one full base-128 digit per
/// block.
fn check_modulus(n: &BigUint) -> Result<()> {
    if n < &BigUint::from(128u32) {
        return Err(Error::ModulusTooSmall);
    }
    Ok(())
}

impl RsaPublicKey {
    /// Creates a public key from a preformed `(n, e)` pair.
    ///
    /// Returns [`Error::ModulusTooSmall`] if `n < 128`.
    pub fn new(n: BigUint, e: BigUint) -> Result<RsaPublicKey> {
        check_modulus(&n)?;
        Ok(RsaPublicKey { n, e })
    }

    /// Returns the modulus of the key.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Returns the public exponent of the key.
    pub fn e(&self) -> &BigUint {
        &self.e
    }
}

impl RsaPrivateKey {
    /// Creates a private key from a preformed `(p, q, d)` triple.
    ///
    /// Returns [`Error::ModulusTooSmall`] if `p * q < 128`.
    pub fn new(p: BigUint, q: BigUint, d: BigUint) -> Result<RsaPrivateKey> {
        check_modulus(&(&p * &q))?;
        Ok(RsaPrivateKey { p, q, d })
    }

    /// Returns the first prime factor of the modulus.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Returns the second prime factor of the modulus.
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// Returns the private exponent of the key.
    pub fn d(&self) -> &BigUint {
        &self.d
    }

    /// Returns the derived modulus `p * q`.
    pub fn modulus(&self) -> BigUint {
        &self.p * &self.q
    }
}

impl Zeroize for RsaPrivateKey {
    fn zeroize(&mut self) {
        self.p.zeroize();
        self.q.zeroize();
        self.d.zeroize();
    }
}

impl Drop for RsaPrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_key_rejects_small_modulus() {
        let key = RsaPublicKey::new(BigUint::from(127u32), BigUint::from(3u32));
        assert_eq!(key.unwrap_err(), Error::ModulusTooSmall);

        assert!(RsaPublicKey::new(BigUint::from(128u32), BigUint::from(3u32)).is_ok());
    }

    #[test]
    fn private_key_rejects_small_modulus() {
        // 5 * 7 = 35 cannot hold a single base-128 digit
        let key = RsaPrivateKey::new(
            BigUint::from(5u32),
            BigUint::from(7u32),
            BigUint::from(5u32),
        );
        assert_eq!(key.unwrap_err(), Error::ModulusTooSmall);
    }

    #[test]
    fn modulus_is_derived() {
        let key = RsaPrivateKey::new(
            BigUint::from(23u32),
            BigUint::from(59u32),
            BigUint::from(115u32),
        )
        .unwrap();
        assert_eq!(key.modulus(), BigUint::from(1357u32));
    }

    #[test]
    fn accessors() {
        let key = RsaPublicKey::new(BigUint::from(1357u32), BigUint::from(1043u32)).unwrap();
        assert_eq!(key.n(), &BigUint::from(1357u32));
        assert_eq!(key.e(), &BigUint::from(1043u32));
    }
}

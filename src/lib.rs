#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Usage
//!
//! ## Block encryption
//!
//! ```
//! use textbook_rsa::{blocks, BigUint, RsaPrivateKey, RsaPublicKey};
//!
//! let public_key = RsaPublicKey::new(BigUint::from(17947u32), BigUint::from(3u32))
//!     .expect("modulus large enough");
//! let private_key = RsaPrivateKey::new(
//!     BigUint::from(131u32),
//!     BigUint::from(137u32),
//!     BigUint::from(11787u32),
//! )
//! .expect("modulus large enough");
//!
//! // 17947 holds two base-128 digits per block, so the plaintext length
//! // must be a multiple of two.
//! let ciphertext = blocks::encrypt(&public_key, "Attack at dawn!!").expect("valid plaintext");
//! let plaintext = blocks::decrypt(&private_key, &ciphertext).expect("valid ciphertext");
//! assert_eq!(plaintext, "Attack at dawn!!");
//! ```
//!
//! ## Signatures and collisions
//!
//! ```
//! use textbook_rsa::{collision, digest::LengthTimesSumDigest, sign};
//! use textbook_rsa::{BigUint, RsaPrivateKey, RsaPublicKey};
//!
//! let public_key = RsaPublicKey::new(BigUint::from(1357u32), BigUint::from(1043u32)).unwrap();
//! let private_key = RsaPrivateKey::new(
//!     BigUint::from(23u32),
//!     BigUint::from(59u32),
//!     BigUint::from(115u32),
//! )
//! .unwrap();
//!
//! let signature = sign::sign(&private_key, &LengthTimesSumDigest, "hello").unwrap();
//! assert!(sign::verify(&public_key, &LengthTimesSumDigest, "hello", &signature).unwrap());
//!
//! // Anagrams collide under this digest, so the signature transfers.
//! let forged = collision::find_collision_len_times_sum("hello").unwrap();
//! assert_eq!(forged, "olleh");
//! assert!(sign::verify(&public_key, &LengthTimesSumDigest, &forged, &signature).unwrap());
//! ```

pub use num_bigint::BigUint;

mod algorithms;
pub mod base128;
pub mod blocks;
pub mod collision;
pub mod digest;
pub mod errors;
pub mod sign;
pub mod traits;

mod key;

pub use crate::{
    errors::{Error, Result},
    key::{RsaPrivateKey, RsaPublicKey},
};

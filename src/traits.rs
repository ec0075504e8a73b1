//! RSA-related trait definitions.

mod digest;

pub use digest::{DigestFn, MessageDigest};

//! Core algorithms shared by the block cipher and the signature scheme.

pub(crate) mod rsa;

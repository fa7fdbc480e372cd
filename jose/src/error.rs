use thiserror::Error;

use crate::alg::Alg;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by token signing, claims handling and key loading.
///
/// Verification deliberately has no error channel: a [`crate::Signer`]
/// reports `false` for any untrusted input it cannot make sense of, so the
/// variants here only ever describe construction-, signing- and load-time
/// problems.
#[derive(Debug, Error)]
pub enum Error {
    /// The algorithm is outside the family a provider supports, or is one of
    /// the `none`/`unknown` sentinels.
    #[error("algorithm {0} is not supported by this provider")]
    UnsupportedAlgorithm(Alg),

    /// Requested RSA key size is zero or not a multiple of 1024 bits.
    #[error("invalid key size: {0} bits")]
    InvalidKeySize(usize),

    /// The underlying library failed to produce a fresh key pair.
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    /// The underlying cryptographic primitive refused to sign.
    #[error("signing failed: {0}")]
    Signing(String),

    /// The provider holds public key material only.
    #[error("no private key; cannot sign data")]
    MissingPrivateKey,

    /// Key storage could not be read at all.
    #[error("could not read key file")]
    KeyIo(#[from] std::io::Error),

    /// The key is encrypted but no passphrase callback was supplied.
    #[error("password required")]
    PassphraseRequired,

    /// Key material was read but could not be parsed (or decrypted).
    #[error("could not parse key material: {0}")]
    KeyParse(String),

    #[error("invalid base64url data")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid JSON document")]
    Json(#[from] serde_json::Error),

    /// A compact token string that does not have three `.`-joined segments,
    /// or whose segments do not decode to the expected documents.
    #[error("malformed token: {0}")]
    TokenFormat(String),
}

use std::str::FromStr;

use strum_macros::{Display, EnumString};

use crate::crypto::hash::Hash;

/// The closed set of JOSE signing algorithms understood by this crate,
/// plus the `None` and `Unknown` sentinels. The identifier alone determines
/// both the digest function and the key family a provider must be
/// constructed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
pub enum Alg {
    #[strum(serialize = "none")]
    None,
    HS256,
    HS384,
    HS512,
    RS256,
    RS384,
    RS512,
    ES256,
    ES384,
    ES512,
    #[strum(serialize = "unknown")]
    Unknown,
}

/// The class of key material an algorithm requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyFamily {
    Hmac,
    Rsa,
    Ecdsa,
}

impl Alg {
    /// Parse the value of a JOSE `alg` header field. Anything outside the
    /// supported set maps to [`Alg::Unknown`] rather than failing; rejecting
    /// an unknown algorithm is a decision for the verification path.
    pub fn from_header(value: &str) -> Self {
        Alg::from_str(value).unwrap_or(Alg::Unknown)
    }

    /// The digest function backing this algorithm. `None` for the sentinels
    /// and for [`Alg::None`], which carries no digest at all.
    pub fn hash(&self) -> Option<Hash> {
        match self {
            Alg::HS256 | Alg::RS256 | Alg::ES256 => Some(Hash::Sha256),
            Alg::HS384 | Alg::RS384 | Alg::ES384 => Some(Hash::Sha384),
            Alg::HS512 | Alg::RS512 | Alg::ES512 => Some(Hash::Sha512),
            Alg::None | Alg::Unknown => None,
        }
    }

    /// The key family this algorithm must be paired with, if any.
    pub fn key_family(&self) -> Option<KeyFamily> {
        match self {
            Alg::HS256 | Alg::HS384 | Alg::HS512 => Some(KeyFamily::Hmac),
            Alg::RS256 | Alg::RS384 | Alg::RS512 => Some(KeyFamily::Rsa),
            Alg::ES256 | Alg::ES384 | Alg::ES512 => Some(KeyFamily::Ecdsa),
            Alg::None | Alg::Unknown => None,
        }
    }
}

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alg::Alg;
use crate::b64;
use crate::claims::Claims;
use crate::crypto::Signer;
use crate::error::{Error, Result};

/// The header segment of a compact token.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Header {
    pub alg: String,
    pub typ: String,
}

impl Header {
    pub fn new(alg: Alg) -> Self {
        Header {
            alg: alg.to_string(),
            typ: "JWT".into(),
        }
    }

    /// The parsed algorithm identifier; unrecognized values come back as
    /// [`Alg::Unknown`].
    pub fn alg(&self) -> Alg {
        Alg::from_header(&self.alg)
    }
}

/// A parsed compact token: `base64url(header).base64url(claims).base64url(signature)`.
///
/// The signing input (the UTF-8 bytes of the first two segments joined by
/// `.`, exactly as they appeared on the wire) is retained verbatim so that
/// verification operates on what was actually signed, not on a
/// re-serialization of the parsed documents.
#[derive(Clone, Debug)]
pub struct Token {
    header: Header,
    claims: Claims,
    signed_data: String,
    signature: String,
}

impl Token {
    /// Serialize the claims under a `{alg, typ: "JWT"}` header, sign the
    /// joined first two segments with the given provider and produce the
    /// full three-segment compact token string.
    pub fn sign(claims: &Claims, signer: &dyn Signer) -> Result<String> {
        let header = Header::new(signer.alg());

        let header_base64 = b64::encode(serde_json::to_string(&header)?);
        let claims_base64 = claims.to_base64()?;

        let data_to_sign = format!("{header_base64}.{claims_base64}");
        let signature = signer.sign(data_to_sign.as_bytes())?;

        Ok(format!("{data_to_sign}.{signature}"))
    }

    /// Re-check the retained signing input against the retained signature.
    pub fn verify(&self, signer: &dyn Signer) -> bool {
        signer.verify(self.signed_data.as_bytes(), &self.signature)
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Raw bytes of the signing input for this token.
    pub fn signed_data(&self) -> &[u8] {
        self.signed_data.as_bytes()
    }

    /// The base64url-encoded signature segment, exactly as received.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Reassemble the compact token string this value was parsed from.
    pub fn encode(&self) -> String {
        format!("{}.{}", self.signed_data, self.signature)
    }
}

/// Deserialize an encoded compact token string into a [`Token`].
impl FromStr for Token {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(Error::TokenFormat(format!(
                "expected 3 segments, found {}",
                parts.len()
            )));
        }

        let header: Header = serde_json::from_slice(&b64::decode(parts[0])?)?;
        let claims = Claims::parse_base64(parts[1])?;

        // The signature segment must at least be well-formed base64url;
        // whether it matches is for verify() to decide.
        b64::decode(parts[2])?;

        Ok(Token {
            header,
            claims,
            signed_data: format!("{}.{}", parts[0], parts[1]),
            signature: parts[2].to_string(),
        })
    }
}

impl TryFrom<&str> for Token {
    type Error = Error;

    fn try_from(token: &str) -> Result<Self> {
        Token::from_str(token)
    }
}

impl TryFrom<String> for Token {
    type Error = Error;

    fn try_from(token: String) -> Result<Self> {
        Token::from_str(token.as_str())
    }
}

use std::sync::Arc;

use p256::ecdsa::signature::{Signer as _, Verifier as _};
use rand::rngs::OsRng;

use jose::alg::Alg;
use jose::b64;
use jose::crypto::Signer;
use jose::error::{Error, Result};

/// An ECDSA key pair on the curve its algorithm calls for: P-256 for ES256,
/// P-384 for ES384, P-521 for ES512. The signing half is optional for
/// verify-only use.
pub enum EcdsaKeypair {
    P256(p256::ecdsa::VerifyingKey, Option<p256::ecdsa::SigningKey>),
    P384(p384::ecdsa::VerifyingKey, Option<p384::ecdsa::SigningKey>),
    P521(p521::ecdsa::VerifyingKey, Option<p521::ecdsa::SigningKey>),
}

impl EcdsaKeypair {
    /// Generate a fresh key pair on the curve matching `alg`.
    pub fn generate(alg: Alg) -> Result<Self> {
        match alg {
            Alg::ES256 => {
                let signing = p256::ecdsa::SigningKey::random(&mut OsRng);
                Ok(EcdsaKeypair::P256(
                    p256::ecdsa::VerifyingKey::from(&signing),
                    Some(signing),
                ))
            }
            Alg::ES384 => {
                let signing = p384::ecdsa::SigningKey::random(&mut OsRng);
                Ok(EcdsaKeypair::P384(
                    p384::ecdsa::VerifyingKey::from(&signing),
                    Some(signing),
                ))
            }
            Alg::ES512 => {
                let signing = p521::ecdsa::SigningKey::random(&mut OsRng);
                Ok(EcdsaKeypair::P521(
                    p521::ecdsa::VerifyingKey::from(&signing),
                    Some(signing),
                ))
            }
            other => Err(Error::UnsupportedAlgorithm(other)),
        }
    }

    /// The one algorithm this key pair can serve.
    pub fn alg(&self) -> Alg {
        match self {
            EcdsaKeypair::P256(..) => Alg::ES256,
            EcdsaKeypair::P384(..) => Alg::ES384,
            EcdsaKeypair::P521(..) => Alg::ES512,
        }
    }

    pub fn has_private(&self) -> bool {
        match self {
            EcdsaKeypair::P256(_, signing) => signing.is_some(),
            EcdsaKeypair::P384(_, signing) => signing.is_some(),
            EcdsaKeypair::P521(_, signing) => signing.is_some(),
        }
    }
}

/// Signature provider for the ES256/ES384/ES512 algorithms. Signatures use
/// the fixed-size `r || s` encoding the compact serialization calls for,
/// not ASN.1 DER.
pub struct EcdsaSigner {
    alg: Alg,
    key: Arc<EcdsaKeypair>,
}

impl EcdsaSigner {
    /// Bind an algorithm to a (possibly shared) key pair. The key's curve
    /// must match the algorithm; anything else fails here, not at first use.
    pub fn new(alg: Alg, key: Arc<EcdsaKeypair>) -> Result<Self> {
        if key.alg() != alg {
            return Err(Error::UnsupportedAlgorithm(alg));
        }

        Ok(EcdsaSigner { alg, key })
    }

    /// Generate a fresh curve-matched key pair and wrap it in a provider.
    pub fn generate(alg: Alg) -> Result<Self> {
        EcdsaSigner::new(alg, Arc::new(EcdsaKeypair::generate(alg)?))
    }
}

impl Signer for EcdsaSigner {
    fn alg(&self) -> Alg {
        self.alg
    }

    fn sign(&self, payload: &[u8]) -> Result<String> {
        let raw = match &*self.key {
            EcdsaKeypair::P256(_, signing) => {
                let signing = signing.as_ref().ok_or(Error::MissingPrivateKey)?;
                let signature: p256::ecdsa::Signature = signing
                    .try_sign(payload)
                    .map_err(|error| Error::Signing(error.to_string()))?;
                signature.to_bytes().to_vec()
            }
            EcdsaKeypair::P384(_, signing) => {
                let signing = signing.as_ref().ok_or(Error::MissingPrivateKey)?;
                let signature: p384::ecdsa::Signature = signing
                    .try_sign(payload)
                    .map_err(|error| Error::Signing(error.to_string()))?;
                signature.to_bytes().to_vec()
            }
            EcdsaKeypair::P521(_, signing) => {
                let signing = signing.as_ref().ok_or(Error::MissingPrivateKey)?;
                let signature: p521::ecdsa::Signature = signing
                    .try_sign(payload)
                    .map_err(|error| Error::Signing(error.to_string()))?;
                signature.to_bytes().to_vec()
            }
        };

        Ok(b64::encode(raw))
    }

    fn verify(&self, payload: &[u8], signature: &str) -> bool {
        let Ok(decoded) = b64::decode(signature) else {
            return false;
        };

        match &*self.key {
            EcdsaKeypair::P256(verifying, _) => {
                match p256::ecdsa::Signature::from_slice(&decoded) {
                    Ok(signature) => verifying.verify(payload, &signature).is_ok(),
                    Err(_) => false,
                }
            }
            EcdsaKeypair::P384(verifying, _) => {
                match p384::ecdsa::Signature::from_slice(&decoded) {
                    Ok(signature) => verifying.verify(payload, &signature).is_ok(),
                    Err(_) => false,
                }
            }
            EcdsaKeypair::P521(verifying, _) => {
                match p521::ecdsa::Signature::from_slice(&decoded) {
                    Ok(signature) => verifying.verify(payload, &signature).is_ok(),
                    Err(_) => false,
                }
            }
        }
    }
}

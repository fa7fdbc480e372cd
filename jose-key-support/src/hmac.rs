use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use zeroize::Zeroizing;

use jose::alg::Alg;
use jose::b64;
use jose::crypto::Signer;
use jose::error::{Error, Result};

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Signature provider for the HS256/HS384/HS512 algorithms over a shared
/// secret. The secret is held in a wiped-on-drop buffer; comparison against
/// an alleged tag is constant-time.
pub struct HmacSigner {
    alg: Alg,
    secret: Zeroizing<Vec<u8>>,
}

impl HmacSigner {
    pub fn new<S: AsRef<[u8]>>(alg: Alg, secret: S) -> Result<Self> {
        match alg {
            Alg::HS256 | Alg::HS384 | Alg::HS512 => Ok(HmacSigner {
                alg,
                secret: Zeroizing::new(secret.as_ref().to_vec()),
            }),
            other => Err(Error::UnsupportedAlgorithm(other)),
        }
    }

    fn tag(&self, payload: &[u8]) -> Result<Vec<u8>> {
        let tag = match self.alg {
            Alg::HS256 => {
                let mut mac = HmacSha256::new_from_slice(&self.secret)
                    .map_err(|error| Error::Signing(error.to_string()))?;
                mac.update(payload);
                mac.finalize().into_bytes().to_vec()
            }
            Alg::HS384 => {
                let mut mac = HmacSha384::new_from_slice(&self.secret)
                    .map_err(|error| Error::Signing(error.to_string()))?;
                mac.update(payload);
                mac.finalize().into_bytes().to_vec()
            }
            Alg::HS512 => {
                let mut mac = HmacSha512::new_from_slice(&self.secret)
                    .map_err(|error| Error::Signing(error.to_string()))?;
                mac.update(payload);
                mac.finalize().into_bytes().to_vec()
            }
            // Constructor admits HS* only
            other => return Err(Error::UnsupportedAlgorithm(other)),
        };

        Ok(tag)
    }

    fn check(&self, payload: &[u8], tag: &[u8]) -> bool {
        match self.alg {
            Alg::HS256 => match HmacSha256::new_from_slice(&self.secret) {
                Ok(mut mac) => {
                    mac.update(payload);
                    mac.verify_slice(tag).is_ok()
                }
                Err(_) => false,
            },
            Alg::HS384 => match HmacSha384::new_from_slice(&self.secret) {
                Ok(mut mac) => {
                    mac.update(payload);
                    mac.verify_slice(tag).is_ok()
                }
                Err(_) => false,
            },
            Alg::HS512 => match HmacSha512::new_from_slice(&self.secret) {
                Ok(mut mac) => {
                    mac.update(payload);
                    mac.verify_slice(tag).is_ok()
                }
                Err(_) => false,
            },
            _ => false,
        }
    }
}

impl Signer for HmacSigner {
    fn alg(&self) -> Alg {
        self.alg
    }

    fn sign(&self, payload: &[u8]) -> Result<String> {
        Ok(b64::encode(self.tag(payload)?))
    }

    fn verify(&self, payload: &[u8], signature: &str) -> bool {
        let Ok(decoded) = b64::decode(signature) else {
            return false;
        };

        self.check(payload, &decoded)
    }
}

use crate::alg::Alg;
use crate::b64;
use crate::crypto::Signer;
use crate::error::Result;

/// A deliberately weak provider for exercising token plumbing without real
/// key material: the "signature" is the byte-reversed payload.
pub struct ReverseSigner {
    alg: Alg,
}

impl ReverseSigner {
    pub fn new(alg: Alg) -> Self {
        ReverseSigner { alg }
    }
}

impl Signer for ReverseSigner {
    fn alg(&self) -> Alg {
        self.alg
    }

    fn sign(&self, payload: &[u8]) -> Result<String> {
        let reversed: Vec<u8> = payload.iter().rev().copied().collect();
        Ok(b64::encode(reversed))
    }

    fn verify(&self, payload: &[u8], signature: &str) -> bool {
        let Ok(decoded) = b64::decode(signature) else {
            return false;
        };

        let expected: Vec<u8> = payload.iter().rev().copied().collect();
        decoded == expected
    }
}

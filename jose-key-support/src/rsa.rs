use std::fs;
use std::path::Path;
use std::sync::Arc;

use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::{Sha256, Sha384, Sha512};
use zeroize::Zeroizing;

use jose::alg::Alg;
use jose::b64;
use jose::crypto::hash::Hash;
use jose::crypto::Signer;
use jose::error::{Error, Result};

use crate::passphrase::PassphraseSource;

/// An RSA key pair, or the public half alone for verify-only use.
///
/// A keypair is read-only once constructed, so several providers (one per
/// RS* variant, say) may share one behind an [`Arc`] without locking.
pub struct RsaKeypair {
    public: RsaPublicKey,
    private: Option<RsaPrivateKey>,
}

impl RsaKeypair {
    /// Generate a fresh key pair with the standard public exponent 65537.
    ///
    /// Sizes that are zero or not a multiple of 1024 bits are rejected
    /// outright; sub-1024 RSA keys are considered insecure.
    pub fn generate(bits: usize) -> Result<Self> {
        if bits == 0 || bits % 1024 != 0 {
            return Err(Error::InvalidKeySize(bits));
        }

        debug!("generating {bits}-bit RSA key pair");

        let private = RsaPrivateKey::new(&mut rand::thread_rng(), bits)
            .map_err(|error| Error::KeyGeneration(error.to_string()))?;

        Ok(RsaKeypair::from(private))
    }

    /// Wrap the public half of a key pair; the resulting keypair can verify
    /// but never sign.
    pub fn from_public(public: RsaPublicKey) -> Self {
        RsaKeypair {
            public,
            private: None,
        }
    }

    /// Load a private key from a PEM file, PKCS#8 (encrypted or not) or
    /// unencrypted PKCS#1.
    ///
    /// The three load failures stay distinguishable: an unreadable path is
    /// [`Error::KeyIo`], an encrypted key with no passphrase source is
    /// [`Error::PassphraseRequired`], and anything that fails to parse or
    /// decrypt is [`Error::KeyParse`]. No retry happens here; a caller that
    /// wants to re-prompt simply calls again.
    pub fn load_pem<P: AsRef<Path>>(path: P, passphrase: PassphraseSource<'_>) -> Result<Self> {
        let pem = fs::read_to_string(path.as_ref())?;

        // Matches the PKCS#8 "ENCRYPTED PRIVATE KEY" label and also the
        // legacy "Proc-Type: 4,ENCRYPTED" header; only the former can be
        // decrypted here, so a legacy-encrypted PKCS#1 key ends in KeyParse.
        let private = if pem.contains("ENCRYPTED") {
            let callback = passphrase.ok_or(Error::PassphraseRequired)?;

            let passphrase = callback().unwrap_or_else(|error| {
                // A failing callback deliberately degrades to an empty
                // passphrase so the decrypt step reports the mismatch.
                warn!("passphrase callback failed: {error}");
                Zeroizing::new(String::new())
            });

            RsaPrivateKey::from_pkcs8_encrypted_pem(&pem, passphrase.as_bytes())
                .map_err(|error| Error::KeyParse(error.to_string()))?
        } else {
            RsaPrivateKey::from_pkcs8_pem(&pem)
                .or_else(|_| RsaPrivateKey::from_pkcs1_pem(&pem))
                .map_err(|error| Error::KeyParse(error.to_string()))?
        };

        Ok(RsaKeypair::from(private))
    }

    /// Byte length of the modulus, which is also the raw signature length.
    pub fn size(&self) -> usize {
        self.public.size()
    }

    pub fn public(&self) -> &RsaPublicKey {
        &self.public
    }

    pub fn private(&self) -> Option<&RsaPrivateKey> {
        self.private.as_ref()
    }
}

impl From<RsaPrivateKey> for RsaKeypair {
    fn from(private: RsaPrivateKey) -> Self {
        RsaKeypair {
            public: private.to_public_key(),
            private: Some(private),
        }
    }
}

/// Signature provider for the RS256/RS384/RS512 algorithms: digest the
/// message with the algorithm's hash, then raw PKCS#1 v1.5 sign/verify.
pub struct RsaSigner {
    alg: Alg,
    hash: Hash,
    key: Arc<RsaKeypair>,
    key_size: usize,
}

impl RsaSigner {
    /// Bind an algorithm to a (possibly shared) keypair. Anything outside
    /// the three RSA variants fails here, not at first use.
    pub fn new(alg: Alg, key: Arc<RsaKeypair>) -> Result<Self> {
        let hash = match alg {
            Alg::RS256 => Hash::Sha256,
            Alg::RS384 => Hash::Sha384,
            Alg::RS512 => Hash::Sha512,
            other => return Err(Error::UnsupportedAlgorithm(other)),
        };

        let key_size = key.size();

        Ok(RsaSigner {
            alg,
            hash,
            key,
            key_size,
        })
    }

    /// Raw signature length in bytes for this provider's key.
    pub fn key_size(&self) -> usize {
        self.key_size
    }

    fn padding(&self) -> Pkcs1v15Sign {
        match self.hash {
            Hash::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
            Hash::Sha384 => Pkcs1v15Sign::new::<Sha384>(),
            Hash::Sha512 => Pkcs1v15Sign::new::<Sha512>(),
        }
    }
}

impl Signer for RsaSigner {
    fn alg(&self) -> Alg {
        self.alg
    }

    fn sign(&self, payload: &[u8]) -> Result<String> {
        let digest = self.hash.digest(payload);

        let private = self.key.private().ok_or(Error::MissingPrivateKey)?;
        let signature = private
            .sign(self.padding(), &digest)
            .map_err(|error| Error::Signing(error.to_string()))?;

        Ok(b64::encode(signature))
    }

    fn verify(&self, payload: &[u8], signature: &str) -> bool {
        let Ok(decoded) = b64::decode(signature) else {
            return false;
        };

        let digest = self.hash.digest(payload);

        self.key
            .public()
            .verify(self.padding(), &digest, &decoded)
            .is_ok()
    }
}

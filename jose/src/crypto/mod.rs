pub mod hash;

use crate::alg::Alg;
use crate::error::Result;

/// This trait must be implemented by a struct that encapsulates cryptographic
/// key material for one signing algorithm. The trait represents the minimum
/// required capability for producing the signature segment of a compact JOSE
/// token, and for verifying such signatures.
///
/// Implementations bind exactly one [`Alg`] at construction time and are
/// immutable afterwards, so a provider may be shared freely between threads.
pub trait Signer: Send + Sync {
    /// The algorithm this provider was constructed with. Its string form is
    /// what ends up in the `alg` field of a token header.
    fn alg(&self) -> Alg;

    /// Sign a message, returning the base64url-encoded signature.
    ///
    /// A failing cryptographic primitive or a verify-only key is a hard
    /// error; an empty signature is never silently returned.
    fn sign(&self, payload: &[u8]) -> Result<String>;

    /// Verify an alleged base64url-encoded signature over a message.
    ///
    /// Both the signature and the message are untrusted input, so this never
    /// faults: a signature that does not decode, has the wrong length or
    /// fails the primitive simply yields `false`.
    fn verify(&self, payload: &[u8], signature: &str) -> bool;
}

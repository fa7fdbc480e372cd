pub mod alg;
pub mod b64;
pub mod claims;
pub mod crypto;
pub mod error;
pub mod token;

pub use alg::{Alg, KeyFamily};
pub use claims::Claims;
pub use crypto::Signer;
pub use error::{Error, Result};
pub use token::{Header, Token};

#[cfg(test)]
mod tests;

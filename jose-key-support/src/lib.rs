#[macro_use]
extern crate log;

pub mod ecdsa;
pub mod hmac;
pub mod passphrase;
pub mod rsa;

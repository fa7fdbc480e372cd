use zeroize::Zeroizing;

/// A caller-supplied source for the passphrase of an encrypted key.
///
/// The callback is invoked at most once per load attempt. It either produces
/// an owned passphrase buffer (wiped on drop) or fails with its own error,
/// e.g. when the user cancels an interactive prompt. A failing callback is
/// not propagated: the loader proceeds with a zero-length passphrase, so the
/// attempt ends in the decrypt step's own mismatch error.
pub type PassphraseCallback = dyn Fn() -> anyhow::Result<Zeroizing<String>> + Send + Sync;

/// `None` means no passphrase can be obtained at all; loading an encrypted
/// key then fails with [`jose::Error::PassphraseRequired`], which is
/// distinguishable from every other load failure.
pub type PassphraseSource<'a> = Option<&'a PassphraseCallback>;

/// Shorthand for loading keys that are expected to be unencrypted.
pub const NO_PASSPHRASE: PassphraseSource<'static> = None;

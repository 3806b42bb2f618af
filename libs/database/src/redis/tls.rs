use rustls::crypto::{CryptoProvider, aws_lc_rs};
use tracing::debug;

/// Install aws-lc-rs as the process-wide rustls provider, unless one is
/// already set.
///
/// rustls refuses to pick a provider on its own when more than one backend
/// is compiled in, and the `rediss://` handshake would then panic. Safe to
/// call any number of times from any thread.
pub fn install_crypto_provider() {
    if CryptoProvider::get_default().is_some() {
        return;
    }

    // Losing a race to another installer is fine: a provider is set either way.
    if aws_lc_rs::default_provider().install_default().is_ok() {
        debug!("Installed aws-lc-rs as the rustls crypto provider");
    }
}

//! Credential-selection capability of the hosting environment.

use async_trait::async_trait;

/// Interactive credential selection exposed by some hosting environments.
///
/// The premium model tier may require the user to pick a billing-backed
/// credential before a generation can run. Hosts that offer a selection
/// dialog implement this trait; tests stub it. Futures are `?Send` because
/// browser futures are not `Send`.
#[async_trait(?Send)]
pub trait CredentialHost {
    /// Whether a credential is currently selected.
    async fn has_credential(&self) -> bool;

    /// Opens the interactive credential-selection flow.
    ///
    /// Callers proceed optimistically after this resolves; there is no
    /// re-verification.
    async fn request_credential(&self);
}

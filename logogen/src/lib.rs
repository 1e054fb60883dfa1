#![warn(missing_docs)]
//! LogoGen - AI logo generation via the Gemini image models.
//!
//! This crate turns a plain-text brand description into a generated logo
//! image. It wraps a single `generateContent` call to the Gemini API,
//! normalizes the response into a self-contained [`GeneratedLogo`], and
//! exposes the model-tier choice as a closed enum.
//!
//! # Quick Start
//!
//! ```no_run
//! use logogen::{LogoClient, LogoModel};
//!
//! #[tokio::main]
//! async fn main() -> logogen::Result<()> {
//!     let client = LogoClient::builder().build()?;
//!     let logo = client
//!         .generate("A minimalist geometric fox head", LogoModel::Flash)
//!         .await?;
//!     logo.save("fox.png")?;
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod gemini;
mod types;

pub use credentials::CredentialHost;
pub use error::{Error, Result};
pub use gemini::{LogoClient, LogoClientBuilder};
pub use types::{GeneratedLogo, LogoModel};

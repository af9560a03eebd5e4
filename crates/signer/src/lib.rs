pub mod server;
pub mod error;
pub mod signing;

pub use server::{AppState, SigningRequestBody, run, router};
pub use error::SignerServerError;
pub use signing::{
    ArtifactSigner, RsaSigner, Secp256k1Signer, SignOutcome, SignerDispatch, SignerRegistry,
};

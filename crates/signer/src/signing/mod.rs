mod signer;
mod secp256k1;
mod rsa;
mod dispatch;
mod registry;

pub use signer::ArtifactSigner;
pub use secp256k1::Secp256k1Signer;
pub use self::rsa::RsaSigner;
pub use dispatch::{SignOutcome, SignerDispatch};
pub use registry::SignerRegistry;

use anyhow::Result;
use k256::ecdsa::{SigningKey, signature::hazmat::PrehashSigner};
use sha2::{Sha256, Digest};

use super::signer::ArtifactSigner;

/// ECDSA signer using the secp256k1 curve.
///
/// Created from a seed string — the SHA-256 hash of the seed
/// becomes the 32-byte private key. The payload is hashed with
/// SHA-256 before signing.
pub struct Secp256k1Signer {
    signing_key: SigningKey,
}

impl Secp256k1Signer {
    pub fn from_seed(seed: &str) -> Result<Self> {
        let hash = Sha256::digest(seed.as_bytes());
        let signing_key = SigningKey::from_bytes((&hash).into())
            .map_err(|e| anyhow::anyhow!("invalid seed: {e}"))?;
        Ok(Self { signing_key })
    }
}

impl ArtifactSigner for Secp256k1Signer {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        let digest = Sha256::digest(data);
        let (signature, _): (k256::ecdsa::Signature, _) = self
            .signing_key
            .sign_prehash(&digest)
            .map_err(|e| anyhow::anyhow!("secp256k1 sign_prehash failed: {e}"))?;
        Ok(signature.to_bytes().to_vec())
    }

    fn public_key_bytes(&self) -> Vec<u8> {
        self.signing_key
            .verifying_key()
            .to_encoded_point(true)
            .as_bytes()
            .to_vec()
    }

    fn algorithm(&self) -> &str {
        "secp256k1"
    }
}

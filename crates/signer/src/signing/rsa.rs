use anyhow::{Context, Result};
use rand_chacha::ChaCha20Rng;
use rand_chacha::rand_core::SeedableRng;
use rsa::pkcs1v15::SigningKey;
use rsa::pkcs8::EncodePublicKey;
use rsa::signature::{Signer, SignatureEncoding};
use rsa::RsaPrivateKey;
use sha2::{Sha256, Digest};

use super::signer::ArtifactSigner;

const RSA_KEY_BITS: usize = 2048;

/// RSA PKCS#1 v1.5 signer with SHA-256 digest.
///
/// Created from a seed string — the SHA-256 hash of the seed
/// seeds a deterministic CSPRNG used for RSA key generation.
/// Registered under the SHA-256 fingerprint of its DER public key,
/// since the full key is too large for a path segment.
pub struct RsaSigner {
    signing_key: SigningKey<Sha256>,
    private_key: RsaPrivateKey,
}

impl RsaSigner {
    pub fn from_seed(seed: &str) -> Result<Self> {
        let hash = Sha256::digest(seed.as_bytes());
        let mut rng = ChaCha20Rng::from_seed(hash.into());
        let private_key = RsaPrivateKey::new(&mut rng, RSA_KEY_BITS)
            .context("generating RSA key from seed")?;
        let signing_key = SigningKey::<Sha256>::new(private_key.clone());
        Ok(Self { signing_key, private_key })
    }
}

impl ArtifactSigner for RsaSigner {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        let signature = self.signing_key.sign(data);
        Ok(signature.to_vec())
    }

    fn public_key_bytes(&self) -> Vec<u8> {
        self.private_key
            .to_public_key()
            .to_public_key_der()
            .expect("encoding RSA public key to DER")
            .into_vec()
    }

    fn identifier(&self) -> String {
        let fingerprint = Sha256::digest(self.public_key_bytes());
        format!("0x{}", hex::encode(fingerprint))
    }

    fn algorithm(&self) -> &str {
        "rsa-pkcs1v15-sha256"
    }
}

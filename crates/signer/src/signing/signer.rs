/// Trait for a single signing key held by a registry.
///
/// Implementations are sync — signing is CPU-bound.
/// For async backends (e.g. KMS), use `spawn_blocking`.
pub trait ArtifactSigner: Send + Sync {
    /// Sign raw payload bytes. Returns raw signature bytes.
    fn sign(&self, data: &[u8]) -> anyhow::Result<Vec<u8>>;

    /// Public key bytes (e.g. 33 bytes compressed for secp256k1).
    fn public_key_bytes(&self) -> Vec<u8>;

    /// Hex identifier under which this signer is registered.
    ///
    /// Defaults to the 0x-prefixed hex of the public key bytes;
    /// schemes with large keys override this with a fingerprint.
    fn identifier(&self) -> String {
        format!("0x{}", hex::encode(self.public_key_bytes()))
    }

    /// Algorithm identifier string (e.g. "secp256k1").
    fn algorithm(&self) -> &str;
}

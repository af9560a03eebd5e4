use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;

use super::dispatch::{SignOutcome, SignerDispatch};
use super::signer::ArtifactSigner;

/// Maps identifiers to the signing keys of one scheme.
///
/// Identifiers are stored 0x-prefixed and lowercase; lookups tolerate
/// any case and a missing prefix. A registry only rejects input for
/// identifiers it owns — anything it does not recognize is a decline,
/// so other registries bound to the same route get their turn.
#[derive(Default)]
pub struct SignerRegistry {
    signers: HashMap<String, Arc<dyn ArtifactSigner>>,
}

impl SignerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, signer: Arc<dyn ArtifactSigner>) {
        self.signers.insert(normalise(&signer.identifier()), signer);
    }

    pub fn len(&self) -> usize {
        self.signers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signers.is_empty()
    }
}

impl SignerDispatch for SignerRegistry {
    fn attempt_sign(&self, identifier: &str, data: &str) -> Result<SignOutcome> {
        if identifier.is_empty() {
            return Ok(SignOutcome::InvalidInput);
        }
        let Some(signer) = self.signers.get(&normalise(identifier)) else {
            return Ok(SignOutcome::NotApplicable);
        };
        let Some(payload) = decode_hex_payload(data) else {
            return Ok(SignOutcome::InvalidInput);
        };
        let signature = signer.sign(&payload)?;
        Ok(SignOutcome::Signed(format!("0x{}", hex::encode(signature))))
    }
}

fn normalise(identifier: &str) -> String {
    let stripped = identifier
        .strip_prefix("0x")
        .or_else(|| identifier.strip_prefix("0X"))
        .unwrap_or(identifier);
    format!("0x{}", stripped.to_ascii_lowercase())
}

/// Decodes the `data` field as non-empty hex with an optional 0x prefix.
fn decode_hex_payload(data: &str) -> Option<Vec<u8>> {
    let stripped = data
        .strip_prefix("0x")
        .or_else(|| data.strip_prefix("0X"))
        .unwrap_or(data);
    if stripped.is_empty() {
        return None;
    }
    hex::decode(stripped).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signing::Secp256k1Signer;

    fn registry_with(seed: &str) -> (SignerRegistry, String) {
        let signer = Secp256k1Signer::from_seed(seed).unwrap();
        let identifier = signer.identifier();
        let mut registry = SignerRegistry::new();
        registry.register(Arc::new(signer));
        (registry, identifier)
    }

    #[test]
    fn register_keys_by_identifier() {
        let empty = SignerRegistry::new();
        assert!(empty.is_empty());

        let (registry, _) = registry_with("test-seed");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn known_identifier_signs() {
        let (registry, identifier) = registry_with("test-seed");
        match registry.attempt_sign(&identifier, "deadbeef").unwrap() {
            SignOutcome::Signed(signature) => {
                assert!(signature.starts_with("0x"));
                assert!(signature.len() > 2);
            }
            other => panic!("expected Signed, got {other:?}"),
        }
    }

    #[test]
    fn unknown_identifier_declines() {
        let (registry, _) = registry_with("test-seed");
        let outcome = registry.attempt_sign("0xabcdef", "deadbeef").unwrap();
        assert_eq!(outcome, SignOutcome::NotApplicable);
    }

    #[test]
    fn non_hex_identifier_declines() {
        let (registry, _) = registry_with("test-seed");
        let outcome = registry.attempt_sign("unknown-id", "deadbeef").unwrap();
        assert_eq!(outcome, SignOutcome::NotApplicable);
    }

    #[test]
    fn empty_identifier_is_invalid_input() {
        let (registry, _) = registry_with("test-seed");
        let outcome = registry.attempt_sign("", "deadbeef").unwrap();
        assert_eq!(outcome, SignOutcome::InvalidInput);
    }

    #[test]
    fn non_hex_data_is_invalid_input() {
        let (registry, identifier) = registry_with("test-seed");
        let outcome = registry.attempt_sign(&identifier, "not-hex").unwrap();
        assert_eq!(outcome, SignOutcome::InvalidInput);
    }

    #[test]
    fn empty_data_is_invalid_input() {
        let (registry, identifier) = registry_with("test-seed");
        let outcome = registry.attempt_sign(&identifier, "").unwrap();
        assert_eq!(outcome, SignOutcome::InvalidInput);

        let outcome = registry.attempt_sign(&identifier, "0x").unwrap();
        assert_eq!(outcome, SignOutcome::InvalidInput);
    }

    #[test]
    fn malformed_data_for_unowned_identifier_still_declines() {
        // Precondition checks only apply once ownership is established.
        let (registry, _) = registry_with("test-seed");
        let outcome = registry.attempt_sign("0xabcdef", "not-hex").unwrap();
        assert_eq!(outcome, SignOutcome::NotApplicable);
    }

    #[test]
    fn lookup_tolerates_case_and_missing_prefix() {
        let (registry, identifier) = registry_with("test-seed");

        let upper = identifier.to_ascii_uppercase();
        assert!(matches!(
            registry.attempt_sign(&upper, "deadbeef").unwrap(),
            SignOutcome::Signed(_)
        ));

        let bare = identifier.strip_prefix("0x").unwrap();
        assert!(matches!(
            registry.attempt_sign(bare, "deadbeef").unwrap(),
            SignOutcome::Signed(_)
        ));
    }

    #[test]
    fn data_prefix_is_optional() {
        let (registry, identifier) = registry_with("test-seed");
        let with_prefix = registry.attempt_sign(&identifier, "0xdeadbeef").unwrap();
        let without_prefix = registry.attempt_sign(&identifier, "deadbeef").unwrap();
        assert_eq!(with_prefix, without_prefix);
    }

    #[test]
    fn identical_inputs_produce_identical_outcomes() {
        let (registry, identifier) = registry_with("test-seed");
        let first = registry.attempt_sign(&identifier, "deadbeef").unwrap();
        let second = registry.attempt_sign(&identifier, "deadbeef").unwrap();
        assert_eq!(first, second);
    }
}

use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use simple_signer::{
    ArtifactSigner, RsaSigner, Secp256k1Signer, SignerDispatch, SignerRegistry, run,
};

#[derive(Parser)]
struct Args {
    #[clap(long, default_value = "127.0.0.1")]
    host: String,
    #[clap(long, default_value = "9000")]
    port: u16,
    /// Comma-separated seeds, one secp256k1 key each.
    #[clap(long, env = "SECP256K1_KEY_SEEDS", value_delimiter = ',')]
    secp256k1_key_seeds: Vec<String>,
    /// Comma-separated seeds, one RSA key each.
    #[clap(long, env = "RSA_KEY_SEEDS", value_delimiter = ',')]
    rsa_key_seeds: Vec<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // One registry per scheme; the sign route consults them in order.
    let mut candidates: Vec<Arc<dyn SignerDispatch>> = Vec::new();

    if !args.secp256k1_key_seeds.is_empty() {
        let mut registry = SignerRegistry::new();
        for seed in &args.secp256k1_key_seeds {
            let signer =
                Secp256k1Signer::from_seed(seed).expect("failed to create secp256k1 signer");
            info!(
                identifier = %signer.identifier(),
                algorithm = signer.algorithm(),
                "loaded signer"
            );
            registry.register(Arc::new(signer));
        }
        candidates.push(Arc::new(registry));
    }

    if !args.rsa_key_seeds.is_empty() {
        let mut registry = SignerRegistry::new();
        for seed in &args.rsa_key_seeds {
            let signer = RsaSigner::from_seed(seed).expect("failed to create RSA signer");
            info!(
                identifier = %signer.identifier(),
                algorithm = signer.algorithm(),
                "loaded signer"
            );
            registry.register(Arc::new(signer));
        }
        candidates.push(Arc::new(registry));
    }

    if candidates.is_empty() {
        panic!("no signing keys configured; pass --secp256k1-key-seeds or --rsa-key-seeds");
    }

    info!(host = %args.host, port = args.port, "listening");
    run(args.host, args.port, candidates).await.unwrap();
}

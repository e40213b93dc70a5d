// src/logging.rs
//
// Journalisation native : fmt sur stderr + filtre RUST_LOG (sinon filtre des réglages).
// En wasm32 aucun abonné n’est installé ; les macros `tracing` restent sans effet.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Installe l’abonné global. false si un abonné était déjà en place.
pub fn init(filtre_defaut: &str) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filtre_defaut));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return false;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    true
}

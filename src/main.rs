use flashcard_format::*;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the card list.
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let records = match std::env::args_os().nth(1) {
        Some(path) => export::import_records(path)?,
        None => sample_records(),
    };

    let set = build_all(records)?;
    display(&set)?;

    Ok(())
}

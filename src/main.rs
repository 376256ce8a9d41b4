use anyhow::Context;
use flashcards_app::Session;
use flashcards_app::random::RngSource;
use flashcards_app::terminal::Console;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so stdout carries only the dialogue
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut session = Session::new(Console::stdio(), RngSource::from_entropy());
    session
        .run()
        .context("Flashcard session ended unexpectedly")?;

    Ok(())
}

use anyhow::Context;
use pow_solver::{Challenge, Criteria, DEFAULT_DIFFICULTY, SAMPLE_DATA};
use std::time::Instant;
use tokio::task;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Usage: `pow-solver [difficulty] [data]`
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pow_solver=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let difficulty = match args.next() {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid difficulty {:?}, expecting an integer", arg))?,
        None => DEFAULT_DIFFICULTY,
    };
    let data = args.next().unwrap_or_else(|| SAMPLE_DATA.to_string());

    let criteria = Criteria::leading_zeros(difficulty)?;
    let challenge = Challenge::with_criteria(data, criteria);
    tracing::info!(difficulty, data = challenge.data(), "solving");

    // Searching is CPU-bound, keep it off the async workers
    let started = Instant::now();
    let solver = challenge.clone();
    let solution = task::spawn_blocking(move || solver.solve()).await?;
    tracing::info!(elapsed = ?started.elapsed(), nonce = %solution.added_value, "solution found");

    solution.verify(challenge.criteria())?;
    println!("{}", serde_json::to_string_pretty(&solution)?);
    Ok(())
}

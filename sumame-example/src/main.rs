use std::io::{Write, stdout};

use sumame::add;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut output = stdout().lock();
    write!(output, "{}", add(10, 10)?)?;
    write!(output, "{}", add("10", "10")?)?;
    write!(output, "{}", add(10.0, 10.5)?)?;
    output.flush()?;

    Ok(())
}

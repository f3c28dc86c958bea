/// Voice QA - audio degradation CLI
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vqa_cli::{build_engine, run, Cli};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output on stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vqa=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let engine = build_engine(&cli)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&engine, cli.command, &mut out)
}

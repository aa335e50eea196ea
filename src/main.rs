use anyhow::Result;
use clap::Parser;
use dbrd_toolkit::cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dbrd_toolkit=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}

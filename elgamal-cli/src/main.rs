mod cli;

fn main() -> anyhow::Result<()> {
    // Log to stderr, `RUST_LOG=debug` shows solver diagnostics.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    cli::run_cli()
}

use anyhow::Context;
use catalog_view::cli::{render_json, render_listing, Cli, Command};
use catalog_view::config::Config;
use catalog_view::logging::init_tracing;
use catalog_view::shutdown::ShutdownHandle;
use catalog_view::ui::runtime;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path).context("loading configuration")?;

    init_tracing(&config.logging);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "catalog-view starting");
    tracing::info!(
        path = %config_path.display(),
        source = if config_path.exists() { "file" } else { "defaults" },
        "configuration resolved"
    );

    let state = cli.initial_state();

    match cli.command {
        Some(Command::List { json }) => {
            if json {
                let out = render_json(state.display()).context("encoding products as JSON")?;
                println!("{out}");
            } else {
                print!("{}", render_listing(state.display(), &config.display));
            }
        }
        None => {
            let shutdown = ShutdownHandle::new();
            shutdown
                .register_signals()
                .context("installing signal handlers")?;
            runtime::run(&config, state, shutdown).context("running terminal UI")?;
        }
    }

    Ok(())
}

use anyhow::Context;
use clap::Parser;
use statelink::cli::{Cli, Command};
use statelink::config::Config;
use statelink::counter::{CounterError, CounterStore};
use statelink::logging::{init_tracing, LogTarget};
use statelink::replay::{load_actions, replay};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)?;

    match cli.command() {
        Command::Run => {
            init_tracing(&config.logging.level, LogTarget::File);
            let store = CounterStore::new(config.initial_state.clone());
            statelink::ui::run(&store, &config.ui).context("terminal view failed")?;
        }
        Command::Replay { file } => {
            init_tracing(&config.logging.level, LogTarget::Stderr);
            let store = CounterStore::new(config.initial_state.clone());
            let actions = load_actions::<CounterError>(file)?;
            replay(&store, actions)?;
            println!("{}", serde_json::to_string_pretty(&*store.get_state())?);
        }
        Command::ShowConfig => {
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }
    Ok(())
}

use std::{io, process};

use tracing_subscriber::EnvFilter;

use cli::{
    config::{self, Config},
    run,
};

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}.", e);
            eprintln!("{}", config::USAGE);
            process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    if let Err(e) = run::run(&config, &mut stdout.lock()) {
        eprintln!("Error: {}.", e);
        process::exit(1);
    }
}

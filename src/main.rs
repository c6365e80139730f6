use to_tie_gen::cli;
use tracing::{error, metadata::LevelFilter};
use tracing_subscriber::{prelude::*, EnvFilter};

fn main() {
    let subscriber = tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr));
    tracing::subscriber::set_global_default(subscriber)
        .expect("cannot set default tracing subscriber");

    let command_line_interface = cli::CommandLineInterface::load();
    if let Err(err) = command_line_interface.run() {
        error!("{err:#}");
        std::process::exit(1);
    }
}

use arbor::{app, cli, config, print, util};
use tracing_subscriber::EnvFilter;

fn main() -> util::Result<()> {
    let cli_options = cli::Options::parse_from_cli();

    if cli_options.print {
        return print_forest(&cli_options);
    }

    let mut app = app::App::create(&cli_options)?;

    app.run()?;

    Ok(())
}

// Non-interactive mode, logs go to stderr
fn print_forest(cli_options: &cli::Options) -> util::Result<()> {
    let settings = config::Settings::load(cli_options)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&settings.log_level)?)
        .with_writer(std::io::stderr)
        .init();

    let forest = app::load_forest(&settings)?;
    tracing::info!(roots = forest.len(), "Printing forest");

    print::write(&mut std::io::stdout().lock(), &forest)?;

    Ok(())
}

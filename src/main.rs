use clap::Parser;
use loop_styles::utils::{logger, validation::Validate};
use loop_styles::{CliConfig, ConsoleReporter, LoopError, Session, TokenReader};
use std::io;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting loop-styles");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!("❌ Run failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), LoopError> {
    config.validate()?;
    let settings = config.resolve()?;

    let stdin = io::stdin();
    let source = TokenReader::new(stdin.lock());
    let reporter = ConsoleReporter::new(io::stdout().lock());
    let mut session = Session::with_settings(source, reporter, settings.bounds, settings.messages);

    match config.style {
        Some(style) => {
            let outcome = session.run_style(style)?;
            tracing::info!("✅ {} loop finished: {:?}", style, outcome);
        }
        None => {
            let outcomes = session.run_all()?;
            tracing::info!("✅ Walkthrough finished after {} loops", outcomes.len());
        }
    }

    Ok(())
}

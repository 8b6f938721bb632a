use anyhow::Context;
use clap::Parser;
use golf_stats::utils::{logger, validation::Validate};
use golf_stats::{load_index, CliConfig, FileSource, GolfError, Session, TomlConfig};
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let settings = match &config.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(settings) => settings,
            Err(e) => exit_with(&e),
        },
        None => TomlConfig::default(),
    };

    // 初始化日誌
    if config.log_json || settings.json_logs() {
        logger::init_json_logger(settings.log_level());
    } else {
        logger::init_cli_logger(config.verbose, settings.log_level());
    }

    tracing::info!("Starting golf-stats");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate().and_then(|_| settings.validate()) {
        exit_with(&e);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let path = match config.input.as_deref().or(settings.input_path()) {
        Some(path) => path.to_string(),
        None => ask_input_file(&mut input, &mut stdout)?,
    };

    let source = FileSource::new(&path);
    tracing::debug!("Loading rounds from {}", source.path().display());
    let index = match load_index(&source) {
        Ok(index) => index,
        Err(e) => exit_with(&e),
    };

    let session = Session::with_prompt(&index, settings.prompt());
    let stats = match session.run(input, &mut stdout, &mut io::stderr()) {
        Ok(stats) => stats,
        Err(e) => exit_with(&e),
    };

    tracing::info!(
        "Session closed after {} commands ({} failed)",
        stats.commands,
        stats.failures
    );
    Ok(())
}

fn ask_input_file<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> anyhow::Result<String> {
    write!(out, "Input file: ")?;
    out.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read the input file name")?;
        if read == 0 {
            anyhow::bail!("No input file name given");
        }
        if let Some(name) = line.split_whitespace().next() {
            return Ok(name.to_string());
        }
    }
}

/// Prints the one diagnostic line; details only reach the log when enabled.
fn exit_with(e: &GolfError) -> ! {
    tracing::debug!(
        "{} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = if e.is_fatal() { 1 } else { 0 };
    std::process::exit(exit_code);
}

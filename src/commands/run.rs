use crate::config::{
    load_config, load_config_from_path, validate_config_result, ChainConfig, ConfigOverrides,
};
use crate::output::{create_writer, ChainReport, OutputFormat};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Everything `shortchain run` needs, gathered from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub config: Option<PathBuf>,
    pub overrides: ConfigOverrides,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub trace: bool,
    pub plain: bool,
}

/// Side-effecting entry point: load config, run the chain, write the report.
pub fn handle_run(run_config: RunConfig) -> Result<ChainReport> {
    let base = match &run_config.config {
        Some(path) => load_config_from_path(path).map_err(|e| e.into_anyhow())?,
        None => load_config(),
    };

    let report = execute_chain(
        base.with_overrides(run_config.overrides),
        run_config.trace,
    )?;

    let sink: Box<dyn Write> = match &run_config.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create output file {}", path.display())
        })?)),
        None => Box::new(io::stdout().lock()),
    };
    // Files never get ANSI escapes, whatever the terminal supports.
    let plain = run_config.plain || run_config.output.is_some();
    create_writer(run_config.format, sink, plain).write_report(&report)?;

    Ok(report)
}

/// Validate a config, run its chain and summarize the run. No I/O.
pub fn execute_chain(config: ChainConfig, include_trace: bool) -> Result<ChainReport> {
    let resolved = validate_config_result(&config)?;
    let chain = resolved.to_chain();

    log::info!(
        "Running chain of {} steps from {}",
        chain.len(),
        resolved.initial
    );
    let trace = chain.run_with_trace(resolved.initial);
    log::info!("Chain finished after {} steps: {:?}", trace.invoked(), trace.result());

    Ok(ChainReport::from_trace(
        &trace,
        chain.step_names(),
        include_trace,
    ))
}

use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use lmpreorder::{
    core::io::{lammps::LammpsDataFile, traits::DataFile},
    engine::progress::ProgressReporter,
    workflows::reorder::{self, ReorderReport},
};
use std::path::Path;
use tracing::{debug, info, warn};

pub fn run(config: &AppConfig, progress_handler: &CliProgressHandler) -> Result<()> {
    info!("Loading input data file from {:?}", &config.input_path);
    let document =
        LammpsDataFile::read_from_path(&config.input_path).map_err(|e| CliError::FileParsing {
            path: config.input_path.clone(),
            source: e.into(),
        })?;
    debug!("Read {} line(s).", document.len());

    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core reorder workflow...");
    let result = reorder::run(&document, &config.core_config, &reporter);
    progress_handler.clear();
    let result = result?;

    log_report(&result.report);

    info!("Writing reordered data file to {:?}", &config.output_path);
    LammpsDataFile::write_to_path(&result.document, &config.output_path).map_err(|e| {
        CliError::FileWriting {
            path: config.output_path.clone(),
            source: e.into(),
        }
    })?;

    print_summary(&result.report, &config.output_path);
    Ok(())
}

fn log_report(report: &ReorderReport) {
    let mapping: Vec<String> = report
        .mapping
        .iter()
        .map(|(old, new)| format!("{}->{}", old, new))
        .collect();
    info!("Type mapping (old->new): {}", mapping.join(", "));
    info!(
        "Symbols read from {:?}; 'Atoms' type column {} ({}).",
        report.symbol_source,
        report.type_column,
        if report.type_column_detected {
            "auto-detected"
        } else {
            "given"
        }
    );
    for (section, rows) in &report.remapped {
        info!("Remapped {} row(s) of '{}'.", rows, section);
    }
    for section in &report.rewritten {
        info!("Rewrote '{}'.", section);
    }
    for warning in &report.warnings {
        warn!("{}", warning);
    }
}

fn print_summary(report: &ReorderReport, output_path: &Path) {
    if !report.warnings.is_empty() {
        println!(
            "[lmp-reorder] Completed with {} warning(s); rerun with -v for details.",
            report.warnings.len()
        );
    }
    println!("[lmp-reorder] ✓ wrote {}", output_path.display());
}

use crate::core::models::document::{Document, Splice};
use crate::core::models::mapping::IdMapping;
use crate::core::models::section::SectionKind;
use crate::core::models::symbols::{MassTable, TypeId, TypeSymbolMap};
use crate::engine::config::{ReorderConfig, TypeColumn};
use crate::engine::detect::infer_type_column;
use crate::engine::error::EngineError;
use crate::engine::locate::SectionIndex;
use crate::engine::mapping::build_mapping;
use crate::engine::metadata::{read_declared_type_count, read_masses, read_type_labels};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::remap::remap_columns;
use crate::engine::rewrite::{plan_masses, plan_new_type_labels, plan_type_labels};
use std::fmt;
use tracing::{info, instrument, warn};

/// Where the old type symbols were read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolSource {
    TypeLabels,
    MassComments,
    None,
}

/// Non-fatal conditions encountered during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderWarning {
    MassDefaulted { new_id: TypeId, symbol: String },
    UnverifiedIdentityMapping,
    PairIJSingleColumn { rows: usize },
}

impl fmt::Display for ReorderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MassDefaulted { new_id, symbol } => write!(
                f,
                "no mass recorded for '{}' (new type {}); wrote 0.0",
                symbol, new_id
            ),
            Self::UnverifiedIdentityMapping => write!(
                f,
                "file carries no type symbols; existing ids were assumed to follow the requested order"
            ),
            Self::PairIJSingleColumn { rows } => write!(
                f,
                "only the second type column of {} 'PairIJ Coeffs' row(s) was remapped",
                rows
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReorderReport {
    pub mapping: IdMapping,
    pub symbol_source: SymbolSource,
    /// 0-based type column used for the `Atoms` section.
    pub type_column: usize,
    pub type_column_detected: bool,
    /// Rows rewritten per remapped section, in file order of processing.
    pub remapped: Vec<(SectionKind, usize)>,
    pub rewritten: Vec<SectionKind>,
    pub warnings: Vec<ReorderWarning>,
}

#[derive(Debug, Clone)]
pub struct ReorderResult {
    pub document: Document,
    pub report: ReorderReport,
}

struct Metadata {
    symbols: TypeSymbolMap,
    source: SymbolSource,
    masses: MassTable,
}

#[instrument(skip_all, name = "reorder_workflow")]
pub fn run(
    document: &Document,
    config: &ReorderConfig,
    reporter: &ProgressReporter,
) -> Result<ReorderResult, EngineError> {
    info!(
        "Reordering {} atom type(s) to [{}].",
        config.order.len(),
        config.order
    );
    let mut working = document.clone();
    let mut warnings = Vec::new();

    // === Phase 1: Locate sections ===
    reporter.report(Progress::PhaseStart {
        name: "Locating sections",
    });
    let index = SectionIndex::scan(&working);
    let atoms_header = index
        .header(SectionKind::Atoms)
        .ok_or(EngineError::MissingRequiredSection(SectionKind::Atoms))?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Read symbol and mass metadata ===
    reporter.report(Progress::PhaseStart {
        name: "Reading metadata",
    });
    let metadata = read_metadata(&working, &index)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Build the id mapping ===
    reporter.report(Progress::PhaseStart {
        name: "Building mapping",
    });
    let mapping = build_mapping(&metadata.symbols, &config.order)?;
    if metadata.symbols.is_empty() {
        warnings.push(ReorderWarning::UnverifiedIdentityMapping);
    }
    check_declared_count(&working, &index, config.order.len())?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 4: Remap type columns ===
    reporter.report(Progress::PhaseStart {
        name: "Remapping columns",
    });
    let (type_column, type_column_detected) = match config.type_column {
        TypeColumn::Index(column) => (column, false),
        TypeColumn::Auto => (
            infer_type_column(&working, atoms_header, &mapping.old_ids())?,
            true,
        ),
    };
    let remapped = remap_sections(
        &mut working,
        &index,
        atoms_header,
        type_column,
        &mapping,
        config,
        reporter,
        &mut warnings,
    )?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 5: Rewrite metadata sections ===
    reporter.report(Progress::PhaseStart {
        name: "Rewriting metadata",
    });
    let rewritten = rewrite_metadata(&mut working, &index, &metadata, config, &mut warnings)?;
    for warning in &warnings {
        warn!("{}", warning);
        reporter.report(Progress::Message(format!("warning: {}", warning)));
    }
    reporter.report(Progress::PhaseFinish);

    info!(
        "Workflow complete. Remapped {} section(s), rewrote {} section(s).",
        remapped.len(),
        rewritten.len()
    );

    Ok(ReorderResult {
        document: working,
        report: ReorderReport {
            mapping,
            symbol_source: metadata.source,
            type_column,
            type_column_detected,
            remapped,
            rewritten,
            warnings,
        },
    })
}

fn read_metadata(document: &Document, index: &SectionIndex) -> Result<Metadata, EngineError> {
    let labels = match index.header(SectionKind::AtomTypeLabels) {
        Some(header) => read_type_labels(document, header)?,
        None => TypeSymbolMap::new(),
    };
    let (masses, mass_symbols) = match index.header(SectionKind::Masses) {
        Some(header) => read_masses(document, header)?,
        None => (MassTable::new(), TypeSymbolMap::new()),
    };

    let (symbols, source) = if !labels.is_empty() {
        (labels, SymbolSource::TypeLabels)
    } else if !mass_symbols.is_empty() {
        (mass_symbols, SymbolSource::MassComments)
    } else {
        (TypeSymbolMap::new(), SymbolSource::None)
    };
    info!(
        "Read {} type symbol(s) from {:?} and {} mass(es).",
        symbols.len(),
        source,
        masses.len()
    );

    Ok(Metadata {
        symbols,
        source,
        masses,
    })
}

fn check_declared_count(
    document: &Document,
    index: &SectionIndex,
    requested: usize,
) -> Result<(), EngineError> {
    match read_declared_type_count(document, index.first_header()) {
        Some(declared) if declared != requested => {
            Err(EngineError::TypeCountMismatch { declared, requested })
        }
        _ => Ok(()),
    }
}

#[allow(clippy::too_many_arguments)]
fn remap_sections(
    document: &mut Document,
    index: &SectionIndex,
    atoms_header: usize,
    type_column: usize,
    mapping: &IdMapping,
    config: &ReorderConfig,
    reporter: &ProgressReporter,
    warnings: &mut Vec<ReorderWarning>,
) -> Result<Vec<(SectionKind, usize)>, EngineError> {
    let coeff_sections: Vec<(SectionKind, usize)> = if config.remap_coeffs {
        SectionKind::COEFFS
            .iter()
            .filter_map(|&kind| index.header(kind).map(|header| (kind, header)))
            .collect()
    } else {
        Vec::new()
    };

    reporter.report(Progress::TaskStart {
        total_steps: 1 + coeff_sections.len() as u64,
    });

    let mut remapped = Vec::with_capacity(1 + coeff_sections.len());
    let rows = remap_columns(
        document,
        SectionKind::Atoms,
        atoms_header,
        &[type_column],
        mapping,
    )?;
    remapped.push((SectionKind::Atoms, rows));
    reporter.report(Progress::TaskIncrement);

    for (kind, header) in coeff_sections {
        let columns = kind.type_columns(config.pair_ij_both_columns);
        let rows = remap_columns(document, kind, header, columns, mapping)?;
        if kind == SectionKind::PairIJCoeffs && !config.pair_ij_both_columns && rows > 0 {
            warnings.push(ReorderWarning::PairIJSingleColumn { rows });
        }
        remapped.push((kind, rows));
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    Ok(remapped)
}

fn rewrite_metadata(
    document: &mut Document,
    index: &SectionIndex,
    metadata: &Metadata,
    config: &ReorderConfig,
    warnings: &mut Vec<ReorderWarning>,
) -> Result<Vec<SectionKind>, EngineError> {
    let mut splices: Vec<Splice> = Vec::with_capacity(2);
    let mut rewritten = Vec::with_capacity(2);

    match index.header(SectionKind::AtomTypeLabels) {
        Some(header) => {
            splices.push(plan_type_labels(document, header, &config.order));
            rewritten.push(SectionKind::AtomTypeLabels);
        }
        None if config.emit_type_labels => {
            let before = index
                .header(SectionKind::Masses)
                .or(index.header(SectionKind::Atoms))
                .unwrap_or(document.len());
            splices.push(plan_new_type_labels(document, before, &config.order));
            rewritten.push(SectionKind::AtomTypeLabels);
        }
        None => {}
    }

    if let Some(header) = index.header(SectionKind::Masses) {
        let (splice, defaulted) = plan_masses(
            document,
            header,
            &metadata.masses,
            &metadata.symbols,
            &config.order,
            config.strict_masses,
        )?;
        warnings.extend(
            defaulted
                .into_iter()
                .map(|d| ReorderWarning::MassDefaulted {
                    new_id: d.new_id,
                    symbol: d.symbol,
                }),
        );
        splices.push(splice);
        rewritten.push(SectionKind::Masses);
    }

    document.apply_splices(splices)?;
    Ok(rewritten)
}

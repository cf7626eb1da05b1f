use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug, Default)]
#[command(
    author = "Tony Kan, Ted Yu",
    version,
    about = "lmp-reorder - Renumber the atom types of a LAMMPS data file to follow a requested symbol order.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the input LAMMPS data file.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Path for the reordered data file. May equal INPUT to edit in place.
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// The new type order as space or comma separated symbols (e.g. "Ni Co" or "Ni,Co").
    #[arg(short, long, value_name = "SYMBOLS")]
    pub order: Option<String>,

    /// 0-based column of the type id in 'Atoms' rows, counting the atom id as column 0.
    /// A negative value requests auto-detection.
    #[arg(short = 't', long, value_name = "INT", allow_negative_numbers = true)]
    pub type_col: Option<i64>,

    /// Also renumber the type ids of the '* Coeffs' sections.
    #[arg(long)]
    pub remap_coeffs: bool,

    /// Insert an 'Atom Type Labels' section when the file has none.
    #[arg(long)]
    pub emit_type_labels: bool,

    /// Fail instead of writing 0.0 when a type has no recorded mass.
    #[arg(long)]
    pub strict_masses: bool,

    /// Renumber both type columns of 'PairIJ Coeffs' rows (default: second column only).
    #[arg(long)]
    pub pair_ij_both: bool,

    /// Path to a configuration file in TOML format.
    /// Defaults to 'config.toml' in the platform configuration directory, if present.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S remap-coeffs=true
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Whether any option that affects the reorder itself was given on the command line.
    pub fn has_reorder_arguments(&self) -> bool {
        self.input.is_some()
            || self.output.is_some()
            || self.order.is_some()
            || self.type_col.is_some()
            || self.remap_coeffs
            || self.emit_type_labels
            || self.strict_masses
            || self.pair_ij_both
            || self.config.is_some()
            || !self.set_values.is_empty()
    }
}

use crate::error::{CliError, Result};
use crate::utils::parser;
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE_NAME: &str = "config.toml";

/// The type order as written in a config file: a single string or a list of symbols.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum FileOrder {
    Text(String),
    Symbols(Vec<String>),
}

impl FileOrder {
    pub fn to_order_string(&self) -> String {
        match self {
            FileOrder::Text(text) => text.clone(),
            FileOrder::Symbols(symbols) => symbols.join(" "),
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub order: Option<FileOrder>,
    pub type_col: Option<i64>,
    pub remap_coeffs: Option<bool>,
    pub emit_type_labels: Option<bool>,
    pub strict_masses: Option<bool>,
    pub pair_ij_both_columns: Option<bool>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// `config.toml` in the platform configuration directory for this tool.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("edu", "caltech", "lmp-reorder")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Applies `KEY=VALUE` overrides. Keys are the same as in the TOML file.
    pub fn apply_set_values(mut self, set_values: &[String]) -> Result<Self> {
        for kv_pair in set_values {
            let (key, value) =
                parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;
            let as_bool =
                || parser::parse_bool(key, value).map_err(|e| CliError::Config(e.to_string()));

            match key {
                "input" => self.input = Some(PathBuf::from(value)),
                "output" => self.output = Some(PathBuf::from(value)),
                "order" => self.order = Some(FileOrder::Text(value.to_string())),
                "type-col" => {
                    self.type_col = Some(
                        parser::parse_integer(key, value)
                            .map_err(|e| CliError::Config(e.to_string()))?,
                    );
                }
                "remap-coeffs" => self.remap_coeffs = Some(as_bool()?),
                "emit-type-labels" => self.emit_type_labels = Some(as_bool()?),
                "strict-masses" => self.strict_masses = Some(as_bool()?),
                "pair-ij-both-columns" => self.pair_ij_both_columns = Some(as_bool()?),
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(self)
    }
}

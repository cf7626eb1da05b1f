use crate::core::models::order::TypeOrder;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// How the type column of the `Atoms` section is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeColumn {
    /// Inferred from the first data row (see [`crate::engine::detect`]).
    #[default]
    Auto,
    /// A fixed 0-based token index, counting the atom id as column 0.
    Index(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderConfig {
    pub order: TypeOrder,
    pub type_column: TypeColumn,
    /// Also renumber the type columns of the `* Coeffs` sections.
    pub remap_coeffs: bool,
    /// Renumber both type columns of `PairIJ Coeffs` rows instead of only the second.
    pub pair_ij_both_columns: bool,
    /// Insert an `Atom Type Labels` section when the file has none.
    pub emit_type_labels: bool,
    /// Fail instead of writing a zero mass when a symbol has no recorded mass.
    pub strict_masses: bool,
}

#[derive(Default)]
pub struct ReorderConfigBuilder {
    order: Option<TypeOrder>,
    type_column: Option<TypeColumn>,
    remap_coeffs: Option<bool>,
    pair_ij_both_columns: Option<bool>,
    emit_type_labels: Option<bool>,
    strict_masses: Option<bool>,
}

impl ReorderConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order(mut self, order: TypeOrder) -> Self {
        self.order = Some(order);
        self
    }
    pub fn type_column(mut self, column: TypeColumn) -> Self {
        self.type_column = Some(column);
        self
    }
    pub fn remap_coeffs(mut self, enabled: bool) -> Self {
        self.remap_coeffs = Some(enabled);
        self
    }
    pub fn pair_ij_both_columns(mut self, enabled: bool) -> Self {
        self.pair_ij_both_columns = Some(enabled);
        self
    }
    pub fn emit_type_labels(mut self, enabled: bool) -> Self {
        self.emit_type_labels = Some(enabled);
        self
    }
    pub fn strict_masses(mut self, enabled: bool) -> Self {
        self.strict_masses = Some(enabled);
        self
    }

    pub fn build(self) -> Result<ReorderConfig, ConfigError> {
        Ok(ReorderConfig {
            order: self.order.ok_or(ConfigError::MissingParameter("order"))?,
            type_column: self.type_column.unwrap_or_default(),
            remap_coeffs: self.remap_coeffs.unwrap_or(false),
            pair_ij_both_columns: self.pair_ij_both_columns.unwrap_or(false),
            emit_type_labels: self.emit_type_labels.unwrap_or(false),
            strict_masses: self.strict_masses.unwrap_or(false),
        })
    }
}

use lmpreorder::engine::config::TypeColumn;

pub struct DefaultsConfig {
    pub type_column: TypeColumn,
    pub remap_coeffs: bool,
    pub emit_type_labels: bool,
    pub strict_masses: bool,
    pub pair_ij_both_columns: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            type_column: TypeColumn::Auto,
            remap_coeffs: false,
            emit_type_labels: false,
            strict_masses: false,
            pair_ij_both_columns: false,
        }
    }
}

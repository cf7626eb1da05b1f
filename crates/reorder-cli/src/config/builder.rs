use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use super::prompt::Prompter;
use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::utils::parser;
use lmpreorder::core::models::order::TypeOrder;
use lmpreorder::engine::config::ReorderConfigBuilder;
use lmpreorder::engine::error::EngineError;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Builds the run configuration from the command line, the config file and the defaults,
/// prompting on the terminal for missing values when no arguments were given.
pub fn build_config(cli: &Cli) -> Result<AppConfig> {
    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
    build_config_with(cli, FileConfig::default_path().as_deref(), &mut prompter)
}

pub(super) fn build_config_with<R: BufRead, W: Write>(
    cli: &Cli,
    default_file: Option<&Path>,
    prompter: &mut Prompter<R, W>,
) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();
    let interactive = !cli.has_reorder_arguments();

    let file_config = load_file_config(cli.config.as_deref(), default_file)?;
    let file_config = file_config.apply_set_values(&cli.set_values)?;

    let mut input = cli.input.clone().or(file_config.input);
    let mut output = cli.output.clone().or(file_config.output);
    let mut order = cli
        .order
        .clone()
        .or(file_config.order.map(|order| order.to_order_string()));
    let mut type_col = cli.type_col.or(file_config.type_col);
    let mut remap_coeffs =
        cli.remap_coeffs || file_config.remap_coeffs.unwrap_or(defaults.remap_coeffs);

    if interactive && (input.is_none() || output.is_none() || order.is_none()) {
        prompter.announce(
            "[lmp-reorder] Interactive prompt (no arguments, configuration incomplete).",
        )?;
        if input.is_none() {
            input = Some(PathBuf::from(prompter.ask_required("Input  .lmp file path")?));
        }
        if output.is_none() {
            output = Some(PathBuf::from(prompter.ask_required("Output .lmp file path")?));
        }
        if order.is_none() {
            order = Some(prompter.ask_required("New element order")?);
        }
        if type_col.is_none() {
            type_col = prompter
                .ask_optional("Type-column index [auto]")?
                .map(|answer| parser::parse_integer("type-col", &answer))
                .transpose()
                .map_err(|e| CliError::Argument(e.to_string()))?;
        }
        if file_config.remap_coeffs.is_none() {
            remap_coeffs = prompter.ask_yes_no("Remap *Coeffs? [y/N]")?;
        }
    }

    let input_path = input.ok_or_else(|| missing("input", "INPUT"))?;
    let output_path = output.ok_or_else(|| missing("output", "OUTPUT"))?;
    let order_text = order.ok_or_else(|| missing("order", "--order"))?;
    let order = TypeOrder::parse(&order_text).map_err(EngineError::from)?;

    let core_config = ReorderConfigBuilder::new()
        .order(order)
        .type_column(type_col.map_or(defaults.type_column, parser::type_column))
        .remap_coeffs(remap_coeffs)
        .emit_type_labels(
            cli.emit_type_labels
                || file_config
                    .emit_type_labels
                    .unwrap_or(defaults.emit_type_labels),
        )
        .strict_masses(
            cli.strict_masses || file_config.strict_masses.unwrap_or(defaults.strict_masses),
        )
        .pair_ij_both_columns(
            cli.pair_ij_both
                || file_config
                    .pair_ij_both_columns
                    .unwrap_or(defaults.pair_ij_both_columns),
        )
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    debug!("Merged configuration: {:?}", core_config);
    Ok(AppConfig {
        input_path,
        output_path,
        core_config,
    })
}

fn load_file_config(explicit: Option<&Path>, default_file: Option<&Path>) -> Result<FileConfig> {
    match (explicit, default_file) {
        (Some(path), _) => FileConfig::from_file(path),
        (None, Some(path)) if path.is_file() => {
            info!("Using default configuration file {:?}", path);
            FileConfig::from_file(path)
        }
        _ => Ok(FileConfig::default()),
    }
}

fn missing(key: &str, flag: &str) -> CliError {
    CliError::Config(format!(
        "A value for '{}' is required either via {} or in the config file.",
        key, flag
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lmpreorder::core::models::order::OrderError;
    use lmpreorder::engine::config::TypeColumn;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn no_input() -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(Vec::new()), Vec::new())
    }

    fn answers(text: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(text.as_bytes().to_vec()), Vec::new())
    }

    fn base_cli() -> Cli {
        Cli {
            input: Some(PathBuf::from("in.lmp")),
            output: Some(PathBuf::from("out.lmp")),
            order: Some("Ni Co".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn cli_arguments_with_defaults_for_the_rest() {
        let app = build_config_with(&base_cli(), None, &mut no_input()).unwrap();
        assert_eq!(app.input_path, PathBuf::from("in.lmp"));
        assert_eq!(app.output_path, PathBuf::from("out.lmp"));

        let cfg = app.core_config;
        assert_eq!(cfg.order.symbols(), ["Ni", "Co"]);
        assert_eq!(cfg.type_column, TypeColumn::Auto);
        assert!(!cfg.remap_coeffs);
        assert!(!cfg.emit_type_labels);
        assert!(!cfg.strict_masses);
        assert!(!cfg.pair_ij_both_columns);
    }

    #[test]
    fn file_values_fill_in_and_cli_wins() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("config.toml");
        fs::write(
            &cfg_path,
            r#"
            input = "from-file.lmp"
            output = "from-file-out.lmp"
            order = "Al Co Ni"
            type-col = 2
            remap-coeffs = true
            pair-ij-both-columns = true
            "#,
        )
        .unwrap();

        let cli = Cli {
            input: Some(PathBuf::from("cli.lmp")),
            order: Some("Co,Ni,Al".to_string()),
            type_col: Some(-1),
            config: Some(cfg_path),
            ..Default::default()
        };
        let app = build_config_with(&cli, None, &mut no_input()).unwrap();

        assert_eq!(app.input_path, PathBuf::from("cli.lmp"));
        assert_eq!(app.output_path, PathBuf::from("from-file-out.lmp"));
        let cfg = app.core_config;
        assert_eq!(cfg.order.symbols(), ["Co", "Ni", "Al"]);
        assert_eq!(cfg.type_column, TypeColumn::Auto);
        assert!(cfg.remap_coeffs);
        assert!(cfg.pair_ij_both_columns);
    }

    #[test]
    fn set_values_override_the_file_but_not_the_cli() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("config.toml");
        fs::write(&cfg_path, "type-col = 3\nstrict-masses = false\n").unwrap();

        let mut cli = base_cli();
        cli.config = Some(cfg_path);
        cli.set_values = vec![
            "type-col=1".to_string(),
            "strict-masses=true".to_string(),
            "order=A B".to_string(),
        ];
        let cfg = build_config_with(&cli, None, &mut no_input())
            .unwrap()
            .core_config;

        assert_eq!(cfg.type_column, TypeColumn::Index(1));
        assert!(cfg.strict_masses);
        assert_eq!(cfg.order.symbols(), ["Ni", "Co"]);
    }

    #[test]
    fn default_file_is_used_only_when_present() {
        let dir = tempdir().unwrap();
        let default_path = dir.path().join("config.toml");

        let cli = Cli::default();
        let err = build_config_with(&cli, Some(&default_path), &mut no_input()).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));

        fs::write(
            &default_path,
            "input = \"a.lmp\"\noutput = \"b.lmp\"\norder = [\"H\", \"C\"]\nremap-coeffs = false\n",
        )
        .unwrap();
        let app = build_config_with(&cli, Some(&default_path), &mut no_input()).unwrap();
        assert_eq!(app.input_path, PathBuf::from("a.lmp"));
        assert_eq!(app.core_config.order.symbols(), ["H", "C"]);
    }

    #[test]
    fn missing_values_with_arguments_are_a_config_error() {
        let cli = Cli {
            input: Some(PathBuf::from("in.lmp")),
            output: Some(PathBuf::from("out.lmp")),
            ..Default::default()
        };
        let err = build_config_with(&cli, None, &mut answers("Ni Co\n")).unwrap_err();
        assert!(matches!(err, CliError::Config(msg) if msg.contains("order")));
    }

    #[test]
    fn interactive_prompt_fills_every_missing_value() {
        let mut prompter = answers("data.lmp\nsorted.lmp\nH, C\n2\ny\n");
        let app = build_config_with(&Cli::default(), None, &mut prompter).unwrap();

        assert_eq!(app.input_path, PathBuf::from("data.lmp"));
        assert_eq!(app.output_path, PathBuf::from("sorted.lmp"));
        let cfg = app.core_config;
        assert_eq!(cfg.order.symbols(), ["H", "C"]);
        assert_eq!(cfg.type_column, TypeColumn::Index(2));
        assert!(cfg.remap_coeffs);
    }

    #[test]
    fn interactive_blank_type_column_means_auto() {
        let mut prompter = answers("data.lmp\nsorted.lmp\nH C\n\n\n");
        let cfg = build_config_with(&Cli::default(), None, &mut prompter)
            .unwrap()
            .core_config;
        assert_eq!(cfg.type_column, TypeColumn::Auto);
        assert!(!cfg.remap_coeffs);
    }

    #[test]
    fn duplicate_symbols_in_order_are_an_invalid_order() {
        let mut cli = base_cli();
        cli.order = Some("Ni Co Ni".to_string());
        let err = build_config_with(&cli, None, &mut no_input()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Engine(EngineError::InvalidOrder(OrderError::Duplicate(ref symbol)))
                if symbol == "Ni"
        ));
    }

    #[test]
    fn empty_order_is_an_invalid_order() {
        let mut cli = base_cli();
        cli.order = Some(" , ".to_string());
        let err = build_config_with(&cli, None, &mut no_input()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Engine(EngineError::InvalidOrder(OrderError::Empty))
        ));
    }

    #[test]
    fn interactive_type_column_must_be_an_integer() {
        let mut prompter = answers("data.lmp\nsorted.lmp\nH C\nsecond\n");
        let err = build_config_with(&Cli::default(), None, &mut prompter).unwrap_err();
        assert!(matches!(err, CliError::Argument(msg) if msg.contains("second")));
    }
}

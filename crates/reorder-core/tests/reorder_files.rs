use lmpreorder::core::io::lammps::LammpsDataFile;
use lmpreorder::core::io::traits::DataFile;
use lmpreorder::core::models::order::TypeOrder;
use lmpreorder::engine::config::{ReorderConfig, ReorderConfigBuilder, TypeColumn};
use lmpreorder::engine::error::EngineError;
use lmpreorder::engine::progress::ProgressReporter;
use lmpreorder::workflows::reorder;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const CO_NI_INPUT: &str = "\
LAMMPS data file via write_data

2 atoms
2 atom types

0.0 10.0 xlo xhi
0.0 10.0 ylo yhi
0.0 10.0 zlo zhi

Atom Type Labels

1 Co
2 Ni

Masses

1 58.93319000
2 58.69340000

Atoms # molecular

1 1 1 0.0 0.0 0.0
";

const CO_NI_EXPECTED: &str = "\
LAMMPS data file via write_data

2 atoms
2 atom types

0.0 10.0 xlo xhi
0.0 10.0 ylo yhi
0.0 10.0 zlo zhi

Atom Type Labels

1 Ni
2 Co

Masses

1 58.69340000 # Ni
2 58.93319000 # Co

Atoms # molecular

1 1 2 0.0 0.0 0.0
";

const CANONICAL: &str = "\
LAMMPS data file via write_data

3 atoms
2 atom types

Atom Type Labels

1 Co
2 Ni

Masses

1 58.93319000 # Co
2 58.69340000 # Ni

Pair Coeffs # lj/cut

1 0.1 2.5
2 0.2 2.6

Atoms # atomic

1 1 0.0 0.0 0.0
2 2 1.2 1.2 1.2
3 1 2.4 2.4 2.4

Velocities

1 0.0 0.0 0.0
2 0.0 0.0 0.0
3 0.0 0.0 0.0
";

const MASS_COMMENTS: &str = "\
LAMMPS data file via write_data

3 atoms
2 atom types

Masses

1 12.01000000 # C
2 1.00800000 # H

Bond Coeffs # harmonic

1 340.0 1.09

Atoms # full

1 1 1 -0.18 0.0 0.0 0.0
2 1 2 0.06 1.09 0.0 0.0
3 1 2 0.06 -0.36 1.03 0.0
";

fn config(order: &str) -> ReorderConfigBuilder {
    ReorderConfigBuilder::new().order(TypeOrder::parse(order).unwrap())
}

fn reorder_file(input: &Path, output: &Path, config: &ReorderConfig) -> Result<(), EngineError> {
    let document = LammpsDataFile::read_from_path(input).unwrap();
    let result = reorder::run(&document, config, &ProgressReporter::new())?;
    LammpsDataFile::write_to_path(&result.document, output).unwrap();
    Ok(())
}

#[test]
fn co_ni_example_is_reordered_end_to_end() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.lmp");
    let output = dir.path().join("out.lmp");
    fs::write(&input, CO_NI_INPUT).unwrap();

    let cfg = config("Ni Co")
        .type_column(TypeColumn::Index(2))
        .build()
        .unwrap();
    reorder_file(&input, &output, &cfg).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), CO_NI_EXPECTED);
    assert_eq!(fs::read_to_string(&input).unwrap(), CO_NI_INPUT);
}

#[test]
fn reorder_and_back_reproduces_a_canonical_file() {
    let dir = tempdir().unwrap();
    let original = dir.path().join("original.lmp");
    let swapped = dir.path().join("swapped.lmp");
    let restored = dir.path().join("restored.lmp");
    fs::write(&original, CANONICAL).unwrap();

    let forward = config("Ni Co").remap_coeffs(true).build().unwrap();
    let backward = config("Co Ni").remap_coeffs(true).build().unwrap();
    reorder_file(&original, &swapped, &forward).unwrap();
    reorder_file(&swapped, &restored, &backward).unwrap();

    let swapped_text = fs::read_to_string(&swapped).unwrap();
    assert_ne!(swapped_text, CANONICAL);
    assert!(swapped_text.contains("\n1 2 0.0 0.0 0.0\n2 1 1.2 1.2 1.2\n3 2 2.4 2.4 2.4\n"));
    assert!(swapped_text.contains("\n2 0.1 2.5\n1 0.2 2.6\n"));
    assert_eq!(fs::read_to_string(&restored).unwrap(), CANONICAL);
}

#[test]
fn in_place_reorder_replaces_the_source_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.lmp");
    fs::write(&path, CANONICAL).unwrap();

    reorder_file(&path, &path, &config("Ni Co").build().unwrap()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("Atom Type Labels\n\n1 Ni\n2 Co\n\n"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn order_with_wrong_cardinality_never_reaches_the_destination() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.lmp");
    let output = dir.path().join("out.lmp");
    fs::write(&input, CANONICAL).unwrap();
    fs::write(&output, "previous contents\n").unwrap();

    let err = reorder_file(&input, &output, &config("Ni Co Al").build().unwrap()).unwrap_err();

    match err {
        EngineError::OrderMismatch { in_order_only, .. } => {
            assert_eq!(in_order_only, vec!["Al"]);
        }
        other => panic!("expected OrderMismatch, got {:?}", other),
    }
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous contents\n");
}

#[test]
fn mass_comment_layout_survives_reorder_and_back() {
    let dir = tempdir().unwrap();
    let original = dir.path().join("original.lmp");
    let swapped = dir.path().join("swapped.lmp");
    let restored = dir.path().join("restored.lmp");
    fs::write(&original, MASS_COMMENTS).unwrap();

    let forward = config("H C")
        .type_column(TypeColumn::Index(2))
        .build()
        .unwrap();
    let backward = config("C H")
        .type_column(TypeColumn::Index(2))
        .build()
        .unwrap();
    reorder_file(&original, &swapped, &forward).unwrap();
    reorder_file(&swapped, &restored, &backward).unwrap();

    let swapped_text = fs::read_to_string(&swapped).unwrap();
    assert!(swapped_text.contains("Masses\n\n1 1.00800000 # H\n2 12.01000000 # C\n\n"));
    assert!(swapped_text.contains("\n1 1 2 -0.18 0.0 0.0 0.0\n2 1 1 0.06 1.09 0.0 0.0\n"));
    assert!(!swapped_text.contains("Atom Type Labels"));
    assert_eq!(fs::read_to_string(&restored).unwrap(), MASS_COMMENTS);
}

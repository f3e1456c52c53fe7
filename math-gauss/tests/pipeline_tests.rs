//! Text cells and system files through to a solve report

use math_audio_gauss::{
    GaussError, MAX_GENERATED_SIZE, SolveReport, SolverConfig, SystemFile, convert_input,
    generate_solvable_system_seeded, solve,
};

#[test]
fn test_cells_to_report() {
    let matrix_cells = ["0", "1", "1", "1"];
    let rhs_cells = ["2", "3"];

    let input = convert_input(&matrix_cells, &rhs_cells, 2).expect("cells parse");
    let solution = solve(&input.matrix, &input.rhs).expect("solvable");
    let report = SolveReport::new(&input.matrix, &input.rhs, &solution, &SolverConfig::default())
        .expect("report");

    assert!(report.accurate);
    assert_eq!(report.original, input.matrix);
    let text = report.to_text();
    assert!(text.contains("x_1 = 1.00"));
    assert!(text.contains("x_2 = 2.00"));
    assert!(text.contains("Swapped rows 1 and 2"));
}

#[test]
fn test_unparsable_cell_never_reaches_solver() {
    let matrix_cells = ["1", "2", "3", "four"];
    let rhs_cells = ["1", "2"];

    let err = convert_input(&matrix_cells, &rhs_cells, 2).expect_err("bad cell");
    assert!(err.is_input_error());
    assert!(err.to_string().contains("matrix cell (2, 2)"));
}

#[test]
fn test_saved_random_system_solves_after_reload() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("random.json");

    let system: SystemFile = generate_solvable_system_seeded(3, 99)
        .expect("generator")
        .into();
    system.to_file(&path).expect("save");

    let loaded = SystemFile::from_file(&path).expect("load");
    assert_eq!(loaded, system);

    let solution = solve(&loaded.matrix, &loaded.rhs).expect("invertible by construction");
    assert_eq!(solution.x.len(), 3);
}

#[test]
fn test_oversized_random_system_is_refused() {
    let size = MAX_GENERATED_SIZE + 2;
    let err = generate_solvable_system_seeded(size, 5).expect_err("size");

    assert!(err.is_dimension_error());
    assert_eq!(
        err.to_string(),
        "system size 12 exceeds the generator limit of 10"
    );
}

#[test]
fn test_singular_file_reports_singular() {
    let json = r#"{"matrix": [[1.0, 2.0], [2.0, 4.0]], "rhs": [1.0, 2.0]}"#;
    let system = SystemFile::from_json(json).expect("valid json");

    let err = solve(&system.matrix, &system.rhs).expect_err("singular");
    assert!(matches!(err, GaussError::SingularMatrix { column: 1 }));
}

#[test]
fn test_mismatched_file_reports_dimension_error() {
    let json = r#"{"matrix": [[1.0, 0.0], [0.0, 1.0]], "rhs": [1.0, 2.0, 3.0]}"#;
    let system = SystemFile::from_json(json).expect("shapes are checked by the solver");

    let err = solve(&system.matrix, &system.rhs).expect_err("mismatch");
    assert!(err.is_dimension_error());
}

use bounded_paths::app::{run_app, AppError, Cli};
use clap::Parser;

#[test]
fn writes_report_for_edge_list_file() {
    let dir = tempfile::tempdir().unwrap();
    let graph_file = dir.path().join("square.edges");
    let report_file = dir.path().join("report.txt");
    std::fs::write(&graph_file, "1 2 10\n1 3 30\n2 4 10\n3 4 10\n").unwrap();

    let cli = Cli::try_parse_from([
        "bounded-paths",
        graph_file.to_str().unwrap(),
        "--start",
        "1",
        "--end",
        "4",
        "--tolerance",
        "2.0",
        "--output",
        report_file.to_str().unwrap(),
        "--quiet",
    ])
    .unwrap();
    run_app(cli).unwrap();

    let report = std::fs::read_to_string(report_file).unwrap();
    assert!(report.contains("Total paths found: 5"));
    assert!(report.contains("Path 0: [1, 2, 4] length=20 hops=2"));
}

#[test]
fn demo_flag_with_parallel_expansion() {
    let dir = tempfile::tempdir().unwrap();
    let report_file = dir.path().join("demo.txt");

    let cli = Cli::try_parse_from([
        "bounded-paths",
        "--demo",
        "-s",
        "1",
        "-e",
        "4",
        "--parallel",
        "-o",
        report_file.to_str().unwrap(),
        "-q",
    ])
    .unwrap();
    run_app(cli).unwrap();

    let report = std::fs::read_to_string(report_file).unwrap();
    assert!(report.contains("Total paths found: 1"));
}

#[test]
fn round_ceiling_surfaces_as_search_error() {
    let cli = Cli::try_parse_from([
        "bounded-paths",
        "--demo",
        "-s",
        "1",
        "-e",
        "4",
        "-t",
        "2.0",
        "--max-rounds",
        "2",
        "-q",
    ])
    .unwrap();
    assert!(matches!(run_app(cli), Err(AppError::Search(_))));
}

#[test]
fn missing_graph_file_is_rejected() {
    let cli = Cli::try_parse_from(["bounded-paths", "/no/such/file.edges", "-s", "1", "-e", "2", "-q"])
        .unwrap();
    assert!(matches!(run_app(cli), Err(AppError::InvalidPath(_))));
}

#[test]
fn graph_file_or_demo_is_required() {
    assert!(Cli::try_parse_from(["bounded-paths", "-s", "1", "-e", "2"]).is_err());
}

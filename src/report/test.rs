use rstest::*;

use super::*;

#[fixture]
fn test_summary() -> NodeSummary {
    return NodeSummary { count: 3, avg_cpu_percent: 41.666666, avg_memory_percent: 100.0 };
}

#[fixture]
fn test_tally() -> NamespaceTally {
    let mut tally = NamespaceTally::new();
    tally.record_container("team-b", SizeBucket::Other);
    tally.record_container("team-a", SizeBucket::XLarge);
    for _ in 0..12 {
        tally.record_container("team-a", SizeBucket::Small);
    }
    return tally;
}

#[rstest]
fn test_header_names_every_bucket() {
    assert_eq!(
        header(),
        "Namespace / Size, small, medium, large, x-large, xx-large, xxx-large, xxxx-large, other"
    );
}

#[rstest]
fn test_render(test_tally: NamespaceTally, test_summary: NodeSummary) {
    let expected = "Namespace / Size, small, medium, large, x-large, xx-large, xxx-large, xxxx-large, other\n\
                    team-a,12,,,1,,,,,\n\
                    team-b,,,,,,,,1,\n\
                    \n\n\n\n\n\
                    Number of nodes 3, Average of CPU limits on nodes: 41.67%, Average of memory limits on nodes: 100.00%\n";
    assert_eq!(render(&test_tally, &test_summary), expected);
}

#[rstest]
fn test_render_zero_is_blank_field() {
    let mut tally = NamespaceTally::new();
    tally.record_container("ns", SizeBucket::Medium);
    let rendered = render(&tally, &NodeSummary::default());
    let row = rendered.lines().nth(1).unwrap();

    let fields: Vec<&str> = row.split(',').collect();
    assert_eq!(fields, vec!["ns", "", "1", "", "", "", "", "", "", ""]);
}

#[rstest]
fn test_render_empty_tally(test_summary: NodeSummary) {
    let rendered = render(&NamespaceTally::new(), &test_summary);
    assert_eq!(rendered.lines().count(), 7);
    assert!(rendered.ends_with("memory limits on nodes: 100.00%\n"));
}

#[rstest]
fn test_write_report(test_tally: NamespaceTally, test_summary: NodeSummary) {
    let dir = tempfile::tempdir().unwrap();
    let config = ReportConfig { output_path: dir.path().join("report.csv") };

    let path = write_report(&config, &test_tally, &test_summary).unwrap();

    assert_eq!(path, config.output_path);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), render(&test_tally, &test_summary));
}

#[rstest]
fn test_write_report_missing_directory(test_tally: NamespaceTally, test_summary: NodeSummary) {
    let dir = tempfile::tempdir().unwrap();
    let config = ReportConfig { output_path: dir.path().join("missing").join("report.csv") };

    let err = write_report(&config, &test_tally, &test_summary).unwrap_err();

    assert!(matches!(err, AuditError::WriteReport { .. }));
}

#[rstest]
fn test_default_path() {
    assert_eq!(ReportConfig::default().output_path, PathBuf::from("cluster_containers.csv"));
}

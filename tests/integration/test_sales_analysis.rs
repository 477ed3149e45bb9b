// 売上集計の統合テスト
use crate::fixtures::{approx_eq, bundled_sales_data, write_sales_csv, RecordingReporter};
use queue_pipeline::{
    core::AnalysisError,
    services::NoOpReporter,
    SalesAnalysis,
};

#[tokio::test]
async fn test_two_row_aggregates() {
    let (_temp_dir, csv_path) = write_sales_csv(&["1,North,A,10,2.00", "2,South,B,5,3.00"]);

    let analysis = SalesAnalysis::load(&csv_path, &NoOpReporter::new())
        .await
        .unwrap();

    assert_eq!(analysis.total_units(), 15);
    assert!(approx_eq(analysis.total_revenue(), 35.0));

    let regions = analysis.revenue_by_region();
    assert!(approx_eq(regions["North"], 20.0));
    assert!(approx_eq(regions["South"], 15.0));

    assert_eq!(analysis.most_sold_item().as_deref(), Some("A"));
    assert!(approx_eq(analysis.average_price(), 2.5));
    assert!(approx_eq(analysis.min_price(), 2.0));
    assert!(approx_eq(analysis.max_price(), 3.0));
}

#[tokio::test]
async fn test_malformed_rows_are_reported_and_excluded() {
    let (_temp_dir, csv_path) = write_sales_csv(&[
        "1,North,A,10,2.00",
        "2,North,A,ten,2.00",
        "3,South,B,5,$3.00",
        "4,South",
        "5,South,B,5,3.00",
    ]);
    let reporter = RecordingReporter::new();

    let analysis = SalesAnalysis::load(&csv_path, &reporter).await.unwrap();

    assert_eq!(analysis.records().len(), 2);
    assert_eq!(analysis.skipped_rows(), 3);
    assert_eq!(reporter.skipped_lines(), vec![3, 4, 5]);

    let loaded = reporter.loaded.lock().unwrap().clone().unwrap();
    assert_eq!(loaded.1, 2);
    assert_eq!(loaded.2, 3);

    assert_eq!(analysis.total_units(), 15);
    assert!(approx_eq(analysis.total_revenue(), 35.0));
}

#[tokio::test]
async fn test_header_only_file() {
    let (_temp_dir, csv_path) = write_sales_csv(&[]);

    let report = SalesAnalysis::load(&csv_path, &NoOpReporter::new())
        .await
        .unwrap()
        .report();

    assert_eq!(report.records, 0);
    assert_eq!(report.total_units, 0);
    assert_eq!(report.most_sold_item, None);
    assert!(approx_eq(report.average_price, 0.0));
}

#[tokio::test]
async fn test_missing_file_is_an_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    let result = SalesAnalysis::load(temp_dir.path().join("absent.csv"), &NoOpReporter::new()).await;

    assert!(matches!(result, Err(AnalysisError::Io { .. })));
}

#[tokio::test]
async fn test_bundled_sales_data() {
    let reporter = RecordingReporter::new();

    let analysis = SalesAnalysis::load(bundled_sales_data(), &reporter)
        .await
        .unwrap();

    assert_eq!(analysis.records().len(), 18);
    assert_eq!(reporter.skipped_lines(), vec![15, 16]);
    assert_eq!(analysis.total_units(), 315);
    assert_eq!(analysis.most_sold_item().as_deref(), Some("Mouse"));
    assert_eq!(analysis.revenue_by_region().len(), 4);
    assert!(analysis.total_revenue() > 0.0);
    assert!(analysis.min_price() <= analysis.average_price());
    assert!(analysis.average_price() <= analysis.max_price());
}

use crate::{
    analysis::{AnalysisReport, SalesAnalysis},
    services::TracingReporter,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Load and summarize a sales record file
pub async fn run_analysis(csv_file: &Path) -> Result<AnalysisReport> {
    let analysis = SalesAnalysis::load(csv_file, &TracingReporter::new())
        .await
        .with_context(|| format!("Failed to analyze {}", csv_file.display()))?;

    Ok(analysis.report())
}

/// Execute the analyze command
pub async fn execute_analyze(csv_file: PathBuf, json: bool) -> Result<()> {
    let report = run_analysis(&csv_file).await?;

    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }

    Ok(())
}

// 売上レコードと区切りファイルからの読み込み

use crate::core::{AnalysisError, AnalysisReporter, AnalysisResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 売上ファイルの1行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub id: String,
    pub region: String,
    pub item: String,
    pub units: i64,
    pub price: f64,
}

impl SalesRecord {
    pub fn new(
        id: impl Into<String>,
        region: impl Into<String>,
        item: impl Into<String>,
        units: i64,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            region: region.into(),
            item: item.into(),
            units,
            price,
        }
    }

    /// 数量 × 単価
    pub fn revenue(&self) -> f64 {
        self.units as f64 * self.price
    }
}

/// 読み込み結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedRecords {
    pub records: Vec<SalesRecord>,
    pub skipped: usize,
}

/// ファイルから売上レコードを読み込む
///
/// 数値に変換できない行や列が欠けた行は警告を報告して読み飛ばす。
/// ファイル自体やヘッダーが読めない場合のみエラーを返す。
pub async fn load_records<R>(path: impl AsRef<Path>, reporter: &R) -> AnalysisResult<LoadedRecords>
where
    R: AnalysisReporter + ?Sized,
{
    let path = path.as_ref();
    let source = path.display().to_string();
    let data = tokio::fs::read(path)
        .await
        .map_err(|e| AnalysisError::io(&source, e))?;

    parse_records(&data, &source, reporter).await
}

/// メモリ上の区切りデータから売上レコードを読み込む
pub async fn parse_records<R>(
    data: &[u8],
    source: &str,
    reporter: &R,
) -> AnalysisResult<LoadedRecords>
where
    R: AnalysisReporter + ?Sized,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(data);
    let headers = reader
        .headers()
        .map_err(|e| AnalysisError::csv(source, e))?
        .clone();

    let mut loaded = LoadedRecords::default();

    for row in reader.records() {
        let parsed = row.and_then(|row| row.deserialize::<SalesRecord>(Some(&headers)));
        match parsed {
            Ok(record) => loaded.records.push(record),
            Err(error) => {
                let line = error.position().map_or(0, |p| p.line());
                loaded.skipped += 1;
                reporter.report_skipped_row(line, &error.to_string()).await;
            }
        }
    }

    reporter
        .report_loaded(source, loaded.records.len(), loaded.skipped)
        .await;

    Ok(loaded)
}

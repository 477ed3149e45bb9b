// 売上レコードの集計

use super::{
    record::{load_records, parse_records, LoadedRecords, SalesRecord},
    report::AnalysisReport,
};
use crate::core::{AnalysisReporter, AnalysisResult};
use std::collections::BTreeMap;
use std::path::Path;

/// 読み込み済みの売上レコードに対する集計
#[derive(Debug, Clone, Default)]
pub struct SalesAnalysis {
    source: String,
    records: Vec<SalesRecord>,
    skipped_rows: usize,
}

impl SalesAnalysis {
    /// ファイルを読み込んで集計器を作成
    pub async fn load<R>(path: impl AsRef<Path>, reporter: &R) -> AnalysisResult<Self>
    where
        R: AnalysisReporter + ?Sized,
    {
        let path = path.as_ref();
        let loaded = load_records(path, reporter).await?;
        Ok(Self::from_loaded(path.display().to_string(), loaded))
    }

    /// メモリ上のデータから集計器を作成
    pub async fn parse<R>(data: &[u8], source: &str, reporter: &R) -> AnalysisResult<Self>
    where
        R: AnalysisReporter + ?Sized,
    {
        let loaded = parse_records(data, source, reporter).await?;
        Ok(Self::from_loaded(source.to_string(), loaded))
    }

    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        Self {
            source: String::from("<memory>"),
            records,
            skipped_rows: 0,
        }
    }

    fn from_loaded(source: String, loaded: LoadedRecords) -> Self {
        Self {
            source,
            records: loaded.records,
            skipped_rows: loaded.skipped,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// 合計数量（`i128`で集計）
    pub fn total_units(&self) -> i128 {
        self.records.iter().map(|r| i128::from(r.units)).sum()
    }

    pub fn total_revenue(&self) -> f64 {
        self.records.iter().map(SalesRecord::revenue).sum()
    }

    /// 地域ごとの売上（地域名順）
    pub fn revenue_by_region(&self) -> BTreeMap<String, f64> {
        self.records
            .iter()
            .fold(BTreeMap::new(), |mut acc, record| {
                *acc.entry(record.region.clone()).or_insert(0.0) += record.revenue();
                acc
            })
    }

    /// 商品ごとの合計数量（商品名順）
    pub fn units_by_item(&self) -> BTreeMap<String, i128> {
        self.records
            .iter()
            .fold(BTreeMap::new(), |mut acc, record| {
                *acc.entry(record.item.clone()).or_insert(0) += i128::from(record.units);
                acc
            })
    }

    /// 合計数量が最大の商品
    ///
    /// 同数の場合は商品名の辞書順で先のものを返す。レコードが無ければ`None`。
    pub fn most_sold_item(&self) -> Option<String> {
        self.units_by_item()
            .into_iter()
            .fold(None, |best: Option<(String, i128)>, (item, units)| match best {
                Some((_, best_units)) if best_units >= units => best,
                _ => Some((item, units)),
            })
            .map(|(item, _)| item)
    }

    /// 行ごとの単価の単純平均（数量で重み付けしない）
    pub fn average_price(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.records.iter().map(|r| r.price).sum();
        sum / self.records.len() as f64
    }

    pub fn min_price(&self) -> f64 {
        self.prices().reduce(f64::min).unwrap_or(0.0)
    }

    pub fn max_price(&self) -> f64 {
        self.prices().reduce(f64::max).unwrap_or(0.0)
    }

    fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.price)
    }

    /// 全ての集計値をまとめたレポート
    pub fn report(&self) -> AnalysisReport {
        AnalysisReport {
            source: self.source.clone(),
            records: self.records.len(),
            skipped_rows: self.skipped_rows,
            total_units: self.total_units(),
            total_revenue: self.total_revenue(),
            revenue_by_region: self.revenue_by_region(),
            most_sold_item: self.most_sold_item(),
            average_price: self.average_price(),
            min_price: self.min_price(),
            max_price: self.max_price(),
            generated_at: chrono::Utc::now(),
        }
    }
}

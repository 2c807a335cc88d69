// 📈 Chart Series - per-period aggregation for the line chart
//
// (transactions, granularity) → ordered (label, total) pairs.
// Pure function: no state, no I/O, same input → same output.

use crate::period::Granularity;
use crate::transaction::Transaction;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Display hint handed to the chart: totals are drawn without decimals
pub const CHART_DECIMAL_PLACES: u8 = 0;

/// Ordered chart input: labels[i] pairs with values[i]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub decimal_places: u8,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate (label, value) pairs in chart order
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Total for a single label
    pub fn value_of(&self, label: &str) -> Option<f64> {
        self.points().find(|(l, _)| *l == label).map(|(_, v)| v)
    }
}

/// Build the chart series, tolerating malformed amounts
///
/// Undated transactions are skipped. A malformed amount turns its bucket
/// total into NaN. Returns None when there is nothing to plot.
pub fn build_chart_series(transactions: &[Transaction], granularity: Granularity) -> Option<ChartSeries> {
    let pairs = transactions.iter().filter_map(|tx| {
        granularity
            .key_for(tx)
            .map(|key| (key, tx.amount_value()))
    });

    aggregate(pairs, granularity)
}

/// Build the chart series, failing on the first malformed amount
///
/// Undated transactions are still skipped before their amount is looked at.
pub fn try_build_chart_series(
    transactions: &[Transaction],
    granularity: Granularity,
) -> Result<Option<ChartSeries>> {
    let mut pairs = Vec::with_capacity(transactions.len());
    for tx in transactions {
        if let Some(key) = granularity.key_for(tx) {
            pairs.push((key, tx.try_amount_value()?));
        }
    }

    Ok(aggregate(pairs, granularity))
}

/// Sum (key, amount) pairs per bucket and order buckets chronologically
pub fn aggregate<I>(pairs: I, granularity: Granularity) -> Option<ChartSeries>
where
    I: IntoIterator<Item = (String, f64)>,
{
    let mut buckets: HashMap<String, f64> = HashMap::new();
    let mut skipped = 0usize;

    for (key, amount) in pairs {
        if amount.is_nan() {
            skipped += 1;
        }
        *buckets.entry(key).or_insert(0.0) += amount;
    }

    if buckets.is_empty() {
        log::debug!("No dated transactions for {} chart", granularity);
        return None;
    }
    if skipped > 0 {
        log::warn!("⚠️  {} amount(s) could not be parsed; affected buckets are NaN", skipped);
    }

    let mut labels: Vec<String> = buckets.keys().cloned().collect();
    labels.sort_by(|a, b| granularity.compare_keys(a, b));

    let values = labels.iter().map(|label| buckets[label]).collect();

    Some(ChartSeries {
        labels,
        values,
        decimal_places: CHART_DECIMAL_PLACES,
    })
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One of the five observation fields of a [`Bar`].
///
/// Consensus is computed per field, so the engine needs to address fields
/// uniformly rather than through five copies of the same loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarField {
    /// Opening price.
    Open,
    /// Highest traded price.
    High,
    /// Lowest traded price.
    Low,
    /// Closing price.
    Close,
    /// Traded volume.
    Volume,
}

impl BarField {
    /// All fields in canonical O/H/L/C/V order.
    pub const ALL: [Self; 5] = [Self::Open, Self::High, Self::Low, Self::Close, Self::Volume];
}

/// One OHLCV observation at a timestamp.
///
/// Fields are `Option<f64>`: a `None` marks a value the provider did not
/// report for that bar. Downstream consensus treats `None` as "this source
/// does not vote on this field at this timestamp".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Observation timestamp (UTC).
    pub ts: DateTime<Utc>,
    /// Opening price.
    pub open: Option<f64>,
    /// Highest traded price.
    pub high: Option<f64>,
    /// Lowest traded price.
    pub low: Option<f64>,
    /// Closing price.
    pub close: Option<f64>,
    /// Traded volume.
    pub volume: Option<f64>,
}

impl Bar {
    /// A bar at `ts` with every field missing.
    #[must_use]
    pub const fn blank(ts: DateTime<Utc>) -> Self {
        Self {
            ts,
            open: None,
            high: None,
            low: None,
            close: None,
            volume: None,
        }
    }

    /// Read one field by name.
    #[must_use]
    pub const fn get(&self, field: BarField) -> Option<f64> {
        match field {
            BarField::Open => self.open,
            BarField::High => self.high,
            BarField::Low => self.low,
            BarField::Close => self.close,
            BarField::Volume => self.volume,
        }
    }

    /// Write one field by name.
    pub const fn set(&mut self, field: BarField, value: Option<f64>) {
        match field {
            BarField::Open => self.open = value,
            BarField::High => self.high = value,
            BarField::Low => self.low = value,
            BarField::Close => self.close = value,
            BarField::Volume => self.volume = value,
        }
    }

    /// The four price fields in O/H/L/C order.
    #[must_use]
    pub const fn ohlc(&self) -> [Option<f64>; 4] {
        [self.open, self.high, self.low, self.close]
    }

    /// True when every field is missing.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.open.is_none()
            && self.high.is_none()
            && self.low.is_none()
            && self.close.is_none()
            && self.volume.is_none()
    }

    /// Checks the bar-level price invariant over the fields that are present:
    /// `high >= max(open, close, low)` and `low <= min(open, close, high)`.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if let (Some(h), Some(l)) = (self.high, self.low)
            && h < l
        {
            return false;
        }
        for px in [self.open, self.close] {
            let Some(px) = px else { continue };
            if let Some(h) = self.high
                && px > h
            {
                return false;
            }
            if let Some(l) = self.low
                && px < l
            {
                return false;
            }
        }
        true
    }
}

/// An immutable, timestamp-ordered sequence of [`Bar`]s for one source,
/// one symbol, one interval.
///
/// Construction sorts by timestamp and keeps the first bar on duplicate
/// timestamps; there is no mutation API afterwards, so a series handed to
/// validation is bit-identical to the one later reconciled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Series {
    bars: Vec<Bar>,
}

impl Series {
    /// Build a series from unordered bars. Sorts by timestamp; on duplicate
    /// timestamps the first occurrence wins.
    #[must_use]
    pub fn new(mut bars: Vec<Bar>) -> Self {
        bars.sort_by_key(|b| b.ts);
        bars.dedup_by_key(|b| b.ts);
        Self { bars }
    }

    /// An empty series (fetch failure / no data).
    #[must_use]
    pub const fn empty() -> Self {
        Self { bars: Vec::new() }
    }

    /// The underlying bars, sorted by timestamp.
    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// True when the series holds no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Iterate the bars in timestamp order.
    pub fn iter(&self) -> impl Iterator<Item = &Bar> {
        self.bars.iter()
    }

    /// Timestamp of the first bar, if any.
    #[must_use]
    pub fn first_ts(&self) -> Option<DateTime<Utc>> {
        self.bars.first().map(|b| b.ts)
    }

    /// Timestamp of the last bar, if any.
    #[must_use]
    pub fn last_ts(&self) -> Option<DateTime<Utc>> {
        self.bars.last().map(|b| b.ts)
    }

    /// The bar at an exact timestamp, if present.
    #[must_use]
    pub fn bar_at(&self, ts: DateTime<Utc>) -> Option<&Bar> {
        self.bars
            .binary_search_by_key(&ts, |b| b.ts)
            .ok()
            .map(|i| &self.bars[i])
    }

    /// The close at an exact timestamp, if the bar exists and reports one.
    #[must_use]
    pub fn close_at(&self, ts: DateTime<Utc>) -> Option<f64> {
        self.bar_at(ts).and_then(|b| b.close)
    }

    /// Iterate `(timestamp, close)` pairs for bars that report a close.
    pub fn closes(&self) -> impl Iterator<Item = (DateTime<Utc>, f64)> + '_ {
        self.bars.iter().filter_map(|b| b.close.map(|c| (b.ts, c)))
    }
}

impl From<Vec<Bar>> for Series {
    fn from(bars: Vec<Bar>) -> Self {
        Self::new(bars)
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Bar;
    type IntoIter = std::slice::Iter<'a, Bar>;

    fn into_iter(self) -> Self::IntoIter {
        self.bars.iter()
    }
}

/// One OHLCV bar. `open_time` is the bucket start in milliseconds since the
/// Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    pub open_time: u64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// A doji (close == open) counts as bullish.
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }
}

/// Time-ordered candles at the finest recorded interval. Immutable after
/// construction; a candle's position in the series is its bar index.
#[derive(Debug, Clone)]
pub struct RawSeries {
    candles: Vec<Candle>,
}

impl RawSeries {
    /// Sorts by `open_time` once so downstream bucketing is a single linear
    /// pass.
    pub fn new(mut candles: Vec<Candle>) -> Self {
        candles.sort_by_key(|c| c.open_time);
        Self { candles }
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn first(&self) -> Option<&Candle> {
        self.candles.first()
    }

    pub fn last(&self) -> Option<&Candle> {
        self.candles.last()
    }
}

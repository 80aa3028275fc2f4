use crate::error::AppError;
use crate::model::candle::{Candle, RawSeries};
use crate::model::timeframe::Timeframe;

/// Candles resampled to one timeframe, gapless across the source span.
/// Positions are fresh bar indices; adjacent `open_time`s always differ by
/// exactly the bucket width.
#[derive(Debug, Clone)]
pub struct ResampledSeries {
    timeframe: Timeframe,
    candles: Vec<Candle>,
}

impl ResampledSeries {
    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
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
}

/// Bucket start for a timestamp: fixed-width intervals aligned to the Unix
/// epoch, independent of where the series happens to begin.
pub fn bucket_start(timestamp_ms: u64, bucket_ms: u64) -> u64 {
    timestamp_ms - timestamp_ms % bucket_ms
}

/// Resample a raw series into `timeframe`-wide buckets.
///
/// Every bucket between the first and last source candle produces one output
/// candle, so the time axis stays gapless. A bucket with source candles
/// merges them (first open, max high, min low, last close, summed volume). A
/// bucket without source candles becomes a zero-range bar at the previous
/// bucket's close with zero volume. The no-prior-close branch cannot be
/// reached from a non-empty series (the walk starts at the bucket holding
/// the first candle) but fails with a data-quality error rather than
/// emitting undefined fields.
pub fn resample(raw: &RawSeries, timeframe: Timeframe) -> Result<ResampledSeries, AppError> {
    let bucket_ms = timeframe.ms();
    let source = raw.candles();
    let mut candles = Vec::new();

    let (Some(first), Some(last)) = (source.first(), source.last()) else {
        return Ok(ResampledSeries { timeframe, candles });
    };

    let last_bucket = bucket_start(last.open_time, bucket_ms);
    let mut bucket = bucket_start(first.open_time, bucket_ms);
    let mut next = 0usize;
    let mut prev_close: Option<f64> = None;

    loop {
        let bucket_end = bucket + bucket_ms;
        let mut merged: Option<Candle> = None;
        while let Some(c) = source.get(next) {
            if c.open_time >= bucket_end {
                break;
            }
            merged = Some(match merged {
                None => Candle {
                    open_time: bucket,
                    ..*c
                },
                Some(m) => Candle {
                    open_time: bucket,
                    open: m.open,
                    high: m.high.max(c.high),
                    low: m.low.min(c.low),
                    close: c.close,
                    volume: m.volume + c.volume,
                },
            });
            next += 1;
        }

        let out = match merged {
            Some(c) => c,
            None => {
                let close = prev_close.ok_or_else(|| {
                    AppError::DataQuality(format!(
                        "empty bucket at {} has no prior close to inherit",
                        bucket
                    ))
                })?;
                Candle {
                    open_time: bucket,
                    open: close,
                    high: close,
                    low: close,
                    close,
                    volume: 0.0,
                }
            }
        };
        prev_close = Some(out.close);
        candles.push(out);

        if bucket == last_bucket {
            break;
        }
        bucket += bucket_ms;
    }

    Ok(ResampledSeries { timeframe, candles })
}

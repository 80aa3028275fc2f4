use crate::model::candle::Candle;

/// Sliding window over the most recent bars of a resampled series.
///
/// `end` is exclusive and never drops below `display_count`, even when the
/// series is shorter; slicing clamps to the candles that actually exist.
#[derive(Debug, Clone, Copy)]
pub struct ViewWindow {
    end: usize,
    display_count: usize,
}

impl ViewWindow {
    pub fn new(display_count: usize) -> Self {
        assert!(display_count > 0, "display_count must be > 0");
        Self {
            end: display_count,
            display_count,
        }
    }

    pub fn display_count(&self) -> usize {
        self.display_count
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn start(&self) -> usize {
        self.end.saturating_sub(self.display_count)
    }

    /// Snap to the most recent `display_count` bars of a series with
    /// `series_len` entries. Returns whether `end` moved; after a timeframe
    /// switch the view must be recomputed even when it did not, because the
    /// series underneath changed.
    pub fn reset_for(&mut self, series_len: usize) -> bool {
        self.replace_end(self.display_count.max(series_len))
    }

    /// Clamp `new_end` to `[display_count, max(display_count, series_len)]`
    /// and store it. Returns whether the stored value changed.
    pub fn set_end(&mut self, new_end: usize, series_len: usize) -> bool {
        let upper = self.display_count.max(series_len);
        self.replace_end(new_end.clamp(self.display_count, upper))
    }

    fn replace_end(&mut self, end: usize) -> bool {
        let changed = end != self.end;
        self.end = end;
        changed
    }

    /// The visible slice: `[start, end)` clamped to the candles that exist.
    /// Possibly empty; never out of bounds.
    pub fn visible<'a>(&self, candles: &'a [Candle]) -> &'a [Candle] {
        let lo = self.start().min(candles.len());
        let hi = self.end.min(candles.len());
        &candles[lo..hi]
    }
}

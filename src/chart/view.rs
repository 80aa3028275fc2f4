use crate::model::candle::Candle;
use crate::model::timeframe::Timeframe;

/// Fraction of the bar spacing occupied by a glyph.
pub const WIDTH_SCALE: f64 = 0.8;

/// Glyph classification for one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandleColor {
    Bullish,
    Bearish,
}

impl CandleColor {
    pub fn of(candle: &Candle) -> Self {
        if candle.is_bullish() {
            CandleColor::Bullish
        } else {
            CandleColor::Bearish
        }
    }
}

/// One visible bar, ready to draw. `bar_index` is the bar's position in the
/// full resampled series, not its offset within the window.
#[derive(Debug, Clone, Copy)]
pub struct RenderBar {
    pub bar_index: usize,
    pub open_time: u64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub color: CandleColor,
}

/// One published view: the visible bars plus the glyph width they share.
/// Rebuilt from scratch on every recomputation; consumers treat it as fully
/// replaced data.
#[derive(Debug, Clone)]
pub struct ViewSnapshot {
    pub bars: Vec<RenderBar>,
    pub bar_width_ms: u64,
}

/// Derive render bars from the visible slice.
///
/// The width comes from the observed spacing of the first two visible bars,
/// not the nominal timeframe, so glyphs stay contiguous when real spacing
/// differs at series boundaries. Below two bars the spacing is unknowable
/// and `prev_width_ms` is carried forward unchanged.
pub fn derive(visible: &[Candle], start_index: usize, prev_width_ms: u64) -> ViewSnapshot {
    let bar_width_ms = match visible {
        [a, b, ..] => ((b.open_time - a.open_time) as f64 * WIDTH_SCALE) as u64,
        _ => prev_width_ms,
    };

    let bars = visible
        .iter()
        .enumerate()
        .map(|(offset, c)| RenderBar {
            bar_index: start_index + offset,
            open_time: c.open_time,
            open: c.open,
            high: c.high,
            low: c.low,
            close: c.close,
            volume: c.volume,
            color: CandleColor::of(c),
        })
        .collect();

    ViewSnapshot { bars, bar_width_ms }
}

/// Width seed used before any two-bar view has been derived.
pub fn nominal_width_ms(timeframe: Timeframe) -> u64 {
    (timeframe.ms() as f64 * WIDTH_SCALE) as u64
}

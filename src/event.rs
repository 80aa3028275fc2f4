/// External events driving the chart. Payloads are raw control values; the
/// controller clamps or rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartEvent {
    /// A timeframe was picked by selector index (0-7).
    TimeframeSelected(usize),
    /// The window's end bar moved (exclusive upper bound).
    WindowMoved(usize),
}

use crate::chart::resample::{resample, ResampledSeries};
use crate::chart::view::{derive, nominal_width_ms, ViewSnapshot};
use crate::chart::window::ViewWindow;
use crate::error::AppError;
use crate::event::ChartEvent;
use crate::model::candle::RawSeries;
use crate::model::timeframe::Timeframe;

/// Owns the chart state and turns the two external events into published
/// snapshots. `Some` from [`ChartController::handle`] means the hosting
/// layer must redraw; `None` means the visible data is unchanged.
#[derive(Debug)]
pub struct ChartController {
    raw: RawSeries,
    series: ResampledSeries,
    window: ViewWindow,
    bar_width_ms: u64,
}

impl ChartController {
    pub fn new(
        raw: RawSeries,
        timeframe: Timeframe,
        display_count: usize,
    ) -> Result<Self, AppError> {
        let series = resample(&raw, timeframe)?;
        let mut window = ViewWindow::new(display_count);
        window.reset_for(series.len());
        Ok(Self {
            raw,
            series,
            window,
            bar_width_ms: nominal_width_ms(timeframe),
        })
    }

    pub fn timeframe(&self) -> Timeframe {
        self.series.timeframe()
    }

    pub fn window(&self) -> &ViewWindow {
        &self.window
    }

    pub fn series_len(&self) -> usize {
        self.series.len()
    }

    pub fn handle(&mut self, event: ChartEvent) -> Result<Option<ViewSnapshot>, AppError> {
        match event {
            ChartEvent::TimeframeSelected(index) => match Timeframe::from_index(index) {
                Some(timeframe) => self.select_timeframe(timeframe).map(Some),
                None => {
                    tracing::warn!(index, "Ignoring unknown timeframe index");
                    Ok(None)
                }
            },
            ChartEvent::WindowMoved(end) => Ok(self.move_window(end)),
        }
    }

    /// Re-aggregate from the raw series and snap the window to the most
    /// recent bars. Always returns a snapshot: even when `end` lands on the
    /// same value, the series underneath changed, so the view must be
    /// republished.
    pub fn select_timeframe(&mut self, timeframe: Timeframe) -> Result<ViewSnapshot, AppError> {
        self.series = resample(&self.raw, timeframe)?;
        self.window.reset_for(self.series.len());
        tracing::debug!(
            timeframe = timeframe.label(),
            bars = self.series.len(),
            "Timeframe selected"
        );
        Ok(self.publish())
    }

    /// Move the window end. Publishes only when the clamped end actually
    /// moved; the underlying series is untouched.
    pub fn move_window(&mut self, end: usize) -> Option<ViewSnapshot> {
        if self.window.set_end(end, self.series.len()) {
            Some(self.publish())
        } else {
            None
        }
    }

    /// Derive the current view without changing window or series state.
    pub fn snapshot(&mut self) -> ViewSnapshot {
        self.publish()
    }

    fn publish(&mut self) -> ViewSnapshot {
        let visible = self.window.visible(self.series.candles());
        let snapshot = derive(visible, self.window.start(), self.bar_width_ms);
        self.bar_width_ms = snapshot.bar_width_ms;
        snapshot
    }
}

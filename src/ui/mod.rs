pub mod chart;
pub mod dashboard;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::chart::view::ViewSnapshot;
use crate::model::timeframe::Timeframe;

use chart::CandleChart;
use dashboard::{KeybindBar, StatusBar, TimeframeTabs};

/// Render-side state: the latest published snapshot plus display metadata.
/// The snapshot is replaced wholesale whenever the controller republishes;
/// nothing in here is patched in place.
pub struct AppState {
    pub title: String,
    pub snapshot: ViewSnapshot,
    pub timeframe: Timeframe,
    pub window_end: usize,
    pub series_len: usize,
}

impl AppState {
    pub fn new(
        title: &str,
        timeframe: Timeframe,
        snapshot: ViewSnapshot,
        window_end: usize,
        series_len: usize,
    ) -> Self {
        Self {
            title: title.to_string(),
            snapshot,
            timeframe,
            window_end,
            series_len,
        }
    }

    /// Adopt a freshly published view.
    pub fn publish(
        &mut self,
        snapshot: ViewSnapshot,
        timeframe: Timeframe,
        window_end: usize,
        series_len: usize,
    ) {
        self.snapshot = snapshot;
        self.timeframe = timeframe;
        self.window_end = window_end;
        self.series_len = series_len;
    }
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // timeframe tabs
            Constraint::Min(8),    // chart
            Constraint::Length(1), // bar readout
            Constraint::Length(1), // keybinds
        ])
        .split(frame.area());

    frame.render_widget(
        TimeframeTabs {
            active: state.timeframe,
        },
        outer[0],
    );

    frame.render_widget(CandleChart::new(&state.snapshot, &state.title), outer[1]);

    frame.render_widget(
        StatusBar {
            bar: state.snapshot.bars.last(),
            window_end: state.window_end,
            series_len: state.series_len,
        },
        outer[2],
    );

    frame.render_widget(KeybindBar, outer[3]);
}

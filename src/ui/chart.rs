use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

use crate::chart::view::{CandleColor, RenderBar, ViewSnapshot};

/// Candlestick pane: one column per visible bar, a high-low wick behind an
/// open-close body. When the window holds more bars than the pane has
/// columns, the most recent bars win.
pub struct CandleChart<'a> {
    snapshot: &'a ViewSnapshot,
    title: &'a str,
}

impl<'a> CandleChart<'a> {
    pub fn new(snapshot: &'a ViewSnapshot, title: &'a str) -> Self {
        Self { snapshot, title }
    }
}

impl Widget for CandleChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.snapshot.bars.is_empty() || inner.height < 2 || inner.width < 4 {
            return;
        }

        let chart_height = inner.height.saturating_sub(1) as usize; // leave 1 row for axis labels
        let chart_width = inner.width as usize;

        let bars = &self.snapshot.bars;
        let visible: &[RenderBar] = if bars.len() > chart_width {
            &bars[bars.len() - chart_width..]
        } else {
            bars
        };

        let min_price = visible.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
        let max_price = visible
            .iter()
            .map(|b| b.high)
            .fold(f64::NEG_INFINITY, f64::max);
        let range = max_price - min_price;
        let range = if range < 1e-9 { 1.0 } else { range };

        // Higher price, smaller row index.
        let row_for = |price: f64| -> usize {
            let normalized = (price - min_price) / range;
            chart_height
                - 1
                - ((normalized * (chart_height - 1) as f64) as usize).min(chart_height - 1)
        };

        for (i, bar) in visible.iter().enumerate() {
            let x = inner.x + i as u16;
            if x >= inner.x + inner.width {
                break;
            }
            let color = match bar.color {
                CandleColor::Bullish => Color::Green,
                CandleColor::Bearish => Color::Red,
            };

            let wick_top = row_for(bar.high);
            let wick_bottom = row_for(bar.low);
            for row in wick_top..=wick_bottom {
                buf.set_string(x, inner.y + row as u16, "│", Style::default().fg(color));
            }

            let body_top = row_for(bar.open.max(bar.close));
            let body_bottom = row_for(bar.open.min(bar.close));
            for row in body_top..=body_bottom {
                buf.set_string(x, inner.y + row as u16, "█", Style::default().fg(color));
            }
        }

        // Axis labels
        let label_y = inner.y + inner.height - 1;
        buf.set_string(
            inner.x,
            inner.y,
            format!("{:.4}", max_price),
            Style::default().fg(Color::DarkGray),
        );
        buf.set_string(
            inner.x,
            label_y,
            format!("{:.4}", min_price),
            Style::default().fg(Color::DarkGray),
        );
    }
}

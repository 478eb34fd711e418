use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::Theme;

pub struct IndicatorWidget;

impl IndicatorWidget {
    /// One dot per page; the page last announced by a page-change event is lit
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let line = dots(app.page_count(), app.highlighted_page(), &app.theme);
        let paragraph = Paragraph::new(line)
            .alignment(Alignment::Center)
            .style(Style::default().bg(app.theme.bg0));
        frame.render_widget(paragraph, area);
    }
}

fn dots(count: usize, highlighted: usize, theme: &Theme) -> Line<'static> {
    let spans: Vec<Span> = (0..count)
        .flat_map(|page| {
            let dot = if page == highlighted {
                Span::styled(
                    "●",
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled("○", Style::default().fg(theme.grey0))
            };
            [dot, Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

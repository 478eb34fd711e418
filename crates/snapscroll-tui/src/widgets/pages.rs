use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub struct PagesWidget;

impl PagesWidget {
    /// Draw every page card that overlaps the viewport at the current content offset
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg0)), area);

        let offset_columns = app.view.content_offset().x / app.world_per_column();
        let width = area.width as i64;

        for page in 0..app.page_count() {
            let left = (page as i64 * width) + offset_columns.round() as i64;
            let Some((card, borders)) = clip(area, left) else {
                continue;
            };

            let border_color = if page == app.view.page() {
                theme.active_border
            } else {
                theme.inactive_border
            };

            let title = app.config.page_title(page);
            let mut block = Block::default()
                .borders(borders)
                .border_style(Style::default().fg(border_color))
                .style(Style::default().bg(theme.bg0));
            if borders.contains(Borders::LEFT) {
                block = block.title(format!(" {} ", title));
            }

            let inner_height = card.height.saturating_sub(2) as usize;
            let mut lines: Vec<Line> = vec![Line::from(""); inner_height / 2];
            lines.push(Line::from(Span::styled(
                format!("{} / {}", page + 1, app.page_count()),
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(title, Style::default().fg(theme.grey2))));

            let paragraph = Paragraph::new(lines).block(block).alignment(Alignment::Center);
            frame.render_widget(paragraph, card);
        }
    }
}

/// Visible part of a page card whose left edge sits at column `left`
///
/// Borders on clipped sides are dropped so a card sliding out of view
/// does not draw a false edge.
fn clip(area: Rect, left: i64) -> Option<(Rect, Borders)> {
    let width = area.width as i64;
    let right = left + width;
    let start = left.max(0);
    let end = right.min(width);
    if end <= start {
        return None;
    }

    let mut borders = Borders::TOP | Borders::BOTTOM;
    if left >= 0 {
        borders |= Borders::LEFT;
    }
    if right <= width {
        borders |= Borders::RIGHT;
    }

    let rect = Rect {
        x: area.x + start as u16,
        y: area.y,
        width: (end - start) as u16,
        height: area.height,
    };
    Some((rect, borders))
}

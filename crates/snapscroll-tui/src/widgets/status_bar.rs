use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let tween = app.view.tween();

        let mode_str = if app.is_dragging() {
            "DRAG"
        } else if tween.is_running() {
            "TWEEN"
        } else {
            "REST"
        };

        let status_text = if let Some(msg) = &app.status_message {
            msg.clone()
        } else {
            format!(
                " {} | Page {}/{} | x: {:.1} | {} {:.2}s | Events: {}",
                mode_str,
                app.view.page() + 1,
                app.page_count(),
                app.view.content_offset().x,
                tween.curve(),
                tween.duration(),
                app.refresh_count()
            )
        };

        let help_hint = " q:quit h/l:page 0/$:ends s:snap e:easing drag:swipe ";
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

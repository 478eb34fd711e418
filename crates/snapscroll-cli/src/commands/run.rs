use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use snapscroll_core::snap::{frame_interval, FrameClock};
use snapscroll_core::AppConfig;
use snapscroll_tui::{
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    widgets::{IndicatorWidget, PagesWidget, StatusBarWidget},
    App, Theme,
};

pub fn run(config: AppConfig) -> Result<()> {
    tracing::info!(
        max_page = config.paging.max_page,
        curve = %config.tween.curve,
        fps = config.ui.animation_fps,
        "Starting snapscroll demo"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Snapscroll"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = EventHandler::new(frame_interval(config.ui.animation_fps));
    let mut app = App::new(config, Theme::default());

    let result = main_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Demo exited with error");
    }
    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    let mut clock = FrameClock::new();

    loop {
        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Pages, indicator row, status bar
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(3),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(size);

            app.viewport_width = layout[0].width;

            PagesWidget::render(frame, layout[0], app);
            IndicatorWidget::render(frame, layout[1], app);
            StatusBarWidget::render(frame, layout[2], app);
        })?;

        if let Some(event) = event_handler.next()? {
            match event {
                AppEvent::Key(key) => app.handle_action(handle_key_event(key)),
                AppEvent::Mouse(mouse) => app.handle_action(handle_mouse_event(mouse)),
                AppEvent::Resize(width, height) => {
                    tracing::debug!(width, height, "Terminal resized");
                }
                AppEvent::Tick => {}
            }
        }

        app.update(clock.tick());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    PrevPage,
    NextPage,
    FirstPage,
    LastPage,
    SnapToPage,    // Re-apply the current page without animation
    CycleEasing,
    PointerDown(u16), // Column where the left button went down
    PointerDrag(u16),
    PointerUp,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Paging
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::PrevPage,
        (KeyCode::Left, KeyModifiers::NONE) => Action::PrevPage,
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::NextPage,
        (KeyCode::Right, KeyModifiers::NONE) => Action::NextPage,
        (KeyCode::Char('0'), KeyModifiers::NONE) => Action::FirstPage,
        (KeyCode::Home, _) => Action::FirstPage,
        (KeyCode::Char('$'), _) => Action::LastPage,
        (KeyCode::End, _) => Action::LastPage,
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::SnapToPage,

        // Tween
        (KeyCode::Char('e'), KeyModifiers::NONE) => Action::CycleEasing,

        _ => Action::None,
    }
}

/// Translate left-button mouse events into pointer actions
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::PointerDown(mouse.column),
        MouseEventKind::Drag(MouseButton::Left) => Action::PointerDrag(mouse.column),
        MouseEventKind::Up(MouseButton::Left) => Action::PointerUp,
        _ => Action::None,
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::message::AppMessage;

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => Some(AppMessage::Quit),
            (KeyCode::Char('p'), _) | (KeyCode::Enter, _) => Some(AppMessage::Play),
            (KeyCode::Char(' '), _) => Some(AppMessage::Pause),
            (KeyCode::Char('s'), _) => Some(AppMessage::Stop),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => Some(AppMessage::NextTrack),
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => Some(AppMessage::PreviousTrack),
            (KeyCode::Char('c'), _) => Some(AppMessage::ClearLog),
            (KeyCode::Char(d @ '1'..='9'), _) => {
                d.to_digit(10).map(|n| AppMessage::SelectTrack(n as usize - 1))
            }
            _ => None,
        }
    }
}

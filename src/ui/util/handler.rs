use crate::ui::{
    app::App,
    input::InputHandler,
    tui::{TerminalEvent, Tui},
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_event(app, evt, tui)?;
        }

        while let Ok(evt) = tui.event_rx.try_recv() {
            Self::handle_event(app, evt, tui)?;
        }

        Ok(())
    }

    pub fn handle_event(app: &mut App, evt: TerminalEvent, tui: &mut Tui) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::Init | TerminalEvent::Tick | TerminalEvent::Resize(..) => {}
            TerminalEvent::FocusGained => {
                if app.set_focus(true) {
                    tui.clear()?;
                }
            }
            TerminalEvent::FocusLost => {
                app.set_focus(false);
            }
            TerminalEvent::Key(key) => {
                if let Some(msg) = InputHandler::handle_key(key) {
                    app.update(msg);
                }
            }
        }

        Ok(())
    }
}

use ratatui::widgets::TableState;
use crate::session::{CharClass, Session};
use super::clipboard::{Clipboard, SystemClipboard};

/// Screens reachable from the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Reminders,
    Password,
    Learning,
    Dashboard,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Reminders, Tab::Password, Tab::Learning, Tab::Dashboard];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Reminders => "Reminders",
            Tab::Password => "Passwords",
            Tab::Learning => "Learning",
            Tab::Dashboard => "Dashboard",
        }
    }

    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn from_key(c: char) -> Option<Tab> {
        let i = c.to_digit(10)? as usize;
        Tab::ALL.get(i.checked_sub(1)?).copied()
    }
}

pub struct App {
    pub session: Session,
    pub tab: Tab,
    pub state: TableState,
    clipboard: Box<dyn Clipboard>,
}

impl App {
    /// Creates a new App around a session, copying to the system clipboard.
    pub fn new(session: Session) -> App {
        App::with_clipboard(session, Box::new(SystemClipboard::default()))
    }

    pub fn with_clipboard(session: Session, clipboard: Box<dyn Clipboard>) -> App {
        let mut state = TableState::default();
        if !session.ledger().is_empty() {
            state.select(Some(0));
        }
        App {
            session,
            tab: Tab::Home,
            state,
            clipboard,
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.tab = Tab::ALL[(self.tab.index() + 1) % Tab::ALL.len()];
    }

    /// Selects the next reminder, wrapping around.
    pub fn next(&mut self) {
        let len = self.session.ledger().len();
        if len == 0 { return; }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    /// Selects the previous reminder, wrapping around.
    pub fn previous(&mut self) {
        let len = self.session.ledger().len();
        if len == 0 { return; }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    /// Toggles completion of the selected reminder.
    pub fn toggle_selected(&mut self) {
        if self.tab != Tab::Reminders { return; }
        if let Some(i) = self.state.selected() {
            if let Some(id) = self.session.ledger().reminders().get(i).map(|r| r.id) {
                self.session.toggle_reminder(id);
            }
        }
    }

    pub fn toggle_class(&mut self, class: CharClass) {
        if self.tab == Tab::Password {
            self.session.toggle_class(class);
        }
    }

    pub fn generate(&mut self) {
        if self.tab == Tab::Password {
            // Failures surface as a notification.
            let _ = self.session.generate_password();
        }
    }

    pub fn copy(&mut self) {
        if self.tab != Tab::Password { return; }
        let clipboard = &mut self.clipboard;
        // Both outcomes surface as a notification.
        let _ = self.session.copy_password(|p| clipboard.set_text(p));
    }

    pub fn dismiss(&mut self) {
        self.session.dismiss_notification();
    }
}

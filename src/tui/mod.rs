pub mod app;
pub mod clipboard;
pub mod ui;

use std::io;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use app::{App, Tab};
use ui::ui;
use crate::session::{CharClass, Session};

pub fn run_tui(session: Session) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("Starting TUI");
    let mut app = App::new(session);

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("TUI loop failed: {}", err);
        return Err(err.into());
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Esc => app.dismiss(),
                KeyCode::Tab => app.next_tab(),
                KeyCode::Char(c @ '1'..='5') => {
                    if let Some(tab) = Tab::from_key(c) {
                        app.select_tab(tab);
                    }
                }
                _ => match app.tab {
                    Tab::Reminders => match key.code {
                        KeyCode::Down | KeyCode::Char('j') => app.next(),
                        KeyCode::Up | KeyCode::Char('k') => app.previous(),
                        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
                        _ => {}
                    },
                    Tab::Password => match key.code {
                        KeyCode::Right | KeyCode::Char('+') => app.session.increase_length(),
                        KeyCode::Left | KeyCode::Char('-') => app.session.decrease_length(),
                        KeyCode::Char('u') => app.toggle_class(CharClass::Uppercase),
                        KeyCode::Char('l') => app.toggle_class(CharClass::Lowercase),
                        KeyCode::Char('n') => app.toggle_class(CharClass::Numbers),
                        KeyCode::Char('s') => app.toggle_class(CharClass::Symbols),
                        KeyCode::Char('g') | KeyCode::Enter => app.generate(),
                        KeyCode::Char('y') => app.copy(),
                        _ => {}
                    },
                    _ => {}
                },
            }
        }
    }
}

use hygiene::session::{CharClass, Session, Variant};
use hygiene::tui::app::{App, Tab};
use hygiene::tui::clipboard::Clipboard;
use hygiene::tui::ui::ui;
use ratatui::{backend::TestBackend, Terminal};
use std::cell::RefCell;
use std::rc::Rc;

/// Records what was copied; refuses everything when `broken` is set.
#[derive(Clone, Default)]
struct RecordingClipboard {
    contents: Rc<RefCell<Option<String>>>,
    broken: bool,
}

impl Clipboard for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        if self.broken {
            return Err("clipboard unavailable".into());
        }
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

fn app_with(clipboard: &RecordingClipboard) -> App {
    App::with_clipboard(Session::default(), Box::new(clipboard.clone()))
}

#[test]
fn test_tab_keys() {
    assert_eq!(Tab::from_key('1'), Some(Tab::Home));
    assert_eq!(Tab::from_key('5'), Some(Tab::Dashboard));
    assert_eq!(Tab::from_key('0'), None);
    assert_eq!(Tab::from_key('6'), None);

    let mut app = App::new(Session::default());
    app.select_tab(Tab::Dashboard);
    app.next_tab();
    assert_eq!(app.tab, Tab::Home);
}

#[test]
fn test_navigation_wraps() {
    let mut app = App::new(Session::default());
    assert_eq!(app.state.selected(), Some(0));
    app.previous();
    assert_eq!(app.state.selected(), Some(2));
    app.next();
    assert_eq!(app.state.selected(), Some(0));
}

#[test]
fn test_toggle_selected_only_on_reminders_tab() {
    let mut app = App::new(Session::default());
    app.next();
    app.toggle_selected();
    assert_eq!(app.session.ledger().completed_count(), 0);

    app.select_tab(Tab::Reminders);
    app.toggle_selected();
    assert!(app.session.ledger().get(2).unwrap().completed);
}

#[test]
fn test_generate_and_copy() {
    let clipboard = RecordingClipboard::default();
    let mut app = app_with(&clipboard);
    app.select_tab(Tab::Password);
    app.toggle_class(CharClass::Symbols);
    app.generate();
    app.copy();

    let generated = app.session.generated_password().map(str::to_string);
    assert!(generated.is_some());
    assert_eq!(*clipboard.contents.borrow(), generated);
    assert_eq!(app.session.current_notification().unwrap().variant, Variant::Info);
}

#[test]
fn test_copy_failure_is_reported() {
    let clipboard = RecordingClipboard { broken: true, ..Default::default() };
    let mut app = app_with(&clipboard);
    app.select_tab(Tab::Password);
    app.generate();
    app.copy();

    assert!(clipboard.contents.borrow().is_none());
    let n = app.session.current_notification().unwrap();
    assert_eq!(n.variant, Variant::Destructive);
    assert_ne!(n.title, "Copied!");
}

#[test]
fn test_repeated_copies_need_one_dismiss() {
    let clipboard = RecordingClipboard::default();
    let mut app = app_with(&clipboard);
    app.select_tab(Tab::Password);
    app.generate();
    for _ in 0..50 {
        app.copy();
    }
    app.dismiss();
    assert!(app.session.current_notification().is_none());
}

#[test]
fn test_every_tab_renders() {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    let mut app = app_with(&RecordingClipboard::default());
    app.select_tab(Tab::Password);
    app.generate();
    app.copy();
    for tab in Tab::ALL {
        app.select_tab(tab);
        terminal.draw(|f| ui(f, &mut app)).unwrap();
    }
}

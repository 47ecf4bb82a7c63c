//! Access to the system clipboard.

use copypasta::{ClipboardContext, ClipboardProvider};

/// Somewhere the generated password can be copied to.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// The desktop clipboard, opened on first use.
///
/// The context is kept alive afterwards: on X11 the owner has to stay around
/// to serve paste requests.
#[derive(Default)]
pub struct SystemClipboard {
    context: Option<ClipboardContext>,
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        let context = match self.context.take() {
            Some(context) => context,
            None => ClipboardContext::new().map_err(|e| e.to_string())?,
        };
        self.context
            .insert(context)
            .set_contents(text.to_owned())
            .map_err(|e| e.to_string())
    }
}

//! Prints client notifications to stderr.

use docpipe_api::{Notifier, Panel, Toast};

pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn toast(&self, toast: &Toast) {
        eprintln!("error: {}", toast.message);
    }

    fn panel(&self, panel: &Panel) {
        eprintln!("error: {}", panel.title);
        eprintln!("  {}", panel.message);
    }
}

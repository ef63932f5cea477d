//! Status lines for filesystem operations and commands.

use std::sync::{Arc, Mutex};

use console::{Emoji, Style};

/// Emits status lines.
///
/// Success lines only appear in verbose mode; warnings always appear. A
/// capturing reporter records plain lines instead of printing them.
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    verbose: bool,
    captured: Option<Arc<Mutex<Vec<String>>>>,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            captured: None,
        }
    }

    pub fn capturing(verbose: bool) -> Self {
        Self {
            verbose,
            captured: Some(Arc::default()),
        }
    }

    /// Lines recorded so far by a capturing reporter.
    pub fn lines(&self) -> Vec<String> {
        self.captured
            .as_ref()
            .and_then(|lines| lines.lock().ok().map(|lines| lines.clone()))
            .unwrap_or_default()
    }

    pub fn success(&self, message: impl AsRef<str>) {
        if !self.verbose {
            return;
        }
        let message = message.as_ref();
        if !self.capture(message) {
            println!("{}{}", Emoji("✅ ", ""), message);
        }
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        let message = message.as_ref();
        if !self.capture(message) {
            let yellow = Style::new().yellow();
            eprintln!("{}{}", Emoji("⚠️  ", ""), yellow.apply_to(message));
        }
    }

    fn capture(&self, message: &str) -> bool {
        match &self.captured {
            Some(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    lines.push(message.to_string());
                }
                true
            }
            None => false,
        }
    }
}

//! Where the demos print their values.

use std::sync::Arc;

use parking_lot::Mutex;

/// Line oriented output shared by the demos.
pub trait Console: Send + Sync {
    fn print_line(&self, line: &str);
}

/// Prints to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Console for Stdout {
    fn print_line(&self, line: &str) {
        println!("{line}");
    }
}

/// Records printed lines in memory. Clones share the same record.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything printed so far, oldest first.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl Console for Transcript {
    fn print_line(&self, line: &str) {
        self.lines.lock().push(line.to_owned());
    }
}

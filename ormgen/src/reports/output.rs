//! Where reports are written.

/// Sink for report lines.
///
/// Reports say what kind of line they emit; the sink decides how it looks
/// and which stream it goes to.
pub trait Output {
    /// Heading, underlined on a terminal.
    fn title(&mut self, text: &str);

    fn key_value(&mut self, key: &str, value: &str);

    /// Key-value pair nested under the previous line.
    fn key_value_indented(&mut self, key: &str, value: &str);

    fn list_item(&mut self, text: &str);

    /// Problem worth the user's attention, kept off stdout.
    fn warning(&mut self, msg: &str);

    fn line(&mut self, text: &str);

    fn newline(&mut self);
}

/// A command result that knows how to print itself.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Plain text on stdout, warnings on stderr.
#[derive(Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn title(&mut self, text: &str) {
        println!("{}\n{}", text, "=".repeat(text.chars().count()));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        println!("  {}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }

    fn line(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

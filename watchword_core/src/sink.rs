use crate::Activation;
use std::fmt::Debug;
use std::io::Write;

/// Receives the tokens that an [`Activation`] decides to print.
///
/// The sink gets the activation itself (which [displays](std::fmt::Display)
/// as `⏎ group:token`) followed by the attached payload values, in call order.
/// Sinks are shared across threads and must not assume anything about the
/// calling thread.
pub trait LogSink: Send + Sync {
    /// Logs one activation with its payload.
    fn log(&self, activation: &Activation<'_>, payload: &[&dyn Debug]);
}

impl<F> LogSink for F
where
    F: Fn(&Activation<'_>, &[&dyn Debug]) + Send + Sync,
{
    fn log(&self, activation: &Activation<'_>, payload: &[&dyn Debug]) {
        self(activation, payload)
    }
}

/// The default [`LogSink`]: writes one line per activation to standard output.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    color: bool,
}

impl ConsoleSink {
    /// Creates a console sink, with or without ANSI colors.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Renders the line this sink would print, without the trailing newline.
    pub fn render(&self, activation: &Activation<'_>, payload: &[&dyn Debug]) -> String {
        let mut line = if self.color {
            activation.painted().to_string()
        } else {
            activation.to_string()
        };

        for value in payload {
            line.push_str(&format!(" {:?}", value));
        }

        line
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new(true)
    }
}

impl LogSink for ConsoleSink {
    fn log(&self, activation: &Activation<'_>, payload: &[&dyn Debug]) {
        let line = self.render(activation, payload);

        // Write errors (e.g., a closed stdout) are ignored
        let _ = writeln!(std::io::stdout().lock(), "{}", line);
    }
}

// Adapters layer: concrete console I/O behind the domain ports.

pub mod console;

pub use console::{ConsoleReporter, TokenReader};

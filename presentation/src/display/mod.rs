pub mod console;

pub use console::ConsoleDisplay;

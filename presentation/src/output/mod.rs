//! Output formatting for the terminal host

pub mod console;
pub mod html;

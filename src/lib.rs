//! Flashdeck library exports for the binary and integration tests

pub mod core;
pub mod source;
pub mod tui;

#[cfg(test)]
pub mod test_support;

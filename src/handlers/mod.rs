//! Event Handling Module
//!
//! Turns raw terminal key events into navigation, catalog events and form input.

pub mod keys;

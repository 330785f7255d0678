pub mod api;
pub mod app;
pub mod autocomplete;
pub mod booking;
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod format;
pub mod input;
pub mod layout;
pub mod logging;
pub mod notification;
pub mod widgets;

#[cfg(test)]
mod test_utils;

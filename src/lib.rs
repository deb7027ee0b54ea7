pub mod app;
pub mod cli;
pub mod combobox;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod query;
pub mod selection;
pub mod source;
pub mod widgets;

#[cfg(test)]
mod test_utils;

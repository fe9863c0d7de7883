pub mod cli;
pub mod command;
pub mod config;
pub mod context;
pub mod error;
pub mod event;
pub mod forge;
pub mod reporter;
pub mod result;
pub mod rules;

pub use result::Result;

#[cfg(test)]
pub mod test_helpers;

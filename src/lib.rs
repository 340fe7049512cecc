//! Resume ranker library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod llm;
pub mod output;
pub mod web;

pub use error::{Result, ResumeRankerError};
pub use config::Config;

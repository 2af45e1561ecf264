pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod scoring;
pub mod session;
pub mod share;
pub mod spectrum;
pub mod template;

pub use error::{QuizError, Result};

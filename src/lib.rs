pub mod cli;
pub mod error;
pub mod export;
pub mod github;
pub mod records;
pub mod types;

// Module structure for crashtail.

// Core: record parsing and event summaries
pub mod parser;
pub mod summary;

// Driver
pub mod cli;
pub mod conf;
pub mod error;
pub mod logs;
pub mod runtime;

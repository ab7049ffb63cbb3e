//! Runtime module — lifecycle: boot, initial read, follow.

pub mod boot;
pub mod run;

pub mod completions;
pub mod create;

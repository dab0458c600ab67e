pub mod analyzer;
pub mod pipeline;
pub mod report;
pub mod rewrite;

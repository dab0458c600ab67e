mod edits;
mod patches;
mod pragma;
mod rewriter;

pub use edits::{apply_inserts, Edit};
pub use patches::{apply_patches, load_patches, TextPatch};
pub use pragma::synthesize_pragma;
pub use rewriter::rewrite_source;

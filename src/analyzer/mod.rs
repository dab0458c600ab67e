mod deps;
mod functions;
mod loops;
mod types;

pub use deps::{analyze_body, BodyAnalysis};
pub use functions::build_function_map;
pub use loops::{find_loop_end, locate_loops, parse_counting_header};
pub use types::{LoopExtent, LoopRecord};

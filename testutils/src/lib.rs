mod cluster;
mod constants;
mod fake;
mod objs;

pub use cluster::*;
pub use constants::*;
pub use fake::*;
pub use objs::*;

mod canon;
mod diff;
mod hash;
mod kinds;
mod normalize;

pub use canon::cmd_canon;
pub use diff::cmd_diff;
pub use hash::cmd_hash;
pub use kinds::cmd_kinds;
pub use normalize::cmd_normalize;

mod recipient_target;
mod resolution;

pub use recipient_target::*;
pub use resolution::*;

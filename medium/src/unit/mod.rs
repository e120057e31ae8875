pub(crate) mod unit;
pub use unit::*;

pub mod mode;
pub use mode::*;

pub(crate) mod format;
pub use format::*;

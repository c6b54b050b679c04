pub mod batch;
pub mod diff;
pub mod list;
pub mod status;

pub use batch::*;
pub use diff::*;
pub use list::*;
pub use status::*;

pub mod error;
pub mod recovery;
pub mod result;

pub use error::RackError;
pub use recovery::ErrorRecovery;
pub use result::RackResult;

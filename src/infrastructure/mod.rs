/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - SCM operations (the `git` executable driven as a subprocess)
/// - File system operations (repository enumeration, `.rack.yaml`)
pub mod filesystem;
pub mod scm;

// Re-export commonly used types
pub use filesystem::{ConfigStore, RepositoryEnumerator};
pub use scm::{GitScm, ScmError, ScmOperations};

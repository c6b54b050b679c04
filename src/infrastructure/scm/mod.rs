/// SCM (Source Control Management) operations infrastructure
///
/// rack drives the version-control tool as a subprocess; this module holds
/// the trait the application layer depends on and the git implementation.
pub mod git_scm;
pub mod scm_interface;

pub use git_scm::{GitScm, GIT_METADATA_DIR};
pub use scm_interface::{ScmError, ScmOperations};

#[cfg(test)]
pub use scm_interface::MockScmOperations;

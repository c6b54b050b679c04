pub mod batch_operation;
pub mod diff_repositories;
pub mod list_repositories;
pub mod select_repositories;
pub mod status_check;

pub use batch_operation::{BatchOperationConfig, BatchOperationUseCase, BatchOutcome, BatchResult};
pub use diff_repositories::{DiffRepositoriesUseCase, DiffResult, RepositoryDiff};
pub use list_repositories::{ListRepositoriesConfig, ListRepositoriesUseCase, ListResult, ListRow};
pub use select_repositories::{SelectRepositoriesConfig, SelectRepositoriesUseCase};
pub use status_check::{RepositoryStatus, StatusCheckConfig, StatusCheckUseCase, StatusResult};

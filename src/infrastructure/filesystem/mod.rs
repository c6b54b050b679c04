pub mod config_store;
pub mod repo_enumerator;

pub use config_store::{ConfigStore, CONFIG_FILE_NAME};
pub use repo_enumerator::RepositoryEnumerator;

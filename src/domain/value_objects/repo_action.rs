use std::fmt;

/// Mutating operation applied to every selected repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoAction {
    Pull,
    Push,
    Reset,
}

impl RepoAction {
    /// Progress label printed before the action runs on a repository
    pub fn progress_label(&self) -> &'static str {
        match self {
            RepoAction::Pull => "Pulling",
            RepoAction::Push => "Pushing",
            RepoAction::Reset => "Resetting",
        }
    }
}

impl fmt::Display for RepoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepoAction::Pull => write!(f, "pull"),
            RepoAction::Push => write!(f, "push"),
            RepoAction::Reset => write!(f, "reset"),
        }
    }
}

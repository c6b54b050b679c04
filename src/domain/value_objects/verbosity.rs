use std::fmt;

/// Output verbosity selected with repeated `-v` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Only the results of the command
    #[default]
    Concise,
    /// Progress and other informative messages
    Informative,
    /// Details about the commands being run
    Verbose,
    /// Diagnostics
    Diagnostic,
}

impl Verbosity {
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Verbosity::Concise,
            1 => Verbosity::Informative,
            2 => Verbosity::Verbose,
            _ => Verbosity::Diagnostic,
        }
    }

    pub fn is_informative(&self) -> bool {
        *self >= Verbosity::Informative
    }

    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::Concise => "warn",
            Verbosity::Informative => "info",
            Verbosity::Verbose => "debug",
            Verbosity::Diagnostic => "trace",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verbosity::Concise => write!(f, "concise"),
            Verbosity::Informative => write!(f, "informative"),
            Verbosity::Verbose => write!(f, "verbose"),
            Verbosity::Diagnostic => write!(f, "diagnostic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_count() {
        assert_eq!(Verbosity::from_count(0), Verbosity::Concise);
        assert_eq!(Verbosity::from_count(1), Verbosity::Informative);
        assert_eq!(Verbosity::from_count(2), Verbosity::Verbose);
        assert_eq!(Verbosity::from_count(3), Verbosity::Diagnostic);
        assert_eq!(Verbosity::from_count(9), Verbosity::Diagnostic);
    }

    #[test]
    fn test_filter_directive() {
        assert_eq!(Verbosity::Concise.filter_directive(), "warn");
        assert_eq!(Verbosity::Diagnostic.filter_directive(), "trace");
        assert!(!Verbosity::Concise.is_informative());
        assert!(Verbosity::Verbose.is_informative());
    }
}

//! Execution mode selection.

/// How this invocation obtains measurement statistics.
///
/// Derived once from the command line and never mutated. The backend
/// identifier only exists in `Real` mode, which is the point of the enum:
/// there is no "backend name that doesn't apply" state to misread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Synthetic sampling only; no backend involved.
    Synthetic,
    /// Delegate execution to the named backend.
    Real(String),
}

impl ExecutionMode {
    /// Derive the mode from the optional positional backend argument.
    pub fn from_arg(backend: Option<String>) -> Self {
        match backend {
            Some(name) => ExecutionMode::Real(name),
            None => ExecutionMode::Synthetic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_argument_is_synthetic() {
        assert_eq!(ExecutionMode::from_arg(None), ExecutionMode::Synthetic);
    }

    #[test]
    fn test_argument_selects_real_backend() {
        assert_eq!(
            ExecutionMode::from_arg(Some("aurora_7".into())),
            ExecutionMode::Real("aurora_7".into())
        );
    }
}

use scene::DatasetKind;

/// Failure of a user action. Never fatal: the dashboard state is left as it
/// was before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    RenderTargetMissing { container: String },
    UnknownFilter { kind: DatasetKind, key: String },
    ItemOutOfRange { kind: DatasetKind, index: usize },
}

impl std::fmt::Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardError::RenderTargetMissing { container } => {
                write!(f, "render target not found: {container}")
            }
            DashboardError::UnknownFilter { kind, key } => {
                write!(f, "unknown filter '{key}' for {kind}")
            }
            DashboardError::ItemOutOfRange { kind, index } => {
                write!(f, "no filtered {kind} item at index {index}")
            }
        }
    }
}

impl std::error::Error for DashboardError {}

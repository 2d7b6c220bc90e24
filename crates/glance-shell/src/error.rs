/// Result alias carrying [`ShellError`].
pub type Result<T> = std::result::Result<T, ShellError>;

/// Host-side failures: terminal, clipboard, or an invalid pace propagated
/// out of the core.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),
    #[error("{0}")]
    Pace(#[from] glance_core::PaceError),
}

use std::io;

use thiserror::Error;

/// Application-boundary error for the terminal runtime.
///
/// The engine itself is infallible; everything that can fail here is
/// terminal plumbing.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal io: {0}")]
    Io(#[from] io::Error),

    #[error(
        "terminal too small for the {needed_width}x{needed_height} play field \
         (got {width}x{height}); resize and try again"
    )]
    TerminalTooSmall {
        width: u16,
        height: u16,
        needed_width: u16,
        needed_height: u16,
    },
}

use thiserror::Error;

/// Failure to bring up the window or its pixel surface.
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("Failed to create pixel surface: {0}")]
    Surface(#[from] pixels::Error),
}

/// Failure inside one frame. The frame is dropped and the loop carries on.
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Failed to resize surface: {0}")]
    Resize(#[from] pixels::TextureError),
    #[error("Failed to present frame: {0}")]
    Present(#[from] pixels::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IconError {
    #[error("Missing bitmap header")]
    MissingHeader,
    #[error("Invalid bitmap header: {0}")]
    Header(String),
    #[error("Invalid palette entry: {0}")]
    Color(String),
    #[error("Row {row} is {found} pixels wide, expected {expected}")]
    RowWidth { row: usize, found: usize, expected: usize },
    #[error("Unknown pixel key {key:?} in row {row}")]
    UnknownKey { row: usize, key: String },
    #[error("Expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
}

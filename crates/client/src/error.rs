#![allow(clippy::module_name_repetitions)]

use std::fmt;

use snafu::{Backtrace, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display(
        "Error occurs while connecting to Clipstash server gRPC endpoint `{endpoint}`, error: \
         {source}"
    ))]
    ConnectToClipstashServer {
        endpoint: http::Uri,
        source: tonic::transport::Error,
        backtrace: Backtrace,
    },
}

#[derive(Debug)]
pub enum InsertClipError {
    Status { source: tonic::Status },
}

impl fmt::Display for InsertClipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source } => source.fmt(f),
        }
    }
}

#[derive(Debug)]
pub enum GetClipError {
    Status { source: tonic::Status, id: u64 },
    Empty,
}

impl fmt::Display for GetClipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source, .. } => source.fmt(f),
            Self::Empty => f.write_str("Clipboard is empty"),
        }
    }
}

#[derive(Debug)]
pub enum GetCurrentClipError {
    Status { source: tonic::Status },
    Empty,
}

impl fmt::Display for GetCurrentClipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source, .. } => source.fmt(f),
            Self::Empty => f.write_str("Clipboard is empty"),
        }
    }
}

#[derive(Debug)]
pub enum UpdateClipError {
    Status { source: tonic::Status },
}

impl fmt::Display for UpdateClipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source } => source.fmt(f),
        }
    }
}

#[derive(Debug)]
pub enum MarkClipError {
    Status { source: tonic::Status, id: u64 },
}

impl fmt::Display for MarkClipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source, .. } => source.fmt(f),
        }
    }
}

#[derive(Debug)]
pub enum PasteClipError {
    Status { source: tonic::Status, id: u64 },
}

impl fmt::Display for PasteClipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source, .. } => source.fmt(f),
        }
    }
}

#[derive(Debug)]
pub enum RemoveClipError {
    Status { source: tonic::Status },
}

impl fmt::Display for RemoveClipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source } => source.fmt(f),
        }
    }
}

#[derive(Debug)]
pub enum BatchRemoveClipError {
    Status { source: tonic::Status },
}

impl fmt::Display for BatchRemoveClipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source } => source.fmt(f),
        }
    }
}

#[derive(Debug)]
pub enum ClearClipError {
    Status { source: tonic::Status },
}

impl fmt::Display for ClearClipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source } => source.fmt(f),
        }
    }
}

#[derive(Debug)]
pub enum GetLengthError {
    Status { source: tonic::Status },
}

impl fmt::Display for GetLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source } => source.fmt(f),
        }
    }
}

#[derive(Debug)]
pub enum ListClipError {
    Status { source: tonic::Status },
}

impl fmt::Display for ListClipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source } => source.fmt(f),
        }
    }
}

#[derive(Debug)]
pub enum PinClipError {
    Status { source: tonic::Status, id: u64 },
    NotFound { id: u64 },
}

impl fmt::Display for PinClipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source, .. } => source.fmt(f),
            Self::NotFound { id } => write!(f, "No clip found with id {id}"),
        }
    }
}

#[derive(Debug)]
pub enum UnpinClipError {
    Status { source: tonic::Status, id: u64 },
    NotFound { id: u64 },
}

impl fmt::Display for UnpinClipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source, .. } => source.fmt(f),
            Self::NotFound { id } => write!(f, "No clip found with id {id}"),
        }
    }
}

#[derive(Debug)]
pub enum CreateFolderError {
    Status { source: tonic::Status },
    Empty,
}

impl fmt::Display for CreateFolderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source } => source.fmt(f),
            Self::Empty => f.write_str("No folder was created"),
        }
    }
}

#[derive(Debug)]
pub enum RenameFolderError {
    Status { source: tonic::Status, id: u64 },
}

impl fmt::Display for RenameFolderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source, .. } => source.fmt(f),
        }
    }
}

#[derive(Debug)]
pub enum RemoveFolderError {
    Status { source: tonic::Status, id: u64 },
}

impl fmt::Display for RemoveFolderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source, .. } => source.fmt(f),
        }
    }
}

#[derive(Debug)]
pub enum ListFoldersError {
    Status { source: tonic::Status },
}

impl fmt::Display for ListFoldersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source } => source.fmt(f),
        }
    }
}

#[derive(Debug)]
pub enum ListPinnedError {
    Status { source: tonic::Status },
}

impl fmt::Display for ListPinnedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source } => source.fmt(f),
        }
    }
}

#[derive(Debug)]
pub enum EnableWatcherError {
    Status { source: tonic::Status },
}

impl fmt::Display for EnableWatcherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source } => source.fmt(f),
        }
    }
}

#[derive(Debug)]
pub enum DisableWatcherError {
    Status { source: tonic::Status },
}

impl fmt::Display for DisableWatcherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source } => source.fmt(f),
        }
    }
}

#[derive(Debug)]
pub enum ToggleWatcherError {
    Status { source: tonic::Status },
}

impl fmt::Display for ToggleWatcherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source } => source.fmt(f),
        }
    }
}

#[derive(Debug)]
pub enum GetWatcherStateError {
    Status { source: tonic::Status },
}

impl fmt::Display for GetWatcherStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source } => source.fmt(f),
        }
    }
}

#[derive(Debug)]
pub enum GetSystemVersionError {
    Status { source: tonic::Status },
}

impl fmt::Display for GetSystemVersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source } => source.fmt(f),
        }
    }
}

#[derive(Debug)]
pub enum GetAutostartStateError {
    Status { source: tonic::Status },
}

impl fmt::Display for GetAutostartStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source } => source.fmt(f),
        }
    }
}

#[derive(Debug)]
pub enum EnableAutostartError {
    Status { source: tonic::Status },
}

impl fmt::Display for EnableAutostartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source } => source.fmt(f),
        }
    }
}

#[derive(Debug)]
pub enum DisableAutostartError {
    Status { source: tonic::Status },
}

impl fmt::Display for DisableAutostartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { source } => source.fmt(f),
        }
    }
}

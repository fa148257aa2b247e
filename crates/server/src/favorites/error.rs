use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Could not join spawned task, error: {source}"))]
    JoinTask { source: tokio::task::JoinError },

    #[snafu(display("Failed to create directory {}, error: {source}", file_path.display()))]
    CreateDirectory { source: std::io::Error, file_path: PathBuf },

    #[snafu(display("Failed to read file {}, error: {source}", file_path.display()))]
    ReadFile { source: std::io::Error, file_path: PathBuf },

    #[snafu(display("Failed to write file {}, error: {source}", file_path.display()))]
    WriteFile { source: std::io::Error, file_path: PathBuf },

    #[snafu(display("Failed to serialize favorites, error: {source}"))]
    SerializeSnapshot { source: serde_json::Error },

    #[snafu(display("Failed to deserialize favorites, error: {source}"))]
    DeserializeSnapshot { source: serde_json::Error },
}

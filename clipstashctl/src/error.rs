use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Could not read file {}, error: {source}", filename.display()))]
    ReadFile { filename: PathBuf, source: std::io::Error },

    #[snafu(display("Could not read from stdin, error: {source}"))]
    ReadStdin { source: std::io::Error },

    #[snafu(display("Could not write to stdout, error: {source}"))]
    WriteStdout { source: std::io::Error },

    #[snafu(display("Could not create tokio runtime, error: {source}"))]
    InitializeTokioRuntime { source: std::io::Error },

    #[snafu(display("Could not check UTF-8 string, error: {source}"))]
    CheckUtf8String { source: simdutf8::basic::Utf8Error },

    #[snafu(display("Could not call external editor, error: {source}"))]
    CallEditor { source: clipstash_external_editor::Error },

    #[snafu(display("Could not call gRPC client, error: {source}"))]
    Client { source: clipstash_client::Error },

    #[snafu(display("Error occurs while interacting with server, error: {error}"))]
    OperationError { error: String },

    #[snafu(display("{error}"))]
    EncodeData { error: clipstash_base::ClipEntryError },
}

impl From<clipstash_external_editor::Error> for Error {
    fn from(source: clipstash_external_editor::Error) -> Self { Self::CallEditor { source } }
}

impl From<clipstash_client::Error> for Error {
    fn from(source: clipstash_client::Error) -> Self { Self::Client { source } }
}

impl From<clipstash_base::ClipEntryError> for Error {
    fn from(error: clipstash_base::ClipEntryError) -> Self { Self::EncodeData { error } }
}

macro_rules! impl_operation_error {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl From<clipstash_client::error::$ty> for Error {
                fn from(err: clipstash_client::error::$ty) -> Self {
                    Self::OperationError { error: err.to_string() }
                }
            }
        )+
    };
}

impl_operation_error![
    InsertClipError,
    GetClipError,
    GetCurrentClipError,
    GetLengthError,
    ClearClipError,
    RemoveClipError,
    BatchRemoveClipError,
    MarkClipError,
    PasteClipError,
    UpdateClipError,
    ListClipError,
    PinClipError,
    UnpinClipError,
    CreateFolderError,
    RenameFolderError,
    RemoveFolderError,
    ListFoldersError,
    ListPinnedError,
    EnableWatcherError,
    DisableWatcherError,
    ToggleWatcherError,
    GetWatcherStateError,
    GetAutostartStateError,
    EnableAutostartError,
    DisableAutostartError,
];

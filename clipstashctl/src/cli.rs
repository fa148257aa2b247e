use std::{io::Write, num::ParseIntError, path::PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use clipstash_base::{ClipEntryMetadata, ClipboardWatcherState, Folder};
use clipstash_client::{Client, Favorites as _, Manager as _, System as _, Watcher as _};
use clipstash_external_editor::ExternalEditor;
use snafu::ResultExt;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    runtime::Runtime,
};

use crate::{
    config::Config,
    error::{self, Error},
};

#[derive(Parser)]
#[command(
    name = clipstash_base::CTL_PROGRAM_NAME,
    author,
    version,
    about,
    long_about = None
)]
pub struct Cli {
    #[clap(subcommand)]
    commands: Option<Commands>,

    #[clap(
        long = "config",
        short = 'c',
        env = "CLIPSTASHCTL_CONFIG_FILE_PATH",
        help = "Specify a configuration file"
    )]
    config_file: Option<PathBuf>,

    #[clap(
        long = "server-endpoint",
        env = "CLIPSTASHCTL_SERVER_ENDPOINT",
        help = "Specify a server endpoint"
    )]
    server_endpoint: Option<http::Uri>,

    #[clap(long = "log-level", env = "CLIPSTASHCTL_LOG_LEVEL", help = "Specify a log level")]
    log_level: Option<tracing::Level>,
}

#[derive(Clone, Subcommand)]
pub enum Commands {
    #[clap(about = "Print the client and server version information")]
    Version {
        #[clap(long = "client", help = "If true, shows client version only (no server required).")]
        client: bool,
    },

    #[clap(about = "Output shell completion code for the specified shell (bash, zsh, fish)")]
    Completions { shell: clap_complete::Shell },

    #[clap(about = "Output default configuration")]
    DefaultConfig,

    #[clap(about = "Insert new clip into clipboard")]
    Insert { data: String },

    #[clap(aliases = &["cut"], about = "Loads file into clipboard")]
    Load {
        #[clap(
            long = "mime",
            short = 'm',
            default_value = "text/plain; charset=utf-8",
            help = "Specify the MIME type of the content"
        )]
        mime: mime::Mime,

        #[clap(long = "file", short = 'f')]
        file_path: Option<PathBuf>,
    },

    #[clap(about = "Write content of current clipboard into file")]
    Save {
        #[clap(long = "file", short = 'f')]
        file_path: Option<PathBuf>,
    },

    #[clap(about = "Print clip with <id>")]
    Get {
        #[clap(value_parser = parse_hex)]
        id: Option<u64>,
    },

    #[clap(
        aliases = &["ls"],
        about = "Print history of clipboard"
    )]
    List {
        #[clap(long)]
        no_id: bool,
    },

    #[clap(about = "Update clip with <id>")]
    Update {
        #[clap(value_parser = parse_hex)]
        id: u64,
        data: String,
    },

    #[clap(about = "Edit clip with <id>")]
    Edit {
        #[clap(env = "EDITOR", long = "editor", short = 'e')]
        editor: String,

        #[clap(value_parser = parse_hex)]
        id: u64,
    },

    #[clap(
        aliases = &["rm", "delete", "del"],
        about = "Remove clips with [ids]"
    )]
    Remove { ids: Vec<String> },

    #[clap(name = "promote", about = "Replace content of clipboard with clip with <id>")]
    Mark {
        #[clap(value_parser = parse_hex)]
        id: u64,
    },

    #[clap(about = "Replace content of clipboard with clip with <id>, then send a paste keystroke")]
    Paste {
        #[clap(value_parser = parse_hex)]
        id: u64,
    },

    #[clap(about = "Pin clip with <id>, optionally into a folder")]
    Pin {
        #[clap(long = "folder", value_parser = parse_hex, help = "Specify a folder id")]
        folder_id: Option<u64>,

        #[clap(value_parser = parse_hex)]
        id: u64,
    },

    #[clap(about = "Unpin clip with <id>")]
    Unpin {
        #[clap(value_parser = parse_hex)]
        id: u64,
    },

    #[clap(about = "Print pinned clips")]
    Pins {
        #[clap(long = "folder", value_parser = parse_hex, help = "Only show clips in folder")]
        folder_id: Option<u64>,

        #[clap(long)]
        no_id: bool,
    },

    #[clap(subcommand, about = "Manage favorite folders")]
    Folder(FolderCommands),

    #[clap(
        aliases = &["remove-all"],
        about = "Remove all clips in clipboard"
    )]
    Clear,

    #[clap(
        aliases = &["count", "len"],
        about = "Print length of clipboard history"
    )]
    Length,

    #[clap(aliases = &["enable"], about = "Enable clipboard watcher")]
    EnableWatcher,

    #[clap(aliases = &["disable"], about = "Disable clipboard watcher")]
    DisableWatcher,

    #[clap(aliases = &["toggle"], about = "Toggle clipboard watcher")]
    ToggleWatcher,

    #[clap(aliases = &["watcher-state"], about = "Get clipboard watcher state")]
    GetWatcherState,

    #[clap(subcommand, about = "Control starting the daemon on login")]
    Autostart(AutostartCommands),
}

#[derive(Clone, Subcommand)]
pub enum FolderCommands {
    #[clap(about = "Create a new folder")]
    Create { name: String },

    #[clap(about = "Rename folder with <id>")]
    Rename {
        #[clap(value_parser = parse_hex)]
        id: u64,
        name: String,
    },

    #[clap(aliases = &["rm", "delete", "del"], about = "Remove folder with <id>")]
    Remove {
        #[clap(value_parser = parse_hex)]
        id: u64,
    },

    #[clap(aliases = &["ls"], about = "Print folders")]
    List,
}

#[derive(Clone, Subcommand)]
pub enum AutostartCommands {
    #[clap(about = "Print whether the daemon starts on login")]
    Status,

    #[clap(about = "Start the daemon on login")]
    Enable,

    #[clap(about = "Do not start the daemon on login")]
    Disable,
}

impl Default for Cli {
    fn default() -> Self { Self::parse() }
}

impl Cli {
    fn load_config(&self) -> Config {
        let mut config =
            Config::load_or_default(self.config_file.clone().unwrap_or_else(Config::default_path));
        if let Some(endpoint) = &self.server_endpoint {
            config.server_endpoint = endpoint.clone();
        }

        if let Some(log_level) = self.log_level {
            config.log.level = log_level;
        }

        config
    }

    #[allow(clippy::too_many_lines)]
    pub fn run(self) -> Result<i32, Error> {
        let client_version = Self::command().get_version().unwrap_or_default().to_string();
        match self.commands {
            Some(Commands::Version { client }) if client => {
                std::io::stdout()
                    .write_all(Self::command().render_long_version().as_bytes())
                    .expect("Failed to write to stdout");
                std::io::stdout()
                    .write_all(format!("Client Version: {client_version}\n").as_bytes())
                    .expect("Failed to write to stdout");

                return Ok(0);
            }
            Some(Commands::Completions { shell }) => {
                let mut app = Self::command();
                let bin_name = app.get_name().to_string();
                clap_complete::generate(shell, &mut app, bin_name, &mut std::io::stdout());
                return Ok(0);
            }
            Some(Commands::DefaultConfig) => {
                let config_text =
                    toml::to_string_pretty(&Config::default()).expect("Config is serializable");
                std::io::stdout()
                    .write_all(config_text.as_bytes())
                    .expect("Failed to write to stdout");
                return Ok(0);
            }
            _ => {}
        }

        let config = self.load_config();
        config.log.registry();

        let fut = async move {
            let client = Client::new(clipstash_client::Config {
                grpc_endpoint: config.server_endpoint,
            })
            .await?;

            match self.commands {
                Some(Commands::Version { .. }) => {
                    let server_version = client
                        .get_version()
                        .await
                        .map_or_else(|_err| "unknown".to_string(), |version| version.to_string());
                    let info = format!(
                        "Client Version: {client_version}\nServer Version: {server_version}\n",
                    );
                    std::io::stdout()
                        .write_all(Self::command().render_long_version().as_bytes())
                        .expect("Failed to write to stdout");
                    std::io::stdout()
                        .write_all(info.as_bytes())
                        .expect("Failed to write to stdout");

                    return Ok(0);
                }
                None => {
                    print_list(&client, config.preview_length, false).await?;
                }
                Some(Commands::List { no_id }) => {
                    print_list(&client, config.preview_length, no_id).await?;
                }
                Some(Commands::Get { id }) => {
                    let data = if let Some(id) = id {
                        client.get(id).await?.printable_data(None)
                    } else {
                        client
                            .list(config.preview_length)
                            .await?
                            .into_iter()
                            .next()
                            .map(|metadata| metadata.preview)
                            .unwrap_or_default()
                    };

                    println!("{data}");
                }
                Some(Commands::Insert { data }) => {
                    let _id = client.insert(data.as_bytes(), mime::TEXT_PLAIN_UTF_8).await?;
                }
                Some(Commands::Length) => {
                    println!("{len}", len = client.length().await?);
                }
                Some(Commands::Load { file_path, mime }) => {
                    let (data, mime) = load_file_or_read_stdin(file_path, mime).await?;
                    let _id = client.insert(&data, mime).await?;
                }
                Some(Commands::Save { file_path }) => {
                    let data = client.get_current_clip().await?.encoded()?;
                    save_file_or_write_stdout(file_path, data).await?;
                }
                Some(Commands::Remove { ids }) => {
                    let ids = ids
                        .into_iter()
                        .filter_map(|id| match parse_hex(&id) {
                            Ok(id) => Some(id),
                            Err(err) => {
                                eprintln!("Failed to parse ID {id}, error: {err}");
                                None
                            }
                        })
                        .collect::<Vec<u64>>();

                    if ids.is_empty() {
                        println!("Nothing is removed");
                        return Ok(0);
                    }
                    drop(client.batch_remove(&ids).await?);
                }
                Some(Commands::Clear) => {
                    client.clear().await?;
                }
                Some(Commands::Edit { id, editor }) => {
                    let data = client.get(id).await?;
                    if data.is_utf8_string() {
                        let editor = ExternalEditor::new(editor);
                        let data = editor
                            .execute(&data.as_utf8_string())
                            .await
                            .context(error::CallEditorSnafu)?;
                        let (ok, new_id) =
                            client.update(id, data.as_bytes(), mime::TEXT_PLAIN_UTF_8).await?;
                        if ok {
                            println!("{new_id:016x}");
                        }
                        let _ok = client.mark(new_id).await?;
                    } else {
                        println!(
                            "{id:016x} is a {}, you could not edit with text editor",
                            data.mime().essence_str()
                        );
                    }
                }
                Some(Commands::Update { id, data }) => {
                    let (ok, new_id) =
                        client.update(id, data.as_bytes(), mime::TEXT_PLAIN_UTF_8).await?;
                    if ok {
                        println!("{new_id:016x}");
                    }
                }
                Some(Commands::Mark { id }) => {
                    if client.mark(id).await? {
                        println!("Ok");
                    }
                }
                Some(Commands::Paste { id }) => {
                    if client.paste(id).await? {
                        println!("Ok");
                    }
                }
                Some(Commands::Pin { id, folder_id }) => {
                    client.pin(id, folder_id).await?;
                }
                Some(Commands::Unpin { id }) => {
                    client.unpin(id).await?;
                }
                Some(Commands::Pins { folder_id, no_id }) => {
                    let metadata_list = client.list_pinned(folder_id, config.preview_length).await?;
                    print_metadata_list(metadata_list, no_id);
                }
                Some(Commands::Folder(FolderCommands::Create { name })) => {
                    let Folder { id, name, .. } = client.create_folder(&name).await?;
                    println!("{id:016x}: {name}");
                }
                Some(Commands::Folder(FolderCommands::Rename { id, name })) => {
                    if client.rename_folder(id, &name).await? {
                        println!("Ok");
                    }
                }
                Some(Commands::Folder(FolderCommands::Remove { id })) => {
                    if client.remove_folder(id).await? {
                        println!("Ok");
                    }
                }
                Some(Commands::Folder(FolderCommands::List)) => {
                    for Folder { id, name, .. } in client.list_folders().await? {
                        println!("{id:016x}: {name}");
                    }
                }
                Some(Commands::EnableWatcher) => {
                    print_watcher_state(client.enable_watcher().await?);
                }
                Some(Commands::DisableWatcher) => {
                    print_watcher_state(client.disable_watcher().await?);
                }
                Some(Commands::ToggleWatcher) => {
                    print_watcher_state(client.toggle_watcher().await?);
                }
                Some(Commands::GetWatcherState) => {
                    print_watcher_state(client.get_watcher_state().await?);
                }
                Some(Commands::Autostart(AutostartCommands::Status)) => {
                    print_autostart_state(client.get_autostart_state().await?);
                }
                Some(Commands::Autostart(AutostartCommands::Enable)) => {
                    print_autostart_state(client.enable_autostart().await?);
                }
                Some(Commands::Autostart(AutostartCommands::Disable)) => {
                    print_autostart_state(client.disable_autostart().await?);
                }
                _ => unreachable!(),
            }

            drop(client);
            Ok(0)
        };

        Runtime::new().context(error::InitializeTokioRuntimeSnafu)?.block_on(fut)
    }
}

async fn load_file_or_read_stdin(
    file_path: Option<PathBuf>,
    mime: mime::Mime,
) -> Result<(bytes::BytesMut, mime::Mime), Error> {
    let mut content = bytes::BytesMut::new();

    if let Some(file_path) = file_path {
        let mut file = tokio::fs::OpenOptions::new()
            .read(true)
            .open(&file_path)
            .await
            .context(error::ReadFileSnafu { filename: file_path.clone() })?;
        loop {
            let size = file
                .read_buf(&mut content)
                .await
                .context(error::ReadFileSnafu { filename: file_path.clone() })?;
            if size == 0 {
                break;
            }
        }
    } else {
        let mut file = tokio::io::stdin();
        loop {
            let size = file.read_buf(&mut content).await.context(error::ReadStdinSnafu)?;
            if size == 0 {
                break;
            }
        }
    }

    if mime.type_() == mime::TEXT {
        let _unused = simdutf8::basic::from_utf8(&content).context(error::CheckUtf8StringSnafu)?;
    }

    Ok((content, mime))
}

async fn save_file_or_write_stdout<Data>(
    file_path: Option<PathBuf>,
    data: Data,
) -> Result<(), Error>
where
    Data: AsRef<[u8]> + Send + Unpin,
{
    if let Some(file_path) = file_path {
        tokio::fs::write(&file_path, data)
            .await
            .context(error::ReadFileSnafu { filename: file_path.clone() })
    } else {
        tokio::io::stdout().write_all(data.as_ref()).await.context(error::WriteStdoutSnafu)
    }
}

#[inline]
fn print_watcher_state(state: ClipboardWatcherState) {
    let project_name = clipstash_base::PROJECT_NAME_WITH_INITIAL_CAPITAL;
    let msg = match state {
        ClipboardWatcherState::Enabled => format!("{project_name} is watching clipboard."),
        ClipboardWatcherState::Disabled => format!("{project_name} is not watching clipboard."),
    };
    println!("{msg}");
}

#[inline]
fn print_autostart_state(enabled: bool) {
    let daemon = clipstash_base::DAEMON_PROGRAM_NAME;
    if enabled {
        println!("{daemon} starts on login.");
    } else {
        println!("{daemon} does not start on login.");
    }
}

async fn print_list(client: &Client, preview_length: usize, no_id: bool) -> Result<(), Error> {
    let metadata_list = client.list(preview_length).await?;
    print_metadata_list(metadata_list, no_id);
    Ok(())
}

fn print_metadata_list(metadata_list: Vec<ClipEntryMetadata>, no_id: bool) {
    for metadata in metadata_list {
        let ClipEntryMetadata { id, preview, .. } = metadata;
        if no_id {
            println!("{preview}");
        } else {
            println!("{id:016x}: {preview}");
        }
    }
}

#[inline]
fn parse_hex(src: &str) -> Result<u64, ParseIntError> { u64::from_str_radix(src, 16) }

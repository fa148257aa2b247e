use std::{
    cmp::Ordering,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use clipstash_base::ClipEntry;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use time::{format_description::well_known::Rfc3339, OffsetDateTime, UtcOffset};
use tokio::{
    fs::{File, OpenOptions},
    io::{AsyncSeekExt, AsyncWriteExt, SeekFrom},
};

use crate::history::{driver::Driver, error, Error};

const CURRENT_SCHEMA: u64 = FileHeader::SCHEMA_VERSION;

#[derive(Clone, Debug, Deserialize, Serialize)]
struct FileHeader {
    schema: u64,

    #[serde(with = "time::serde::rfc3339")]
    last_update: OffsetDateTime,
}

impl FileHeader {
    const SCHEMA_VERSION: u64 = 1;
}

// images are deliberately not cached, a restart recovers text entries only
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
struct TextRecord {
    timestamp: OffsetDateTime,
    data: String,
}

impl PartialOrd for TextRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for TextRecord {
    // newest first, so truncation keeps the most recent records
    fn cmp(&self, other: &Self) -> Ordering {
        match other.timestamp.cmp(&self.timestamp) {
            Ordering::Equal => self.data.cmp(&other.data),
            ord => ord,
        }
    }
}

pub struct FileSystemDriver {
    file_path: PathBuf,
    clips_file: File,
    header_file: File,
}

impl FileSystemDriver {
    pub async fn new<P>(file_path: P) -> Result<Self, Error>
    where
        P: AsRef<Path> + Send,
    {
        let file_path = file_path.as_ref().to_path_buf();
        let header_file_path = header_file_path(&file_path);
        let clips_file_path = clips_file_path(&file_path);

        tokio::fs::create_dir_all(&file_path)
            .await
            .context(error::CreateDirectorySnafu { file_path: file_path.clone() })?;

        if let Ok(header_content) = tokio::fs::read(&header_file_path).await {
            if let Ok(FileHeader { schema, last_update }) =
                serde_json::from_slice::<FileHeader>(&header_content)
            {
                tracing::info!(
                    "Open `{}`, schema: {schema}, last update: {last_update}",
                    header_file_path.display(),
                    last_update = last_update
                        .to_offset(UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
                        .format(&Rfc3339)
                        .unwrap_or_default()
                );

                if schema > CURRENT_SCHEMA {
                    return Err(Error::NewerSchema { new: schema, current: CURRENT_SCHEMA });
                }
            }
        }

        let header_file = OpenOptions::new()
            .create(true)
            .write(true)
            .read(true)
            .append(false)
            .open(&header_file_path)
            .await
            .context(error::OpenFileSnafu { file_path: header_file_path })?;

        let clips_file = OpenOptions::new()
            .create(true)
            .write(true)
            .read(true)
            .append(true)
            .open(&clips_file_path)
            .await
            .context(error::OpenFileSnafu { file_path: clips_file_path })?;

        Ok(Self { file_path, clips_file, header_file })
    }

    async fn update_header(&mut self) -> Result<(), Error> {
        self.header_file
            .set_len(0)
            .await
            .context(error::TruncateFileSnafu { file_path: self.header_file_path() })?;
        drop(self.header_file.seek(SeekFrom::Start(0)).await);

        let content = serde_json::to_string_pretty(&FileHeader {
            schema: FileHeader::SCHEMA_VERSION,
            last_update: OffsetDateTime::now_utc(),
        })
        .context(error::SerializeHistoryHeaderSnafu)?;

        self.header_file
            .write_all(content.as_bytes())
            .await
            .context(error::WriteFileSnafu { file_path: self.header_file_path() })
    }

    async fn store_file_content(&mut self, clip: &ClipEntry) -> Result<(), Error> {
        let record =
            TextRecord { timestamp: clip.timestamp(), data: clip.as_utf8_string() };
        let content = bincode::serialize(&record).context(error::SerializeClipSnafu)?;
        self.clips_file
            .write_all(content.as_ref())
            .await
            .with_context(|_| error::WriteFileSnafu { file_path: self.clips_file_path() })
    }

    pub fn header_file_path(&self) -> PathBuf { header_file_path(&self.file_path) }

    pub fn clips_file_path(&self) -> PathBuf { clips_file_path(&self.file_path) }
}

#[async_trait]
impl Driver for FileSystemDriver {
    async fn save(&mut self, clips: &[ClipEntry]) -> Result<(), Error> {
        self.clips_file
            .set_len(0)
            .await
            .context(error::TruncateFileSnafu { file_path: self.clips_file_path() })?;
        for clip in clips.iter().filter(|clip| clip.is_utf8_string()) {
            self.store_file_content(clip).await?;
        }

        drop(self.clips_file.flush().await);

        self.update_header().await
    }

    async fn load(&mut self) -> Result<Vec<ClipEntry>, Error> {
        let clips_file_path = self.clips_file_path();
        let clips_file = OpenOptions::new()
            .create(true)
            .write(true)
            .read(true)
            .append(true)
            .open(&clips_file_path)
            .await
            .with_context(|_| error::OpenFileSnafu { file_path: clips_file_path })?
            .into_std()
            .await;

        tokio::task::spawn_blocking(move || {
            let mut clips = Vec::new();

            while let Ok(TextRecord { timestamp, data }) =
                bincode::deserialize_from::<_, TextRecord>(&clips_file)
            {
                if let Ok(clip) =
                    ClipEntry::new(data.as_bytes(), &mime::TEXT_PLAIN_UTF_8, Some(timestamp))
                {
                    clips.push(clip);
                }
            }
            Ok(clips)
        })
        .await
        .context(error::JoinTaskSnafu)?
    }

    async fn clear(&mut self) -> Result<(), Error> {
        self.update_header().await?;

        self.clips_file
            .set_len(0)
            .await
            .context(error::TruncateFileSnafu { file_path: self.clips_file_path() })
    }

    async fn put(&mut self, clip: &ClipEntry) -> Result<(), Error> {
        if !clip.is_utf8_string() {
            return Ok(());
        }

        self.update_header().await?;

        drop(self.clips_file.seek(SeekFrom::End(0)).await);
        self.store_file_content(clip).await
    }

    async fn shrink_to(&mut self, min_capacity: usize) -> Result<(), Error> {
        drop(self.clips_file.flush().await);

        let clips_file_path = self.clips_file_path();
        let clips_file = OpenOptions::new()
            .create(true)
            .write(true)
            .read(true)
            .open(&clips_file_path)
            .await
            .with_context(|_| error::OpenFileSnafu { file_path: clips_file_path })?
            .into_std()
            .await;

        let mut records = tokio::task::spawn_blocking(move || {
            let mut records = Vec::new();
            while let Ok(record) = bincode::deserialize_from::<_, TextRecord>(&clips_file) {
                records.push(record);
            }
            records
        })
        .await
        .context(error::JoinTaskSnafu)?;

        records.sort_unstable();
        records.truncate(min_capacity);

        self.clips_file
            .set_len(0)
            .await
            .with_context(|_| error::TruncateFileSnafu { file_path: self.clips_file_path() })?;

        {
            let mut buffer = Vec::with_capacity(1024);
            for record in records {
                buffer.clear();
                bincode::serialize_into(&mut buffer, &record)
                    .context(error::SerializeClipSnafu)?;

                self.clips_file.write_all(&buffer).await.with_context(|_| {
                    error::WriteFileSnafu { file_path: self.clips_file_path() }
                })?;
            }
        }

        drop(self.clips_file.flush().await);

        self.update_header().await
    }
}

fn header_file_path<P>(file_path: P) -> PathBuf
where
    P: AsRef<Path>,
{
    [file_path.as_ref(), Path::new("header.json")].into_iter().collect()
}

fn clips_file_path<P>(file_path: P) -> PathBuf
where
    P: AsRef<Path>,
{
    [file_path.as_ref(), Path::new("clips")].into_iter().collect()
}

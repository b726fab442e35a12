//! JSON-per-record hotel document store.

use std::path::PathBuf;

use innkeep_core::error::CoreError;
use innkeep_core::hotel::HotelRecord;

/// Reads and writes one JSON document per hotel under a fixed data directory.
///
/// The document path is a pure function of the hotel id
/// (`<data_dir>/<hotelId>.json`); there is no other index. Writes overwrite
/// the whole document with no partial-write protection -- a crash mid-write
/// can corrupt the file, which is an accepted risk at this scope. Concurrent
/// writers to the same id race with last-writer-wins semantics.
#[derive(Debug, Clone)]
pub struct RecordStore {
    data_dir: PathBuf,
}

impl RecordStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The on-disk path for a hotel id.
    pub fn record_path(&self, hotel_id: &str) -> PathBuf {
        self.data_dir.join(format!("{hotel_id}.json"))
    }

    /// Read and deserialize the document for `hotel_id`.
    ///
    /// A missing file maps to [`CoreError::NotFound`]; content that is not a
    /// well-formed record maps to [`CoreError::Corrupt`]; any other I/O
    /// failure surfaces as [`CoreError::Storage`].
    pub async fn get(&self, hotel_id: &str) -> Result<HotelRecord, CoreError> {
        let path = self.record_path(hotel_id);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(CoreError::NotFound {
                    entity: "Hotel",
                    id: hotel_id.to_string(),
                });
            }
            Err(err) => return Err(CoreError::Storage(err)),
        };

        serde_json::from_slice(&bytes).map_err(|err| CoreError::Corrupt {
            id: hotel_id.to_string(),
            reason: err.to_string(),
        })
    }

    /// Serialize `record` as formatted JSON and write it to the derived
    /// path, replacing any existing content in full.
    pub async fn put(&self, record: &HotelRecord) -> Result<(), CoreError> {
        let path = self.record_path(&record.hotel_id);
        let json = serde_json::to_vec_pretty(record).map_err(|err| CoreError::Corrupt {
            id: record.hotel_id.clone(),
            reason: err.to_string(),
        })?;

        tokio::fs::write(&path, json).await?;
        tracing::debug!(hotel_id = %record.hotel_id, path = %path.display(), "Record written");
        Ok(())
    }

    /// Create the data directory if it does not exist yet. Already-exists is
    /// success; safe to call from concurrent starters.
    pub async fn ensure_root(&self) -> Result<(), CoreError> {
        tokio::fs::create_dir_all(&self.data_dir).await?;
        Ok(())
    }
}

//! Upload destination resolution and file placement.
//!
//! Uploaded images live under a fixed root, partitioned by scope:
//!
//! ```text
//! <upload_dir>/Hotel-imgs/<hotelId>/<storedFilename>
//! <upload_dir>/Room-imgs/<hotelId>/<roomSlug>/<storedFilename>
//! ```
//!
//! Clients see them through the matching public paths under `/uploads/...`.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use innkeep_core::error::CoreError;

const HOTEL_IMG_DIR: &str = "Hotel-imgs";
const ROOM_IMG_DIR: &str = "Room-imgs";

/// Places uploaded files on disk and produces their public reference paths.
///
/// Stored filenames combine the scope identifier, a millisecond timestamp and
/// a process-wide counter with the original name, so two files from the same
/// request batch never collide. The exact format is not a compatibility
/// contract -- only uniqueness is.
#[derive(Debug)]
pub struct UploadStore {
    upload_dir: PathBuf,
    seq: AtomicU64,
}

impl UploadStore {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            seq: AtomicU64::new(0),
        }
    }

    /// Destination directory for a scope, created if absent.
    ///
    /// Creation is idempotent: a directory another request already created is
    /// success, not failure.
    pub async fn resolve_dir(
        &self,
        hotel_id: &str,
        room_slug: Option<&str>,
    ) -> Result<PathBuf, CoreError> {
        let dir = match room_slug {
            Some(slug) => self
                .upload_dir
                .join(ROOM_IMG_DIR)
                .join(hotel_id)
                .join(slug),
            None => self.upload_dir.join(HOTEL_IMG_DIR).join(hotel_id),
        };

        tokio::fs::create_dir_all(&dir).await?;
        Ok(dir)
    }

    /// Collision-resistant stored filename for one uploaded file.
    ///
    /// The scope identifier is the room slug when present, else the hotel id.
    /// Path separators in the original name are stripped so a crafted
    /// filename cannot escape the destination directory.
    pub fn stored_filename(
        &self,
        hotel_id: &str,
        room_slug: Option<&str>,
        original_name: &str,
    ) -> String {
        let scope = room_slug.unwrap_or(hotel_id);
        let millis = chrono::Utc::now().timestamp_millis();
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let original = sanitize_filename(original_name);
        format!("{scope}-{millis}-{seq}-{original}")
    }

    /// Public-facing reference path for a stored file, as recorded on the
    /// hotel document and served under `/uploads`.
    pub fn public_path(hotel_id: &str, room_slug: Option<&str>, stored_name: &str) -> String {
        match room_slug {
            Some(slug) => format!("/uploads/{ROOM_IMG_DIR}/{hotel_id}/{slug}/{stored_name}"),
            None => format!("/uploads/{HOTEL_IMG_DIR}/{hotel_id}/{stored_name}"),
        }
    }

    /// Write one uploaded file into its resolved destination and return the
    /// public reference path to record.
    pub async fn save(
        &self,
        hotel_id: &str,
        room_slug: Option<&str>,
        original_name: &str,
        data: &[u8],
    ) -> Result<String, CoreError> {
        let dir = self.resolve_dir(hotel_id, room_slug).await?;
        let stored_name = self.stored_filename(hotel_id, room_slug, original_name);

        let dest = dir.join(&stored_name);
        tokio::fs::write(&dest, data).await?;
        tracing::debug!(path = %dest.display(), bytes = data.len(), "Upload stored");

        Ok(Self::public_path(hotel_id, room_slug, &stored_name))
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Create the uploads root if it does not exist yet.
    pub async fn ensure_root(&self) -> Result<(), CoreError> {
        tokio::fs::create_dir_all(&self.upload_dir).await?;
        Ok(())
    }
}

/// Keep only the final path component of a client-supplied filename.
fn sanitize_filename(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

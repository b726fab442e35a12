//! Persistence for the hotel listing service.
//!
//! Two filesystem-backed stores: [`RecordStore`] keeps one JSON document per
//! hotel under a data directory, [`UploadStore`] places uploaded image files
//! under a partitioned uploads directory and produces their public reference
//! paths. Both take their root directory as an explicit constructor argument;
//! nothing here reads global state.

pub mod record;
pub mod uploads;

pub use record::RecordStore;
pub use uploads::UploadStore;

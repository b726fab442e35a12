//! Domain logic for the hotel listing service.
//!
//! Pure record types and operations: slug derivation, record construction,
//! patch merging, room lookup. No I/O lives here; persistence is the
//! `innkeep-store` crate's concern.

pub mod error;
pub mod hotel;
pub mod slug;

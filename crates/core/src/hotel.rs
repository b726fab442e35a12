//! Hotel and room record types plus the pure mutation operations on them.
//!
//! A [`HotelRecord`] is the unit of persistence: one JSON document per hotel,
//! rooms embedded. Wire and on-disk field names are camelCase, matching the
//! stored document format.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::slug::slugify;

/// A hotel listing. Identity is `hotel_id`, generated at creation and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelRecord {
    pub hotel_id: String,
    /// Derived from the title at creation time and never re-derived, so it
    /// goes stale if the title is later updated.
    pub slug: String,
    /// Public reference paths of hotel-level images, in upload order.
    /// Append-only: nothing in the system removes entries.
    pub images: Vec<String>,
    pub title: String,
    pub description: String,
    pub guest_count: u32,
    pub bedroom_count: u32,
    pub bathroom_count: u32,
    pub amenities: Vec<String>,
    pub host_info: HostInfo,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rooms: Vec<RoomRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostInfo {
    pub name: String,
    pub email: String,
}

/// A room embedded in its parent hotel. Rooms have no standalone document;
/// their lifecycle is wholly owned by the hotel record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRecord {
    /// Addressing key within the parent hotel's room list. Uniqueness is the
    /// caller's responsibility; it is not enforced here.
    pub room_slug: String,
    pub room_title: String,
    pub bedroom_count: u32,
    /// Public reference paths of room-level images, in upload order.
    pub images: Vec<String>,
}

/// Input for creating a hotel. Everything except the title is optional and
/// defaults to empty/zero.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHotel {
    pub title: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub guest_count: u32,
    #[serde(default)]
    pub bedroom_count: u32,
    #[serde(default)]
    pub bathroom_count: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub host_info: HostInfo,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub rooms: Vec<CreateRoom>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoom {
    pub room_slug: String,
    pub room_title: String,
    #[serde(default)]
    pub bedroom_count: u32,
}

/// Partial update for a hotel. Present fields overwrite, absent fields are
/// preserved. `host_info` is itself a partial patch merged per sub-field.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHotel {
    pub title: Option<String>,
    pub description: Option<String>,
    pub guest_count: Option<u32>,
    pub bedroom_count: Option<u32>,
    pub bathroom_count: Option<u32>,
    pub amenities: Option<Vec<String>>,
    pub host_info: Option<HostInfoPatch>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HostInfoPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl HotelRecord {
    /// Build a new hotel record from creation input.
    ///
    /// Generates a fresh `hotel_id` (uuid v4) and derives the slug from the
    /// title. Hotel images start empty; rooms come from the input, each with
    /// an empty image list.
    pub fn create(input: CreateHotel) -> Result<Self, CoreError> {
        let title = match input.title {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(CoreError::Validation("Title is required".to_string())),
        };

        let hotel_id = uuid::Uuid::new_v4().to_string();
        let slug = slugify(&title);

        let rooms = input
            .rooms
            .into_iter()
            .map(|r| RoomRecord {
                room_slug: r.room_slug,
                room_title: r.room_title,
                bedroom_count: r.bedroom_count,
                images: Vec::new(),
            })
            .collect();

        Ok(Self {
            hotel_id,
            slug,
            images: Vec::new(),
            title,
            description: input.description,
            guest_count: input.guest_count,
            bedroom_count: input.bedroom_count,
            bathroom_count: input.bathroom_count,
            amenities: input.amenities,
            host_info: input.host_info,
            address: input.address,
            latitude: input.latitude,
            longitude: input.longitude,
            rooms,
        })
    }

    /// Shallow-merge a patch over this record.
    ///
    /// A present field overwrites the old value even when it is zero or an
    /// empty string; absent fields are untouched. `host_info` merges at the
    /// sub-field level. The slug is deliberately not re-derived when the
    /// title changes.
    pub fn apply_update(&mut self, patch: UpdateHotel) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(guest_count) = patch.guest_count {
            self.guest_count = guest_count;
        }
        if let Some(bedroom_count) = patch.bedroom_count {
            self.bedroom_count = bedroom_count;
        }
        if let Some(bathroom_count) = patch.bathroom_count {
            self.bathroom_count = bathroom_count;
        }
        if let Some(amenities) = patch.amenities {
            self.amenities = amenities;
        }
        if let Some(host_info) = patch.host_info {
            if let Some(name) = host_info.name {
                self.host_info.name = name;
            }
            if let Some(email) = host_info.email {
                self.host_info.email = email;
            }
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(latitude) = patch.latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = patch.longitude {
            self.longitude = longitude;
        }
    }

    /// Find a room by its slug, exact match.
    ///
    /// Room slug uniqueness is not enforced anywhere; if duplicates exist,
    /// the first match in list order wins.
    pub fn find_room_mut(&mut self, room_slug: &str) -> Option<&mut RoomRecord> {
        self.rooms.iter_mut().find(|r| r.room_slug == room_slug)
    }
}

//! Data structures and types for castgate
//!
//! Contains all shared models used across the crate organized by domain:
//! - **Catalog**: remote catalog entries and stream manifest URLs
//! - **Load**: the host's mutable LOAD request and display metadata
//! - **Browse**: shelf items and the content block bound to the UI surface
//! - **Controls**: slot/button identifiers for the control-button layout

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Catalog Models
// =============================================================================

/// A fetched catalog snapshot: content id -> entry.
///
/// Produced fresh on every fetch; ids are unique within one snapshot and
/// iteration order is sorted by id.
pub type Catalog = BTreeMap<String, CatalogEntry>;

/// One piece of content in the remote catalog
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    /// Subtitle source for load metadata
    #[serde(default)]
    pub author: Option<String>,
    /// Subtitle source for the browse shelf
    #[serde(default)]
    pub description: Option<String>,
    /// Poster image URL for browse display
    pub poster: String,
    pub stream: StreamUrls,
}

/// Alternate manifest URLs for the same content, one per stream format
#[derive(Debug, Clone, Deserialize)]
pub struct StreamUrls {
    pub dash: String,
    pub hls: String,
}

// =============================================================================
// Stream Format Policy
// =============================================================================

/// Stream format served to the player.
///
/// A deploy-time policy value carried in [`crate::config::Config`], fixed
/// per deployment and never negotiated per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamFormat {
    #[default]
    Dash,
    Hls,
}

impl StreamFormat {
    /// MIME content type the host player expects for this format
    pub fn content_type(self) -> &'static str {
        match self {
            StreamFormat::Dash => "application/dash+xml",
            StreamFormat::Hls => "application/x-mpegurl",
        }
    }
}

impl fmt::Display for StreamFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamFormat::Dash => write!(f, "DASH"),
            StreamFormat::Hls => write!(f, "HLS"),
        }
    }
}

/// HLS segment container format tag understood by the host player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HlsSegmentFormat {
    Aac,
    Ts,
    Fmp4,
}

/// Result of mapping a catalog entry through the configured stream format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamSelection {
    pub content_type: String,
    pub content_url: String,
    /// Set only for HLS; applies to both the audio and video track dimensions
    pub hls_segment_format: Option<HlsSegmentFormat>,
}

impl StreamSelection {
    /// Pick the manifest URL and playback flags for `format`.
    ///
    /// HLS streams in this catalog carry fragmented-MP4 segments, so HLS
    /// selection always tags FMP4.
    pub fn select(entry: &CatalogEntry, format: StreamFormat) -> Self {
        match format {
            StreamFormat::Dash => Self {
                content_type: format.content_type().to_string(),
                content_url: entry.stream.dash.clone(),
                hls_segment_format: None,
            },
            StreamFormat::Hls => Self {
                content_type: format.content_type().to_string(),
                content_url: entry.stream.hls.clone(),
                hls_segment_format: Some(HlsSegmentFormat::Fmp4),
            },
        }
    }
}

// =============================================================================
// Load Request Models
// =============================================================================

/// The host's LOAD message, mutated in place during resolution
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadRequest {
    pub media: MediaInfo,
}

impl LoadRequest {
    /// Build a request carrying an `entity` content reference
    pub fn for_entity(entity: impl Into<String>) -> Self {
        Self {
            media: MediaInfo {
                entity: Some(entity.into()),
                ..Default::default()
            },
        }
    }

    /// Build a request carrying a `contentId` content reference
    pub fn for_content_id(content_id: impl Into<String>) -> Self {
        Self {
            media: MediaInfo {
                content_id: Some(content_id.into()),
                ..Default::default()
            },
        }
    }
}

/// Media description inside a load request (host wire shape, camelCase)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_segment_format: Option<HlsSegmentFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_video_segment_format: Option<HlsSegmentFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MediaMetadata>,
}

/// Display metadata attached to a resolved request.
///
/// Absent catalog fields pass through as `None`; nothing is validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

impl MediaMetadata {
    /// Build display metadata for a resolved entry: title from the entry's
    /// title, subtitle from its author
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            title: Some(entry.title.clone()),
            subtitle: entry.author.clone(),
        }
    }
}

// =============================================================================
// Browse Shelf Models
// =============================================================================

/// Image shape tag for browse display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowseImageType {
    Movie,
    TvShow,
    MusicTrack,
}

/// Aspect ratio the display surface crops shelf images to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowseImageAspectRatio {
    Square1x1,
    Portrait2x3,
    Landscape16x9,
}

/// A catalog entry projected into browse-shelf display form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowseItem {
    /// Content reference the host sends back in the LOAD request when the
    /// item is tapped
    pub entity: String,
    pub title: String,
    pub subtitle: Option<String>,
    /// Poster image URL
    pub image: String,
    pub image_type: BrowseImageType,
}

impl BrowseItem {
    /// Project a catalog entry for the shelf. Shelf subtitles come from the
    /// entry's description, not its author.
    pub fn from_entry(entity: impl Into<String>, entry: &CatalogEntry) -> Self {
        Self {
            entity: entity.into(),
            title: entry.title.clone(),
            subtitle: entry.description.clone(),
            image: entry.poster.clone(),
            image_type: BrowseImageType::Movie,
        }
    }
}

/// The shelf block bound to the display surface on media change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowseContent {
    pub title: String,
    pub items: Vec<BrowseItem>,
    pub target_aspect_ratio: BrowseImageAspectRatio,
}

// =============================================================================
// Controls Models
// =============================================================================

/// Button slot on the host's control surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlsSlot {
    Primary1,
    Primary2,
    Secondary1,
    Secondary2,
}

/// Button the host can render into a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlsButton {
    SeekBackward30,
    SeekForward30,
    QueuePrev,
    QueueNext,
    Captions,
}

// =============================================================================
// Tests
// =============================================================================

//! LOAD request interception and resolution
//!
//! The host registers [`LoadRequestInterceptor::resolve`] for its LOAD
//! message type. Resolution turns an opaque content reference into a
//! playable request: fetch the catalog, look the reference up, then rewrite
//! the request with the manifest URL, content type, playback flags, and
//! display metadata.

use thiserror::Error;
use tracing::{debug, error, info};

use crate::api::{CatalogClient, TransportError};
use crate::models::{LoadRequest, MediaMetadata, StreamFormat, StreamSelection};

/// Why a load request was rejected
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// The catalog fetch itself failed; playback cannot proceed
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(#[from] TransportError),

    /// The request carried neither an entity nor a contentId
    #[error("load request carries no content reference")]
    MissingContentId,

    /// The requested id is not in the fetched catalog snapshot
    #[error("content '{content_id}' not found in catalog")]
    ContentNotFound { content_id: String },
}

/// Resolves inbound LOAD requests against the remote catalog.
///
/// Every call performs its own independent catalog fetch; concurrent calls
/// do not share or dedupe in-flight fetches, and nothing is retried. Any
/// failure is terminal for that single load attempt.
pub struct LoadRequestInterceptor {
    catalog: CatalogClient,
    format: StreamFormat,
}

impl LoadRequestInterceptor {
    pub fn new(catalog: CatalogClient, format: StreamFormat) -> Self {
        Self { catalog, format }
    }

    /// The stream format this deployment serves
    pub fn format(&self) -> StreamFormat {
        self.format
    }

    /// Resolve `request` in place.
    ///
    /// On success the request carries `contentType`, `contentUrl`, metadata,
    /// and (for HLS) segment-format flags. On failure only the
    /// entity-to-contentId normalization is observable; the playback fields
    /// are untouched.
    pub async fn resolve(&self, request: &mut LoadRequest) -> Result<(), ResolutionError> {
        info!("intercepting load request");

        // The entity field is the canonical content reference when present
        if let Some(entity) = request.media.entity.clone() {
            request.media.content_id = Some(entity);
        }
        let content_id = request
            .media
            .content_id
            .clone()
            .ok_or(ResolutionError::MissingContentId)?;

        let catalog = self.catalog.fetch().await?;

        let Some(entry) = catalog.get(&content_id) else {
            error!("content '{content_id}' not found in catalog");
            return Err(ResolutionError::ContentNotFound { content_id });
        };

        let selection = StreamSelection::select(entry, self.format);
        debug!("playable {} URL: {}", self.format, selection.content_url);

        request.media.content_type = Some(selection.content_type);
        request.media.content_url = Some(selection.content_url);
        if let Some(segment_format) = selection.hls_segment_format {
            // The flag applies to both the audio and video track dimensions
            request.media.hls_segment_format = Some(segment_format);
            request.media.hls_video_segment_format = Some(segment_format);
        }
        request.media.metadata = Some(MediaMetadata::from_entry(entry));

        Ok(())
    }
}

//! Receiver wiring
//!
//! Builds the load-request interceptor and the browse-shelf populator from a
//! [`Config`] and hands the host one object to hook its message pipeline and
//! player-data notifications into. The interceptor and the populator each
//! own their own catalog client; their fetches are fully independent.

use tracing::info;

use crate::api::CatalogClient;
use crate::config::Config;
use crate::intercept::{LoadRequestInterceptor, ResolutionError};
use crate::models::{LoadRequest, MediaInfo};
use crate::shelf::{BrowseShelfPopulator, ControlsSurface};

/// The embedded middleware, wired and ready for host callbacks
pub struct Receiver {
    interceptor: LoadRequestInterceptor,
    shelf: BrowseShelfPopulator,
}

impl Receiver {
    /// Wire the middleware and start shelf population.
    ///
    /// Must be called inside a tokio runtime. Logs readiness so the host
    /// operator can see the receiver accepting messages.
    pub fn start(config: Config) -> Self {
        let interceptor = LoadRequestInterceptor::new(
            CatalogClient::with_url(&config.catalog_url),
            config.stream_format,
        );
        let shelf = BrowseShelfPopulator::spawn_with_title(
            CatalogClient::with_url(&config.catalog_url),
            &config.shelf_title,
        );

        info!(
            "receiver started ({} streams from {})",
            config.stream_format, config.catalog_url
        );

        Self { interceptor, shelf }
    }

    /// Host hook for the LOAD message type: resolve `request` in place or
    /// reject the load
    pub async fn intercept_load(&self, request: &mut LoadRequest) -> Result<(), ResolutionError> {
        self.interceptor.resolve(request).await
    }

    /// Host hook for the player-data media-changed notification
    pub async fn media_changed<S: ControlsSurface>(
        &self,
        surface: &mut S,
        media: Option<&MediaInfo>,
    ) {
        self.shelf.handle_media_changed(surface, media).await
    }

    /// The shelf populator, for hosts that drive the shelf directly
    pub fn shelf(&self) -> &BrowseShelfPopulator {
        &self.shelf
    }
}

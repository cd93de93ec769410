//! castgate - content-resolution middleware for a cast media receiver
//!
//! Sits between the host playback engine and a remote content catalog:
//! intercepts LOAD requests, resolves their opaque content reference against
//! the catalog, rewrites them with a playable manifest URL plus display
//! metadata, and populates a "browse next" shelf from the same catalog.
//!
//! # Modules
//!
//! - `models` - Catalog entries, load requests, browse items, format policy
//! - `api` - Remote catalog client
//! - `intercept` - LOAD request interception and resolution
//! - `shelf` - Browse shelf population and display binding
//! - `receiver` - Top-level wiring for host callbacks
//! - `config` - Deploy-time configuration
//! - `logging` - tracing initialization

pub mod api;
pub mod config;
pub mod intercept;
pub mod logging;
pub mod models;
pub mod receiver;
pub mod shelf;

// Re-export commonly used types
pub use models::{
    BrowseContent, BrowseImageAspectRatio, BrowseImageType, BrowseItem, Catalog, CatalogEntry,
    ControlsButton, ControlsSlot, HlsSegmentFormat, LoadRequest, MediaInfo, MediaMetadata,
    StreamFormat, StreamSelection, StreamUrls,
};

pub use api::{CatalogClient, TransportError};
pub use config::Config;
pub use intercept::{LoadRequestInterceptor, ResolutionError};
pub use receiver::Receiver;
pub use shelf::{BrowseShelfPopulator, ControlsSurface, ShelfState};

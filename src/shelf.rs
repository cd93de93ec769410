//! Browse shelf population and display binding
//!
//! The shelf is built from its own catalog fetch, independent of any load
//! request. Population runs as a background task and publishes its progress
//! through a watch channel, so display binding can wait for a settled state
//! instead of reading a half-filled list.

use tokio::sync::watch;
use tracing::{info, warn};

use crate::api::{CatalogClient, TransportError};
use crate::models::{
    BrowseContent, BrowseImageAspectRatio, BrowseItem, ControlsButton, ControlsSlot, MediaInfo,
};

/// Shelf title used when the deployment does not configure its own
pub const DEFAULT_SHELF_TITLE: &str = "Up Next";

/// Lifecycle of one shelf population pass
#[derive(Debug)]
pub enum ShelfState {
    /// No population attempt has started yet
    Empty,
    /// The catalog fetch is in flight
    Loading,
    /// Population finished; the shelf holds these items
    Ready(Vec<BrowseItem>),
    /// The catalog fetch failed; display binding falls back to an empty shelf
    Failed(TransportError),
}

impl ShelfState {
    /// Population has finished, one way or the other
    pub fn is_settled(&self) -> bool {
        matches!(self, ShelfState::Ready(_) | ShelfState::Failed(_))
    }
}

/// The host's touch-controls surface, as far as this crate needs it
pub trait ControlsSurface {
    fn set_browse_content(&mut self, content: BrowseContent);
    fn clear_default_slot_assignments(&mut self);
    fn assign_button(&mut self, slot: ControlsSlot, button: ControlsButton);
}

/// Builds the browse shelf from the catalog and binds it to the controls
/// surface when the active media changes.
pub struct BrowseShelfPopulator {
    state: watch::Receiver<ShelfState>,
    shelf_title: String,
}

impl BrowseShelfPopulator {
    /// Start populating the shelf with the default title.
    ///
    /// Must be called inside a tokio runtime; the fetch runs as a spawned
    /// task and settles the state channel when it finishes.
    pub fn spawn(catalog: CatalogClient) -> Self {
        Self::spawn_with_title(catalog, DEFAULT_SHELF_TITLE)
    }

    /// Start populating the shelf with a custom title
    pub fn spawn_with_title(catalog: CatalogClient, shelf_title: impl Into<String>) -> Self {
        let (tx, rx) = watch::channel(ShelfState::Empty);

        tokio::spawn(async move {
            let _ = tx.send(ShelfState::Loading);
            match catalog.fetch().await {
                Ok(catalog) => {
                    let items: Vec<BrowseItem> = catalog
                        .iter()
                        .map(|(id, entry)| BrowseItem::from_entry(id, entry))
                        .collect();
                    info!("browse shelf populated with {} items", items.len());
                    let _ = tx.send(ShelfState::Ready(items));
                }
                Err(err) => {
                    warn!("browse shelf population failed: {err}");
                    let _ = tx.send(ShelfState::Failed(err));
                }
            }
        });

        Self {
            state: rx,
            shelf_title: shelf_title.into(),
        }
    }

    /// Borrow the current population state without waiting
    pub fn state(&self) -> watch::Ref<'_, ShelfState> {
        self.state.borrow()
    }

    /// Wait for population to settle and return the shelf items.
    ///
    /// Returns the populated items on `Ready` and an empty list on `Failed`
    /// (or if the population task died before settling).
    pub async fn items(&self) -> Vec<BrowseItem> {
        let mut state = self.state.clone();
        let items = match state.wait_for(ShelfState::is_settled).await {
            Ok(settled) => match &*settled {
                ShelfState::Ready(items) => items.clone(),
                _ => Vec::new(),
            },
            Err(_) => Vec::new(),
        };
        items
    }

    /// Handle the host's media-changed notification.
    ///
    /// A `None` media value means no media is active and the notification is
    /// a no-op. Otherwise the settled shelf is bound to the surface, the
    /// default button layout is cleared, and exactly one button (seek
    /// backward 30 seconds) is assigned to the primary slot.
    pub async fn handle_media_changed<S: ControlsSurface>(
        &self,
        surface: &mut S,
        media: Option<&MediaInfo>,
    ) {
        if media.is_none() {
            return;
        }

        let items = self.items().await;
        surface.set_browse_content(BrowseContent {
            title: self.shelf_title.clone(),
            items,
            target_aspect_ratio: BrowseImageAspectRatio::Landscape16x9,
        });
        surface.clear_default_slot_assignments();
        surface.assign_button(ControlsSlot::Primary1, ControlsButton::SeekBackward30);
    }
}

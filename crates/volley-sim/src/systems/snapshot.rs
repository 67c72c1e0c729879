//! Snapshot system: read-only views of every live entity for rendering.

use volley_core::state::EntityView;

use crate::store::EntityStore;

/// All live entities in id order.
pub fn build(store: &EntityStore) -> Vec<EntityView> {
    store.all().iter().map(EntityView::from).collect()
}

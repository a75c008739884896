use randomweb_db::Catalog;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the store behind the catalog is in an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Catalog operations over the configured store.
    pub catalog: Catalog,
}

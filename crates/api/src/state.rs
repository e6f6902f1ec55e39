/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the store handle is reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the JSON data file.
    pub store: charcat_db::JsonStore,
}

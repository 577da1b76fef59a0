/// Marker trait for UI state.
///
/// States are cloned rather than mutated in place and must provide a
/// `Default` that matches the freshly mounted view.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

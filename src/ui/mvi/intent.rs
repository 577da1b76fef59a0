/// Marker trait for intents.
///
/// Input handlers translate raw terminal events into intents; reducers
/// consume them.
pub trait Intent: Send + 'static {}

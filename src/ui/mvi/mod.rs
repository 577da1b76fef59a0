//! Model-View-Intent primitives for the catalog screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: everything the view needs to draw a frame
//! - **Intent**: a keystroke, click or paste, already interpreted
//! - **Reducer**: the only place state changes

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

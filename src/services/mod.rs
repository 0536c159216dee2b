//! Service layer: search orchestration, session management, map view
//! preparation.

pub mod map;
pub mod search;
pub mod session;

pub use map::{MapMarker, MapViewState};
pub use search::{SearchOrchestrator, SearchOutcome, SearchSnapshot};
pub use session::{AuthState, SessionStore};

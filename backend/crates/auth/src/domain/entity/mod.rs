pub mod session_marker;

pub use session_marker::{SessionMarker, SessionState};

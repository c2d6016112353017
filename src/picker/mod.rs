//! Interactive emoji picker core
//!
//! - `keys` - decodes terminal key events
//! - `state` - the search/select state machine
//! - `view` - pure projection of the state into a display snapshot

pub mod keys;
pub mod state;
pub mod view;

pub use keys::{KeyName, KeyPress};
pub use state::{FetchRequest, Outcome, Picker, Stage};
pub use view::{Snapshot, project};

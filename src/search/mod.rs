//! Emoji lookup
//!
//! Provides the path from query text to a bounded, ranked candidate list:
//! 1. `EmojiSearch` - the remote lookup collaborator (`DangoClient` over HTTP)
//! 2. `LookupGateway` - memoizes by query string and truncates to the bound

pub mod dango;
pub mod error;
pub mod gateway;
pub mod traits;

pub use dango::{DEFAULT_ENDPOINT, DangoClient};
pub use error::SearchError;
pub use gateway::{DEFAULT_MAX_RESULTS, LookupGateway};
pub use traits::{Emoji, EmojiSearch};

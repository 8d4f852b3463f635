//! `provider` crate — the external text-provider boundary.
//!
//! The gauge webpage is never scraped directly; a hosted conversational
//! bot fetches the page and returns its rendered text.  Everything the
//! monitor knows about that transport is the [`TextProvider`] trait.

pub mod error;
pub mod traits;
pub mod protalk;
pub mod mock;

pub use error::TransportError;
pub use protalk::{ProTalkConfig, ProTalkProvider};
pub use traits::TextProvider;

//! The interactive playground: free text in, parsed calendar events out.
//!
//! Each visitor session owns one [`PlaygroundHandle`], backed by an actor
//! that holds the input text, the loading flag, the last error and the last
//! successful list of events. Only one parse request runs at a time per
//! playground; every request carries a token and only the response for the
//! token in flight is applied.

mod actor;
pub mod client;
mod handle;
pub mod models;
mod sessions;

pub use client::{HttpParseClient, ParseClient};
pub use handle::PlaygroundHandle;
pub use models::{CalendarEvent, IgnoreReason, ParseRequest, ParseResponse, PlaygroundState, SubmitOutcome};
pub use sessions::SessionRegistry;

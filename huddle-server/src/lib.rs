//! Signaling relay for peer-to-peer media sessions.
//!
//! Clients connect over a WebSocket at `/ws`, join rooms by name and relay
//! opaque negotiation payloads to each other. The relay keeps room
//! membership in memory and never sees media.
//!
//! ```text
//! client -> {"event":"join-room","data":"r1"}
//! others <- {"event":"new-peer","data":"<id>"}
//! client -> {"event":"signal","data":{"target":"<id>","signal":{...}}}
//! target <- {"event":"signal","data":{"sender":"<id>","signal":{...}}}
//! ```

#![forbid(unsafe_code)]

mod app;
mod config;
mod error;
mod registry;
mod room;
mod router;
mod signaling;

pub use app::*;
pub use config::*;
pub use error::*;
pub use registry::*;
pub use room::*;
pub use router::*;
pub use signaling::*;

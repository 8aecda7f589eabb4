mod delivery;
mod inbound_event;
mod signaling_router;

pub use delivery::*;
pub use inbound_event::*;
pub use signaling_router::*;

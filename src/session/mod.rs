//! The session layer (C7-C12): state machine, transport seam, async driver.

pub mod driver;
pub mod events;
pub mod state;
pub mod tag;
pub mod transport;

pub use driver::{spawn, SessionHandle};
pub use events::{ConnInfo, EpochMillis, Frame, MessageEvent, QrData};
pub use state::{BinaryFrameError, Phase, SessionEvent, SessionState};
pub use tag::new_tag;
pub use transport::{MockTransport, Transport};

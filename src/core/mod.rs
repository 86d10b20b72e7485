pub mod access;
pub mod codec;
pub mod rule;
pub mod session;

pub use codec::{Grid, RawRecord};
pub use rule::DriverPolicy;
pub use session::{EditorSession, SessionState};

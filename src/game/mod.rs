//! The ice fishing scene: fish, hook, catch detection, countdown and the
//! session that ties them together.

pub mod catch;
pub mod fish;
pub mod hook;
pub mod queue;
pub mod session;
pub mod timer;
pub mod types;

pub use catch::CatchDetector;
pub use fish::{FishEntity, FishPool, PendingRespawn};
pub use hook::HookController;
pub use queue::EventQueue;
pub use session::{CompletionCallback, GameSession, SessionBuilder};
pub use timer::SessionTimer;
pub use types::*;

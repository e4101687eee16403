//! Platform abstraction layer
//!
//! What the game loop needs from the host:
//! - A drawable surface of fixed size that can be locked and presented
//! - Pointer samples, delivered from any thread
//!
//! Window/canvas lifecycle and event plumbing stay in the hosts (`main.rs`).

pub mod input;
pub mod surface;

pub use input::PointerLatch;
pub use surface::{FrameGuard, SoftwareSurface, SurfaceProvider};

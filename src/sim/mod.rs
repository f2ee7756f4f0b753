//! Pattern simulation
//!
//! Frame-stepped and single-threaded. Everything here is deterministic for a
//! given sequence of frame times and inputs:
//! - Emitter turns frame time into volleys, catching up on long frames
//! - Radial pattern lays out and launches each volley
//! - Branch payloads make main bullets fire bullets of their own
//! - The pool is passed into every call that allocates

pub mod branch;
pub mod emitter;
pub mod pattern;
pub mod pool;
pub mod projectile;
pub mod state;
pub mod tick;
pub mod viewport;

#[cfg(test)]
pub mod test_support;

pub use branch::{BranchParams, BranchSpawner, BranchTag, Parity};
pub use emitter::{Emitter, FireReport};
pub use pattern::{Directions, RadialPattern, VolleyReport};
pub use pool::{BulletPool, ProjectilePool};
pub use projectile::{DrawLayer, Projectile, ProjectileKind, Sprite, UpdatablePayload};
pub use state::SimState;
pub use tick::{TickInput, tick};
pub use viewport::Viewport;

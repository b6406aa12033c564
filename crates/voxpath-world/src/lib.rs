//! Voxpath World - World, block shape, and entity contracts
//!
//! Goals never own world state; they read it through the narrow interfaces
//! defined here and implemented by the surrounding engine:
//! - `BlockWorld` for block lookup and raycasting
//! - `Block` / `BlockShape` snapshots with the face-center helper used to
//!   pick clickable points on a face
//! - `TrackedEntity` for following a moving entity by accessor rather than
//!   by reference

pub mod block;
pub mod entity;
pub mod shape;
pub mod world;

pub use block::{Block, BlockShape};
pub use entity::TrackedEntity;
pub use shape::{face_centers, Half};
pub use world::{BlockWorld, RayHit};

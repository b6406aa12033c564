//! Voxpath Core - Coordinate and distance primitives for voxel path goals
//!
//! This crate provides the foundational types shared by every goal variant:
//! - Integer block coordinates (`BlockPos`)
//! - The six axis-aligned face directions (`Direction`)
//! - The horizontal and vertical distance terms used by goal heuristics

pub mod direction;
pub mod distance;
pub mod pos;

pub use direction::Direction;
pub use distance::{adjusted_dy, octile_xz};
pub use pos::BlockPos;

pub use glam::Vec3;

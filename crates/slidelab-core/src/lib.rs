//! SlideLab Core Types and Definitions
//!
//! This crate provides the foundational types shared by the SlideLab layout
//! engine and its front ends. It includes:
//!
//! - **Geometry**: Points, sizes, bounds, insets, silhouettes and angle math
//!   ([`geometry`] module)
//! - **Shapes**: Shape kinds, outline capabilities and the [`shape::Shape`]
//!   geometry accessor ([`shape`] module)
//! - **Documents**: Serializable slides with an ordered shape selection
//!   ([`document`] module)

pub mod document;
pub mod geometry;
pub mod shape;

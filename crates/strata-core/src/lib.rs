//! Strata Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Strata layout
//! engine and its renderers. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Logical coordinates and rectangles ([`geometry`] module)
//! - **Draw**: The primitive set emitted by the layout engine, stroke styling,
//!   and z-ordered SVG collection ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;

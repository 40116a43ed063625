//! Incline Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Incline force
//! model and diagram layout engine. It includes:
//!
//! - **Parameters**: The physical scenario model ([`params::ParameterSet`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Styles and drawable primitives ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod params;

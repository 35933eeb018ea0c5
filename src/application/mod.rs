// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the viewer and its collaborators.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer talks to collaborators through these ports only

pub mod port;

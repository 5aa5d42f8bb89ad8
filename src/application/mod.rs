// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for the customizer's collaborators
//! - [`customizer`]: The upload and color-transition state machines
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives the state machines and renders their events
//!
//! # Example
//!
//! ```ignore
//! use canopy::application::customizer::Customizer;
//! use canopy::application::port::UiEvent;
//!
//! let mut events: Vec<UiEvent> = Vec::new();
//! customizer.select_color(&"red".into())?;
//! let jobs = customizer.flush(&mut events);
//! ```

pub mod customizer;
pub mod port;

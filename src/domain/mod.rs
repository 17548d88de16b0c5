// SPDX-License-Identifier: MPL-2.0
//! Domain layer - gallery types with ZERO external dependencies.
//!
//! This module contains the pure value objects the viewer reads: image
//! records and the ordered collection they live in. It depends on nothing
//! but `std` so the viewer core can be tested without a GUI runtime.
//!
//! # Modules
//!
//! - [`gallery`]: [`ImageId`](gallery::ImageId), [`ImageRecord`](gallery::ImageRecord),
//!   [`OrderedCollection`](gallery::OrderedCollection)

pub mod gallery;

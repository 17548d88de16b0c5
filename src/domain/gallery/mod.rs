// SPDX-License-Identifier: MPL-2.0
//! Gallery value objects.
//!
//! An [`ImageRecord`] is owned by whoever supplies the collection; the viewer
//! only ever reads it. [`OrderedCollection`] is an immutable snapshot whose
//! order defines what "previous" and "next" mean.

mod collection;
mod record;

pub use collection::{CollectionError, OrderedCollection};
pub use record::{ImageId, ImageRecord};

// SPDX-License-Identifier: MPL-2.0
//! Image identity and record types.

use std::fmt;

/// Stable, unique key of an image inside a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(String);

impl ImageId {
    /// Creates an identity from any string-like key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageId {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ImageId {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// One displayable image.
///
/// Records are immutable once built; the viewer clones them when it needs to
/// hand one back to the host (for example to the background side channel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    id: ImageId,
    display_name: String,
    source_url: String,
    author_name: String,
}

impl ImageRecord {
    #[must_use]
    pub fn new(
        id: impl Into<ImageId>,
        display_name: impl Into<String>,
        source_url: impl Into<String>,
        author_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            source_url: source_url.into(),
            author_name: author_name.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &ImageId {
        &self.id
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Location the asset loader reads the bytes from.
    #[must_use]
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Author credited in the info bar. Empty when unknown.
    #[must_use]
    pub fn author_name(&self) -> &str {
        &self.author_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_id_displays_raw_key() {
        let id = ImageId::new("shots/0001.png");
        assert_eq!(id.to_string(), "shots/0001.png");
        assert_eq!(id.as_str(), "shots/0001.png");
    }

    #[test]
    fn record_accessors_return_fields() {
        let record = ImageRecord::new("a", "Alpha", "/tmp/a.png", "Ada");
        assert_eq!(record.id(), &ImageId::new("a"));
        assert_eq!(record.display_name(), "Alpha");
        assert_eq!(record.source_url(), "/tmp/a.png");
        assert_eq!(record.author_name(), "Ada");
    }
}

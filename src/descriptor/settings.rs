//! Per-project configuration.

use super::visibility::VisibilityFilter;

/// Settings owned by a [`ProjectDescriptor`](super::ProjectDescriptor).
///
/// Tracks whether anything was changed after creation, so callers can
/// tell a configured project from a default one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    visibility: VisibilityFilter,
    modified: bool,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(&self) -> VisibilityFilter {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: VisibilityFilter) {
        self.visibility = visibility;
        self.modified = true;
    }

    /// Builder-style variant of [`Settings::set_visibility`].
    pub fn with_visibility(mut self, visibility: VisibilityFilter) -> Self {
        self.set_visibility(visibility);
        self
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn clear_modified_flag(&mut self) {
        self.modified = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_modification() {
        let mut settings = Settings::new();
        assert_eq!(settings.visibility(), VisibilityFilter::DEFAULT);
        assert!(!settings.is_modified());

        settings.set_visibility(VisibilityFilter::PUBLIC);
        assert!(settings.is_modified());
        assert_eq!(settings.visibility(), VisibilityFilter::PUBLIC);

        settings.clear_modified_flag();
        assert!(!settings.is_modified());

        let built = Settings::new().with_visibility(VisibilityFilter::ALL);
        assert!(built.is_modified());
    }
}

//! Image asset resolution for the model detail panel.
//!
//! Catalog images are relative paths resolved against the configured backend
//! URL. When a model has no image, or no backend is configured, the
//! placeholder is shown instead. A remote image that later fails to load also
//! ends up on the placeholder, but is recorded as a recovered failure so the
//! two cases stay distinguishable.

use std::path::Path;

use crate::config::AssetConfig;

/// Why the placeholder is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The model has no image, or no backend URL is configured
    Absent,
    /// The resolved image could not be loaded
    LoadFailed,
}

/// Where the detail panel's image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Absolute location built from the backend URL
    Remote(String),
    /// The configured placeholder
    Placeholder(FallbackReason),
}

/// Resolved image for one model, including its fallback state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    source: ImageSource,
    placeholder: String,
}

impl ImageView {
    /// Current source.
    #[must_use]
    pub const fn source(&self) -> &ImageSource {
        &self.source
    }

    /// The location to display: the remote URL or the placeholder path.
    #[must_use]
    pub fn location(&self) -> &str {
        match &self.source {
            ImageSource::Remote(url) => url,
            ImageSource::Placeholder(_) => &self.placeholder,
        }
    }

    /// Reason for showing the placeholder, if it is shown.
    #[must_use]
    pub const fn fallback_reason(&self) -> Option<FallbackReason> {
        match self.source {
            ImageSource::Remote(_) => None,
            ImageSource::Placeholder(reason) => Some(reason),
        }
    }

    /// Records a load failure and swaps in the placeholder.
    ///
    /// Returns `true` if the view changed. Failing an image that is already
    /// on the placeholder does nothing.
    pub fn fail(&mut self) -> bool {
        match &self.source {
            ImageSource::Remote(url) => {
                tracing::warn!(%url, "model image failed to load, using placeholder");
                self.source = ImageSource::Placeholder(FallbackReason::LoadFailed);
                true
            }
            ImageSource::Placeholder(_) => false,
        }
    }

    /// Attempts to "load" the image the way the terminal display can.
    ///
    /// Local locations (`file://` URLs and plain paths) must exist on disk;
    /// `http(s)` locations are assumed loadable since the terminal never
    /// fetches them. Returns `true` if the image is usable.
    pub fn probe(&mut self) -> bool {
        let loadable = match &self.source {
            ImageSource::Remote(url) => is_loadable(url),
            ImageSource::Placeholder(_) => return true,
        };

        if !loadable {
            self.fail();
        }
        loadable
    }
}

fn is_loadable(location: &str) -> bool {
    if location.starts_with("http://") || location.starts_with("https://") {
        return true;
    }

    let path = location.strip_prefix("file://").unwrap_or(location);
    Path::new(path).exists()
}

/// Builds [`ImageView`]s from catalog image paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResolver {
    base_url: Option<String>,
    placeholder: String,
}

impl AssetResolver {
    /// Creates a resolver for an optional base URL.
    pub fn new(base_url: Option<String>, placeholder: impl Into<String>) -> Self {
        Self {
            base_url: base_url.filter(|url| !url.is_empty()),
            placeholder: placeholder.into(),
        }
    }

    /// Creates a resolver from the `[assets]` config section.
    #[must_use]
    pub fn from_config(config: &AssetConfig) -> Self {
        Self::new(config.backend_url.clone(), config.placeholder.clone())
    }

    /// The configured base URL, if any.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Resolves a model's relative image path.
    #[must_use]
    pub fn resolve(&self, inner_image: Option<&str>) -> ImageView {
        let source = match (self.base_url.as_deref(), inner_image) {
            (Some(base), Some(path)) if !path.is_empty() => ImageSource::Remote(format!(
                "{}/{}",
                base.trim_end_matches('/'),
                path.trim_start_matches('/')
            )),
            _ => ImageSource::Placeholder(FallbackReason::Absent),
        };

        ImageView {
            source,
            placeholder: self.placeholder.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_PLACEHOLDER_IMAGE;
    use std::fs;
    use tempfile::TempDir;

    fn resolver(base: Option<&str>) -> AssetResolver {
        AssetResolver::new(base.map(str::to_string), DEFAULT_PLACEHOLDER_IMAGE)
    }

    #[test]
    fn test_resolve_joins_base_and_path() {
        let view = resolver(Some("https://api.example.com/")).resolve(Some("/img/aria.png"));
        assert_eq!(
            view.source(),
            &ImageSource::Remote("https://api.example.com/img/aria.png".to_string())
        );
        assert_eq!(view.location(), "https://api.example.com/img/aria.png");
        assert_eq!(view.fallback_reason(), None);
    }

    #[test]
    fn test_resolve_absent_image() {
        let view = resolver(Some("https://api.example.com")).resolve(None);
        assert_eq!(view.fallback_reason(), Some(FallbackReason::Absent));
        assert_eq!(view.location(), DEFAULT_PLACEHOLDER_IMAGE);

        let empty = resolver(Some("https://api.example.com")).resolve(Some(""));
        assert_eq!(empty.fallback_reason(), Some(FallbackReason::Absent));
    }

    #[test]
    fn test_resolve_without_base_url() {
        let view = resolver(None).resolve(Some("img/aria.png"));
        assert_eq!(view.fallback_reason(), Some(FallbackReason::Absent));

        let blank = resolver(Some("")).resolve(Some("img/aria.png"));
        assert_eq!(blank.fallback_reason(), Some(FallbackReason::Absent));
    }

    #[test]
    fn test_fail_is_distinguishable_from_absent() {
        let mut view = resolver(Some("https://api.example.com")).resolve(Some("aria.png"));
        assert!(view.fail());
        assert_eq!(view.fallback_reason(), Some(FallbackReason::LoadFailed));
        assert_eq!(view.location(), DEFAULT_PLACEHOLDER_IMAGE);

        assert!(!view.fail());

        let mut absent = resolver(None).resolve(None);
        assert!(!absent.fail());
        assert_eq!(absent.fallback_reason(), Some(FallbackReason::Absent));
    }

    #[test]
    fn test_probe_local_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("aria.png"), b"png").unwrap();
        let base = format!("file://{}", temp_dir.path().display());

        let mut present = resolver(Some(&base)).resolve(Some("aria.png"));
        assert!(present.probe());
        assert_eq!(present.fallback_reason(), None);

        let mut missing = resolver(Some(&base)).resolve(Some("nomad.png"));
        assert!(!missing.probe());
        assert_eq!(missing.fallback_reason(), Some(FallbackReason::LoadFailed));
    }

    #[test]
    fn test_probe_remote_assumed_loadable() {
        let mut view = resolver(Some("https://api.example.com")).resolve(Some("aria.png"));
        assert!(view.probe());
        assert_eq!(view.fallback_reason(), None);
    }
}

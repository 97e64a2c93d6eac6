//! Embedded assets for Hello GUI
//!
//! Uses rust-embed to bundle icons at compile time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Try component assets first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        // Then try our own assets
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            Self::iter()
                .filter_map(|p| p.starts_with(path).then(|| p.into()))
                .collect::<Vec<_>>(),
        );

        Ok(files)
    }
}

/// Icons bundled by this crate
pub enum AppIconName {
    /// Globe glyph shown by the greeting view
    Globe,
}

impl AppIconName {
    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            AppIconName::Globe => "icons/globe.svg",
        }
        .into()
    }
}

impl From<AppIconName> for Icon {
    fn from(val: AppIconName) -> Self {
        Icon::empty().path(val.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn globe_icon_is_embedded() {
        let data = Assets
            .load(&AppIconName::Globe.path())
            .expect("asset lookup should not fail")
            .expect("globe.svg should be bundled");
        assert!(!data.is_empty());
    }

    #[test]
    fn empty_path_resolves_to_none() {
        let data = Assets.load("").expect("empty path should not fail");
        assert!(data.is_none());
    }

    #[test]
    fn unknown_path_is_an_error() {
        assert!(Assets.load("icons/no-such-icon.svg").is_err());
    }

    #[test]
    fn list_includes_bundled_icons() {
        let files = Assets.list("icons/").expect("listing should not fail");
        assert!(files.iter().any(|f| f.as_ref() == "icons/globe.svg"));
    }
}

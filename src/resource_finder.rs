use log::debug;
use std::fmt;
use std::path::Path;

use crate::types::IconConfigMap;

/// Something able to turn a package and its default icon path into the per-configuration icon
/// map.
///
/// `None` means nothing could be resolved; [`ResourceFinder`] turns it into an empty map.
pub trait ResolveIcons {
    fn resolve_icons_in_arsc(
        &self,
        apk_filepath: &Path,
        default_icon_path: Option<&str>,
    ) -> Option<IconConfigMap>;
}

/// Front door for icon resolution, delegating to the dialect scanner picked at construction.
///
/// # Examples
///
/// ```
/// use android_apk::android::aapt2::Aapt2ResourceFinder;
/// use android_apk::resource_finder::ResourceFinder;
/// use android_apk::types::DumpText;
/// use std::path::Path;
///
/// let dump = DumpText::from(
///     "  resource 0x7f010000 mipmap/ic_launcher
///     (mdpi-v4) (file) res/mipmap-mdpi-v4/ic_launcher.png type=PNG
///     (hdpi-v4) (file) res/mipmap-hdpi-v4/ic_launcher.png type=PNG
/// ",
/// );
/// let finder = ResourceFinder::new(Aapt2ResourceFinder::with_dumper(dump));
///
/// let icons = finder.resolve_icons_in_arsc(
///     Path::new("sample.apk"),
///     Some("res/mipmap-mdpi-v4/ic_launcher.png"),
/// );
/// assert_eq!(icons.len(), 2);
/// assert!(finder.resolve_icons_in_arsc(Path::new("sample.apk"), None).is_empty());
/// ```
pub struct ResourceFinder {
    delegatee: Box<dyn ResolveIcons + Send + Sync>,
}

impl ResourceFinder {
    pub fn new(delegatee: impl ResolveIcons + Send + Sync + 'static) -> Self {
        ResourceFinder {
            delegatee: Box::new(delegatee),
        }
    }

    /// Keys are configuration qualifiers, values are paths relative to the package root.
    /// Always returns a map, empty when nothing could be resolved.
    pub fn resolve_icons_in_arsc(
        &self,
        apk_filepath: &Path,
        default_icon_path: Option<&str>,
    ) -> IconConfigMap {
        let Some(default_icon_path) = default_icon_path.filter(|p| !p.is_empty()) else {
            debug!("{} declares no icon", apk_filepath.display());
            return IconConfigMap::new();
        };

        self.delegatee
            .resolve_icons_in_arsc(apk_filepath, Some(default_icon_path))
            .unwrap_or_default()
    }
}

impl fmt::Debug for ResourceFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceFinder").finish_non_exhaustive()
    }
}

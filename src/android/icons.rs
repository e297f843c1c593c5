//! Picking a single icon out of a resolved configuration map.

use crate::types::{IconConfigMap, DEFAULT_RESOURCE_CONFIG};

/// Screen density buckets that show up as resource qualifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Density {
    Ldpi,
    Mdpi,
    Tvdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
    /// Scalable resources (vector drawables, adaptive icons).
    Anydpi,
    /// Resources that must never be scaled.
    Nodpi,
}

impl Density {
    /// Nominal dots per inch, `None` for buckets without one.
    pub fn dpi(&self) -> Option<u32> {
        match self {
            Density::Ldpi => Some(120),
            Density::Mdpi => Some(160),
            Density::Tvdpi => Some(213),
            Density::Hdpi => Some(240),
            Density::Xhdpi => Some(320),
            Density::Xxhdpi => Some(480),
            Density::Xxxhdpi => Some(640),
            Density::Anydpi | Density::Nodpi => None,
        }
    }

    fn from_segment(segment: &str) -> Option<Density> {
        let density = match segment {
            "ldpi" => Density::Ldpi,
            "mdpi" => Density::Mdpi,
            "tvdpi" => Density::Tvdpi,
            "hdpi" => Density::Hdpi,
            "xhdpi" => Density::Xhdpi,
            "xxhdpi" => Density::Xxhdpi,
            "xxxhdpi" => Density::Xxxhdpi,
            "anydpi" => Density::Anydpi,
            "nodpi" => Density::Nodpi,
            _ => return None,
        };
        Some(density)
    }

    /// Density named by a configuration qualifier such as `hdpi-v4` or `en-rUS-xhdpi`.
    pub fn from_qualifier(qualifier: &str) -> Option<Density> {
        if qualifier == DEFAULT_RESOURCE_CONFIG {
            return None;
        }
        qualifier.split('-').find_map(Density::from_segment)
    }
}

/// Picks an icon path out of `icons`.
///
/// With `dpi`, only an icon of exactly that density is returned. Without it the densest bucketed
/// icon wins, then the `(default)` one, then whatever is left. `png_only` ignores every path that
/// is not a PNG, e.g. adaptive icon XML.
///
/// # Examples
///
/// ```
/// use android_apk::android::icons::select_icon;
/// use android_apk::types::IconConfigMap;
///
/// let icons = IconConfigMap::from([
///     ("mdpi-v4".to_string(), "res/drawable-mdpi/ic_launcher.png".to_string()),
///     ("hdpi-v4".to_string(), "res/drawable-hdpi/ic_launcher.png".to_string()),
/// ]);
///
/// assert_eq!(select_icon(&icons, Some(160), false), Some("res/drawable-mdpi/ic_launcher.png"));
/// assert_eq!(select_icon(&icons, None, false), Some("res/drawable-hdpi/ic_launcher.png"));
/// assert_eq!(select_icon(&icons, Some(640), false), None);
/// ```
pub fn select_icon(icons: &IconConfigMap, dpi: Option<u32>, png_only: bool) -> Option<&str> {
    let candidates: Vec<(&str, &str)> = icons
        .iter()
        .map(|(qualifier, path)| (qualifier.as_str(), path.as_str()))
        .filter(|&(_, path)| !png_only || is_png(path))
        .collect();

    let density_of = |qualifier: &str| Density::from_qualifier(qualifier).and_then(|d| d.dpi());

    if let Some(dpi) = dpi {
        return candidates
            .iter()
            .find(|&&(qualifier, _)| density_of(qualifier) == Some(dpi))
            .map(|&(_, path)| path);
    }

    candidates
        .iter()
        .filter_map(|&(qualifier, path)| density_of(qualifier).map(|dpi| (dpi, path)))
        .max_by_key(|&(dpi, _)| dpi)
        .map(|(_, path)| path)
        .or_else(|| {
            candidates
                .iter()
                .find(|&&(qualifier, _)| qualifier == DEFAULT_RESOURCE_CONFIG)
                .map(|&(_, path)| path)
        })
        .or_else(|| candidates.first().map(|&(_, path)| path))
}

fn is_png(path: &str) -> bool {
    path.to_ascii_lowercase().ends_with(".png")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icons(entries: &[(&str, &str)]) -> IconConfigMap {
        entries
            .iter()
            .map(|(q, p)| (q.to_string(), p.to_string()))
            .collect()
    }

    #[test]
    fn density_from_qualifier() {
        assert_eq!(Density::from_qualifier("hdpi-v4"), Some(Density::Hdpi));
        assert_eq!(Density::from_qualifier("xxxhdpi"), Some(Density::Xxxhdpi));
        assert_eq!(Density::from_qualifier("anydpi-v26"), Some(Density::Anydpi));
        assert_eq!(Density::from_qualifier("en-rUS-xhdpi"), Some(Density::Xhdpi));
        assert_eq!(Density::from_qualifier(DEFAULT_RESOURCE_CONFIG), None);
        assert_eq!(Density::from_qualifier("v21"), None);
        assert_eq!(Density::Anydpi.dpi(), None);
    }

    #[test]
    fn selects_by_dpi() {
        let icons = icons(&[
            ("ldpi", "res/drawable-ldpi-v4/ic_launcher.png"),
            ("mdpi", "res/drawable-mdpi-v4/ic_launcher.png"),
            ("hdpi", "res/drawable-hdpi-v4/ic_launcher.png"),
        ]);
        assert_eq!(
            select_icon(&icons, Some(120), false),
            Some("res/drawable-ldpi-v4/ic_launcher.png")
        );
        assert_eq!(
            select_icon(&icons, Some(240), true),
            Some("res/drawable-hdpi-v4/ic_launcher.png")
        );
        assert_eq!(select_icon(&icons, Some(320), false), None);
    }

    #[test]
    fn png_only_skips_adaptive_icons() {
        let icons = icons(&[
            ("anydpi-v26", "res/mipmap-anydpi-v26/ic_launcher.xml"),
            ("xxhdpi", "res/mipmap-xxhdpi-v4/ic_launcher.png"),
            ("mdpi", "res/mipmap-mdpi-v4/ic_launcher.png"),
        ]);
        assert_eq!(
            select_icon(&icons, None, true),
            Some("res/mipmap-xxhdpi-v4/ic_launcher.png")
        );
    }

    #[test]
    fn falls_back_to_the_default_configuration() {
        let icons = icons(&[(DEFAULT_RESOURCE_CONFIG, "res/drawable/ic_launcher.xml")]);
        assert_eq!(
            select_icon(&icons, None, false),
            Some("res/drawable/ic_launcher.xml")
        );
        assert_eq!(select_icon(&icons, None, true), None);
        assert_eq!(select_icon(&icons, Some(160), false), None);
    }

    #[test]
    fn vector_only_icon_is_still_selected() {
        let icons = icons(&[("anydpi-v21", "res/drawable-anydpi-v21/ic_launcher.xml")]);
        assert_eq!(
            select_icon(&icons, None, false),
            Some("res/drawable-anydpi-v21/ic_launcher.xml")
        );
    }

    #[test]
    fn empty_map_selects_nothing() {
        assert_eq!(select_icon(&IconConfigMap::new(), None, false), None);
    }
}

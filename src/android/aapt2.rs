//! Icon resolution over `aapt2 dump resources` output.
//!
//! ```text
//!   type mipmap id=03 entryCount=2
//!     resource 0x7f030000 mipmap/ic_launcher
//!       (mdpi-v4) (file) res/mipmap-mdpi-v4/ic_launcher.png type=PNG
//!       (hdpi-v4) (file) res/mipmap-hdpi-v4/ic_launcher.png type=PNG
//!       (xhdpi-v4) (file) res/mipmap-xhdpi-v4/ic_launcher.png type=PNG
//!     resource 0x7f030001 mipmap/ic_launcher_round
//! ```
//!
//! The line naming the default icon may sit anywhere inside its block, so the block is collected
//! outwards from that line: first upwards to the block's first entry, then downwards from just
//! below the anchor to the block's last entry.

use log::debug;
use std::collections::btree_map::Entry;
use std::path::Path;

use crate::android::dump::{AaptTool, ResourceDump};
use crate::android::line::{config_or_default, file_row, indent_of, trim_indent};
use crate::resource_finder::ResolveIcons;
use crate::types::IconConfigMap;

const TYPE_MARKER: &str = "type=";

/// Resolves icons from `aapt2 dump resources` output.
#[derive(Debug, Clone)]
pub struct Aapt2ResourceFinder<D = AaptTool> {
    dumper: D,
}

impl Aapt2ResourceFinder<AaptTool> {
    pub fn new() -> Self {
        Aapt2ResourceFinder::with_dumper(AaptTool::aapt2())
    }
}

impl Default for Aapt2ResourceFinder<AaptTool> {
    fn default() -> Self {
        Aapt2ResourceFinder::new()
    }
}

impl<D: ResourceDump> Aapt2ResourceFinder<D> {
    pub fn with_dumper(dumper: D) -> Self {
        Aapt2ResourceFinder { dumper }
    }
}

impl<D: ResourceDump> ResolveIcons for Aapt2ResourceFinder<D> {
    fn resolve_icons_in_arsc(
        &self,
        apk_filepath: &Path,
        default_icon_path: Option<&str>,
    ) -> Option<IconConfigMap> {
        let default_icon_path = default_icon_path.filter(|p| !p.is_empty())?;
        let dump = self.dumper.dump_resources(apk_filepath)?;
        scan(&dump.scrub(), default_icon_path)
    }
}

/// Collects the configuration → path map of the block holding `default_icon_path`.
///
/// Returns `None` if no `type=` annotated entry mentions the path. When a configuration shows up
/// more than once the first emitted entry is kept.
pub fn scan(dump_text: &str, default_icon_path: &str) -> Option<IconConfigMap> {
    let lines: Vec<&str> = dump_text.lines().collect();

    let value_index = lines
        .iter()
        .position(|line| line.contains(default_icon_path) && line.contains(TYPE_MARKER))?;

    let mut config_hash = IconConfigMap::new();
    collect_in_section(&lines, value_index, |config, path| {
        if let Entry::Vacant(entry) = config_hash.entry(config.to_string()) {
            entry.insert(path.to_string());
        }
    });

    Some(config_hash)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

/// Walks the block around `pivot_index` and calls `emit(config, path)` for each entry.
///
/// The block is the run of lines sharing the pivot's indentation. Entries are emitted from the
/// pivot up to the top of the block, then from `pivot_index + 1` down to its bottom. An empty
/// qualifier is reported as `(default)`.
///
/// The walk ends at the first line that is not a `(qualifier) (file) path` entry, or at the first
/// line of the dump when moving up. The line at `pivot_index + 1` is matched as soon as the walk
/// turns around, without looking at its indentation.
///
/// # Examples
///
/// ```
/// use android_apk::android::aapt2::collect_in_section;
///
/// let lines = [
///     "  resource 0x7f030000 mipmap/ic_launcher",
///     "    (mdpi-v4) (file) res/x0.png type=PNG",
///     "    (hdpi-v4) (file) res/x1.png type=PNG",
///     "    (xhdpi-v4) (file) res/x2.png type=PNG",
/// ];
/// let mut seen = vec![];
/// collect_in_section(&lines, 2, |config, path| seen.push(format!("{config}={path}")));
///
/// assert_eq!(
///     seen,
///     ["hdpi-v4=res/x1.png", "mdpi-v4=res/x0.png", "xhdpi-v4=res/x2.png"]
/// );
/// ```
pub fn collect_in_section<F>(lines: &[&str], pivot_index: usize, mut emit: F)
where
    F: FnMut(&str, &str),
{
    let Some(pivot) = lines.get(pivot_index) else {
        return;
    };
    let expected_indent = indent_of(pivot);

    let mut direction = Direction::Up;
    let mut cursor = pivot_index;

    while let Some(line) = lines.get(cursor) {
        let mut line = *line;

        if indent_of(line) != expected_indent {
            if direction == Direction::Down {
                break;
            }
            // Top of the block, turn around below the pivot.
            direction = Direction::Down;
            cursor = pivot_index + 1;
            match lines.get(cursor) {
                Some(next) => line = *next,
                None => break,
            }
        }

        let Ok((_, (qualifier, path))) = file_row(trim_indent(line)) else {
            debug!("Unexpected line in resource block: {:?}", line);
            break;
        };

        emit(config_or_default(qualifier), path);

        cursor = match direction {
            Direction::Up => match cursor.checked_sub(1) {
                Some(index) => index,
                None => break,
            },
            Direction::Down => cursor + 1,
        };
    }
}

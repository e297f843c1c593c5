//! Icon resolution over the legacy `aapt dump resources` layout.
//!
//! The dump declares each resource with a `resource <address> <name>` line followed by one value
//! row per configuration. There is no end marker: the next `resource ` or `type ` line closes the
//! block.

use log::debug;
use std::path::Path;

use crate::android::dump::{AaptTool, ResourceDump};
use crate::android::line::{config_or_default, qualifier_and_kind, token};
use crate::resource_finder::ResolveIcons;
use crate::types::IconConfigMap;

const RESOURCE_KEYWORD: &str = "resource ";
const TYPE_KEYWORD: &str = "type ";

/// Resolves icons from `aapt dump resources` output.
#[derive(Debug, Clone)]
pub struct AaptResourceFinder<D = AaptTool> {
    dumper: D,
}

impl AaptResourceFinder<AaptTool> {
    pub fn new() -> Self {
        AaptResourceFinder::with_dumper(AaptTool::aapt())
    }
}

impl Default for AaptResourceFinder<AaptTool> {
    fn default() -> Self {
        AaptResourceFinder::new()
    }
}

impl<D: ResourceDump> AaptResourceFinder<D> {
    pub fn with_dumper(dumper: D) -> Self {
        AaptResourceFinder { dumper }
    }
}

impl<D: ResourceDump> ResolveIcons for AaptResourceFinder<D> {
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

/// Collects the configuration → path map of the resource whose values include
/// `default_icon_path`.
///
/// Returns `None` when the path, its enclosing `resource` declaration or the declared name cannot
/// be found.
pub fn scan(dump_text: &str, default_icon_path: &str) -> Option<IconConfigMap> {
    let lines: Vec<&str> = dump_text.lines().collect();

    let value_index = lines
        .iter()
        .position(|line| line.contains(default_icon_path))?;

    // Walk back to the declaration of the resource owning this value.
    let resource_name = lines[..=value_index]
        .iter()
        .rev()
        .find(|line| line.contains(RESOURCE_KEYWORD))
        .and_then(|line| token(line, 2))?;

    // Re-anchor on the first mention of the name, i.e. the top of its block.
    let block_index = lines
        .iter()
        .position(|line| line.contains(resource_name))?;

    debug!(
        "{} is declared by {} at line {}",
        default_icon_path,
        resource_name,
        block_index + 1
    );

    let mut config_hash = IconConfigMap::new();

    for line in &lines[block_index + 1..] {
        if line.contains(RESOURCE_KEYWORD) || line.contains(TYPE_KEYWORD) {
            break;
        }

        let trimmed = line.trim_start();
        let config = match qualifier_and_kind(trimmed) {
            Ok((_, (qualifier, _))) => config_or_default(qualifier),
            Err(_) => config_or_default(""),
        };

        match token(trimmed, 2) {
            Some(path) => {
                config_hash.insert(config.to_string(), path.to_string());
            }
            None => debug!("Skipping value row without a path: {:?}", line),
        }
    }

    Some(config_hash)
}

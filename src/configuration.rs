use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::android::aapt::AaptResourceFinder;
use crate::android::aapt2::Aapt2ResourceFinder;
use crate::android::dump::AaptTool;
use crate::resource_finder::ResourceFinder;
use crate::types::ResourceError;

/// Which `dump resources` dialect to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceFinderType {
    #[default]
    Aapt,
    Aapt2,
}

impl ResourceFinderType {
    /// Name of the binary producing this dialect.
    pub fn program(&self) -> &'static str {
        match self {
            ResourceFinderType::Aapt => "aapt",
            ResourceFinderType::Aapt2 => "aapt2",
        }
    }
}

impl fmt::Display for ResourceFinderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())
    }
}

impl FromStr for ResourceFinderType {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aapt" => Ok(ResourceFinderType::Aapt),
            "aapt2" => Ok(ResourceFinderType::Aapt2),
            _ => Err(ResourceError::UnknownResourceFinder(s.to_string())),
        }
    }
}

/// Settings for icon resolution.
///
/// # Examples
///
/// ```
/// use android_apk::configuration::{Configuration, ResourceFinderType};
///
/// let config = Configuration::defaults();
/// assert_eq!(config.resource_finder_type(), ResourceFinderType::Aapt);
///
/// let config = config.copy(Some("aapt2".parse().unwrap()));
/// assert_eq!(config.resource_finder_type(), ResourceFinderType::Aapt2);
/// assert_eq!(config.tool_program(), "aapt2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    resource_finder_type: ResourceFinderType,
    /// Overrides the binary run for the dump, e.g. an absolute path into build-tools.
    tool_program: Option<String>,
}

impl Configuration {
    pub fn defaults() -> Self {
        Configuration::default()
    }

    pub fn new(resource_finder_type: ResourceFinderType) -> Self {
        Configuration {
            resource_finder_type,
            tool_program: None,
        }
    }

    pub fn with_tool_program(mut self, program: impl Into<String>) -> Self {
        self.tool_program = Some(program.into());
        self
    }

    pub fn resource_finder_type(&self) -> ResourceFinderType {
        self.resource_finder_type
    }

    /// The binary that will be run, falling back to the dialect's default name.
    pub fn tool_program(&self) -> &str {
        self.tool_program
            .as_deref()
            .unwrap_or_else(|| self.resource_finder_type.program())
    }

    /// A copy of this configuration with the given settings replaced.
    ///
    /// A program override belongs to its dialect, so switching dialects drops it. Chain
    /// [`Configuration::with_tool_program`] to set one for the new dialect.
    pub fn copy(&self, resource_finder_type: Option<ResourceFinderType>) -> Self {
        let resource_finder_type = resource_finder_type.unwrap_or(self.resource_finder_type);
        let tool_program = if resource_finder_type == self.resource_finder_type {
            self.tool_program.clone()
        } else {
            None
        };
        Configuration {
            resource_finder_type,
            tool_program,
        }
    }

    /// Builds the finder for the configured dialect.
    pub fn resource_finder(&self) -> ResourceFinder {
        let tool = AaptTool::new(self.tool_program());
        match self.resource_finder_type {
            ResourceFinderType::Aapt => ResourceFinder::new(AaptResourceFinder::with_dumper(tool)),
            ResourceFinderType::Aapt2 => {
                ResourceFinder::new(Aapt2ResourceFinder::with_dumper(tool))
            }
        }
    }
}

//! Resolver configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use strum::{Display, EnumString};

/// What the parser does with the lines nested under a duplicate entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DuplicatePolicy {
    /// The duplicate is dropped together with everything nested under it.
    ///
    /// This matches the historical output: children listed beneath a
    /// repeated library are parsed but never reachable from the root.
    #[default]
    Drop,
    /// The duplicate re-opens the first occurrence, so children listed
    /// beneath it attach there instead.
    Reparent,
}

/// Configuration for resolving a binary's dependencies.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ResolveConfig {
    /// Dependency-tree tool to invoke.
    #[builder(default = "default_tool()")]
    pub tool: PathBuf,

    /// Request the full listing (`-a`), including repeated libraries.
    #[builder(default = "true")]
    pub all: bool,

    /// Handling of lines nested under a duplicate entry.
    #[builder(default)]
    pub duplicate_policy: DuplicatePolicy,
}

fn default_tool() -> PathBuf {
    PathBuf::from("lddtree")
}

impl ResolveConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref tool) = self.tool {
            if tool.as_os_str().is_empty() {
                return Err("Tool path cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

impl ResolveConfig {
    /// Create a new config builder.
    pub fn builder() -> ResolveConfigBuilder {
        ResolveConfigBuilder::default()
    }

    /// Create a config that invokes `tool` with default settings.
    pub fn new(tool: impl Into<PathBuf>) -> Self {
        Self {
            tool: tool.into(),
            all: true,
            duplicate_policy: DuplicatePolicy::Drop,
        }
    }

    /// Display name of the tool, used in diagnostics.
    pub fn tool_name(&self) -> String {
        self.tool.display().to_string()
    }

    /// Arguments passed to the tool ahead of the binary path.
    pub fn tool_args(&self) -> &'static [&'static str] {
        if self.all { &["-a"] } else { &[] }
    }
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self::new(default_tool())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ResolveConfig::builder()
            .tool("/usr/local/bin/lddtree")
            .duplicate_policy(DuplicatePolicy::Reparent)
            .build()
            .unwrap();

        assert_eq!(config.tool, PathBuf::from("/usr/local/bin/lddtree"));
        assert!(config.all);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reparent);
    }

    #[test]
    fn test_config_builder_rejects_empty_tool() {
        let result = ResolveConfig::builder().tool("").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_config_default() {
        let config = ResolveConfig::default();
        assert_eq!(config.tool_name(), "lddtree");
        assert_eq!(config.tool_args(), &["-a"]);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Drop);
    }

    #[test]
    fn test_tool_args_without_all() {
        let config = ResolveConfig::builder().all(false).build().unwrap();
        assert!(config.tool_args().is_empty());
    }

    #[test]
    fn test_duplicate_policy_parse() {
        assert_eq!("drop".parse::<DuplicatePolicy>().unwrap(), DuplicatePolicy::Drop);
        assert_eq!("Reparent".parse::<DuplicatePolicy>().unwrap(), DuplicatePolicy::Reparent);
        assert!("merge".parse::<DuplicatePolicy>().is_err());
        assert_eq!(DuplicatePolicy::Reparent.to_string(), "reparent");
    }
}

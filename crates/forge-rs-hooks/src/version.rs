//! Hook API version and the startup version gate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::error::{kill_minecraft, ForgeError, Result};

/// `major.minor.revision` of the hook API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ForgeVersion {
    pub major: u32,
    pub minor: u32,
    pub revision: u32,
}

impl ForgeVersion {
    /// The API version implemented by this crate.
    pub const CURRENT: ForgeVersion = ForgeVersion::new(3, 3, 7);

    pub const fn new(major: u32, minor: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            revision,
        }
    }
}

impl Default for ForgeVersion {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for ForgeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}

impl FromStr for ForgeVersion {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ForgeError::InvalidVersion(s.to_string());
        let mut parts = s.trim().split('.');
        let mut next = || -> Result<u32> {
            parts
                .next()
                .and_then(|p| p.parse().ok())
                .ok_or_else(invalid)
        };
        let version = ForgeVersion::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(version)
    }
}

impl Serialize for ForgeVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ForgeVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Check that `host` satisfies a mod that was built against `required`.
///
/// A differing major version or an older host is fatal. A host with a newer
/// minor version only logs a warning.
pub fn version_detect(mod_name: &str, required: ForgeVersion, host: ForgeVersion) -> Result<()> {
    check(mod_name, required, host, false)
}

/// Like [`version_detect`], but any minor version difference is fatal.
/// Meant for mods that use recent or unstable APIs.
pub fn version_detect_strict(
    mod_name: &str,
    required: ForgeVersion,
    host: ForgeVersion,
) -> Result<()> {
    check(mod_name, required, host, true)
}

fn check(mod_name: &str, required: ForgeVersion, host: ForgeVersion, strict: bool) -> Result<()> {
    let ForgeVersion {
        major,
        minor,
        revision,
    } = required;

    if major != host.major {
        return Err(kill_minecraft(
            mod_name,
            format!("MinecraftForge Major Version Mismatch, expecting {major}.x.x"),
        ));
    }

    if minor != host.minor {
        if minor > host.minor {
            return Err(kill_minecraft(
                mod_name,
                format!("MinecraftForge Too Old, need at least {required}"),
            ));
        }
        if strict {
            return Err(kill_minecraft(
                mod_name,
                format!("MinecraftForge minor version mismatch, expecting {major}.{minor}.x"),
            ));
        }
        warn!(
            "{mod_name}: MinecraftForge minor version mismatch, expecting {major}.{minor}.x, may lead to unexpected behavior"
        );
        return Ok(());
    }

    if revision > host.revision {
        return Err(kill_minecraft(
            mod_name,
            format!("MinecraftForge Too Old, need at least {required}"),
        ));
    }

    Ok(())
}

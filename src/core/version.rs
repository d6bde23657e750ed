//! Store version tag.
//!
//! Parses, formats, and increments the `major.minor.patch` string carried
//! by every store.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Result, VersionError};

/// A three-component semantic version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Which component to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bump {
    Major,
    Minor,
    Patch,
}

/// How to treat a version string that fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Return the parse error.
    Strict,
    /// Substitute [`Version::DEFAULT`].
    OrDefault,
}

impl Version {
    /// Fallback used by [`ParseMode::OrDefault`].
    pub const DEFAULT: Version = Version::new(1, 0, 0);

    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse with an explicit recovery policy.
    ///
    /// # Errors
    ///
    /// Returns `VersionError` only under [`ParseMode::Strict`].
    pub fn parse(s: &str, mode: ParseMode) -> Result<Self> {
        match mode {
            ParseMode::Strict => Ok(s.parse()?),
            ParseMode::OrDefault => Ok(Self::parse_or_default(s)),
        }
    }

    /// Parse, substituting [`Version::DEFAULT`] for anything malformed.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|e: VersionError| {
            debug!(version = s, error = %e, "substituting default version");
            Self::DEFAULT
        })
    }

    /// Apply an increment. Lower components reset to zero.
    ///
    /// A component already at `u64::MAX` stays there.
    pub fn increment(&mut self, bump: Bump) {
        match bump {
            Bump::Major => {
                self.major = self.major.saturating_add(1);
                self.minor = 0;
                self.patch = 0;
            }
            Bump::Minor => {
                self.minor = self.minor.saturating_add(1);
                self.patch = 0;
            }
            Bump::Patch => self.patch = self.patch.saturating_add(1),
        }
    }

    /// Apply an increment named by string. Unknown names leave the version
    /// unchanged.
    pub fn increment_named(&mut self, kind: &str) {
        match kind.parse::<Bump>() {
            Ok(bump) => self.increment(bump),
            Err(_) => debug!(kind, "ignoring unknown version increment"),
        }
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(VersionError::Format(s.to_string()));
        }

        let component = |name: &'static str, value: &str| {
            value
                .parse::<u64>()
                .map_err(|_| VersionError::Component {
                    component: name,
                    value: value.to_string(),
                })
        };

        Ok(Self {
            major: component("major", parts[0])?,
            minor: component("minor", parts[1])?,
            patch: component("patch", parts[2])?,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Bump {
    type Err = VersionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "major" => Ok(Bump::Major),
            "minor" => Ok(Bump::Minor),
            "patch" => Ok(Bump::Patch),
            other => Err(VersionError::UnknownBump(other.to_string())),
        }
    }
}

use std::cmp::Ordering;
use std::fmt;

/// Version of the external "cm" tool in the form "X.Y.Z.B"
/// (Major.Minor.Patch.Build).
///
/// Parsing is lenient: anything that is not exactly four integer components
/// keeps its raw text but compares as 0.0.0.0, the oldest possible version.
#[derive(Clone, Debug)]
pub struct SoftwareVersion {
    raw: String,
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub build: u32,
}

impl SoftwareVersion {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let (major, minor, patch, build) = parse_components(&raw).unwrap_or_else(|| {
            log::debug!("unparseable tool version {:?}, treating as 0.0.0.0", raw);
            (0, 0, 0, 0)
        });

        Self {
            raw,
            major,
            minor,
            patch,
            build,
        }
    }

    pub fn from_parts(major: u32, minor: u32, patch: u32, build: u32) -> Self {
        Self {
            raw: format!("{}.{}.{}.{}", major, minor, patch, build),
            major,
            minor,
            patch,
            build,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    fn components(&self) -> (u32, u32, u32, u32) {
        (self.major, self.minor, self.patch, self.build)
    }
}

fn parse_components(raw: &str) -> Option<(u32, u32, u32, u32)> {
    let parts: Vec<&str> = raw.trim().split('.').collect();
    let [major, minor, patch, build] = parts.as_slice() else {
        return None;
    };
    Some((
        major.parse().ok()?,
        minor.parse().ok()?,
        patch.parse().ok()?,
        build.parse().ok()?,
    ))
}

impl Default for SoftwareVersion {
    fn default() -> Self {
        Self {
            raw: "<unknown-version>".to_string(),
            major: 0,
            minor: 0,
            patch: 0,
            build: 0,
        }
    }
}

// The raw string never takes part in comparisons.
impl PartialEq for SoftwareVersion {
    fn eq(&self, other: &Self) -> bool {
        self.components() == other.components()
    }
}

impl Eq for SoftwareVersion {}

impl PartialOrd for SoftwareVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SoftwareVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components().cmp(&other.components())
    }
}

impl fmt::Display for SoftwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Key versions of the "cm" command line enabling optional features.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Oldest supported version (changelist 'persistent' flag gained its '--' prefix).
    OldestSupported,
    /// `--descriptionfile` for multi-line descriptions.
    NewChangelistFileArgs,
    /// `shelveset apply` restricted to a selection of changes.
    ShelvesetApplySelection,
    /// `history --limit`.
    NewHistoryLimit,
    /// `undocheckout --keepchanges`.
    UndoCheckoutKeepChanges,
    /// `status --iscochanged`.
    StatusIsCheckedOutChanged,
    SmartLocks,
}

impl Capability {
    pub const ALL: [Capability; 7] = [
        Capability::OldestSupported,
        Capability::NewChangelistFileArgs,
        Capability::ShelvesetApplySelection,
        Capability::NewHistoryLimit,
        Capability::UndoCheckoutKeepChanges,
        Capability::StatusIsCheckedOutChanged,
        Capability::SmartLocks,
    ];

    pub fn min_version(self) -> SoftwareVersion {
        let (major, minor, patch, build) = match self {
            Capability::OldestSupported => (9, 0, 16, 4839),
            Capability::NewChangelistFileArgs => (11, 0, 16, 7248),
            Capability::ShelvesetApplySelection => (11, 0, 16, 7504),
            Capability::NewHistoryLimit => (11, 0, 16, 7608),
            Capability::UndoCheckoutKeepChanges => (11, 0, 16, 7665),
            Capability::StatusIsCheckedOutChanged => (11, 0, 16, 7709),
            Capability::SmartLocks => (11, 0, 16, 8101),
        };
        SoftwareVersion::from_parts(major, minor, patch, build)
    }

    pub fn is_supported_by(self, version: &SoftwareVersion) -> bool {
        *version >= self.min_version()
    }
}

#[cfg(test)]
#[path = "tests/version_tests.rs"]
mod tests;

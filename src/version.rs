//! Build stamp shown by `ironcore-admin version`

use std::fmt;

/// What the binary knows about its own build
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    /// Short commit hash, or "unknown" outside a git checkout
    pub commit: &'static str,
    pub built_on: &'static str,
    pub profile: &'static str,
    pub target: &'static str,
}

impl BuildInfo {
    /// `<version>+<commit>`, or the bare version when the commit is unknown
    pub fn full_version(&self) -> String {
        if self.commit == "unknown" {
            self.version.to_string()
        } else {
            format!("{}+{}", self.version, self.commit)
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.name, self.full_version())?;
        writeln!(f, "Build Information:")?;
        writeln!(f, "  Git Hash: {}", self.commit)?;
        writeln!(f, "  Built:    {} ({}, {})", self.built_on, self.profile, self.target)
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        commit: env!("IRONCORE_COMMIT"),
        built_on: env!("IRONCORE_BUILT_ON"),
        profile: env!("IRONCORE_PROFILE"),
        target: env!("IRONCORE_TARGET"),
    }
}

pub fn print_version() {
    print!("{}", build_info());
}

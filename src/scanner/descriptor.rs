//! Recognized build descriptor files.

use std::fmt;

/// A build descriptor recognized by its exact file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuildDescriptor {
    /// `CMakeLists.txt`
    CMake,
    /// `meson.build`
    Meson,
    /// `configure.ac`
    Autoconf,
    /// `Makefile`
    Make,
    /// `setup.py`
    Setuptools,
}

impl BuildDescriptor {
    /// Every recognized descriptor.
    pub const ALL: [BuildDescriptor; 5] = [
        BuildDescriptor::CMake,
        BuildDescriptor::Meson,
        BuildDescriptor::Autoconf,
        BuildDescriptor::Make,
        BuildDescriptor::Setuptools,
    ];

    /// The exact file name this descriptor is recognized by.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::CMake => "CMakeLists.txt",
            Self::Meson => "meson.build",
            Self::Autoconf => "configure.ac",
            Self::Make => "Makefile",
            Self::Setuptools => "setup.py",
        }
    }

    /// Look up a descriptor by file name. Matching is exact and case-sensitive.
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.file_name() == name)
    }

    /// Human-readable build system name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CMake => "CMake",
            Self::Meson => "Meson",
            Self::Autoconf => "Autoconf",
            Self::Make => "Make",
            Self::Setuptools => "setuptools",
        }
    }
}

impl fmt::Display for BuildDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

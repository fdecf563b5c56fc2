use serde::{Deserialize, Serialize};

/// Package managers bundled with, or central to, an OS distribution.
///
/// `pacman` appears twice. Matching is membership-only, so the repeat is
/// harmless and kept as-is.
pub const OFFICIAL_PACKAGE_MANAGERS: &[&str] = &[
    "apt",
    "yum",
    "transactional-update",
    "dnf",
    "rpm-ostree",
    "pacman",
    "apk",
    "zypper",
    "pacman",
    "xbps",
    "swupd",
    "slackpkg",
    "eopkg",
    "pkg",
    "pkg_add",
];

/// Supplementary and cross-platform package managers.
pub const ALTERNATIVE_PACKAGE_MANAGERS: &[&str] = &[
    "flatpak", "snap", "brew", "portsnap", "rubygem", "yarn", "pipx", "npm",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Official,
    Alternative,
}

impl CatalogKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            CatalogKind::Official => "Official",
            CatalogKind::Alternative => "Alternative",
        }
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// An ordered list of package manager binary names.
///
/// A catalog is fixed once built; scanning only tests membership against it.
///
/// # Example
///
/// ```
/// use pmdetect::{Catalog, CatalogKind};
///
/// let catalog = Catalog::new(CatalogKind::Official, ["apt", "dnf"]);
/// assert!(catalog.contains("apt"));
/// assert!(!catalog.contains("APT"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    kind: CatalogKind,
    names: Vec<String>,
}

impl Catalog {
    pub fn new<I, S>(kind: CatalogKind, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in official catalog.
    pub fn official() -> Self {
        Self::new(CatalogKind::Official, OFFICIAL_PACKAGE_MANAGERS.iter().copied())
    }

    /// The built-in alternative catalog.
    pub fn alternative() -> Self {
        Self::new(
            CatalogKind::Alternative,
            ALTERNATIVE_PACKAGE_MANAGERS.iter().copied(),
        )
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns a copy with `extra` names appended.
    pub fn extended<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(extra.into_iter().map(Into::into));
        self
    }
}

/// The official/alternative pair a scan matches against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogs {
    pub official: Catalog,
    pub alternative: Catalog,
}

impl Catalogs {
    pub fn new(official: Catalog, alternative: Catalog) -> Self {
        Self {
            official,
            alternative,
        }
    }

    pub fn get(&self, kind: CatalogKind) -> &Catalog {
        match kind {
            CatalogKind::Official => &self.official,
            CatalogKind::Alternative => &self.alternative,
        }
    }
}

impl Default for Catalogs {
    fn default() -> Self {
        Self::new(Catalog::official(), Catalog::alternative())
    }
}

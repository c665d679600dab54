//! Platform catalog and resolver
//!
//! Resolution is total: any name that isn't in the catalog resolves to the
//! default entry.
//!
//! ```ignore
//! use synthfin_core::config::{PlatformCatalog, resolve};
//! use synthfin_core::model::PlatformConfig;
//!
//! let facebook = resolve("Facebook");
//! let fallback = resolve("Myspace"); // default entry
//!
//! let catalog = PlatformCatalog::builtin()
//!     .with_platform(PlatformConfig::new("Threads", 2.0e8, 1.0));
//! ```

use rustc_hash::FxHashMap;

use crate::model::PlatformConfig;

mod builtin;

pub use builtin::{
    BUILTIN_PLATFORMS, DEFAULT_PLATFORM, default_platform, facebook, instagram, whatsapp,
};

/// Lookup table of platform configurations with a default fallback
#[derive(Debug, Clone)]
pub struct PlatformCatalog {
    platforms: FxHashMap<String, PlatformConfig>,
    fallback: PlatformConfig,
}

impl PlatformCatalog {
    /// The three built-in platforms plus the default entry
    #[must_use]
    pub fn builtin() -> Self {
        let mut platforms = FxHashMap::default();
        for config in [facebook(), whatsapp(), instagram()] {
            platforms.insert(config.name.clone(), config);
        }
        Self {
            platforms,
            fallback: default_platform(),
        }
    }

    /// Resolve a platform by exact name, falling back to the default entry
    #[must_use]
    pub fn resolve(&self, name: &str) -> PlatformConfig {
        match self.platforms.get(name) {
            Some(config) => config.clone(),
            None => self.fallback.clone(),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PlatformConfig> {
        self.platforms.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.platforms.contains_key(name)
    }

    #[must_use]
    pub fn fallback(&self) -> &PlatformConfig {
        &self.fallback
    }

    /// Insert or replace an entry. An entry named [`DEFAULT_PLATFORM`]
    /// replaces the fallback instead.
    pub fn insert(&mut self, config: PlatformConfig) -> Option<PlatformConfig> {
        if config.name == DEFAULT_PLATFORM {
            return Some(std::mem::replace(&mut self.fallback, config));
        }
        self.platforms.insert(config.name.clone(), config)
    }

    #[must_use]
    pub fn with_platform(mut self, config: PlatformConfig) -> Self {
        self.insert(config);
        self
    }

    /// Selectable names: built-ins in menu order, then custom entries sorted by name
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = BUILTIN_PLATFORMS
            .iter()
            .filter(|name| self.platforms.contains_key(**name))
            .map(|name| (*name).to_string())
            .collect();

        let mut custom: Vec<String> = self
            .platforms
            .keys()
            .filter(|name| !BUILTIN_PLATFORMS.contains(&name.as_str()))
            .cloned()
            .collect();
        custom.sort();

        names.extend(custom);
        names
    }
}

impl Default for PlatformCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Resolve a platform against the built-in catalog
#[must_use]
pub fn resolve(name: &str) -> PlatformConfig {
    PlatformCatalog::builtin().resolve(name)
}

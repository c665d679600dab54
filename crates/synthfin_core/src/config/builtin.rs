//! Built-in platform entries

use crate::model::{PlatformConfig, RateSchedule};

/// Catalog key of the fallback entry
pub const DEFAULT_PLATFORM: &str = "default";

/// Selectable built-in platforms, in menu order
pub const BUILTIN_PLATFORMS: [&str; 3] = ["Facebook", "WhatsApp", "Instagram"];

pub fn facebook() -> PlatformConfig {
    PlatformConfig::new("Facebook", 2_000_000_000.0, 85.0)
        .platform_type("social_media")
        .specialties(["advertising", "marketplace", "gaming", "vr"])
        // Growth slows down after 2018
        .user_growth(RateSchedule::switching(0.12, 2018, 0.05))
        .revenue_growth(RateSchedule::constant(0.25))
        .recommendations([
            "Diversify revenue beyond advertising",
            "Improve engagement among younger users",
            "Build out e-commerce features",
        ])
}

pub fn whatsapp() -> PlatformConfig {
    PlatformConfig::new("WhatsApp", 2_000_000_000.0, 5.0)
        .platform_type("messaging")
        .specialties(["messaging", "business_api", "payments"])
        .user_growth(RateSchedule::constant(0.10))
        // Small revenue base, so faster relative growth
        .revenue_growth(RateSchedule::constant(0.40))
        .recommendations([
            "Accelerate monetization through the business API",
            "Develop financial and payment services",
            "Improve integration with the other platforms in the family",
        ])
}

pub fn instagram() -> PlatformConfig {
    PlatformConfig::new("Instagram", 1_500_000_000.0, 45.0)
        .platform_type("visual_social")
        .specialties(["advertising", "influencers", "shopping", "reels"])
        .user_growth(RateSchedule::switching(0.25, 2020, 0.15))
        .revenue_growth(RateSchedule::constant(0.35))
        .recommendations([
            "Counter short-video competition with new formats",
            "Expand tooling for content creators",
            "Improve Reels monetization",
        ])
}

pub fn default_platform() -> PlatformConfig {
    PlatformConfig::new(DEFAULT_PLATFORM, 1_000_000_000.0, 30.0)
        .platform_type("social_media")
        .specialties(["advertising", "user_data", "engagement"])
        .user_growth(RateSchedule::constant(0.08))
        .revenue_growth(RateSchedule::constant(0.20))
}

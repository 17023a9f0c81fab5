//! Landing page copy.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🚀",
        title: "Launch Your Ideas",
        description: "Build amazing projects with our guided tutorials",
    },
    Feature { icon: "⚡", title: "AI-Powered Learning", description: "Get instant help and code suggestions" },
    Feature {
        icon: "⭐",
        title: "Creative Tools",
        description: "Access themes, animations, and design assets",
    },
    Feature { icon: "🏆", title: "Earn Achievements", description: "Unlock badges and showcase your progress" },
];

/// Community figures under the feature grid: `(number, label)`.
pub const COMMUNITY_STATS: &[(&str, &str)] =
    &[("10K+", "Students"), ("500+", "Projects"), ("50+", "Tutorials"), ("24/7", "AI Support")];

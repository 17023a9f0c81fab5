//! Creative library catalog and search.
//!
//! The catalog is static; filtering returns borrowed entries in catalog order.

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetCategory {
    Templates,
    Animations,
    Components,
    Themes,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 4] = [
        AssetCategory::Templates,
        AssetCategory::Animations,
        AssetCategory::Components,
        AssetCategory::Themes,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Templates => "templates",
            Self::Animations => "animations",
            Self::Components => "components",
            Self::Themes => "themes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Templates => "Templates",
            Self::Animations => "Animations",
            Self::Components => "Components",
            Self::Themes => "Themes",
        }
    }
}

/// Category tab selection; `All` disables the category constraint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(AssetCategory),
}

impl CategoryFilter {
    /// Every tab in display order.
    pub fn tabs() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(AssetCategory::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.id(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    pub fn admits(self, category: AssetCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreativeAsset {
    pub id: u32,
    pub title: &'static str,
    pub category: AssetCategory,
    /// Technology badge ("CSS", "React").
    pub kind: &'static str,
    pub likes: u32,
    pub downloads: u32,
    /// CSS background for the preview tile.
    pub preview: &'static str,
    pub tags: &'static [&'static str],
}

impl CreativeAsset {
    /// Whether `needle` (already lowercased) occurs in the title or any tag.
    fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

pub const ASSETS: &[CreativeAsset] = &[
    CreativeAsset {
        id: 1,
        title: "Gradient Button Pack",
        category: AssetCategory::Components,
        kind: "CSS",
        likes: 234,
        downloads: 1_200,
        preview: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
        tags: &["buttons", "gradients", "interactive"],
    },
    CreativeAsset {
        id: 2,
        title: "Floating Animation",
        category: AssetCategory::Animations,
        kind: "CSS",
        likes: 189,
        downloads: 800,
        preview: "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
        tags: &["float", "keyframes", "smooth"],
    },
    CreativeAsset {
        id: 3,
        title: "Modern Dashboard",
        category: AssetCategory::Templates,
        kind: "React",
        likes: 456,
        downloads: 2_100,
        preview: "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
        tags: &["dashboard", "modern", "responsive"],
    },
    CreativeAsset {
        id: 4,
        title: "Dark Theme Pack",
        category: AssetCategory::Themes,
        kind: "CSS",
        likes: 324,
        downloads: 1_500,
        preview: "linear-gradient(135deg, #2c3e50 0%, #4a6741 100%)",
        tags: &["dark", "professional", "elegant"],
    },
    CreativeAsset {
        id: 5,
        title: "Card Hover Effects",
        category: AssetCategory::Components,
        kind: "CSS",
        likes: 278,
        downloads: 1_000,
        preview: "linear-gradient(135deg, #fa709a 0%, #fee140 100%)",
        tags: &["cards", "hover", "effects"],
    },
    CreativeAsset {
        id: 6,
        title: "Loading Spinners",
        category: AssetCategory::Animations,
        kind: "CSS",
        likes: 156,
        downloads: 900,
        preview: "linear-gradient(135deg, #a8edea 0%, #fed6e3 100%)",
        tags: &["loading", "spinners", "animated"],
    },
];

pub fn find_asset(asset_id: u32) -> Option<&'static CreativeAsset> {
    ASSETS.iter().find(|asset| asset.id == asset_id)
}

/// Assets whose title or tags contain `search` (case-insensitive) and whose
/// category passes `filter`. An empty search matches everything; whitespace is
/// matched literally.
pub fn filter_assets<'a>(assets: &'a [CreativeAsset], search: &str, filter: CategoryFilter) -> Vec<&'a CreativeAsset> {
    let needle = search.to_lowercase();
    assets
        .iter()
        .filter(|asset| filter.admits(asset.category))
        .filter(|asset| needle.is_empty() || asset.mentions(&needle))
        .collect()
}

/// Number of assets shown under a category tab.
pub fn category_count(assets: &[CreativeAsset], filter: CategoryFilter) -> usize {
    assets.iter().filter(|asset| filter.admits(asset.category)).count()
}

/// Compact count for badges: `950`, `1.2k`, `2.1k`.
pub fn format_count(count: u32) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let tenths = count / 100;
    if tenths % 10 == 0 {
        format!("{}k", tenths / 10)
    } else {
        format!("{}.{}k", tenths / 10, tenths % 10)
    }
}

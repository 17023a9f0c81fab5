//! Footer link columns and social destinations.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

pub struct LinkColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

pub const LINK_COLUMNS: &[LinkColumn] = &[
    LinkColumn {
        title: "Learn",
        links: &["JavaScript Basics", "React Fundamentals", "Python Adventures", "CSS Magic", "All Courses"],
    },
    LinkColumn {
        title: "Create",
        links: &["Project Builder", "AI Assistant", "Creative Library", "Templates", "Showcase"],
    },
    LinkColumn {
        title: "Support",
        links: &["Help Center", "Community", "Tutorials", "Contact Us", "Privacy Policy"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialLink {
    Github,
    Twitter,
    Mail,
}

impl SocialLink {
    pub const ALL: [SocialLink; 3] = [SocialLink::Github, SocialLink::Twitter, SocialLink::Mail];

    pub fn label(self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Twitter => "Twitter",
            Self::Mail => "Email",
        }
    }

    pub fn url(self) -> &'static str {
        match self {
            Self::Github => "https://github.com/codecraft-academy",
            Self::Twitter => "https://twitter.com/codecraft_edu",
            Self::Mail => "mailto:hello@codecraft.academy",
        }
    }
}

pub fn navigation_message(link: &str) -> String {
    format!("Navigating to {link}...")
}

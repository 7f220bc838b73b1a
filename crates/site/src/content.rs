//! Static page content for the coming-soon site.
//!
//! Copy lives in code rather than a CMS while the site is a single page.

/// A social profile link shown in the page footer.
#[derive(Clone)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// Content for the coming-soon page.
#[derive(Clone)]
pub struct ComingSoonContent {
    /// Product name shown as the main heading.
    pub name: &'static str,
    /// Small badge above the heading.
    pub badge: &'static str,
    /// Section title under the heading.
    pub title: String,
    /// Supporting tagline.
    pub tagline: &'static str,
    /// Label on the submit button.
    pub cta: &'static str,
    /// Footer social links.
    pub socials: Vec<SocialLink>,
}

impl ComingSoonContent {
    /// Build the page content, localizing the title when the visitor's
    /// city is known.
    #[must_use]
    pub fn for_city(city: Option<&str>) -> Self {
        let title = city.map_or_else(
            || "Something bright is on the way.".to_string(),
            |city| format!("Something bright is on the way to {city}."),
        );

        Self {
            name: "Solara",
            badge: "Coming Soon",
            title,
            tagline: "Be the first to know when we launch. No spam, just one email.",
            cta: "Notify Me",
            socials: vec![
                SocialLink {
                    label: "X",
                    url: "https://x.com/solaralabs",
                },
                SocialLink {
                    label: "Instagram",
                    url: "https://instagram.com/solaralabs",
                },
                SocialLink {
                    label: "GitHub",
                    url: "https://github.com/solara-labs",
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_localizes_when_city_known() {
        let content = ComingSoonContent::for_city(Some("Paris"));
        assert!(content.title.contains("Paris"));

        let content = ComingSoonContent::for_city(None);
        assert!(!content.title.is_empty());
    }
}

//! Global site settings domain types.
//!
//! Site-wide chrome (site name, navigation, footer, social links, favicon)
//! authored once in the CMS and shared by every page.

use serde::{Deserialize, Serialize};

use super::media::MediaRef;

/// Category assigned to footer links that have none in the CMS.
pub const UNCATEGORIZED_FOOTER_CATEGORY: &str = "Other";

/// Global settings payload as returned by the content API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Display name of the site, shown in the navbar and footer.
    pub site_name: String,
    /// Top-level navigation entries, in CMS order.
    #[serde(default)]
    pub navigation: Vec<NavigationItem>,
    /// Footer links, each optionally tagged with a category.
    #[serde(default)]
    pub footer_links: Vec<FooterLink>,
    /// Social network profile links.
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    /// Site favicon, if one was uploaded.
    #[serde(default)]
    pub favicon: Option<MediaRef>,
}

/// A single navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub id: u64,
    pub label: String,
    pub url: String,
}

/// A footer link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub id: u64,
    pub title: String,
    /// Target URL; the footer falls back to `#` when absent.
    #[serde(default)]
    pub url: Option<String>,
    /// Column heading this link is grouped under.
    #[serde(default)]
    pub category: Option<String>,
}

/// A social network link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: u64,
    /// Platform name as entered in the CMS (e.g. "Facebook", "twitter").
    pub platform: String,
    pub url: String,
}

impl SocialLink {
    /// Platform name normalised for matching against known icon sets.
    pub fn platform_key(&self) -> String {
        self.platform.trim().to_lowercase()
    }
}

/// Group footer links by category, preserving first-seen category order and
/// the CMS order of links within each category.
///
/// Links without a category (or with a blank one) are grouped under
/// [`UNCATEGORIZED_FOOTER_CATEGORY`].
pub fn group_footer_links(links: &[FooterLink]) -> Vec<(String, Vec<FooterLink>)> {
    let mut groups: Vec<(String, Vec<FooterLink>)> = Vec::new();

    for link in links {
        let category = link
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORIZED_FOOTER_CATEGORY);

        match groups.iter_mut().find(|(name, _)| name == category) {
            Some((_, members)) => members.push(link.clone()),
            None => groups.push((category.to_string(), vec![link.clone()])),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(id: u64, title: &str, category: Option<&str>) -> FooterLink {
        FooterLink {
            id,
            title: title.to_string(),
            url: Some(format!("/{}", title.to_lowercase())),
            category: category.map(String::from),
        }
    }

    #[test]
    fn test_group_footer_links_preserves_order() {
        let links = vec![
            link(1, "About", Some("Company")),
            link(2, "Docs", Some("Resources")),
            link(3, "Careers", Some("Company")),
        ];

        let groups = group_footer_links(&links);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Company");
        assert_eq!(
            groups[0].1.iter().map(|l| l.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(groups[1].0, "Resources");
    }

    #[test]
    fn test_group_footer_links_uncategorized() {
        let links = vec![link(1, "Privacy", None), link(2, "Terms", Some("  "))];

        let groups = group_footer_links(&links);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, UNCATEGORIZED_FOOTER_CATEGORY);
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn test_group_footer_links_empty() {
        assert!(group_footer_links(&[]).is_empty());
    }

    #[test]
    fn test_platform_key() {
        let social = SocialLink {
            id: 1,
            platform: " LinkedIn ".to_string(),
            url: "https://linkedin.com/company/acme".to_string(),
        };
        assert_eq!(social.platform_key(), "linkedin");
    }
}

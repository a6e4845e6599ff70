//! Text rendering of settings, pages and metadata.

use std::fmt::Write as _;

use sitekit_core::{
    FooterLink, GlobalSettings, NavigationItem, PageData, PageMetadata, SocialLink,
};

use super::tables::{format_optional, separator, truncate_string};

/// Summary of the global settings. Relative media URLs are resolved
/// against `origin`.
pub fn format_settings(settings: &GlobalSettings, origin: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Site:       {}", settings.site_name);
    let _ = writeln!(out, "Navigation: {} item(s)", settings.navigation.len());
    let _ = writeln!(out, "Footer:     {} link(s)", settings.footer_links.len());
    let _ = writeln!(out, "Social:     {} link(s)", settings.social_links.len());
    let favicon = settings
        .favicon
        .as_ref()
        .map(|media| media.absolute_url(origin));
    let _ = writeln!(out, "Favicon:    {}", format_optional(favicon.as_ref(), "--"));
    out
}

/// Navigation entries as a two-column table.
pub fn format_navigation(items: &[NavigationItem]) -> String {
    if items.is_empty() {
        return "No navigation items.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:<25} URL", "Label");
    let _ = writeln!(out, "{}", separator(60));
    for item in items {
        let _ = writeln!(out, "{:<25} {}", truncate_string(&item.label, 24), item.url);
    }
    out
}

/// Footer links under their category headings.
pub fn format_footer(groups: &[(String, Vec<FooterLink>)]) -> String {
    if groups.is_empty() {
        return "No footer links.\n".to_string();
    }

    let mut out = String::new();
    for (category, links) in groups {
        let _ = writeln!(out, "{category}");
        for link in links {
            let _ = writeln!(
                out,
                "  {:<30} {}",
                truncate_string(&link.title, 29),
                link.url.as_deref().unwrap_or("#")
            );
        }
    }
    out
}

/// Social links keyed by normalised platform.
pub fn format_social(links: &[SocialLink]) -> String {
    if links.is_empty() {
        return "No social links.\n".to_string();
    }

    let mut out = String::new();
    for link in links {
        let _ = writeln!(out, "{:<12} {}", link.platform_key(), link.url);
    }
    out
}

/// Page header followed by one line per section.
pub fn format_page(page: &PageData, origin: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", page.title, page.slug);
    let _ = writeln!(out, "Type:     {}", page.page_type.as_tag());
    let updated = page
        .updated_at
        .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string());
    let _ = writeln!(out, "Updated:  {}", format_optional(updated.as_ref(), "--"));
    if let Some(description) = &page.description {
        let _ = writeln!(out, "{description}");
    }

    let _ = writeln!(out, "\n{} section(s):", page.sections.len());
    let _ = writeln!(out, "{}", separator(60));
    for (index, section) in page.sections.iter().enumerate() {
        let summary = section.hero().map_or_else(
            || {
                section
                    .field_str("title")
                    .map(|title| truncate_string(title, 40))
                    .unwrap_or_default()
            },
            |hero| {
                let image = hero
                    .image
                    .map(|media| format!(" [{}]", media.absolute_url(origin)))
                    .unwrap_or_default();
                format!("{}{image}", truncate_string(&hero.title, 40))
            },
        );
        let _ = writeln!(
            out,
            "{:>3}. {:<28} {summary}",
            index + 1,
            section.kind.as_tag()
        );
    }
    out
}

/// Document title and description.
pub fn format_metadata(metadata: &PageMetadata) -> String {
    format!(
        "Title:       {}\nDescription: {}\n",
        metadata.title,
        format_optional(metadata.description.as_ref(), "--")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sitekit_core::{MediaRef, PageType, Section, SectionKind};

    fn page_with_sections(sections: Vec<Section>) -> PageData {
        PageData {
            id: 1,
            document_id: "doc-1".to_string(),
            title: "Careers".to_string(),
            slug: "career".to_string(),
            description: Some("Join us".to_string()),
            meta_title: None,
            meta_description: None,
            page_type: PageType::Career,
            sections,
            created_at: None,
            updated_at: None,
        }
    }

    fn section(kind: SectionKind, fields: serde_json::Value) -> Section {
        Section {
            id: 1,
            kind,
            fields: fields.as_object().cloned().unwrap_or_default(),
        }
    }

    #[test]
    fn test_format_settings_resolves_favicon() {
        let settings = GlobalSettings {
            site_name: "Acme".to_string(),
            favicon: Some(MediaRef {
                id: 1,
                url: "/uploads/favicon.png".to_string(),
                width: None,
                height: None,
                alternative_text: None,
            }),
            ..GlobalSettings::default()
        };
        let out = format_settings(&settings, "http://localhost:1337");
        assert!(out.contains("Site:       Acme"));
        assert!(out.contains("http://localhost:1337/uploads/favicon.png"));
    }

    #[test]
    fn test_format_navigation_empty() {
        assert_eq!(format_navigation(&[]), "No navigation items.\n");
    }

    #[test]
    fn test_format_footer_uses_hash_for_missing_url() {
        let groups = vec![(
            "Other".to_string(),
            vec![FooterLink {
                id: 1,
                title: "Imprint".to_string(),
                url: None,
                category: None,
            }],
        )];
        let out = format_footer(&groups);
        assert!(out.starts_with("Other\n"));
        assert!(out.trim_end().ends_with('#'));
    }

    #[test]
    fn test_format_page_lists_sections() {
        let page = page_with_sections(vec![
            section(SectionKind::Hero, json!({"title": "Work with us", "subtitle": ""})),
            section(SectionKind::from_tag("sections.job-list"), json!({"title": "Open roles"})),
        ]);
        let out = format_page(&page, "http://localhost:1337");
        assert!(out.starts_with("Careers (career)\n"));
        assert!(out.contains("2 section(s):"));
        assert!(out.contains("Work with us"));
        assert!(out.contains("Open roles"));
    }

    #[test]
    fn test_format_metadata() {
        let out = format_metadata(&PageMetadata::not_found());
        assert!(out.contains("Title:       Page Not Found"));
    }
}

//! Page and section domain types.
//!
//! A page is an ordered list of sections. Each section carries a type tag
//! (the CMS component name) and its raw fields; only the hero section has a
//! typed view since it is the one every layout shares.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::media::MediaRef;

/// Slug of the CMS page rendered at the site root.
pub const HOME_PAGE_SLUG: &str = "home-page";

// ─────────────────────────────────────────────────────────────────────────────
// Page
// ─────────────────────────────────────────────────────────────────────────────

/// Layout family a page belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageType {
    Home,
    UserType1,
    UserType2,
    Career,
    #[default]
    Generic,
}

impl PageType {
    /// Parse the CMS `pageType` value. Unrecognised values map to `Generic`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "home" => Self::Home,
            "userType1" => Self::UserType1,
            "userType2" => Self::UserType2,
            "career" => Self::Career,
            _ => Self::Generic,
        }
    }

    /// The CMS tag for this page type.
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::UserType1 => "userType1",
            Self::UserType2 => "userType2",
            Self::Career => "career",
            Self::Generic => "generic",
        }
    }
}

/// A CMS page with its sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    pub id: u64,
    /// Stable document identifier (shared across locales and drafts).
    pub document_id: String,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub page_type: PageType,
    pub sections: Vec<Section>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Sections
// ─────────────────────────────────────────────────────────────────────────────

/// Section type, parsed from the CMS `__component` tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionKind {
    Hero,
    TextImage,
    FeatureGrid,
    FeatureSlider,
    FeatureSpotlight,
    Testimonials,
    CallToAction,
    Ticker,
    Payment,
    CareerHero,
    CareerVision,
    CareerHighlights,
    CareerJobListings,
    /// A component this crate has no name for; the raw tag is kept.
    Unknown(String),
}

impl SectionKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "sections.hero" => Self::Hero,
            "sections.text-image" => Self::TextImage,
            "sections.feature-grid" => Self::FeatureGrid,
            "sections.feature-slider" => Self::FeatureSlider,
            "sections.feature-spotlight" => Self::FeatureSpotlight,
            "sections.testimonials" => Self::Testimonials,
            "sections.call-to-action" => Self::CallToAction,
            "sections.ticker" => Self::Ticker,
            "sections.payment" => Self::Payment,
            "sections.career-hero" => Self::CareerHero,
            "sections.career-vision" => Self::CareerVision,
            "sections.career-highlights" => Self::CareerHighlights,
            "sections.career-job-listings" => Self::CareerJobListings,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            Self::Hero => "sections.hero",
            Self::TextImage => "sections.text-image",
            Self::FeatureGrid => "sections.feature-grid",
            Self::FeatureSlider => "sections.feature-slider",
            Self::FeatureSpotlight => "sections.feature-spotlight",
            Self::Testimonials => "sections.testimonials",
            Self::CallToAction => "sections.call-to-action",
            Self::Ticker => "sections.ticker",
            Self::Payment => "sections.payment",
            Self::CareerHero => "sections.career-hero",
            Self::CareerVision => "sections.career-vision",
            Self::CareerHighlights => "sections.career-highlights",
            Self::CareerJobListings => "sections.career-job-listings",
            Self::Unknown(tag) => tag,
        }
    }
}

impl From<String> for SectionKind {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<SectionKind> for String {
    fn from(kind: SectionKind) -> Self {
        kind.as_tag().to_string()
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A content block on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: u64,
    pub kind: SectionKind,
    /// Component fields, excluding `id` and `__component`. Media fields are
    /// already flattened by the content adapter.
    pub fields: Map<String, Value>,
}

impl Section {
    /// String value of a field, if present and a string.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Typed view of a hero section. `None` for other kinds or when the
    /// fields don't fit the hero shape.
    pub fn hero(&self) -> Option<HeroSection> {
        if self.kind != SectionKind::Hero {
            return None;
        }
        serde_json::from_value(Value::Object(self.fields.clone())).ok()
    }
}

/// Hero banner section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default)]
    pub button_link: Option<String>,
    #[serde(default)]
    pub image: Option<MediaRef>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Metadata
// ─────────────────────────────────────────────────────────────────────────────

/// Document metadata (`<title>` and description) for a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: Option<String>,
}

impl PageMetadata {
    /// Metadata used for the home page when it can't be loaded.
    pub fn home_fallback() -> Self {
        Self {
            title: "Home".to_string(),
            description: Some("Welcome to our website".to_string()),
        }
    }

    /// Metadata used for any other page that can't be loaded.
    pub fn not_found() -> Self {
        Self {
            title: "Page Not Found".to_string(),
            description: Some("The requested page could not be found.".to_string()),
        }
    }

    /// Derive metadata from a page, preferring the SEO fields. Blank SEO
    /// fields count as missing. Falls back when the page is absent.
    pub fn for_page(page: Option<&PageData>, fallback: Self) -> Self {
        let Some(page) = page else {
            return fallback;
        };

        let title = non_blank(page.meta_title.as_deref())
            .unwrap_or(&page.title)
            .to_string();
        let description = non_blank(page.meta_description.as_deref())
            .or_else(|| non_blank(page.description.as_deref()))
            .map(String::from);

        Self { title, description }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page() -> PageData {
        PageData {
            id: 1,
            document_id: "abc123".to_string(),
            title: "About us".to_string(),
            slug: "about".to_string(),
            description: Some("Who we are".to_string()),
            meta_title: None,
            meta_description: None,
            page_type: PageType::Generic,
            sections: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    fn section(kind: SectionKind, fields: Value) -> Section {
        Section {
            id: 3,
            kind,
            fields: fields.as_object().cloned().unwrap_or_default(),
        }
    }

    #[test]
    fn test_section_kind_tags() {
        assert_eq!(SectionKind::from_tag("sections.hero"), SectionKind::Hero);
        assert_eq!(
            SectionKind::from_tag("sections.career-job-listings"),
            SectionKind::CareerJobListings
        );
        let unknown = SectionKind::from_tag("sections.video");
        assert_eq!(unknown, SectionKind::Unknown("sections.video".to_string()));
        assert_eq!(unknown.as_tag(), "sections.video");
        assert_eq!(SectionKind::Ticker.to_string(), "sections.ticker");
    }

    #[test]
    fn test_section_kind_serializes_as_tag() {
        let value = serde_json::to_value(SectionKind::CallToAction).unwrap();
        assert_eq!(value, json!("sections.call-to-action"));
        let parsed: SectionKind = serde_json::from_value(json!("sections.payment")).unwrap();
        assert_eq!(parsed, SectionKind::Payment);
    }

    #[test]
    fn test_page_type_from_tag() {
        assert_eq!(PageType::from_tag("userType2"), PageType::UserType2);
        assert_eq!(PageType::from_tag("landing"), PageType::Generic);
        assert_eq!(PageType::Career.as_tag(), "career");
    }

    #[test]
    fn test_hero_view() {
        let hero = section(
            SectionKind::Hero,
            json!({
                "title": "Pay anyone",
                "subtitle": "Fast and free",
                "buttonText": "Get started",
                "buttonLink": "/signup",
                "image": {"id": 9, "url": "/uploads/hero.png", "alternativeText": "Hero"}
            }),
        );

        let view = hero.hero().unwrap();
        assert_eq!(view.title, "Pay anyone");
        assert_eq!(view.button_link.as_deref(), Some("/signup"));
        let image = view.image.unwrap();
        assert_eq!(image.url, "/uploads/hero.png");
        assert_eq!(image.alternative_text.as_deref(), Some("Hero"));
    }

    #[test]
    fn test_hero_view_wrong_kind() {
        let ticker = section(SectionKind::Ticker, json!({"title": "News"}));
        assert!(ticker.hero().is_none());
        assert_eq!(ticker.field_str("title"), Some("News"));
    }

    #[test]
    fn test_metadata_prefers_seo_fields() {
        let mut page = page();
        page.meta_title = Some("About | Acme".to_string());
        page.meta_description = Some("Learn about Acme".to_string());

        let meta = PageMetadata::for_page(Some(&page), PageMetadata::not_found());
        assert_eq!(meta.title, "About | Acme");
        assert_eq!(meta.description.as_deref(), Some("Learn about Acme"));
    }

    #[test]
    fn test_metadata_blank_seo_fields_fall_through() {
        let mut page = page();
        page.meta_title = Some(String::new());

        let meta = PageMetadata::for_page(Some(&page), PageMetadata::not_found());
        assert_eq!(meta.title, "About us");
        assert_eq!(meta.description.as_deref(), Some("Who we are"));
    }

    #[test]
    fn test_metadata_missing_page() {
        assert_eq!(
            PageMetadata::for_page(None, PageMetadata::home_fallback()),
            PageMetadata::home_fallback()
        );
    }
}

//! JSON parsing functions for Strapi API responses.
//!
//! Strapi v4 wraps every entity as `{ "id", "attributes": { ... } }` and
//! every relation or media field as `{ "data": ... }`; Strapi v5 returns
//! flat objects. These functions accept both and produce domain types.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};
use sitekit_core::{
    FooterLink, GlobalSettings, MediaRef, NavigationItem, PageData, PageType, Section, SectionKind,
    SocialLink,
};

use crate::error::{CmsError, CmsResult};

// ============================================================================
// Envelope Helpers
// ============================================================================

/// Flatten a v4 entity (`id` + `attributes`) into one object. Flat v5
/// objects are returned unchanged.
fn flatten_entity(value: &Value) -> Option<Map<String, Value>> {
    let object = value.as_object()?;
    match object.get("attributes").and_then(Value::as_object) {
        Some(attributes) => {
            let mut flat = attributes.clone();
            if let Some(id) = object.get("id") {
                flat.insert("id".to_string(), id.clone());
            }
            Some(flat)
        }
        None => Some(object.clone()),
    }
}

/// Items of a repeatable component or relation: a bare array, or a v4
/// `{ "data": [...] }` relation.
fn collection(value: Option<&Value>) -> Vec<&Value> {
    match value {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(Value::Object(object)) => object
            .get("data")
            .and_then(Value::as_array)
            .map(|items| items.iter().collect())
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

fn get_str(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(String::from)
}

fn get_id(object: &Map<String, Value>) -> Option<u64> {
    object.get("id").and_then(Value::as_u64)
}

fn get_u32(object: &Map<String, Value>, key: &str) -> Option<u32> {
    object
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
}

fn get_timestamp(object: &Map<String, Value>, key: &str) -> Option<DateTime<Utc>> {
    object
        .get(key)
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
}

// ============================================================================
// Media
// ============================================================================

/// Parse a media field in any of its shapes.
///
/// `null`, `{ "data": null }` and objects without a URL yield `None`. For
/// multi-media fields the first entry is used.
pub fn parse_media(value: &Value) -> Option<MediaRef> {
    let inner = match value.as_object() {
        Some(object) if object.contains_key("data") && !object.contains_key("url") => {
            match object.get("data")? {
                Value::Array(items) => items.first()?,
                other => other,
            }
        }
        _ => value,
    };

    let media = flatten_entity(inner)?;
    Some(MediaRef {
        id: get_id(&media).unwrap_or_default(),
        url: get_str(&media, "url")?,
        width: get_u32(&media, "width"),
        height: get_u32(&media, "height"),
        alternative_text: get_str(&media, "alternativeText"),
    })
}

/// Media in the CMS wire shape (camelCase keys), for raw section fields.
fn media_to_wire(media: &MediaRef) -> Value {
    json!({
        "id": media.id,
        "url": media.url,
        "width": media.width,
        "height": media.height,
        "alternativeText": media.alternative_text,
    })
}

/// Flatten a v4 media envelope. Multi-media envelopes stay arrays.
fn flatten_media_envelope(value: &Value) -> Value {
    match value.get("data") {
        Some(Value::Array(items)) => Value::Array(
            items
                .iter()
                .filter_map(parse_media)
                .map(|media| media_to_wire(&media))
                .collect(),
        ),
        _ => parse_media(value).map_or(Value::Null, |media| media_to_wire(&media)),
    }
}

/// Whether a section field holds a v4 media envelope.
fn is_media_envelope(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };
    if object.len() != 1 {
        return false;
    }
    match object.get("data") {
        Some(Value::Null) => true,
        Some(Value::Object(entity)) => entity
            .get("attributes")
            .and_then(|a| a.get("url"))
            .is_some(),
        Some(Value::Array(items)) => {
            !items.is_empty()
                && items
                    .iter()
                    .all(|item| item.get("attributes").and_then(|a| a.get("url")).is_some())
        }
        _ => false,
    }
}

// ============================================================================
// Global Settings
// ============================================================================

/// Parse the `data` of the global settings response.
///
/// A `null` or non-object payload is an error, so the settings cache never
/// stores an empty value. A missing site name reads as empty. Malformed list
/// entries are skipped.
pub fn parse_global_settings(data: &Value) -> CmsResult<GlobalSettings> {
    if data.is_null() {
        return Err(CmsError::invalid("global settings payload is empty"));
    }

    let global = flatten_entity(data)
        .ok_or_else(|| CmsError::invalid("global settings payload is not an object"))?;

    let site_name = get_str(&global, "siteName").unwrap_or_default();

    let navigation = collection(global.get("navigation"))
        .into_iter()
        .filter_map(parse_navigation_item)
        .collect();

    let footer_links = collection(
        global
            .get("FooterLinks")
            .or_else(|| global.get("footerLinks")),
    )
    .into_iter()
    .filter_map(parse_footer_link)
    .collect();

    let social_links = collection(global.get("socialLinks"))
        .into_iter()
        .filter_map(parse_social_link)
        .collect();

    let favicon = global.get("favicon").and_then(parse_media);

    Ok(GlobalSettings {
        site_name,
        navigation,
        footer_links,
        social_links,
        favicon,
    })
}

fn parse_navigation_item(value: &Value) -> Option<NavigationItem> {
    let item = flatten_entity(value)?;
    Some(NavigationItem {
        id: get_id(&item)?,
        label: get_str(&item, "label")?,
        url: get_str(&item, "url")?,
    })
}

fn parse_footer_link(value: &Value) -> Option<FooterLink> {
    let link = flatten_entity(value)?;
    Some(FooterLink {
        id: get_id(&link)?,
        title: get_str(&link, "title")?,
        url: get_str(&link, "url"),
        category: get_str(&link, "category"),
    })
}

fn parse_social_link(value: &Value) -> Option<SocialLink> {
    let link = flatten_entity(value)?;
    Some(SocialLink {
        id: get_id(&link)?,
        platform: get_str(&link, "platform")?,
        url: get_str(&link, "url")?,
    })
}

// ============================================================================
// Pages
// ============================================================================

/// Parse one page entity. Returns `None` if required fields are missing.
pub fn parse_page(value: &Value) -> Option<PageData> {
    let page = flatten_entity(value)?;

    let sections = collection(page.get("sections"))
        .into_iter()
        .filter_map(parse_section)
        .collect();

    Some(PageData {
        id: get_id(&page)?,
        document_id: get_str(&page, "documentId").unwrap_or_default(),
        title: get_str(&page, "title")?,
        slug: get_str(&page, "slug")?,
        description: get_str(&page, "description"),
        meta_title: get_str(&page, "metaTitle"),
        meta_description: get_str(&page, "metaDescription"),
        page_type: get_str(&page, "pageType")
            .map_or(PageType::Generic, |tag| PageType::from_tag(&tag)),
        sections,
        created_at: get_timestamp(&page, "createdAt"),
        updated_at: get_timestamp(&page, "updatedAt"),
    })
}

/// Parse one dynamic-zone entry. Entries without a `__component` tag are
/// skipped.
pub fn parse_section(value: &Value) -> Option<Section> {
    let mut fields = value.as_object()?.clone();

    let kind = match fields.remove("__component")? {
        Value::String(tag) => SectionKind::from_tag(&tag),
        _ => return None,
    };
    let id = fields
        .remove("id")
        .and_then(|id| id.as_u64())
        .unwrap_or_default();

    for field in fields.values_mut() {
        if is_media_envelope(field) {
            *field = flatten_media_envelope(field);
        }
    }

    Some(Section { id, kind, fields })
}

/// Extract slugs from a slug listing. Entries without a slug are skipped.
pub fn parse_page_slugs(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(flatten_entity)
        .filter_map(|page| get_str(&page, "slug"))
        .collect()
}

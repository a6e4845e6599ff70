//! Global settings command handlers.
//!
//! Every read goes through the settings cache, so repeated reads within
//! the freshness window don't reach the CMS.

use std::time::{Duration, Instant};

use anyhow::Result;

use super::emit;
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{format_footer, format_navigation, format_settings, format_social};

/// Execute the settings command.
///
/// Fails with `SettingsUnavailable` when the settings have never been
/// loaded. A stale copy is shown without error.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let settings = ctx
        .core()
        .settings()
        .settings()
        .await
        .ok_or_else(|| CliError::SettingsUnavailable(ctx.cms_url.clone()))?;

    emit(ctx, settings.as_ref(), || format_settings(&settings, &ctx.cms_url))
}

/// Read the settings `count` times, `interval` apart.
///
/// Each line shows how long the read took, which makes cache hits and
/// refreshes easy to tell apart. Run with `-v` to see the cache's own logs.
pub async fn watch(ctx: &CliContext, interval: Duration, count: u32) -> Result<()> {
    let count = count.max(1);
    let mut ticker = tokio::time::interval(interval.max(Duration::from_millis(1)));

    for read in 1..=count {
        ticker.tick().await;
        let started = Instant::now();
        let settings = ctx.core().settings().settings().await;
        let elapsed_ms = started.elapsed().as_millis();

        if ctx.json {
            let line = serde_json::json!({
                "read": read,
                "siteName": settings.as_ref().map(|s| s.site_name.clone()),
                "elapsedMs": elapsed_ms,
            });
            println!("{line}");
        } else {
            match settings {
                Some(settings) => {
                    println!("[{read}/{count}] {} ({elapsed_ms} ms)", settings.site_name);
                }
                None => println!("[{read}/{count}] unavailable ({elapsed_ms} ms)"),
            }
        }
    }

    Ok(())
}

/// Execute the nav command.
pub async fn navigation(ctx: &CliContext) -> Result<()> {
    let items = ctx.core().settings().navigation().await;
    emit(ctx, &items, || format_navigation(&items))
}

/// Execute the footer command.
pub async fn footer(ctx: &CliContext) -> Result<()> {
    let groups = ctx.core().settings().footer_links_by_category().await;
    emit(ctx, &groups, || format_footer(&groups))
}

/// Execute the social command.
pub async fn social(ctx: &CliContext) -> Result<()> {
    let links = ctx.core().settings().social_links().await;
    emit(ctx, &links, || format_social(&links))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::{FakeContent, context};
    use sitekit_core::GlobalSettings;
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    fn acme() -> GlobalSettings {
        GlobalSettings {
            site_name: "Acme".to_string(),
            ..GlobalSettings::default()
        }
    }

    #[tokio::test]
    async fn test_settings_unavailable() {
        let ctx = context(Arc::new(FakeContent::default()), false);

        let err = execute(&ctx).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::SettingsUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_settings_success() {
        let content = Arc::new(FakeContent {
            settings: Some(acme()),
            ..FakeContent::default()
        });
        let ctx = context(Arc::clone(&content), true);

        execute(&ctx).await.unwrap();
        assert_eq!(content.settings_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_watch_reads_through_cache() {
        let content = Arc::new(FakeContent {
            settings: Some(acme()),
            ..FakeContent::default()
        });
        let ctx = context(Arc::clone(&content), false);

        watch(&ctx, Duration::from_millis(1), 3).await.unwrap();
        // The manual clock never moves, so only the first read fetches.
        assert_eq!(content.settings_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_accessors_tolerate_unavailable_settings() {
        let ctx = context(Arc::new(FakeContent::default()), false);

        navigation(&ctx).await.unwrap();
        footer(&ctx).await.unwrap();
        social(&ctx).await.unwrap();
    }
}

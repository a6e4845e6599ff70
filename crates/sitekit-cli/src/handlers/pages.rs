//! Page command handlers.

use anyhow::Result;

use super::render;
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{format_metadata, format_page};

/// Execute the page command.
///
/// A missing page and a failed lookup both end in `PageNotFound`; the
/// cause is logged by the page service.
pub async fn execute(ctx: &CliContext, slug: &str) -> Result<()> {
    print!("{}", page_report(ctx, slug).await?);
    Ok(())
}

/// Execute the slugs command.
pub async fn slugs(ctx: &CliContext) -> Result<()> {
    print!("{}", slugs_report(ctx).await?);
    Ok(())
}

/// Execute the meta command.
pub async fn metadata(ctx: &CliContext, slug: &str) -> Result<()> {
    print!("{}", metadata_report(ctx, slug).await?);
    Ok(())
}

async fn page_report(ctx: &CliContext, slug: &str) -> Result<String> {
    let page = ctx
        .core()
        .pages()
        .get_page(slug)
        .await
        .ok_or_else(|| CliError::PageNotFound(slug.to_string()))?;

    render(ctx, &page, || format_page(&page, &ctx.cms_url))
}

async fn slugs_report(ctx: &CliContext) -> Result<String> {
    let slugs = ctx.core().pages().list_page_slugs().await;
    render(ctx, &slugs, || {
        if slugs.is_empty() {
            "No pages found.\n".to_string()
        } else {
            slugs.iter().map(|slug| format!("{slug}\n")).collect()
        }
    })
}

async fn metadata_report(ctx: &CliContext, slug: &str) -> Result<String> {
    let metadata = ctx.core().pages().page_metadata(slug).await;
    render(ctx, &metadata, || format_metadata(&metadata))
}

//! Command handlers that delegate to `SiteCore`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that call `SiteCore` and format output for the terminal
//!
//! Handlers should NOT talk to the CMS client directly.

pub mod pages;
pub mod settings;

use anyhow::Result;
use serde::Serialize;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Pretty JSON of `value` in `--json` mode, otherwise the text from
/// `text`.
fn render<T, F>(ctx: &CliContext, value: &T, text: F) -> Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> String,
{
    if ctx.json {
        let json = serde_json::to_string_pretty(value).map_err(CliError::from)?;
        Ok(format!("{json}\n"))
    } else {
        Ok(text())
    }
}

/// Print what [`render`] produces.
fn emit<T, F>(ctx: &CliContext, value: &T, text: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> String,
{
    print!("{}", render(ctx, value, text)?);
    Ok(())
}

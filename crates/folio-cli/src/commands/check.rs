use anyhow::Context;
use folio_core::skip::SkippedEntry;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::context::AppContext;
use crate::output::{Tabular, output};

#[derive(Debug, Serialize)]
struct CheckResponse {
    indexed: usize,
    skipped: Vec<SkippedEntry>,
}

impl Tabular for CheckResponse {
    fn headers(&self) -> Vec<&'static str> {
        vec!["slug", "reason"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.skipped
            .iter()
            .map(|entry| vec![entry.slug.clone(), entry.reason.to_string()])
            .collect()
    }
}

/// Handle `folio check`.
pub async fn handle(args: &CheckArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = ctx
        .builder
        .build()
        .await
        .context("failed to build project index")?;

    for entry in &report.skipped {
        tracing::info!(slug = %entry.slug, reason = %entry.reason, "entry skipped");
    }

    let response = CheckResponse {
        indexed: report.index.entry_count(),
        skipped: report.skipped,
    };
    output(&response, flags)?;

    if args.strict && !response.skipped.is_empty() {
        anyhow::bail!(
            "{} content file(s) were skipped; fix their frontmatter or drop --strict",
            response.skipped.len()
        );
    }
    Ok(())
}

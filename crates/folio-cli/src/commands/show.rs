use anyhow::Context;
use folio_core::entry::ProjectDocument;
use folio_core::enums::Status;
use folio_core::errors::CoreError;
use folio_index::Lookup;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::context::AppContext;
use crate::output::{Tabular, output};

#[derive(Debug, Serialize)]
struct ShowResponse {
    href: String,
    #[serde(flatten)]
    document: ProjectDocument,
}

impl Tabular for ShowResponse {
    fn headers(&self) -> Vec<&'static str> {
        vec!["field", "value"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let entry = &self.document.entry;
        let optional = |value: Option<&str>| value.unwrap_or("-").to_string();
        let links = entry.links.as_ref();
        vec![
            vec!["title".into(), entry.title.clone()],
            vec!["venue".into(), entry.venue.to_string()],
            vec!["year".into(), entry.year.to_string()],
            vec!["status".into(), optional(entry.status.map(Status::label))],
            vec!["track".into(), optional(entry.track.as_deref())],
            vec!["summary".into(), entry.one_line.clone()],
            vec![
                "keywords".into(),
                entry.keywords.as_deref().unwrap_or_default().join(", "),
            ],
            vec!["paper".into(), optional(links.and_then(|l| l.paper.as_deref()))],
            vec!["code".into(), optional(links.and_then(|l| l.code.as_deref()))],
            vec!["slides".into(), optional(links.and_then(|l| l.slides.as_deref()))],
            vec!["href".into(), self.href.clone()],
        ]
    }
}

/// Handle `folio show <slug>`.
pub async fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let lookup = ctx
        .builder
        .lookup(&args.slug)
        .await
        .with_context(|| format!("failed to look up '{}'", args.slug))?;
    let slug = args.slug.clone();
    let document = match lookup {
        Lookup::Found(document) => document,
        Lookup::Skipped(reason) => return Err(CoreError::NotIndexed { slug, reason }.into()),
        Lookup::Missing => return Err(CoreError::NotFound { slug }.into()),
    };

    let response = ShowResponse {
        href: document.entry.href(&ctx.config.site.base_url),
        document,
    };
    output(&response, flags)
}

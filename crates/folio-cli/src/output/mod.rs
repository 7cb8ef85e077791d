use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};

pub mod table;

use table::TableOptions;

/// A response that can flatten itself into table rows.
pub trait Tabular {
    fn headers(&self) -> Vec<&'static str>;
    fn rows(&self) -> Vec<Vec<String>>;
}

/// Render a response in the requested format. `options` only affects tables.
pub fn render<T: Serialize + Tabular>(
    value: &T,
    format: OutputFormat,
    options: TableOptions,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => Ok(render_rows(value, options)),
    }
}

/// Print a response to stdout in the format the global flags ask for.
pub fn output<T: Serialize + Tabular>(value: &T, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rendered = render(value, flags.format, TableOptions::for_flags(flags))?;
    println!("{rendered}");
    Ok(())
}

fn render_rows<T: Tabular>(value: &T, options: TableOptions) -> String {
    let rows = value.rows();
    if rows.is_empty() {
        return String::from("(no rows)");
    }
    table::render_table(&value.headers(), &rows, options)
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{Tabular, render};
    use crate::cli::OutputFormat;
    use crate::output::table::TableOptions;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[derive(Serialize)]
    struct Example {
        slug: &'static str,
        year: u32,
    }

    impl Tabular for Example {
        fn headers(&self) -> Vec<&'static str> {
            vec!["slug", "year"]
        }

        fn rows(&self) -> Vec<Vec<String>> {
            vec![vec![self.slug.to_string(), self.year.to_string()]]
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&Example { slug: "x", year: 2024 }, OutputFormat::Json, PLAIN)
            .expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["slug"], "x");
        assert_eq!(parsed["year"], 2024);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&Example { slug: "x", year: 2024 }, OutputFormat::Raw, PLAIN)
            .expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_has_headers() {
        let out = render(&Example { slug: "x", year: 2024 }, OutputFormat::Table, PLAIN)
            .expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("slug")));
        assert!(out.contains("2024"));
    }
}

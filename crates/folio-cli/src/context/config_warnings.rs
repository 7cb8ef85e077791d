/// Emit warnings for env var keys that look like config but never reach it.
pub fn warn_unconfigured() {
    for warning in collect_env_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

const SECTIONS: [&str; 2] = ["CONTENT", "SITE"];

fn collect_env_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut keys = env
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with("FOLIO_"))
        .collect::<Vec<_>>();
    keys.sort();

    let mut warnings = Vec::new();
    for key in keys {
        for section in SECTIONS {
            let single = format!("FOLIO_{section}_");
            let double = format!("FOLIO_{section}__");
            if key.starts_with(&single) && !key.starts_with(&double) {
                let field = &key[single.len()..];
                warnings.push(format!(
                    "{key} is ignored. Use double underscores (example: {double}{field})."
                ));
            }
        }
    }
    warnings
}

use config::Map;

/// Parses `KEY=value` lines of a `.env` file.
///
/// Blank lines, `#` comments and lines without `=` are skipped. Keys and values
/// are trimmed and one layer of matching quotes is removed from the value. The
/// first occurrence of a key wins.
#[must_use]
pub fn parse_env_file(raw: &str) -> Map<String, String> {
    let mut vars = Map::new();

    for line in raw.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        vars.entry(key.to_owned()).or_insert_with(|| unquote(value.trim()).to_owned());
    }

    vars
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value.strip_prefix(quote).and_then(|v| v.strip_suffix(quote)) {
            return inner;
        }
    }
    value
}

use std::sync::LazyLock;

use regex::Regex;

static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^```[A-Za-z0-9]*\s*\n?(.*?)\n?\s*```$").expect("fence regex"));

static TRAILING_COMMA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*([}\]])").expect("trailing comma regex"));

/// Normalizes a raw model reply into parseable JSON text.
///
/// The contract is deliberately narrow: trim whitespace, strip one outer
/// triple-backtick fence (with optional language tag), and drop trailing
/// commas immediately before a closing brace or bracket. Nothing else is
/// repaired.
pub fn clean_model_reply(raw: &str) -> String {
    let trimmed = raw.trim();

    let unfenced = match FENCE_RE.captures(trimmed).and_then(|caps| caps.get(1)) {
        Some(inner) => inner.as_str().trim(),
        None => trimmed,
    };

    TRAILING_COMMA_RE.replace_all(unfenced, "$1").into_owned()
}

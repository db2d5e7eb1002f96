use regex::Regex;
use std::sync::OnceLock;

static SCRIPT_RE: OnceLock<Regex> = OnceLock::new();
static TAG_RE: OnceLock<Regex> = OnceLock::new();

fn script_re() -> &'static Regex {
    SCRIPT_RE.get_or_init(|| Regex::new(r"(?is)<script\b.*?</script\s*>").unwrap())
}

fn tag_re() -> &'static Regex {
    TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

/// Strip script blocks and any other tag-like markup, then trim.
///
/// Script blocks go first so their bodies are dropped along with the tags.
/// After the bare-tag pass no `<` is followed by a `>`, so a second call
/// finds nothing to remove.
pub fn sanitize(text: &str) -> String {
    let without_scripts = script_re().replace_all(text, "");
    let without_tags = tag_re().replace_all(&without_scripts, "");
    without_tags.trim().to_string()
}

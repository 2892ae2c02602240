//! Markup stripping for catalog text.
//!
//! Product content and excerpts arrive from the catalog as HTML. The search
//! engine should only analyze the text, so tags are removed and whitespace is
//! collapsed before a document is built.

use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_BLOCKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("valid regex"));
static STYLE_BLOCKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("valid regex"));
static TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Strip HTML markup from catalog text.
///
/// `script` and `style` elements are removed together with their contents;
/// all other tags are removed leaving their text. Whitespace runs collapse to
/// a single space and the result is trimmed.
pub fn strip_tags(input: &str) -> String {
    let no_scripts = SCRIPT_BLOCKS.replace_all(input, "");
    let no_styles = STYLE_BLOCKS.replace_all(&no_scripts, "");
    let no_tags = TAGS.replace_all(&no_styles, "");
    WHITESPACE.replace_all(&no_tags, " ").trim().to_string()
}

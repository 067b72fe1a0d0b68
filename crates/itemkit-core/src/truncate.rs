//! Truncator — strip markup and shorten text without breaking words.
//!
//! Lengths are byte lengths of the stripped text. The result may run past
//! the limit: the word that crosses it is kept whole.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

/// Limit used by [`truncate_default`].
pub const DEFAULT_LIMIT: usize = 160;

/// Appended whenever text goes through the word loop.
pub const ELLIPSIS: &str = "...";

/// Comments, then tags. Any `<` not followed by whitespace opens a tag
/// (`<p>`, `</p>`, `<!DOCTYPE>`, `<3`, a trailing `<`). Quoted attribute
/// values may contain `>`. An unterminated comment or tag runs to the end of
/// the text.
static MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)<!--.*?(?:-->|\z)|<(?:>|\z|[^\s>](?:"[^"]*"|'[^']*'|[^"'>]|["'])*(?:>|\z))"#,
    )
    .expect("markup pattern is valid")
});

/// Remove markup, keeping the text between tags, the way PHP's `strip_tags`
/// does: entities are left alone, a `<` followed by whitespace (`a < b`) is
/// kept, and any other `<` starts a tag, so `5 <3 hearts` strips to `5 `.
pub fn strip_tags(text: &str) -> Cow<'_, str> {
    MARKUP.replace_all(text, "")
}

/// [`truncate`] with [`DEFAULT_LIMIT`].
pub fn truncate_default(text: &str) -> String {
    truncate(text, DEFAULT_LIMIT)
}

/// Strip markup from `text` and cut it down to roughly `limit` bytes on a
/// word boundary, appending [`ELLIPSIS`].
///
/// Text strictly shorter than `limit` comes back unchanged. Text of exactly
/// `limit` bytes still gets the ellipsis. Words are split on single spaces,
/// so runs of spaces survive as empty words.
pub fn truncate(text: &str, limit: usize) -> String {
    let stripped = strip_tags(text);
    if stripped.len() < limit {
        return stripped.into_owned();
    }

    let mut counter = 0;
    let mut kept = Vec::new();
    for word in stripped.split(' ') {
        if counter >= limit {
            break;
        }
        kept.push(word);
        // +1 for the space that follows the word
        counter += word.len() + 1;
    }

    trace!(limit, input_len = stripped.len(), words = kept.len(), "truncated text");
    let mut out = kept.join(" ");
    out.push_str(ELLIPSIS);
    out
}

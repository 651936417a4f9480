//! Closing-tag completion.
//!
//! A shallow pass: every opening tag that is not self-closing gets a
//! `</name>` unless one already follows the text run after it. Nesting is
//! not tracked, each opener is looked at on its own.

use std::sync::LazyLock;

use regex::Regex;

/// Opening, closing or self-closing tag.
/// Group 1: closing slash, group 2: name, group 3: self-closing slash
static COMPLETION_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<\s*(/)?\s*(\w+)(?:\s[^>]*?)?(\s*/)?\s*>").expect("valid regex")
});

/// Insert missing closing tags.
///
/// The closer goes at the end of the plain text that follows the opener,
/// i.e. before the next `<` or at the end of the text. Running the result
/// through again changes nothing.
pub fn auto_complete(text: &str) -> String {
    let mut insertions: Vec<(usize, String)> = Vec::new();

    for caps in COMPLETION_TAG_REGEX.captures_iter(text) {
        let (Some(tag), Some(name)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        let is_closing = caps.get(1).is_some();
        let is_self_closing = caps.get(3).is_some();
        if is_closing || is_self_closing {
            continue;
        }

        let run_end = text[tag.end()..]
            .find('<')
            .map_or(text.len(), |i| tag.end() + i);
        let closer = format!("</{}>", name.as_str());
        if !starts_with_ignore_case(&text[run_end..], &closer) {
            insertions.push((run_end, closer));
        }
    }

    if insertions.is_empty() {
        return text.to_string();
    }

    let extra: usize = insertions.iter().map(|(_, closer)| closer.len()).sum();
    let mut result = String::with_capacity(text.len() + extra);
    let mut last = 0;
    for (pos, closer) in insertions {
        result.push_str(&text[last..pos]);
        result.push_str(&closer);
        last = pos;
    }
    result.push_str(&text[last..]);
    result
}

fn starts_with_ignore_case(haystack: &str, prefix: &str) -> bool {
    let mut chars = haystack.chars();
    prefix.chars().all(|p| {
        chars
            .next()
            .is_some_and(|h| h == p || h.to_lowercase().eq(p.to_lowercase()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closes_trailing_text() {
        assert_eq!(auto_complete("<p>hello"), "<p>hello</p>");
    }

    #[test]
    fn test_self_closing_untouched() {
        assert_eq!(auto_complete("<br/>"), "<br/>");
        assert_eq!(auto_complete("<img src=\"a\" />"), "<img src=\"a\" />");
    }

    #[test]
    fn test_existing_closer_case_insensitive() {
        assert_eq!(auto_complete("<B>x</b>"), "<B>x</b>");
        assert_eq!(auto_complete("<i>  </I>"), "<i>  </I>");
    }

    #[test]
    fn test_adjacent_openers() {
        assert_eq!(auto_complete("<a><b>"), "<a></a><b></b>");
    }

    #[test]
    fn test_opener_with_attributes() {
        assert_eq!(
            auto_complete("<font color=\"red\">hot"),
            "<font color=\"red\">hot</font>"
        );
    }

    #[test]
    fn test_closer_inserted_before_next_tag() {
        assert_eq!(auto_complete("<a>x</b>"), "<a>x</a></b>");
    }

    #[test]
    fn test_empty_and_plain() {
        assert_eq!(auto_complete(""), "");
        assert_eq!(auto_complete("no tags here"), "no tags here");
        assert_eq!(auto_complete("1 < 2"), "1 < 2");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "<p>hello",
            "<a><b>",
            "<a>x<b>y",
            "<a>1 < 2",
            "<ul>\n<li>one\n<li>two\n</ul>",
            "<hk>ctrl</hk> <br/> <i>",
            "<x></x>",
        ];
        for input in inputs {
            let once = auto_complete(input);
            assert_eq!(auto_complete(&once), once, "input {:?}", input);
        }
    }
}

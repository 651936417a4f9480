//! Closing-tag completion tests

mod common;

use common::MARKUP_CORPUS;
use vtmledit::syntax::auto_complete;

#[test]
fn test_completes_open_paragraph() {
    assert_eq!(auto_complete("<p>hello"), "<p>hello</p>");
}

#[test]
fn test_self_closing_unchanged() {
    assert_eq!(auto_complete("<br/>"), "<br/>");
    assert_eq!(auto_complete("<hotkey name=\"Jump\" />"), "<hotkey name=\"Jump\" />");
}

#[test]
fn test_closed_tag_unchanged() {
    assert_eq!(auto_complete("<b>bold</b> rest"), "<b>bold</b> rest");
    assert_eq!(auto_complete("<B>x</b>"), "<B>x</b>");
}

#[test]
fn test_each_opener_completed_independently() {
    assert_eq!(auto_complete("<a><b>"), "<a></a><b></b>");
    assert_eq!(
        auto_complete("<p>one\n<p>two"),
        "<p>one\n</p><p>two</p>"
    );
}

#[test]
fn test_attributes_do_not_leak_into_closer() {
    assert_eq!(
        auto_complete(r#"<font color="red">warning"#),
        r#"<font color="red">warning</font>"#
    );
}

#[test]
fn test_plain_text_unchanged() {
    assert_eq!(auto_complete(""), "");
    assert_eq!(auto_complete("no tags, 1 < 2"), "no tags, 1 < 2");
}

#[test]
fn test_completion_is_idempotent() {
    for text in MARKUP_CORPUS {
        let once = auto_complete(text);
        assert_eq!(auto_complete(&once), once, "{:?}", text);
    }
}

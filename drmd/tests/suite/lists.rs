use super::super::test_drmd_html;

#[test]
fn every_bullet_marker() {
    let original = "- a\n+ b\n* c\no d\n\u{2022} e\n";
    let expected = "<ul>\n<li>a<li>b<li>c<li>d<li>e</ul>\n";

    test_drmd_html(original, expected);
}

#[test]
fn bullet_needs_a_space() {
    test_drmd_html("-foo\n", "<p>-foo");
    test_drmd_html("only this\n", "<p>only this");
    test_drmd_html("\u{2022}x\n", "<p>\u{2022}x");
}

#[test]
fn unicode_bullet_at_end_of_input() {
    test_drmd_html("\u{2022}", "<p>\u{2022}");
    test_drmd_html("\u{2022} ", "<ul>\n<li></ul>\n");
}

#[test]
fn numbered_list() {
    let original = "10. ten\n3. three\n";
    let expected = "<ol>\n<li>ten<li>three</ol>\n";

    test_drmd_html(original, expected);
}

#[test]
fn number_without_dot_is_prose() {
    test_drmd_html("12 monkeys\n", "<p>12 monkeys");
}

#[test]
fn empty_items() {
    test_drmd_html("- \n", "<ul>\n<li></ul>\n");
    test_drmd_html("1.\n", "<ol>\n<li></ol>\n");
}

#[test]
fn numbered_list_nested_in_bullet() {
    let original = "- a\n  1. b\n  2. c\n";
    let expected = "<ul>\n<li>a <ol>\n<li>b<li>c</ol>\n</ul>\n";

    test_drmd_html(original, expected);
}

#[test]
fn sibling_lists_of_different_kind() {
    let original = "- a\n1. b\n";
    let expected = "<ul>\n<li>a</ul>\n<ol>\n<li>b</ol>\n";

    test_drmd_html(original, expected);
}

#[test]
fn return_to_outer_level() {
    let original = "- a\n  - b\n- c\n";
    let expected = "<ul>\n<li>a <ul>\n<li>b</ul>\n<li>c</ul>\n";

    test_drmd_html(original, expected);
}

#[test]
fn blank_line_ends_list() {
    let original = "- a\n\n- b\n";
    let expected = "<ul>\n<li>a</ul>\n<ul>\n<li>b</ul>\n";

    test_drmd_html(original, expected);
}

#[test]
fn blank_line_stops_nesting() {
    // Without the blank line `  - b` would nest inside `a`.
    let original = "- a\n\n  - b\n";
    let expected = "<ul>\n<li>a</ul>\n<ul>\n<li>b</ul>\n";

    test_drmd_html(original, expected);
}

#[test]
fn continuation_lines() {
    test_drmd_html("- a\n\tb\n", "<ul>\n<li>a b</ul>\n");
    test_drmd_html("- a\n    b\n    c\n", "<ul>\n<li>a b c</ul>\n");
}

#[test]
fn continuation_of_nested_item() {
    let original = "- a\n  - b\n    more\n";
    let expected = "<ul>\n<li>a <ul>\n<li>b more</ul>\n</ul>\n";

    test_drmd_html(original, expected);
}

#[test]
fn indented_document() {
    // The first line sets the indentation of plain prose.
    let original = "  intro\n  - a\n  after\n";
    let expected = "<p>intro<ul>\n<li>a</ul>\n<p>after";

    test_drmd_html(original, expected);
}

#[test]
fn list_after_paragraph() {
    let original = "text\n- a\n";
    let expected = "<p>text<ul>\n<li>a</ul>\n";

    test_drmd_html(original, expected);
}

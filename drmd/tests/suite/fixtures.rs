// Reference conversions every release is checked against.

use super::super::test_drmd_html;

#[test]
fn fixture_1() {
    let original = ">a\nb\n";
    let expected = "<blockquote>\na\nb</blockquote>\n";

    test_drmd_html(original, expected);
}

#[test]
fn fixture_2() {
    let original = "- foo\nbar\n";
    let expected = "<ul>\n<li>foo</ul>\n<p>bar";

    test_drmd_html(original, expected);
}

#[test]
fn fixture_3() {
    let original = "- foo\n";
    let expected = "<ul>\n<li>foo</ul>\n";

    test_drmd_html(original, expected);
}

#[test]
fn fixture_4() {
    let original = "- foo\n  bar\n";
    let expected = "<ul>\n<li>foo bar</ul>\n";

    test_drmd_html(original, expected);
}

#[test]
fn fixture_5() {
    let original = "- foo\n  bar\n - baz\n";
    let expected = "<ul>\n<li>foo bar <ul>\n<li>baz</ul>\n</ul>\n";

    test_drmd_html(original, expected);
}

#[test]
fn fixture_6() {
    let original = "> foo\n> bar\n> baz\n";
    let expected = "<blockquote>\nfoo\nbar\nbaz</blockquote>\n";

    test_drmd_html(original, expected);
}

#[test]
fn fixture_7() {
    let original = "```\n> foo\n> bar\n> baz\n```\n";
    let expected = "<pre>&gt; foo\n&gt; bar\n&gt; baz\n</pre>\n";

    test_drmd_html(original, expected);
}

#[test]
fn fixture_8() {
    let original = "|hello|world\n|foo | bar\n";
    let expected = "<table>\n<thead>\n<tr>\n<th>hello<th>world\n<tbody>\n<tr><td>foo<td>bar</table>\n";

    test_drmd_html(original, expected);
}

#[test]
fn fixture_9() {
    let original = "- foo\n#hello\n- bar\n";
    let expected = "<ul>\n<li>foo</ul>\n<h1>hello</h1>\n<ul>\n<li>bar</ul>\n";

    test_drmd_html(original, expected);
}

#[test]
fn fixture_10() {
    let original = "|foo\na\n";
    let expected = "<table>\n<thead>\n<tr>\n<th>foo\n<tbody>\n</table>\n<p>a";

    test_drmd_html(original, expected);
}

#[test]
fn fixture_11() {
    let original = "  - a\n- b\n";
    let expected = "<ul>\n<li>a</ul>\n<ul>\n<li>b</ul>\n";

    test_drmd_html(original, expected);
}

#[test]
fn fixture_12() {
    let original = "+ a\n  o b\n o c\n";
    let expected = "<ul>\n<li>a <ul>\n<li>b</ul>\n</ul>\n<ul>\n<li>c</ul>\n";

    test_drmd_html(original, expected);
}

#[test]
fn fixture_13() {
    let original = "```\n> foo\n```\n";
    let expected = "<pre>&gt; foo\n</pre>\n";

    test_drmd_html(original, expected);
}

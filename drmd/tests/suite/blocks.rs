use super::super::test_drmd_html;

#[test]
fn heading_levels() {
    test_drmd_html("#a\n", "<h1>a</h1>\n");
    test_drmd_html("### c\n", "<h3> c</h3>\n");
    test_drmd_html("#   spaced   \n", "<h1>   spaced   </h1>\n");
}

#[test]
fn heading_keeps_text_after_marker() {
    test_drmd_html("# Title\n", "<h1> Title</h1>\n");
    test_drmd_html("# Title\r\n", "<h1> Title </h1>\n");
    test_drmd_html("#\n", "<h1></h1>\n");
}

#[test]
fn heading_level_is_clamped() {
    test_drmd_html("############ x\n", "<h9> x</h9>\n");
}

#[test]
fn heading_ends_paragraph() {
    let original = "para\n# head\nmore\n";
    let expected = "<p>para<h1> head</h1>\n<p>more";

    test_drmd_html(original, expected);
}

#[test]
fn paragraph_lines() {
    test_drmd_html("a\nb\nc\n", "<p>a\nb\nc");
    test_drmd_html("a\n\nb\n", "<p>a<p>b");
}

#[test]
fn crlf_line_endings() {
    test_drmd_html("a\r\nb\r\n", "<p>a\nb");
    test_drmd_html("```\nx\r\n```\r\n", "<pre>x \n</pre>\n");
}

#[test]
fn opening_fence_is_exactly_three_backticks() {
    test_drmd_html("```  \nx\n", "<p>```\nx");
    test_drmd_html("```\r\nx\r\n```\r\n", "<p>```\nx\n```");
}

#[test]
fn closing_fence_allows_trailing_whitespace() {
    test_drmd_html("```\nx\n```  \ny\n", "<pre>x\n</pre>\n<p>y");
}

#[test]
fn nul_ends_a_line() {
    test_drmd_html("a\0b", "<p>a\nb");
}

#[test]
fn table_with_trailing_pipes() {
    let original = "|a|b|\n|c|d|\n";
    let expected =
        "<table>\n<thead>\n<tr>\n<th>a<th>b<th>\n<tbody>\n<tr><td>c<td>d<td></table>\n";

    test_drmd_html(original, expected);
}

#[test]
fn blank_line_splits_tables() {
    let original = "|a\n\n|b\n";
    let expected = "<table>\n<thead>\n<tr>\n<th>a\n<tbody>\n</table>\n\
                    <table>\n<thead>\n<tr>\n<th>b\n<tbody>\n</table>\n";

    test_drmd_html(original, expected);
}

#[test]
fn table_after_paragraph() {
    let original = "text\n|a\n";
    let expected = "<p>text<table>\n<thead>\n<tr>\n<th>a\n<tbody>\n</table>\n";

    test_drmd_html(original, expected);
}

#[test]
fn quote_after_paragraph() {
    test_drmd_html("a\n>b\n", "<p>a<blockquote>\nb</blockquote>\n");
}

#[test]
fn blank_line_ends_quote() {
    test_drmd_html(">a\n\nb\n", "<blockquote>\na</blockquote>\n<p>b");
}

#[test]
fn indented_quote_keeps_marker() {
    // Only the first byte of the line is removed.
    test_drmd_html(" > a\n", "<blockquote>\n&gt; a</blockquote>\n");
}

#[test]
fn code_block_keeps_indentation() {
    test_drmd_html("```\n  x\n\n```\n", "<pre>  x\n\n</pre>\n");
    test_drmd_html("  ```\n  code\n  ```\n", "<pre>  code\n</pre>\n");
}

#[test]
fn empty_and_unterminated_code_blocks() {
    test_drmd_html("```\n```\n", "<pre></pre>\n");
    test_drmd_html("```\na", "<pre>a\n</pre>\n");
}

#[test]
fn fence_needs_exactly_three_backticks() {
    test_drmd_html("````\n", "<p>````");
    test_drmd_html("```rust\n", "<p>```rust");
}

#[test]
fn code_block_closes_list() {
    let original = "- a\n```\nx\n```\n- b\n";
    let expected = "<ul>\n<li>a</ul>\n<pre>x\n</pre>\n<ul>\n<li>b</ul>\n";

    test_drmd_html(original, expected);
}

#[test]
fn mixed_document() {
    let original = r##"# Title

Some *prose* -- with a dash.

- one
- two
  1. nested

|k|v
|x|1

> quoted
"##;
    let expected = "<h1> Title</h1>\n\
                    <p>Some *prose* &ndash; with a dash.\
                    <ul>\n<li>one<li>two <ol>\n<li>nested</ol>\n</ul>\n\
                    <table>\n<thead>\n<tr>\n<th>k<th>v\n<tbody>\n<tr><td>x<td>1</table>\n\
                    <blockquote>\nquoted</blockquote>\n";

    test_drmd_html(original, expected);
}

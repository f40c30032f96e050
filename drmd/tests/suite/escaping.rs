use super::super::test_drmd_html;

#[test]
fn dashes() {
    test_drmd_html("a -- b --- c - d\n", "<p>a &ndash; b &mdash; c - d");
}

#[test]
fn passthrough_tags() {
    let original = "<b>bold</b> <i>it</i> <u>u</u> <s>s</s> <tt>tt</tt> <code>x</code><br><hr>\n";

    test_drmd_html(original, &format!("<p>{}", original.trim_end()));
}

#[test]
fn other_tags_are_escaped() {
    test_drmd_html(
        "<script>alert(1)</script>\n",
        "<p>&lt;script&gt;alert(1)&lt;/script&gt;",
    );
}

#[test]
fn entities() {
    test_drmd_html("&lt;p&gt; & co\n", "<p>&lt;p&gt; &amp; co");
}

#[test]
fn escaping_in_every_block() {
    test_drmd_html("# a & b\n", "<h1> a &amp; b</h1>\n");
    test_drmd_html("- a & b\n", "<ul>\n<li>a &amp; b</ul>\n");
    test_drmd_html("|a & b\n", "<table>\n<thead>\n<tr>\n<th>a &amp; b\n<tbody>\n</table>\n");
    test_drmd_html(">a & b\n", "<blockquote>\na &amp; b</blockquote>\n");
}

#[test]
fn control_characters() {
    test_drmd_html("a\x0cb\x01c\n", "<p>a bc");
}

#[test]
fn long_lines_take_the_bulk_path() {
    let line = "0123456789abcdef".repeat(8);
    test_drmd_html(&format!("{}--x\n", line), &format!("<p>{}&ndash;x", line));
}

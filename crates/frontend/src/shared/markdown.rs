//! Minimal markdown renderer for catalog descriptions.
//!
//! Escapes the source first and only then rebuilds markup, so the produced
//! HTML is safe to inject via `inner_html`. Covers the subset used in
//! property descriptions: headings, paragraphs, bold/italic, inline code,
//! fenced code blocks, lists and links.

/// Escape HTML-significant characters
pub fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_safe_link_target(url: &str) -> bool {
    let lower = url.trim().to_lowercase();
    lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("mailto:")
        || lower.starts_with('/')
        || lower.starts_with('#')
}

/// Closing paren of the link target, honoring nested parens in the URL
fn find_link_end(text: &str, from: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text[from..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return Some(from + i);
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    None
}

/// `[text](url)` -> anchor. Unsafe targets (anything outside the scheme
/// whitelist) are dropped and only the link text is kept.
fn render_links(text: &str) -> String {
    let mut out = String::new();
    let mut rest = text;
    loop {
        let Some(open) = rest.find('[') else { break };
        let Some(middle) = rest[open..].find("](") else { break };
        let middle = open + middle;
        let Some(end) = find_link_end(rest, middle + 2) else { break };

        let link_text = &rest[open + 1..middle];
        let url = &rest[middle + 2..end];

        out.push_str(&rest[..open]);
        if is_safe_link_target(url) {
            out.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                url.trim(),
                link_text
            ));
        } else {
            out.push_str(link_text);
        }
        rest = &rest[end + 1..];
    }
    out.push_str(rest);
    out
}

/// Wrap the odd segments of `text` split by `separator` into `tag`.
/// Unbalanced separators are left as-is.
fn render_paired(text: &str, separator: &str, tag: &str) -> String {
    let segments: Vec<&str> = text.split(separator).collect();
    if segments.len() < 3 || segments.len() % 2 == 0 {
        return text.to_string();
    }
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i % 2 == 1 {
            out.push_str(&format!("<{tag}>{segment}</{tag}>"));
        } else {
            out.push_str(segment);
        }
    }
    out
}

/// Inline markup over already-escaped text
fn render_inline(escaped: &str) -> String {
    let mut result = render_paired(escaped, "`", "code");
    result = render_links(&result);
    result = render_paired(&result, "**", "strong");
    result = render_paired(&result, "*", "em");
    result
}

enum ListKind {
    Unordered,
    Ordered,
}

fn flush_paragraph(html: &mut String, paragraph: &mut Vec<String>) {
    if !paragraph.is_empty() {
        html.push_str(&format!("<p>{}</p>", paragraph.join(" ")));
        paragraph.clear();
    }
}

fn close_list(html: &mut String, list: &mut Option<ListKind>) {
    match list.take() {
        Some(ListKind::Unordered) => html.push_str("</ul>"),
        Some(ListKind::Ordered) => html.push_str("</ol>"),
        None => {}
    }
}

fn heading_level(line: &str) -> Option<(usize, &str)> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if (1..=6).contains(&hashes) {
        if let Some(rest) = line[hashes..].strip_prefix(' ') {
            return Some((hashes, rest));
        }
    }
    None
}

fn ordered_item(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}

/// Render markdown source into an HTML fragment
pub fn markdown_to_html(source: &str) -> String {
    let mut html = String::new();
    let mut paragraph: Vec<String> = Vec::new();
    let mut list: Option<ListKind> = None;
    let mut code_lines: Option<Vec<String>> = None;

    for raw_line in source.lines() {
        let line = raw_line.trim_end();

        // Fenced code blocks swallow everything until the closing fence
        if line.trim_start().starts_with("```") {
            match code_lines.take() {
                Some(lines) => {
                    html.push_str(&format!("<pre><code>{}</code></pre>", lines.join("\n")));
                }
                None => {
                    flush_paragraph(&mut html, &mut paragraph);
                    close_list(&mut html, &mut list);
                    code_lines = Some(Vec::new());
                }
            }
            continue;
        }
        if let Some(lines) = code_lines.as_mut() {
            lines.push(html_escape(raw_line));
            continue;
        }

        if line.trim().is_empty() {
            flush_paragraph(&mut html, &mut paragraph);
            close_list(&mut html, &mut list);
            continue;
        }

        if let Some((level, rest)) = heading_level(line) {
            flush_paragraph(&mut html, &mut paragraph);
            close_list(&mut html, &mut list);
            html.push_str(&format!(
                "<h{level}>{}</h{level}>",
                render_inline(&html_escape(rest))
            ));
            continue;
        }

        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
            flush_paragraph(&mut html, &mut paragraph);
            if !matches!(list, Some(ListKind::Unordered)) {
                close_list(&mut html, &mut list);
                html.push_str("<ul>");
                list = Some(ListKind::Unordered);
            }
            html.push_str(&format!("<li>{}</li>", render_inline(&html_escape(rest))));
            continue;
        }
        if let Some(rest) = ordered_item(trimmed) {
            flush_paragraph(&mut html, &mut paragraph);
            if !matches!(list, Some(ListKind::Ordered)) {
                close_list(&mut html, &mut list);
                html.push_str("<ol>");
                list = Some(ListKind::Ordered);
            }
            html.push_str(&format!("<li>{}</li>", render_inline(&html_escape(rest))));
            continue;
        }

        close_list(&mut html, &mut list);
        paragraph.push(render_inline(&html_escape(line)));
    }

    // Unterminated fence renders as a code block anyway
    if let Some(lines) = code_lines.take() {
        html.push_str(&format!("<pre><code>{}</code></pre>", lines.join("\n")));
    }
    flush_paragraph(&mut html, &mut paragraph);
    close_list(&mut html, &mut list);

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paragraph() {
        assert_eq!(markdown_to_html("hello world"), "<p>hello world</p>");
    }

    #[test]
    fn test_empty_source_renders_nothing() {
        assert_eq!(markdown_to_html(""), "");
        assert_eq!(markdown_to_html("   \n\n"), "");
    }

    #[test]
    fn test_paragraph_lines_join_and_blank_lines_split() {
        assert_eq!(
            markdown_to_html("first\nsecond\n\nthird"),
            "<p>first second</p><p>third</p>"
        );
    }

    #[test]
    fn test_headings() {
        assert_eq!(markdown_to_html("# Title"), "<h1>Title</h1>");
        assert_eq!(markdown_to_html("### Sub"), "<h3>Sub</h3>");
        // Not a heading without the space
        assert_eq!(markdown_to_html("#Title"), "<p>#Title</p>");
    }

    #[test]
    fn test_inline_markup() {
        assert_eq!(
            markdown_to_html("a **bold** and *em* and `code` word"),
            "<p>a <strong>bold</strong> and <em>em</em> and <code>code</code> word</p>"
        );
    }

    #[test]
    fn test_unbalanced_markers_stay_literal() {
        assert_eq!(markdown_to_html("2 * 3"), "<p>2 * 3</p>");
    }

    #[test]
    fn test_lists() {
        assert_eq!(
            markdown_to_html("- one\n- two"),
            "<ul><li>one</li><li>two</li></ul>"
        );
        assert_eq!(
            markdown_to_html("1. one\n2. two"),
            "<ol><li>one</li><li>two</li></ol>"
        );
    }

    #[test]
    fn test_fenced_code_block_is_escaped_verbatim() {
        assert_eq!(
            markdown_to_html("```\nlet x = a < b;\n```"),
            "<pre><code>let x = a &lt; b;</code></pre>"
        );
    }

    #[test]
    fn test_links() {
        assert_eq!(
            markdown_to_html("see [docs](https://example.com/docs)"),
            "<p>see <a href=\"https://example.com/docs\" target=\"_blank\" rel=\"noopener noreferrer\">docs</a></p>"
        );
    }

    #[test]
    fn test_unsafe_link_target_is_dropped() {
        assert_eq!(
            markdown_to_html("[click](javascript:alert(1))"),
            "<p>click</p>"
        );
    }

    #[test]
    fn test_html_in_source_is_escaped() {
        assert_eq!(
            markdown_to_html("<script>alert(1)</script>"),
            "<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>"
        );
    }
}

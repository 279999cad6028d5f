use scraper::{ElementRef, Html, Selector};

/// Subtrees whose text never belongs in extracted content.
const NON_CONTENT_TAGS: &[&str] = &["script", "style"];

/// Reduce an HTML document to its visible body text.
///
/// Text is collected in document order from the `body` subtree (the whole
/// document if no body exists), skipping script and style subtrees
/// entirely, then whitespace runs are collapsed to single spaces. An empty
/// result means nothing was extracted; callers surface that as a warning.
pub fn normalize(raw_html: &str) -> String {
    let document = Html::parse_document(raw_html);
    let body_selector = Selector::parse("body").unwrap();

    let root = document
        .select(&body_selector)
        .next()
        .unwrap_or_else(|| document.root_element());

    let mut raw = String::new();
    collect_text(root, &mut raw);

    collapse_whitespace(&raw)
}

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            // Separator between nodes; collapsed away afterwards
            out.push('\n');
        } else if let Some(child_element) = ElementRef::wrap(child)
            && !NON_CONTENT_TAGS.contains(&child_element.value().name())
        {
            collect_text(child_element, out);
        }
    }
}

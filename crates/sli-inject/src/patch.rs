/// Splices the header fragment before the first `</head>` and the footer
/// fragment before the first `</body>`. A document missing either tag is
/// left untouched for that half; duplicate closing tags only receive the
/// injection at the first one in raw text order.
///
/// With `debug` set, both fragments are neutralized first so the markup is
/// inspectable in the page source without executing.
pub fn patch_document(content: String, header: &str, footer: &str, debug: bool) -> String {
    let (header, footer) = if debug {
        (neutralize_scripts(header), neutralize_scripts(footer))
    } else {
        (header.to_string(), footer.to_string())
    };

    let content = splice_before(content, "</head>", &header);
    splice_before(content, "</body>", &footer)
}

/// Turns every script tag in `fragment` into comment markup: `<script`
/// becomes `<!--script` and `</script>` becomes `/script-->`, each token
/// replaced independently.
pub fn neutralize_scripts(fragment: &str) -> String {
    fragment
        .replace("<script", "<!--script")
        .replace("</script>", "/script-->")
}

fn splice_before(content: String, tag: &str, fragment: &str) -> String {
    if fragment.is_empty() {
        return content;
    }

    if let Some(pos) = content.find(tag) {
        let mut result = String::with_capacity(content.len() + fragment.len());
        result.push_str(&content[..pos]);
        result.push_str(fragment);
        result.push_str(&content[pos..]);
        result
    } else {
        content
    }
}

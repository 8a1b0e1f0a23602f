//! Plain-text view of rendered markup.

use super::html::unescape;

/// Returns the decoded, trimmed, non-empty text runs of `html` in document
/// order. `<style>` and `<script>` bodies are skipped.
///
/// Works on markup produced by [`HtmlWriter`](super::html::HtmlWriter), where
/// a literal `<` only ever starts a tag.
pub fn extract_text(html: &str) -> Vec<String> {
    let mut runs = Vec::new();
    let mut rest = html;
    let mut skip_until: Option<&'static str> = None;

    while !rest.is_empty() {
        let Some(lt) = rest.find('<') else {
            if skip_until.is_none() {
                push_run(&mut runs, rest);
            }
            break;
        };
        if skip_until.is_none() {
            push_run(&mut runs, &rest[..lt]);
        }
        rest = &rest[lt..];
        let Some(gt) = rest.find('>') else {
            break;
        };
        let tag = rest[1..gt].trim().to_ascii_lowercase();
        rest = &rest[gt + 1..];

        match skip_until {
            Some(closing) if tag == closing => skip_until = None,
            Some(_) => {}
            None => {
                let name = tag.split_whitespace().next().unwrap_or("");
                skip_until = match name {
                    "style" => Some("/style"),
                    "script" => Some("/script"),
                    _ => None,
                };
            }
        }
    }
    runs
}

fn push_run(runs: &mut Vec<String>, raw: &str) {
    let text = unescape(raw);
    let text = text.trim();
    if !text.is_empty() {
        runs.push(text.to_string());
    }
}

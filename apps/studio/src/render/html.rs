//! Minimal HTML writer used by the templates.
//!
//! Every piece of user text goes through [`escape`] and lands in its own
//! element, so the text of a rendered region can be recovered field by field.

use std::fmt::Write;

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Reverses [`escape`]. Unknown entities are left as written.
pub fn unescape(text: &str) -> String {
    const ENTITIES: [(&str, char); 5] = [
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&#39;", '\''),
    ];
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    'outer: while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        for (entity, c) in ENTITIES {
            if let Some(after) = rest.strip_prefix(entity) {
                out.push(c);
                rest = after;
                continue 'outer;
            }
        }
        out.push('&');
        rest = &rest[1..];
    }
    out.push_str(rest);
    out
}

#[derive(Debug, Default)]
pub struct HtmlWriter {
    buf: String,
    stack: Vec<&'static str>,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `<tag class="...">`. An empty class list omits the attribute.
    pub fn open(&mut self, tag: &'static str, class: &str) -> &mut Self {
        self.open_with(tag, class, &[])
    }

    pub fn open_with(
        &mut self,
        tag: &'static str,
        class: &str,
        attrs: &[(&str, &str)],
    ) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        if !class.is_empty() {
            let _ = write!(self.buf, " class=\"{}\"", escape(class));
        }
        for (name, value) in attrs {
            let _ = write!(self.buf, " {name}=\"{}\"", escape(value));
        }
        self.buf.push('>');
        self.stack.push(tag);
        self
    }

    /// Closes the most recently opened element.
    pub fn close(&mut self) -> &mut Self {
        if let Some(tag) = self.stack.pop() {
            let _ = write!(self.buf, "</{tag}>");
        }
        self
    }

    /// Writes `<tag class="...">text</tag>` with the text escaped.
    pub fn text_el(&mut self, tag: &'static str, class: &str, text: &str) -> &mut Self {
        self.open(tag, class);
        self.buf.push_str(&escape(text));
        self.close()
    }

    /// Like [`text_el`](Self::text_el) but skips blank text entirely.
    pub fn text_el_nonblank(&mut self, tag: &'static str, class: &str, text: &str) -> &mut Self {
        if !text.trim().is_empty() {
            self.text_el(tag, class, text);
        }
        self
    }

    pub fn finish(mut self) -> String {
        while !self.stack.is_empty() {
            self.close();
        }
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_unescape_inverts_escape() {
        let text = r#"R&D <team> said "it's fine" &amp; literal"#;
        assert_eq!(unescape(&escape(text)), text);
    }

    #[test]
    fn test_unescape_leaves_unknown_entities() {
        assert_eq!(unescape("a &nbsp; b & c"), "a &nbsp; b & c");
    }

    #[test]
    fn test_writer_nests_and_autocloses() {
        let mut w = HtmlWriter::new();
        w.open("div", "outer").text_el("span", "", "a<b");
        w.open("ul", "");
        assert_eq!(
            w.finish(),
            "<div class=\"outer\"><span>a&lt;b</span><ul></ul></div>"
        );
    }

    #[test]
    fn test_text_el_nonblank_skips_whitespace() {
        let mut w = HtmlWriter::new();
        w.text_el_nonblank("p", "", "  ").text_el_nonblank("p", "", "x");
        assert_eq!(w.finish(), "<p>x</p>");
    }
}

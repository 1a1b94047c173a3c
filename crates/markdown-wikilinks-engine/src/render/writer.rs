/// Accumulates HTML output.
///
/// Renderers never escape by hand: text goes through [`HtmlWriter::write_text`]
/// and attribute values through [`HtmlWriter::write_attr`].
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends markup verbatim.
    pub fn write_raw(&mut self, html: &str) {
        self.out.push_str(html);
    }

    /// Appends text content, escaping `<`, `>` and `&`.
    pub fn write_text(&mut self, text: &str) {
        html_escape::encode_text_to_string(text, &mut self.out);
    }

    /// Appends the value of a double-quoted attribute.
    pub fn write_attr(&mut self, value: &str) {
        html_escape::encode_double_quoted_attribute_to_string(value, &mut self.out);
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn finish(self) -> String {
        self.out
    }
}

//! HTML tables in the layout of a dataframe export.

use super::{Document, Table};

/// Render a `<table>`; the first cell of each row is a row header.
pub fn render_table(table: &Table) -> String {
    let mut out = String::from("<table border=\"1\" class=\"dataframe\">\n");
    out.push_str("  <thead>\n    <tr style=\"text-align: right;\">\n");
    for header in &table.headers {
        out.push_str(&format!("      <th>{}</th>\n", escape(header)));
    }
    out.push_str("    </tr>\n  </thead>\n  <tbody>\n");
    for row in &table.rows {
        out.push_str("    <tr>\n");
        for (i, cell) in row.iter().enumerate() {
            let tag = if i == 0 { "th" } else { "td" };
            out.push_str(&format!("      <{tag}>{}</{tag}>\n", escape(cell)));
        }
        out.push_str("    </tr>\n");
    }
    out.push_str("  </tbody>\n</table>\n");
    out
}

fn escape(text: &str) -> String {
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

/// Render a full document: `<h1>` title, intro paragraph, `<h2>` sections.
pub fn render_document(doc: &Document) -> String {
    let mut out = String::new();
    if let Some(title) = &doc.title {
        out.push_str(&format!("<h1>{}</h1>\n", escape(title)));
    }
    if let Some(intro) = &doc.intro {
        out.push_str(&format!("<p>{}</p>\n", escape(intro)));
    }
    for section in &doc.sections {
        out.push_str(&format!("<h2>{}</h2>\n", escape(&section.title)));
        out.push_str(&render_table(&section.table));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Section;

    #[test]
    fn renders_header_and_rows() {
        let table = Table {
            headers: vec!["entity".into(), "support".into()],
            rows: vec![vec!["city".into(), "20".into()]],
        };
        let html = render_table(&table);
        assert!(html.starts_with("<table border=\"1\" class=\"dataframe\">"));
        assert!(html.contains("<th>entity</th>"));
        assert!(html.contains("<th>city</th>\n      <td>20</td>"));
        assert!(html.trim_end().ends_with("</table>"));
    }

    #[test]
    fn escapes_markup() {
        let table = Table {
            headers: vec!["intent".into()],
            rows: vec![vec!["<script>&".into()]],
        };
        let html = render_table(&table);
        assert!(html.contains("&lt;script&gt;&amp;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn document_sections_in_order() {
        let section = |title: &str| Section {
            title: title.into(),
            table: Table {
                headers: vec!["intent".into()],
                rows: vec![],
            },
        };
        let doc = Document {
            title: Some("NLU Cross-Validation Results".into()),
            intro: None,
            sections: vec![section("Intents"), section("Entities")],
        };
        let html = render_document(&doc);
        assert!(html.starts_with("<h1>NLU Cross-Validation Results</h1>\n<h2>Intents</h2>"));
        let intents = html.find("<h2>Intents</h2>").unwrap();
        let entities = html.find("<h2>Entities</h2>").unwrap();
        assert!(intents < entities);
    }
}

//! GitHub-flavoured Markdown pipe tables.

use super::{Document, Table};

/// Render a pipe table with columns padded to a common width.
pub fn render_table(table: &Table) -> String {
    let headers: Vec<String> = table.headers.iter().map(|h| escape(h)).collect();
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(|c| escape(c)).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count().max(3)).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers, &widths);
    let separator: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, w)| {
            // label column left-aligned, metric columns right-aligned
            if i == 0 {
                format!(":{}", "-".repeat(w - 1))
            } else {
                format!("{}:", "-".repeat(w - 1))
            }
        })
        .collect();
    push_row(&mut out, &separator, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    out.push('|');
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        let pad = width.saturating_sub(cell.chars().count());
        out.push(' ');
        if i == 0 {
            out.push_str(cell);
            out.push_str(&" ".repeat(pad));
        } else {
            out.push_str(&" ".repeat(pad));
            out.push_str(cell);
        }
        out.push_str(" |");
    }
    out.push('\n');
}

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|").replace(['\n', '\r'], " ")
}

/// Render a full document: `#` title, intro paragraph, `##` sections.
pub fn render_document(doc: &Document) -> String {
    let mut out = String::new();
    if let Some(title) = &doc.title {
        out.push_str(&format!("# {title}\n\n"));
    }
    if let Some(intro) = &doc.intro {
        out.push_str(&format!("{intro}\n\n"));
    }
    for section in &doc.sections {
        out.push_str(&format!("## {}\n\n", section.title));
        out.push_str(&render_table(&section.table));
        out.push('\n');
    }
    out
}

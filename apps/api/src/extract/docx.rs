use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent,
    TableChild, TableRowChild,
};

use super::ExtractError;

/// Raw text of a DOCX document. Every paragraph is followed by a blank line,
/// the layout browser-side extractors produce and the ATS checks expect.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = read_docx(bytes).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut text = String::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(p) => push_paragraph(&mut text, p),
            DocumentChild::Table(t) => push_table(&mut text, t),
            _ => {}
        }
    }
    Ok(text)
}

fn push_paragraph(out: &mut String, paragraph: &Paragraph) {
    push_paragraph_children(out, &paragraph.children);
    out.push_str("\n\n");
}

fn push_paragraph_children(out: &mut String, children: &[ParagraphChild]) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_paragraph_children(out, &link.children),
            _ => {}
        }
    }
}

// Tables are flattened cell by cell, so multi-column résumés keep their text.
fn push_table(out: &mut String, table: &Table) {
    for row in &table.rows {
        if let TableChild::TableRow(row) = row {
            for cell in &row.cells {
                if let TableRowChild::TableCell(cell) = cell {
                    for content in &cell.children {
                        match content {
                            TableCellContent::Paragraph(p) => push_paragraph(out, p),
                            TableCellContent::Table(t) => push_table(out, t),
                            _ => {}
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Run};
    use std::io::Cursor;

    fn build(docx: Docx) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_paragraphs_are_separated_by_blank_lines() {
        let bytes = build(
            Docx::new()
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Jane Doe")))
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Experience"))),
        );
        let text = extract_text(&bytes).unwrap();
        assert_eq!(text, "Jane Doe\n\nExperience\n\n");
    }

    #[test]
    fn test_runs_in_one_paragraph_are_joined() {
        let bytes = build(
            Docx::new().add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("Developed "))
                    .add_run(Run::new().add_text("pipelines")),
            ),
        );
        assert_eq!(extract_text(&bytes).unwrap(), "Developed pipelines\n\n");
    }
}

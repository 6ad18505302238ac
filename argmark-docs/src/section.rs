//! Content section rendering.
//!
//! Every rendered section is framed as
//! `"\n" + heading + "\n" + body + "\n"`, where an absent heading leaves an
//! empty line so the spacing between sections stays the same.

use argmark_core::config::{ContentSection, SectionContent};

use crate::markup::convert;
use crate::table::render_records;

/// Render a heading line, or `None` when there is no header.
///
/// Levels below 1 are clamped to 1.
#[must_use]
pub fn render_heading(header: Option<&str>, level: u8) -> Option<String> {
    header.map(|text| format!("{} {text}", "#".repeat(usize::from(level.max(1)))))
}

/// Render a section body.
///
/// A string is converted from markup, a list of strings is converted line
/// by line and joined with newlines, and a list of records becomes a table.
/// Any other shape renders as an empty string.
#[must_use]
pub fn render_content(content: Option<&SectionContent>) -> String {
    match content {
        Some(SectionContent::Text(text)) => convert(text),
        Some(SectionContent::Lines(lines)) => lines
            .iter()
            .map(String::as_str)
            .map(convert)
            .collect::<Vec<_>>()
            .join("\n"),
        Some(SectionContent::Records(records)) => render_records(records),
        Some(SectionContent::Other(_)) | None => String::new(),
    }
}

/// Render a content section with its heading.
#[must_use]
pub fn render_section(section: &ContentSection, default_level: u8) -> String {
    let heading = render_heading(
        section.header.as_deref(),
        section.header_level.unwrap_or(default_level),
    );
    frame(heading.as_deref(), &render_content(section.content.as_ref()))
}

/// Frame a heading and body as a standalone block.
pub(crate) fn frame(heading: Option<&str>, body: &str) -> String {
    match heading {
        Some(heading) => format!("\n{heading}\n\n{body}\n"),
        None => format!("\n\n{body}\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argmark_core::config::Record;

    #[test]
    fn test_heading_levels() {
        assert_eq!(render_heading(Some("Usage"), 3).as_deref(), Some("### Usage"));
        assert_eq!(render_heading(Some("Usage"), 0).as_deref(), Some("# Usage"));
        assert_eq!(render_heading(None, 2), None);
    }

    #[test]
    fn test_text_section() {
        let section = ContentSection::text(
            "A typical app",
            "Generates something {italic very} important.",
        );
        assert_eq!(
            render_section(&section, 1),
            "\n# A typical app\n\nGenerates something *very* important.\n"
        );
    }

    #[test]
    fn test_explicit_level_wins() {
        let section = ContentSection {
            header_level: Some(2),
            ..ContentSection::text("Markdown Generation", "text")
        };
        assert_eq!(render_section(&section, 3), "\n## Markdown Generation\n\ntext\n");
    }

    #[test]
    fn test_headless_section_keeps_empty_heading_line() {
        let section = ContentSection {
            header: None,
            header_level: None,
            content: Some(SectionContent::Text("{highlight argmark guide}".into())),
        };
        assert_eq!(render_section(&section, 1), "\n\n`argmark guide`\n");
    }

    #[test]
    fn test_lines_section() {
        let content = SectionContent::Lines(vec![
            "$ example [{bold --timeout} ms] {bold --src} file ...".into(),
            "$ example {bold --help}".into(),
        ]);
        assert_eq!(
            render_content(Some(&content)),
            "$ example [**--timeout** ms] **--src** file ...\n$ example **--help**"
        );
    }

    #[test]
    fn test_records_section() {
        let row: Record = [("Example".to_string(), "$ example".to_string())]
            .into_iter()
            .collect();
        let content = SectionContent::Records(vec![row]);
        assert_eq!(render_content(Some(&content)), "| Example |\n|-|\n| $ example |");
    }

    #[test]
    fn test_other_content_is_empty() {
        let content = SectionContent::Other(serde_json::json!([1, "two"]));
        assert_eq!(render_content(Some(&content)), "");
        assert_eq!(render_content(None), "");
    }

    #[test]
    fn test_header_only_section() {
        let section = ContentSection {
            header: Some("both".into()),
            header_level: None,
            content: None,
        };
        assert_eq!(render_section(&section, 1), "\n# both\n\n\n");
    }
}

//! Options table rendering.
//!
//! Each options section filters the option list by its group filter and
//! renders the survivors as a table. The Alias and Description columns only
//! appear when at least one surviving option has a value for them.

use argmark_core::config::{OptionDescriptor, OptionsSection, ParseOptions};

use crate::markup::convert;
use crate::section::{frame, render_heading};
use crate::table::MarkdownTable;

/// Render every options section of a guide, in order.
///
/// When `parse_options` configures no options sections a single section
/// holding every option is rendered.
#[must_use]
pub fn render_options_sections(
    options: &[OptionDescriptor],
    parse_options: &ParseOptions,
) -> Vec<String> {
    let default_level = parse_options.options_header_level();
    parse_options
        .effective_options_sections()
        .iter()
        .map(|section| render_options_section(options, section, default_level))
        .collect()
}

/// Render one options section: heading plus the filtered options table.
#[must_use]
pub fn render_options_section(
    options: &[OptionDescriptor],
    section: &OptionsSection,
    default_level: u8,
) -> String {
    let selected: Vec<&OptionDescriptor> = options
        .iter()
        .filter(|option| section.group.matches(option))
        .collect();

    let heading = render_heading(
        section.header.as_deref(),
        section.header_level.unwrap_or(default_level),
    );
    frame(heading.as_deref(), &options_table(&selected).render())
}

/// Build the options table for an already-filtered option list.
#[must_use]
pub fn options_table(options: &[&OptionDescriptor]) -> MarkdownTable {
    let any_alias = options.iter().any(|o| o.alias.is_some());
    let any_description = options.iter().any(|o| o.description.is_some());

    let mut columns = vec!["Argument"];
    if any_alias {
        columns.push("Alias");
    }
    columns.push("Type");
    if any_description {
        columns.push("Description");
    }

    let mut table = MarkdownTable::new(columns);
    for option in options {
        let mut cells = vec![format!("**{}**", option.name)];
        if any_alias {
            cells.push(
                option
                    .alias
                    .as_ref()
                    .map(|alias| format!("**{alias}**"))
                    .unwrap_or_default(),
            );
        }
        cells.push(type_cell(option));
        if any_description {
            cells.push(
                option
                    .description
                    .as_deref()
                    .map(convert)
                    .unwrap_or_default(),
            );
        }
        table.push_row(cells);
    }
    table
}

/// Type column text: the converted type label, or the lowercase type name
/// with `[]` appended for multi-value options.
#[must_use]
pub fn type_cell(option: &OptionDescriptor) -> String {
    if let Some(ref label) = option.type_label {
        return convert(label);
    }

    let name = option.type_.name();
    if option.multiple {
        format!("{name}[]")
    } else {
        name.to_string()
    }
}

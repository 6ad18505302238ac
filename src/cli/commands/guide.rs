//! The `guide` command
//!
//! Renders the usage guide of `argmark write` itself. The options table is
//! read from the clap definition so it cannot drift from the real flags.

use clap::{Arg, ArgAction, CommandFactory};
use indexmap::IndexMap;

use argmark_core::config::{
    ArgumentType, ContentSection, DEFAULT_REPLACE_ABOVE, DEFAULT_REPLACE_BELOW, OptionDefinition,
    OptionSpec, ParseOptions, SectionContent, UsageGuideConfig,
};
use argmark_docs::render_usage_guide;

use crate::cli::args::{Cli, GuideArgs};
use crate::error::ArgmarkError;

/// Run the `guide` command.
///
/// # Errors
///
/// Returns an I/O error if the output file cannot be written.
pub fn run(args: &GuideArgs) -> Result<(), ArgmarkError> {
    let rendered = render_usage_guide(&usage_guide());

    match &args.output {
        Some(path) => {
            tracing::info!(file = %path.display(), "writing usage guide");
            std::fs::write(path, rendered)?;
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Builds the usage guide of the `write` command.
#[must_use]
pub fn usage_guide() -> UsageGuideConfig {
    UsageGuideConfig {
        options: write_options(),
        parse_options: ParseOptions {
            header_sections: vec![
                ContentSection {
                    header_level: Some(2),
                    ..ContentSection::text(
                        "Markdown Generation",
                        "A markdown version of a usage guide can be generated and inserted into an existing markdown document.\n\
                         Marker lines in the document describe where the content goes; existing content between the markers is overwritten.",
                    )
                },
                ContentSection {
                    header: None,
                    header_level: None,
                    content: Some(SectionContent::Text(
                        "{highlight argmark write -m README.md -g usage-guide.json}".to_string(),
                    )),
                },
            ],
            footer_sections: vec![
                ContentSection::text(
                    "Default Replacement Markers",
                    format!(
                        "replace-below defaults to:\n{{code {DEFAULT_REPLACE_BELOW}}}\n\
                         replace-above defaults to:\n{{code {DEFAULT_REPLACE_ABOVE}}}"
                    ),
                ),
                ContentSection::text(
                    "String Formatting",
                    "The modifiers {highlight bold} and {highlight italic} are converted to markdown emphasis.\n\
                     For example:\n\
                     {code \\{bold bold text\\} \\{italic italic text\\} \\{italic.bold bold italic text\\}}\n\
                     will be converted to:\n\
                     {code **bold text** *italic text* ***bold italic text***}",
                ),
                ContentSection::text(
                    "Additional Modifiers",
                    "{code \\{highlight someText\\}}\n\
                     surrounds the text in backticks, and\n\
                     {code \\{code.rust fn main() \\{\\}\\}}\n\
                     surrounds the text in a fenced code block with an optional language.",
                ),
            ],
            default_header_level: Some(3),
            options_header_level: Some(3),
            options_header_text: Some("argmark write options".to_string()),
            ..ParseOptions::default()
        },
    }
}

/// Option table of the `write` subcommand, taken from its clap definition.
fn write_options() -> IndexMap<String, OptionSpec> {
    let command = Cli::command();
    let Some(write) = command.find_subcommand("write") else {
        return IndexMap::new();
    };

    write
        .get_arguments()
        .filter(|arg| !arg.is_positional() && !matches!(arg.get_id().as_str(), "help" | "version"))
        .map(|arg| {
            let name = arg
                .get_long()
                .map_or_else(|| arg.get_id().to_string(), ToString::to_string);
            (name, option_spec(arg))
        })
        .collect()
}

fn option_spec(arg: &Arg) -> OptionSpec {
    let type_ = match arg.get_action() {
        ArgAction::SetTrue => ArgumentType::Boolean,
        _ if arg
            .get_value_names()
            .is_some_and(|names| names.iter().any(|n| n.as_str() == "FILE")) =>
        {
            ArgumentType::File
        }
        _ => ArgumentType::String,
    };

    OptionDefinition {
        type_,
        alias: arg.get_short().map(String::from),
        multiple: matches!(arg.get_action(), ArgAction::Append),
        description: arg.get_help().map(ToString::to_string),
        ..OptionDefinition::default()
    }
    .into()
}

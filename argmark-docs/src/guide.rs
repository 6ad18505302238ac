//! Usage guide assembly.
//!
//! A guide is its header sections, then its options sections, then its
//! footer sections. Each rendered section is framed by newlines and the
//! sections are joined with a newline, so consecutive sections are
//! separated by blank lines and the document starts and ends with a
//! newline.

use argmark_core::config::UsageGuideConfig;

use crate::options::render_options_sections;
use crate::section::render_section;

/// Render a complete usage guide.
#[must_use]
pub fn render_usage_guide(config: &UsageGuideConfig) -> String {
    let parse_options = &config.parse_options;
    let level = parse_options.section_header_level();
    let options = config.option_list();

    let headers = parse_options
        .header_sections
        .iter()
        .map(|section| render_section(section, level));
    let footers = parse_options
        .footer_sections
        .iter()
        .map(|section| render_section(section, level));

    headers
        .chain(render_options_sections(&options, parse_options))
        .chain(footers)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render several guides, joined with a newline.
#[must_use]
pub fn render_usage_guides(configs: &[UsageGuideConfig]) -> String {
    configs
        .iter()
        .map(render_usage_guide)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use argmark_core::config::{
        ArgumentType, ContentSection, GroupFilter, GroupSelector, OneOrMany, OptionDefinition,
        OptionsSection, ParseOptions, SectionContent,
    };

    fn typical_app() -> UsageGuideConfig {
        let mut config = UsageGuideConfig::default();
        config.options.insert(
            "help".into(),
            OptionDefinition {
                type_: ArgumentType::Boolean,
                alias: Some("h".into()),
                group: Some(OneOrMany::One("main".into())),
                description: Some("Display this usage guide.".into()),
                ..OptionDefinition::default()
            }
            .into(),
        );
        config.options.insert(
            "src".into(),
            OptionDefinition {
                type_: ArgumentType::File,
                multiple: true,
                type_label: Some("file ...".into()),
                group: Some(OneOrMany::One("main".into())),
                description: Some("The input files to process".into()),
                ..OptionDefinition::default()
            }
            .into(),
        );
        config.options.insert(
            "timeout".into(),
            OptionDefinition {
                type_: ArgumentType::Number,
                alias: Some("t".into()),
                type_label: Some("ms".into()),
                group: Some(OneOrMany::One("main".into())),
                description: Some("Timeout value in ms".into()),
                ..OptionDefinition::default()
            }
            .into(),
        );
        config.options.insert(
            "plugin".into(),
            OptionDefinition {
                description: Some("A plugin path".into()),
                ..OptionDefinition::default()
            }
            .into(),
        );
        config.parse_options = ParseOptions {
            header_sections: vec![ContentSection::text(
                "A typical app",
                "Generates something {italic very} important.",
            )],
            options_sections: vec![
                OptionsSection {
                    header: Some("Main options".into()),
                    header_level: None,
                    group: GroupFilter::Single(GroupSelector::Named("main".into())),
                },
                OptionsSection {
                    header: Some("Misc".into()),
                    header_level: None,
                    group: GroupFilter::Single(GroupSelector::Ungrouped),
                },
            ],
            ..ParseOptions::default()
        };
        config
    }

    #[test]
    fn test_guide_with_option_groups() {
        assert_eq!(
            render_usage_guide(&typical_app()),
            "
# A typical app

Generates something *very* important.


## Main options

| Argument | Alias | Type | Description |
|-|-|-|-|
| **help** | **h** | boolean | Display this usage guide. |
| **src** | | file ... | The input files to process |
| **timeout** | **t** | ms | Timeout value in ms |


## Misc

| Argument | Type | Description |
|-|-|-|
| **plugin** | string | A plugin path |
"
        );
    }

    #[test]
    fn test_guide_with_footer_and_synopsis() {
        let mut config = UsageGuideConfig::default();
        config.options.insert("copyFiles".into(), ArgumentType::Boolean.into());
        config.parse_options = ParseOptions {
            header_sections: vec![ContentSection {
                header: Some("Synopsis".into()),
                header_level: None,
                content: Some(SectionContent::Lines(vec![
                    "$ example {bold --copyFiles}".into(),
                ])),
            }],
            footer_sections: vec![ContentSection {
                header: None,
                header_level: None,
                content: Some(SectionContent::Text(
                    "Project home: https://github.com/me/example".into(),
                )),
            }],
            ..ParseOptions::default()
        };

        assert_eq!(
            render_usage_guide(&config),
            "
# Synopsis

$ example **--copyFiles**



| Argument | Type |
|-|-|
| **copyFiles** | boolean |



Project home: https://github.com/me/example
"
        );
    }

    #[test]
    fn test_json_code_block_section() {
        let mut config = UsageGuideConfig::default();
        config.parse_options.header_sections = vec![ContentSection::text(
            "A typical app",
            "Some Json:\n{code.json\n\\{\n    \"dependencies\": \\{\\}\n\\}\n}",
        )];

        let guide = render_usage_guide(&config);
        assert!(guide.starts_with("\n# A typical app\n\nSome Json:  \n```json\n{\n"));
        assert!(guide.contains("    \"dependencies\": {}\n}\n\n```\n"));
    }

    #[test]
    fn test_guide_without_options_still_renders_table_header() {
        let guide = render_usage_guide(&UsageGuideConfig::default());
        assert_eq!(guide, "\n\n| Argument | Type |\n|-|-|\n");
    }

    #[test]
    fn test_multiple_guides_joined() {
        let mut first = UsageGuideConfig::default();
        first.options.insert("a".into(), ArgumentType::String.into());
        let mut second = UsageGuideConfig::default();
        second.options.insert("b".into(), ArgumentType::Number.into());

        let rendered = render_usage_guides(&[first.clone(), second]);
        assert_eq!(
            rendered,
            format!(
                "{}\n{}",
                render_usage_guide(&first),
                "\n\n| Argument | Type |\n|-|-|\n| **b** | number |\n"
            )
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = typical_app();
        assert_eq!(render_usage_guide(&config), render_usage_guide(&config));
    }
}

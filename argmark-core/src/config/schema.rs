//! Usage guide configuration types.
//!
//! Guide files are deserialized into [`UsageGuideConfig`]. Field names are
//! `snake_case`; the `camelCase` spellings used by JavaScript tooling are
//! accepted as aliases so existing guide definitions can be reused.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Group name selecting options that belong to no group.
pub const UNGROUPED: &str = "_none";

/// Default marker line below which generated content is written.
pub const DEFAULT_REPLACE_BELOW: &str = "[//]: ####ts-command-line-args_write-markdown_replaceBelow";

/// Default marker line above which generated content is written.
pub const DEFAULT_REPLACE_ABOVE: &str = "[//]: ####ts-command-line-args_write-markdown_replaceAbove";

/// Heading level used for content sections without an explicit level.
pub const DEFAULT_SECTION_HEADER_LEVEL: u8 = 1;

/// Heading level used for options sections without an explicit level.
pub const DEFAULT_OPTIONS_HEADER_LEVEL: u8 = 2;

// ============================================================================
// Top-Level Config
// ============================================================================

/// A complete usage guide: the argument definitions plus the sections
/// rendered around them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UsageGuideConfig {
    /// Argument definitions keyed by argument name, in declaration order.
    #[serde(default, alias = "arguments")]
    pub options: IndexMap<String, OptionSpec>,

    /// Section layout.
    #[serde(default, alias = "parseOptions")]
    pub parse_options: ParseOptions,
}

impl UsageGuideConfig {
    /// Returns the normalized option list in declaration order.
    #[must_use]
    pub fn option_list(&self) -> Vec<OptionDescriptor> {
        self.options
            .iter()
            .map(|(name, spec)| OptionDescriptor::from_spec(name, spec))
            .collect()
    }
}

/// Layout of the rendered guide.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ParseOptions {
    /// Sections rendered before the options tables.
    #[serde(default, alias = "headerContentSections", skip_serializing_if = "Vec::is_empty")]
    pub header_sections: Vec<ContentSection>,

    /// Sections rendered after the options tables.
    #[serde(default, alias = "footerContentSections", skip_serializing_if = "Vec::is_empty")]
    pub footer_sections: Vec<ContentSection>,

    /// Options tables. Empty means a single table holding every option.
    #[serde(default, alias = "optionSections", skip_serializing_if = "Vec::is_empty")]
    pub options_sections: Vec<OptionsSection>,

    /// Heading level for content sections without their own level.
    #[serde(default, alias = "defaultSectionHeaderLevel", skip_serializing_if = "Option::is_none")]
    pub default_header_level: Option<u8>,

    /// Heading level for options sections without their own level.
    #[serde(default, alias = "optionsHeaderLevel", skip_serializing_if = "Option::is_none")]
    pub options_header_level: Option<u8>,

    /// Heading of the default options section.
    #[serde(default, alias = "optionsHeaderText", skip_serializing_if = "Option::is_none")]
    pub options_header_text: Option<String>,
}

impl ParseOptions {
    /// Effective heading level for content sections.
    #[must_use]
    pub fn section_header_level(&self) -> u8 {
        self.default_header_level.unwrap_or(DEFAULT_SECTION_HEADER_LEVEL)
    }

    /// Effective heading level for options sections.
    #[must_use]
    pub fn options_header_level(&self) -> u8 {
        self.options_header_level
            .unwrap_or(DEFAULT_OPTIONS_HEADER_LEVEL)
    }

    /// Returns the configured options sections, or the single default
    /// section covering every option when none are configured.
    #[must_use]
    pub fn effective_options_sections(&self) -> Vec<OptionsSection> {
        if self.options_sections.is_empty() {
            vec![OptionsSection {
                header: self.options_header_text.clone(),
                header_level: None,
                group: GroupFilter::All,
            }]
        } else {
            self.options_sections.clone()
        }
    }
}

// ============================================================================
// Options
// ============================================================================

/// Value type of a command-line argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentType {
    /// Free text.
    #[default]
    #[serde(alias = "String")]
    String,
    /// Flag without a value.
    #[serde(alias = "Boolean")]
    Boolean,
    /// Numeric value.
    #[serde(alias = "Number", alias = "numeric")]
    Number,
    /// Path to a file.
    #[serde(alias = "File")]
    File,
}

impl ArgumentType {
    /// Lowercase type name as rendered in the Type column.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::File => "file",
        }
    }
}

/// An option as written in a guide file: either just its type or a full
/// definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionSpec {
    /// Shorthand such as `copy_files: boolean`.
    Type(ArgumentType),
    /// Full definition.
    Full(OptionDefinition),
}

impl From<ArgumentType> for OptionSpec {
    fn from(type_: ArgumentType) -> Self {
        Self::Type(type_)
    }
}

impl From<OptionDefinition> for OptionSpec {
    fn from(definition: OptionDefinition) -> Self {
        Self::Full(definition)
    }
}

/// Full definition of one argument.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OptionDefinition {
    /// Value type.
    #[serde(default, rename = "type")]
    pub type_: ArgumentType,

    /// Single-character short name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Markup overriding the rendered type.
    #[serde(default, alias = "typeLabel", skip_serializing_if = "Option::is_none")]
    pub type_label: Option<String>,

    /// Accepts several values.
    #[serde(default)]
    pub multiple: bool,

    /// Accepts several values, each given with its own flag.
    #[serde(default, alias = "lazyMultiple")]
    pub lazy_multiple: bool,

    /// Group(s) the option belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<OneOrMany>,

    /// Markup description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// May be omitted on the command line.
    #[serde(default)]
    pub optional: bool,
}

/// A single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    /// One value.
    One(String),
    /// Several values.
    Many(Vec<String>),
}

impl OneOrMany {
    /// Flattens into a list.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

/// Normalized option as consumed by the renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    /// Argument name.
    pub name: String,
    /// Single-character short name.
    pub alias: Option<String>,
    /// Value type.
    pub type_: ArgumentType,
    /// Markup overriding the rendered type.
    pub type_label: Option<String>,
    /// Accepts several values (`multiple` or `lazy_multiple`).
    pub multiple: bool,
    /// Groups the option belongs to; empty when ungrouped.
    pub groups: Vec<String>,
    /// Markup description.
    pub description: Option<String>,
    /// May be omitted on the command line.
    pub optional: bool,
}

impl OptionDescriptor {
    /// Creates a plain option of the given type.
    #[must_use]
    pub fn new(name: impl Into<String>, type_: ArgumentType) -> Self {
        Self {
            name: name.into(),
            alias: None,
            type_,
            type_label: None,
            multiple: false,
            groups: Vec::new(),
            description: None,
            optional: false,
        }
    }

    /// Normalizes a guide-file option.
    #[must_use]
    pub fn from_spec(name: &str, spec: &OptionSpec) -> Self {
        match spec {
            OptionSpec::Type(type_) => Self::new(name, *type_),
            OptionSpec::Full(definition) => Self {
                name: name.to_string(),
                alias: definition.alias.clone(),
                type_: definition.type_,
                type_label: definition.type_label.clone(),
                multiple: definition.multiple || definition.lazy_multiple,
                groups: definition
                    .group
                    .clone()
                    .map(OneOrMany::into_vec)
                    .unwrap_or_default(),
                description: definition.description.clone(),
                optional: definition.optional,
            },
        }
    }

    /// Returns `true` if the option belongs to no group.
    #[must_use]
    pub fn is_ungrouped(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns `true` if the option belongs to `group`.
    #[must_use]
    pub fn in_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }
}

// ============================================================================
// Group Filter
// ============================================================================

/// One member of a group filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupSelector {
    /// Options belonging to the named group.
    Named(String),
    /// Options belonging to no group.
    Ungrouped,
}

impl GroupSelector {
    /// Parses a serialized selector; [`UNGROUPED`] selects ungrouped options.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == UNGROUPED {
            Self::Ungrouped
        } else {
            Self::Named(value.to_string())
        }
    }

    /// Returns `true` if `option` is selected.
    #[must_use]
    pub fn matches(&self, option: &OptionDescriptor) -> bool {
        match self {
            Self::Named(group) => option.in_group(group),
            Self::Ungrouped => option.is_ungrouped(),
        }
    }

    fn as_str(&self) -> &str {
        match self {
            Self::Named(group) => group,
            Self::Ungrouped => UNGROUPED,
        }
    }
}

/// Selects which options populate an options section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<OneOrMany>", into = "Option<OneOrMany>")]
pub enum GroupFilter {
    /// Every option.
    #[default]
    All,
    /// Options matching one selector.
    Single(GroupSelector),
    /// Options matching any of the selectors.
    Set(Vec<GroupSelector>),
}

impl GroupFilter {
    /// Returns `true` if `option` passes the filter.
    #[must_use]
    pub fn matches(&self, option: &OptionDescriptor) -> bool {
        match self {
            Self::All => true,
            Self::Single(selector) => selector.matches(option),
            Self::Set(selectors) => selectors.iter().any(|s| s.matches(option)),
        }
    }

    /// Returns `true` for [`GroupFilter::All`].
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl From<Option<OneOrMany>> for GroupFilter {
    fn from(value: Option<OneOrMany>) -> Self {
        match value {
            None => Self::All,
            Some(OneOrMany::One(group)) => Self::Single(GroupSelector::parse(&group)),
            Some(OneOrMany::Many(groups)) => {
                Self::Set(groups.iter().map(String::as_str).map(GroupSelector::parse).collect())
            }
        }
    }
}

impl From<GroupFilter> for Option<OneOrMany> {
    fn from(filter: GroupFilter) -> Self {
        match filter {
            GroupFilter::All => None,
            GroupFilter::Single(selector) => Some(OneOrMany::One(selector.as_str().to_string())),
            GroupFilter::Set(selectors) => Some(OneOrMany::Many(
                selectors.iter().map(|s| s.as_str().to_string()).collect(),
            )),
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

/// A heading plus a body of prose, prose lines, or a table of records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ContentSection {
    /// Heading text; no heading is rendered when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    /// Heading level (number of `#`).
    #[serde(default, alias = "headerLevel", skip_serializing_if = "Option::is_none")]
    pub header_level: Option<u8>,

    /// Section body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<SectionContent>,
}

impl ContentSection {
    /// Creates a section with a heading and a prose body.
    #[must_use]
    pub fn text(header: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            header: Some(header.into()),
            header_level: None,
            content: Some(SectionContent::Text(content.into())),
        }
    }
}

/// One table row: column name to markup cell, in column order.
pub type Record = IndexMap<String, String>;

/// Body of a [`ContentSection`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionContent {
    /// A single markup string.
    Text(String),
    /// Markup lines joined with newlines.
    Lines(Vec<String>),
    /// Table rows sharing the same columns.
    Records(Vec<Record>),
    /// Any other shape; renders as empty content.
    Other(serde_json::Value),
}

/// A section holding an options table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OptionsSection {
    /// Heading text; no heading is rendered when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    /// Heading level (number of `#`).
    #[serde(default, alias = "headerLevel", skip_serializing_if = "Option::is_none")]
    pub header_level: Option<u8>,

    /// Options shown in this section.
    #[serde(default, skip_serializing_if = "GroupFilter::is_all")]
    pub group: GroupFilter,
}

// ============================================================================
// Markers
// ============================================================================

/// Two literal lines delimiting the generated region of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MarkerPair {
    /// Generated content starts on the line after this marker.
    #[serde(alias = "replaceBelow")]
    pub below: String,
    /// Generated content ends on the line before this marker.
    #[serde(alias = "replaceAbove")]
    pub above: String,
}

impl Default for MarkerPair {
    fn default() -> Self {
        Self {
            below: DEFAULT_REPLACE_BELOW.to_string(),
            above: DEFAULT_REPLACE_ABOVE.to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

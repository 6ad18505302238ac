//! Inline markup to markdown conversion.
//!
//! Descriptions and section bodies use a small bracket-tag markup:
//!
//! | Markup | Markdown |
//! |-|-|
//! | `{bold text}` | `**text**` |
//! | `{italic text}` | `*text*` |
//! | `{bold.italic text}` | `***text***` |
//! | `{highlight text}` | `` `text` `` |
//! | `{code.lang text}` | fenced code block tagged `lang` |
//!
//! `\{` and `\}` produce literal braces and never open or close a tag.
//! Anything that is not a well-formed tag with a known name is copied
//! through unchanged. Newlines in prose become markdown hard breaks.
//!
//! Tags are located with a single left-to-right scan and a brace-depth
//! counter, so a tag body may contain balanced braces of its own.

/// Modifier separating emphasis names, as in `bold.italic`.
const MODIFIER_SEPARATOR: char = '.';

/// Code fence delimiter.
const FENCE: &str = "```";

/// Trailing spaces forcing a markdown hard line break.
const HARD_BREAK: &str = "  ";

/// Convert markup to markdown.
///
/// Total: malformed or unknown tags are passed through literally.
#[must_use]
pub fn convert(markup: &str) -> String {
    let mut writer = MarkdownWriter::default();
    convert_into(markup, &mut writer);
    writer.finish()
}

/// Replace `\{` and `\}` with literal braces.
#[must_use]
pub fn unescape_braces(text: &str) -> String {
    text.replace("\\{", "{").replace("\\}", "}")
}

// ============================================================================
// Scanner
// ============================================================================

fn convert_into(input: &str, writer: &mut MarkdownWriter) {
    let mut prose = String::new();
    let mut rest = input;

    while let Some(c) = rest.chars().next() {
        if let Some(brace) = escaped_brace(rest) {
            prose.push(brace);
            rest = &rest[2..];
            continue;
        }

        if c == '{'
            && let Some(tag) = RawTag::parse(rest)
            && let Some(kind) = TagKind::from_name(tag.name)
        {
            writer.push_prose(&prose);
            prose.clear();
            render_tag(kind, tag.body, writer);
            rest = &rest[tag.len..];
            continue;
        }

        prose.push(c);
        rest = &rest[c.len_utf8()..];
    }

    writer.push_prose(&prose);
}

/// Returns the literal brace if `text` starts with `\{` or `\}`.
fn escaped_brace(text: &str) -> Option<char> {
    match text.as_bytes() {
        [b'\\', b'{', ..] => Some('{'),
        [b'\\', b'}', ..] => Some('}'),
        _ => None,
    }
}

fn render_tag(kind: TagKind<'_>, body: &str, writer: &mut MarkdownWriter) {
    match kind {
        TagKind::Emphasis { bold, italic } => {
            let marker = match (bold, italic) {
                (true, true) => "***",
                (true, false) => "**",
                _ => "*",
            };
            writer.push_raw(marker);
            convert_into(body, writer);
            writer.push_raw(marker);
        }
        TagKind::Highlight => {
            writer.push_raw("`");
            writer.push_raw(&unescape_braces(body));
            writer.push_raw("`");
        }
        TagKind::Code { language } => writer.push_fence(language, &unescape_braces(body)),
    }
}

/// A syntactically complete tag: `{name<whitespace>body}`.
#[derive(Debug, PartialEq, Eq)]
struct RawTag<'a> {
    name: &'a str,
    body: &'a str,
    /// Byte length of the whole tag including both braces.
    len: usize,
}

impl<'a> RawTag<'a> {
    /// Parses a tag at the start of `input`, which must begin with `{`.
    fn parse(input: &'a str) -> Option<Self> {
        let after_open = input.strip_prefix('{')?;
        let name_len = after_open.find(|c: char| !is_name_char(c))?;
        if name_len == 0 {
            return None;
        }

        let separator = after_open[name_len..].chars().next()?;
        if !separator.is_whitespace() {
            return None;
        }

        let body_start = 1 + name_len + separator.len_utf8();
        let body_len = find_closing_brace(&input[body_start..])?;

        Some(Self {
            name: &after_open[..name_len],
            body: &input[body_start..body_start + body_len],
            len: body_start + body_len + 1,
        })
    }
}

const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '+' | '#')
}

/// Byte offset of the `}` closing a tag body, skipping escaped braces and
/// balanced inner pairs.
fn find_closing_brace(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' if matches!(bytes.get(i + 1), Some(b'{' | b'}')) => {
                i += 2;
                continue;
            }
            b'{' => depth += 1,
            b'}' if depth == 0 => return Some(i),
            b'}' => depth -= 1,
            _ => {}
        }
        i += 1;
    }

    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind<'a> {
    Emphasis { bold: bool, italic: bool },
    Highlight,
    Code { language: &'a str },
}

impl<'a> TagKind<'a> {
    fn from_name(name: &'a str) -> Option<Self> {
        if name == "highlight" {
            return Some(Self::Highlight);
        }
        if name == "code" {
            return Some(Self::Code { language: "" });
        }
        if let Some(language) = name.strip_prefix("code.") {
            return Some(Self::Code { language });
        }

        let mut bold = false;
        let mut italic = false;
        for modifier in name.split(MODIFIER_SEPARATOR) {
            match modifier {
                "bold" => bold = true,
                "italic" => italic = true,
                _ => return None,
            }
        }
        Some(Self::Emphasis { bold, italic })
    }
}

// ============================================================================
// Writer
// ============================================================================

/// Accumulates markdown, tracking whether the last thing written was a
/// closing code fence.
#[derive(Debug, Default)]
struct MarkdownWriter {
    buf: String,
    after_fence: bool,
}

impl MarkdownWriter {
    /// Text after a closing fence must start on a new line.
    fn leave_fence(&mut self, next: Option<char>) {
        if self.after_fence && next.is_some_and(|c| c != '\n') {
            self.buf.push('\n');
        }
        self.after_fence = false;
    }

    fn push_prose(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                let crlf = self.buf.ends_with('\r');
                if crlf {
                    self.buf.pop();
                }
                if !self.after_fence && !self.buf.ends_with(HARD_BREAK) {
                    self.buf.push_str(HARD_BREAK);
                }
                if crlf {
                    self.buf.push('\r');
                }
                self.buf.push('\n');
                self.after_fence = false;
            } else if c == '\r' {
                self.buf.push(c);
            } else {
                self.leave_fence(Some(c));
                self.buf.push(c);
            }
        }
    }

    fn push_raw(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.leave_fence(text.chars().next());
        self.buf.push_str(text);
    }

    fn push_fence(&mut self, language: &str, code: &str) {
        self.leave_fence(Some('\n'));
        if !self.buf.is_empty() && !self.buf.ends_with('\n') {
            self.buf.push('\n');
        }
        self.buf.push_str(FENCE);
        self.buf.push_str(language);
        self.buf.push('\n');
        self.buf.push_str(code);
        self.buf.push('\n');
        self.buf.push_str(FENCE);
        self.after_fence = true;
    }

    fn finish(self) -> String {
        self.buf
    }
}

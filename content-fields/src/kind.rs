//! The closed set of field kinds.
//!
//! A [`FieldKind`] is the identity serializers are built for and the key the
//! [`SerializerManager`](crate::SerializerManager) registers them under.

use std::fmt;

/// The kind of a field. Determines which serializer handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    String,
    Html,
    Markdown,
    Color,
    Readonly,
    Number,
    Date,
    CheckBox,
    Image,
    Video,
    Audio,
    Document,
    Media,
    Page,
    Post,
    /// Enum-backed select field, identified by the enum's
    /// [`SelectEnum::NAME`](crate::SelectEnum::NAME).
    Select(&'static str),
}

impl FieldKind {
    /// Every kind that has a built-in serializer. Select kinds are excluded
    /// because they depend on a caller-provided enum.
    pub const BUILT_IN: &'static [FieldKind] = &[
        FieldKind::Text,
        FieldKind::String,
        FieldKind::Html,
        FieldKind::Markdown,
        FieldKind::Color,
        FieldKind::Readonly,
        FieldKind::Number,
        FieldKind::Date,
        FieldKind::CheckBox,
        FieldKind::Image,
        FieldKind::Video,
        FieldKind::Audio,
        FieldKind::Document,
        FieldKind::Media,
        FieldKind::Page,
        FieldKind::Post,
    ];

    /// Stable lowercase name, used in configuration and error messages.
    ///
    /// Select kinds have no static name; use the `Display` impl, which renders
    /// them as `select:<EnumName>`.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::String => "string",
            FieldKind::Html => "html",
            FieldKind::Markdown => "markdown",
            FieldKind::Color => "color",
            FieldKind::Readonly => "readonly",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::CheckBox => "checkbox",
            FieldKind::Image => "image",
            FieldKind::Video => "video",
            FieldKind::Audio => "audio",
            FieldKind::Document => "document",
            FieldKind::Media => "media",
            FieldKind::Page => "page",
            FieldKind::Post => "post",
            FieldKind::Select(_) => "select",
        }
    }

    /// Look up a built-in kind by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<FieldKind> {
        let name = name.trim();
        FieldKind::BUILT_IN
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Select(enum_name) => write!(f, "select:{enum_name}"),
            other => f.write_str(other.name()),
        }
    }
}

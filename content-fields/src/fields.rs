//! Field value types.
//!
//! Every field kind has a small value struct. [`Field`] is the closed enum
//! over all of them and is what serializers consume and produce. Each value
//! struct converts into a `Field` with `From` and back with `TryFrom`, which
//! fails with [`SerializerError::TypeMismatch`] for any other variant.

use std::fmt;
use std::marker::PhantomData;

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::error::{Result, SerializerError};
use crate::kind::FieldKind;

/// A concrete field value type bound to exactly one [`FieldKind`].
pub trait FieldValue: Sized + Into<Field> + TryFrom<Field, Error = SerializerError> {
    /// The kind every value of this type has.
    const KIND: FieldKind;

    /// Borrow the value out of a [`Field`] if it is this variant.
    fn from_field(field: &Field) -> Option<&Self>;
}

/// Field types whose value is an optional string.
pub trait TextValue: FieldValue {
    fn text(&self) -> Option<&str>;
    fn from_text(value: Option<String>) -> Self;
}

/// Field types whose value is an optional integer.
pub trait IntegerValue: FieldValue {
    fn integer(&self) -> Option<i32>;
    fn from_integer(value: Option<i32>) -> Self;
}

/// Field types whose value is a boolean.
pub trait BooleanValue: FieldValue {
    fn boolean(&self) -> bool;
    fn from_boolean(value: bool) -> Self;
}

/// Field types referencing a media asset that may not be set.
pub trait MediaValue: FieldValue {
    fn media_id(&self) -> Option<Uuid>;
    fn from_media_id(id: Option<Uuid>) -> Self;
}

/// Field types referencing another content item (page, post).
pub trait ReferenceValue: FieldValue {
    fn reference_id(&self) -> Uuid;
    fn from_reference_id(id: Uuid) -> Self;
}

/// An enum whose members can be picked in a select field.
///
/// Members are stored by name. The first entry of [`VARIANTS`](Self::VARIANTS)
/// is the default used when nothing valid has been stored.
///
/// ```
/// use content_fields::SelectEnum;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Size { Small, Large }
///
/// impl SelectEnum for Size {
///     const NAME: &'static str = "Size";
///     const VARIANTS: &'static [Self] = &[Size::Small, Size::Large];
///
///     fn name(&self) -> &'static str {
///         match self {
///             Size::Small => "Small",
///             Size::Large => "Large",
///         }
///     }
/// }
///
/// assert_eq!(Size::from_name("Large"), Some(Size::Large));
/// assert_eq!(Size::default_variant(), Some(Size::Small));
/// ```
pub trait SelectEnum: fmt::Debug + Copy + PartialEq + Send + Sync + 'static {
    /// Identifies the enum; two enums with the same name share a field kind.
    const NAME: &'static str;

    /// All members in declaration order.
    const VARIANTS: &'static [Self];

    /// The member's stored name.
    fn name(&self) -> &'static str;

    /// Case-sensitive lookup of a member by name.
    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.name() == name)
    }

    /// The first declared member.
    fn default_variant() -> Option<Self> {
        Self::VARIANTS.first().copied()
    }
}

/// Any field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Text(TextField),
    String(StringField),
    Html(HtmlField),
    Markdown(MarkdownField),
    Color(ColorField),
    Readonly(ReadonlyField),
    Number(NumberField),
    Date(DateField),
    CheckBox(CheckBoxField),
    Image(ImageField),
    Video(VideoField),
    Audio(AudioField),
    Document(DocumentField),
    Media(MediaField),
    Page(PageField),
    Post(PostField),
    Select(SelectValue),
}

impl Field {
    /// The kind of this field.
    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Text(_) => FieldKind::Text,
            Field::String(_) => FieldKind::String,
            Field::Html(_) => FieldKind::Html,
            Field::Markdown(_) => FieldKind::Markdown,
            Field::Color(_) => FieldKind::Color,
            Field::Readonly(_) => FieldKind::Readonly,
            Field::Number(_) => FieldKind::Number,
            Field::Date(_) => FieldKind::Date,
            Field::CheckBox(_) => FieldKind::CheckBox,
            Field::Image(_) => FieldKind::Image,
            Field::Video(_) => FieldKind::Video,
            Field::Audio(_) => FieldKind::Audio,
            Field::Document(_) => FieldKind::Document,
            Field::Media(_) => FieldKind::Media,
            Field::Page(_) => FieldKind::Page,
            Field::Post(_) => FieldKind::Post,
            Field::Select(select) => FieldKind::Select(select.enum_name),
        }
    }

    /// Whether the field holds a value. Checkboxes always do.
    pub fn has_value(&self) -> bool {
        match self {
            Field::Text(f) => f.value.is_some(),
            Field::String(f) => f.value.is_some(),
            Field::Html(f) => f.value.is_some(),
            Field::Markdown(f) => f.value.is_some(),
            Field::Color(f) => f.value.is_some(),
            Field::Readonly(f) => f.value.is_some(),
            Field::Number(f) => f.value.is_some(),
            Field::Date(f) => f.value.is_some(),
            Field::CheckBox(_) => true,
            Field::Image(f) => f.has_value(),
            Field::Video(f) => f.has_value(),
            Field::Audio(f) => f.has_value(),
            Field::Document(f) => f.has_value(),
            Field::Media(f) => f.has_value(),
            Field::Page(f) => !f.id.is_nil(),
            Field::Post(f) => !f.id.is_nil(),
            Field::Select(f) => !f.value.is_empty(),
        }
    }
}

macro_rules! field_variant {
    ($ty:ident, $variant:ident) => {
        impl From<$ty> for Field {
            fn from(value: $ty) -> Self {
                Field::$variant(value)
            }
        }

        impl TryFrom<Field> for $ty {
            type Error = SerializerError;

            fn try_from(field: Field) -> Result<Self> {
                match field {
                    Field::$variant(value) => Ok(value),
                    other => Err(SerializerError::type_mismatch(
                        FieldKind::$variant,
                        other.kind(),
                    )),
                }
            }
        }

        impl FieldValue for $ty {
            const KIND: FieldKind = FieldKind::$variant;

            fn from_field(field: &Field) -> Option<&Self> {
                match field {
                    Field::$variant(value) => Some(value),
                    _ => None,
                }
            }
        }
    };
}

macro_rules! text_field {
    ($(#[$meta:meta])* $ty:ident => $variant:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $ty {
            pub value: Option<String>,
        }

        impl $ty {
            pub fn new(value: impl Into<String>) -> Self {
                Self {
                    value: Some(value.into()),
                }
            }
        }

        impl TextValue for $ty {
            fn text(&self) -> Option<&str> {
                self.value.as_deref()
            }

            fn from_text(value: Option<String>) -> Self {
                Self { value }
            }
        }

        field_variant!($ty, $variant);
    };
}

macro_rules! media_field {
    ($(#[$meta:meta])* $ty:ident => $variant:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $ty {
            pub id: Option<Uuid>,
        }

        impl $ty {
            pub fn new(id: Uuid) -> Self {
                Self { id: Some(id) }
            }

            /// Whether a media asset is referenced.
            pub fn has_value(&self) -> bool {
                self.id.is_some()
            }
        }

        impl MediaValue for $ty {
            fn media_id(&self) -> Option<Uuid> {
                self.id
            }

            fn from_media_id(id: Option<Uuid>) -> Self {
                Self { id }
            }
        }

        field_variant!($ty, $variant);
    };
}

macro_rules! reference_field {
    ($(#[$meta:meta])* $ty:ident => $variant:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $ty {
            pub id: Uuid,
        }

        impl $ty {
            pub fn new(id: Uuid) -> Self {
                Self { id }
            }
        }

        impl ReferenceValue for $ty {
            fn reference_id(&self) -> Uuid {
                self.id
            }

            fn from_reference_id(id: Uuid) -> Self {
                Self { id }
            }
        }

        field_variant!($ty, $variant);
    };
}

text_field! {
    /// Multi-line plain text.
    TextField => Text
}
text_field! {
    /// Single-line string.
    StringField => String
}
text_field! {
    /// Rich text stored as HTML.
    HtmlField => Html
}
text_field!(MarkdownField => Markdown);
text_field! {
    /// Color stored as its CSS text (`#ff0000`).
    ColorField => Color
}
text_field! {
    /// Text that editors can see but not change.
    ReadonlyField => Readonly
}

media_field!(ImageField => Image);
media_field!(VideoField => Video);
media_field!(AudioField => Audio);
media_field!(DocumentField => Document);
media_field! {
    /// Reference to a media asset of any type.
    MediaField => Media
}

reference_field! {
    /// Reference to a page.
    PageField => Page
}
reference_field! {
    /// Reference to a post.
    PostField => Post
}

/// Whole number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberField {
    pub value: Option<i32>,
}

impl NumberField {
    pub fn new(value: i32) -> Self {
        Self { value: Some(value) }
    }
}

impl IntegerValue for NumberField {
    fn integer(&self) -> Option<i32> {
        self.value
    }

    fn from_integer(value: Option<i32>) -> Self {
        Self { value }
    }
}

field_variant!(NumberField, Number);

/// Calendar date. Only the date part is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateField {
    pub value: Option<NaiveDateTime>,
}

impl DateField {
    pub fn new(value: NaiveDateTime) -> Self {
        Self { value: Some(value) }
    }
}

field_variant!(DateField, Date);

/// Boolean toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckBoxField {
    pub value: bool,
}

impl CheckBoxField {
    pub fn new(value: bool) -> Self {
        Self { value }
    }
}

impl BooleanValue for CheckBoxField {
    fn boolean(&self) -> bool {
        self.value
    }

    fn from_boolean(value: bool) -> Self {
        Self { value }
    }
}

field_variant!(CheckBoxField, CheckBox);

/// Untyped select value as carried inside [`Field::Select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectValue {
    /// [`SelectEnum::NAME`] of the enum the value belongs to.
    pub enum_name: &'static str,
    /// Stored member name.
    pub value: String,
}

/// Select field over the members of `E`, stored by member name.
pub struct SelectField<E: SelectEnum> {
    pub value: String,
    _enum: PhantomData<fn() -> E>,
}

impl<E: SelectEnum> SelectField<E> {
    /// The kind shared by every select field over `E`.
    pub const KIND: FieldKind = FieldKind::Select(E::NAME);

    pub fn new(member: E) -> Self {
        Self::from_name(member.name())
    }

    /// Build from a stored member name without validating it.
    pub fn from_name(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _enum: PhantomData,
        }
    }

    /// The typed member, if the stored name is one of `E`'s members.
    pub fn member(&self) -> Option<E> {
        E::from_name(&self.value)
    }
}

impl<E: SelectEnum> Default for SelectField<E> {
    fn default() -> Self {
        Self::from_name(E::default_variant().map(|v| v.name()).unwrap_or_default())
    }
}

impl<E: SelectEnum> Clone for SelectField<E> {
    fn clone(&self) -> Self {
        Self::from_name(self.value.clone())
    }
}

impl<E: SelectEnum> PartialEq for SelectField<E> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<E: SelectEnum> Eq for SelectField<E> {}

impl<E: SelectEnum> fmt::Debug for SelectField<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectField")
            .field("enum", &E::NAME)
            .field("value", &self.value)
            .finish()
    }
}

impl<E: SelectEnum> From<SelectField<E>> for Field {
    fn from(field: SelectField<E>) -> Self {
        Field::Select(SelectValue {
            enum_name: E::NAME,
            value: field.value,
        })
    }
}

impl<E: SelectEnum> TryFrom<Field> for SelectField<E> {
    type Error = SerializerError;

    fn try_from(field: Field) -> Result<Self> {
        match field {
            Field::Select(select) if select.enum_name == E::NAME => {
                Ok(Self::from_name(select.value))
            }
            other => Err(SerializerError::type_mismatch(Self::KIND, other.kind())),
        }
    }
}

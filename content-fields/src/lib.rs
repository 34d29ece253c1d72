//! Content field values and their string persistence serializers
//!
//! `content-fields` converts typed content fields (text, numbers, dates,
//! checkboxes, media/page/post references, enum-backed selects) to the text
//! that gets stored for them, and back. It knows nothing about where that text
//! lives. The persistence layer asks a [`SerializerManager`] for the
//! serializer of a field's kind and stores whatever it returns.
//!
//! # Architecture
//!
//! - **Closed field set**: [`Field`] is an enum over every field value type,
//!   tagged by [`FieldKind`]
//! - **Stateless serializers**: one [`FieldSerializer`] per kind, generic over
//!   field types that share a value shape
//! - **Empty marker**: `None` means nothing was stored; deserializing it yields
//!   the field's unset state
//! - **Explicit registry**: [`SerializerManager`] maps kinds to serializers;
//!   last registration wins
//!
//! # Example
//!
//! ```
//! use content_fields::{FieldKind, NumberField, SerializerManager};
//!
//! let manager = SerializerManager::with_defaults();
//!
//! let text = manager.serialize(&NumberField::new(25).into())?;
//! assert_eq!(text.as_deref(), Some("25"));
//!
//! let field = manager.deserialize(FieldKind::Number, None)?;
//! assert!(!field.has_value());
//! # Ok::<(), content_fields::SerializerError>(())
//! ```

pub mod config;
pub mod error;
pub mod fields;
pub mod kind;
pub mod manager;
pub mod serializers;

pub use config::SerializerConfig;
pub use error::{Result, SerializerError};
pub use fields::{
    AudioField, BooleanValue, CheckBoxField, ColorField, DateField, DocumentField, Field,
    FieldValue, HtmlField, ImageField, IntegerValue, MarkdownField, MediaField, MediaValue,
    NumberField, PageField, PostField, ReadonlyField, ReferenceValue, SelectEnum, SelectField,
    SelectValue, StringField, TextField, TextValue, VideoField,
};
pub use kind::FieldKind;
pub use manager::{SerializerManager, SharedSerializer};
pub use serializers::{
    validate_date_format, AudioFieldSerializer, CheckBoxFieldSerializer, DateFieldSerializer,
    DocumentFieldSerializer, FieldSerializer, ImageFieldSerializer, IntegerFieldSerializer,
    MediaFieldSerializer, MediaReferenceSerializer, PageFieldSerializer, PostFieldSerializer,
    ReferenceFieldSerializer, SelectFieldSerializer, StringFieldSerializer, VideoFieldSerializer,
    DEFAULT_DATE_FORMAT,
};

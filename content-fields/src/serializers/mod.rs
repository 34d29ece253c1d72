//! Field serializers.
//!
//! A serializer converts one field kind to and from the text that is
//! persisted for it. `None` on either side is the empty marker: nothing has
//! been stored for the field. Serializers are stateless apart from their
//! configuration and never log or touch I/O.
//!
//! Families sharing a value shape are generic over the field type:
//!
//! | Serializer | Field types |
//! |---|---|
//! | [`StringFieldSerializer`] | text, string, html, markdown, color, readonly |
//! | [`IntegerFieldSerializer`] | number |
//! | [`CheckBoxFieldSerializer`] | checkbox |
//! | [`DateFieldSerializer`] | date |
//! | [`MediaReferenceSerializer`] | image, video, audio, document, media |
//! | [`ReferenceFieldSerializer`] | page, post |
//! | [`SelectFieldSerializer`] | select over a [`SelectEnum`](crate::SelectEnum) |

use crate::error::{Result, SerializerError};
use crate::fields::{Field, FieldValue};
use crate::kind::FieldKind;

mod checkbox;
mod date;
mod integer;
mod media;
mod reference;
mod select;
mod text;

pub use checkbox::CheckBoxFieldSerializer;
pub use date::{validate_date_format, DateFieldSerializer, DEFAULT_DATE_FORMAT};
pub use integer::IntegerFieldSerializer;
pub use media::{
    AudioFieldSerializer, DocumentFieldSerializer, ImageFieldSerializer, MediaFieldSerializer,
    MediaReferenceSerializer, VideoFieldSerializer,
};
pub use reference::{PageFieldSerializer, PostFieldSerializer, ReferenceFieldSerializer};
pub use select::SelectFieldSerializer;
pub use text::StringFieldSerializer;

/// Converts fields of one kind to and from their persisted text.
pub trait FieldSerializer: Send + Sync {
    /// The kind this serializer was built for.
    fn kind(&self) -> FieldKind;

    /// Convert a field to text. Returns `Ok(None)` for a field without a value.
    ///
    /// # Errors
    ///
    /// [`SerializerError::TypeMismatch`] if `field` is not of [`kind`](Self::kind).
    fn serialize(&self, field: &Field) -> Result<Option<String>>;

    /// Parse persisted text back into a field. `None` yields the field in its
    /// unset state.
    ///
    /// # Errors
    ///
    /// [`SerializerError::Format`] if non-empty text cannot be parsed.
    fn deserialize(&self, text: Option<&str>) -> Result<Field>;
}

/// Borrow the expected field type or report the mismatch.
fn expect_field<F: FieldValue>(field: &Field) -> Result<&F> {
    F::from_field(field).ok_or_else(|| SerializerError::type_mismatch(F::KIND, field.kind()))
}

/// Trimmed text, or `None` when it is absent or blank.
fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{NumberField, TextField};

    #[test]
    fn non_blank_treats_whitespace_as_empty() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some("  \t")), None);
        assert_eq!(non_blank(Some(" 25 ")), Some("25"));
    }

    #[test]
    fn expect_field_reports_both_kinds() {
        let field: Field = TextField::new("x").into();
        let err = expect_field::<NumberField>(&field).unwrap_err();
        assert!(matches!(
            err,
            SerializerError::TypeMismatch {
                expected: FieldKind::Number,
                found: FieldKind::Text,
            }
        ));
    }
}

use std::fmt;
use std::marker::PhantomData;

use uuid::Uuid;

use super::{expect_field, non_blank, FieldSerializer};
use crate::error::{Result, SerializerError};
use crate::fields::{AudioField, DocumentField, Field, ImageField, MediaField, MediaValue, VideoField};
use crate::kind::FieldKind;

/// Serializes media references as the hyphenated asset id.
///
/// An unset reference is written as the empty marker and read back as an
/// unset reference.
pub struct MediaReferenceSerializer<F> {
    _field: PhantomData<fn() -> F>,
}

pub type ImageFieldSerializer = MediaReferenceSerializer<ImageField>;
pub type VideoFieldSerializer = MediaReferenceSerializer<VideoField>;
pub type AudioFieldSerializer = MediaReferenceSerializer<AudioField>;
pub type DocumentFieldSerializer = MediaReferenceSerializer<DocumentField>;
pub type MediaFieldSerializer = MediaReferenceSerializer<MediaField>;

impl<F: MediaValue> MediaReferenceSerializer<F> {
    pub fn new() -> Self {
        Self {
            _field: PhantomData,
        }
    }
}

impl<F: MediaValue> Default for MediaReferenceSerializer<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: MediaValue> fmt::Debug for MediaReferenceSerializer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MediaReferenceSerializer<{}>", F::KIND)
    }
}

impl<F: MediaValue> FieldSerializer for MediaReferenceSerializer<F> {
    fn kind(&self) -> FieldKind {
        F::KIND
    }

    fn serialize(&self, field: &Field) -> Result<Option<String>> {
        let field = expect_field::<F>(field)?;
        Ok(field.media_id().map(|id| id.hyphenated().to_string()))
    }

    fn deserialize(&self, text: Option<&str>) -> Result<Field> {
        let id = match non_blank(text) {
            Some(text) => Some(
                Uuid::parse_str(text).map_err(|e| SerializerError::format(F::KIND, text, e))?,
            ),
            None => None,
        };
        Ok(F::from_media_id(id).into())
    }
}

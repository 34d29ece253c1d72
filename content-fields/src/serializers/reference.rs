use std::fmt;
use std::marker::PhantomData;

use uuid::Uuid;

use super::{expect_field, non_blank, FieldSerializer};
use crate::error::{Result, SerializerError};
use crate::fields::{Field, PageField, PostField, ReferenceValue};
use crate::kind::FieldKind;

/// Serializes page and post references as the hyphenated content id.
///
/// References always carry an id; empty input yields the nil id.
pub struct ReferenceFieldSerializer<F> {
    _field: PhantomData<fn() -> F>,
}

pub type PageFieldSerializer = ReferenceFieldSerializer<PageField>;
pub type PostFieldSerializer = ReferenceFieldSerializer<PostField>;

impl<F: ReferenceValue> ReferenceFieldSerializer<F> {
    pub fn new() -> Self {
        Self {
            _field: PhantomData,
        }
    }
}

impl<F: ReferenceValue> Default for ReferenceFieldSerializer<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ReferenceValue> fmt::Debug for ReferenceFieldSerializer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReferenceFieldSerializer<{}>", F::KIND)
    }
}

impl<F: ReferenceValue> FieldSerializer for ReferenceFieldSerializer<F> {
    fn kind(&self) -> FieldKind {
        F::KIND
    }

    fn serialize(&self, field: &Field) -> Result<Option<String>> {
        let field = expect_field::<F>(field)?;
        Ok(Some(field.reference_id().hyphenated().to_string()))
    }

    fn deserialize(&self, text: Option<&str>) -> Result<Field> {
        let id = match non_blank(text) {
            Some(text) => {
                Uuid::parse_str(text).map_err(|e| SerializerError::format(F::KIND, text, e))?
            }
            None => Uuid::nil(),
        };
        Ok(F::from_reference_id(id).into())
    }
}

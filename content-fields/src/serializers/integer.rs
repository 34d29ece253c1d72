use std::fmt;
use std::marker::PhantomData;

use super::{expect_field, non_blank, FieldSerializer};
use crate::error::{Result, SerializerError};
use crate::fields::{Field, IntegerValue};
use crate::kind::FieldKind;

/// Serializes integer-backed fields as decimal text.
pub struct IntegerFieldSerializer<F> {
    _field: PhantomData<fn() -> F>,
}

impl<F: IntegerValue> IntegerFieldSerializer<F> {
    pub fn new() -> Self {
        Self {
            _field: PhantomData,
        }
    }
}

impl<F: IntegerValue> Default for IntegerFieldSerializer<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: IntegerValue> fmt::Debug for IntegerFieldSerializer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntegerFieldSerializer<{}>", F::KIND)
    }
}

impl<F: IntegerValue> FieldSerializer for IntegerFieldSerializer<F> {
    fn kind(&self) -> FieldKind {
        F::KIND
    }

    fn serialize(&self, field: &Field) -> Result<Option<String>> {
        let field = expect_field::<F>(field)?;
        Ok(field.integer().map(|v| v.to_string()))
    }

    fn deserialize(&self, text: Option<&str>) -> Result<Field> {
        let value = match non_blank(text) {
            Some(text) => Some(
                text.parse::<i32>()
                    .map_err(|e| SerializerError::format(F::KIND, text, e))?,
            ),
            None => None,
        };
        Ok(F::from_integer(value).into())
    }
}

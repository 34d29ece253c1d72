use std::fmt;
use std::marker::PhantomData;

use super::{expect_field, FieldSerializer};
use crate::error::Result;
use crate::fields::{Field, TextValue};
use crate::kind::FieldKind;

/// Identity serializer for string-backed fields.
pub struct StringFieldSerializer<F> {
    _field: PhantomData<fn() -> F>,
}

impl<F: TextValue> StringFieldSerializer<F> {
    pub fn new() -> Self {
        Self {
            _field: PhantomData,
        }
    }
}

impl<F: TextValue> Default for StringFieldSerializer<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: TextValue> fmt::Debug for StringFieldSerializer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StringFieldSerializer<{}>", F::KIND)
    }
}

impl<F: TextValue> FieldSerializer for StringFieldSerializer<F> {
    fn kind(&self) -> FieldKind {
        F::KIND
    }

    fn serialize(&self, field: &Field) -> Result<Option<String>> {
        let field = expect_field::<F>(field)?;
        Ok(field.text().map(str::to_owned))
    }

    fn deserialize(&self, text: Option<&str>) -> Result<Field> {
        Ok(F::from_text(text.map(str::to_owned)).into())
    }
}

use std::fmt;
use std::marker::PhantomData;

use super::{expect_field, non_blank, FieldSerializer};
use crate::error::{Result, SerializerError};
use crate::fields::{BooleanValue, Field};
use crate::kind::FieldKind;

const TRUE: &str = "True";
const FALSE: &str = "False";

/// Serializes boolean fields as `True` / `False`.
///
/// Parsing ignores case and surrounding whitespace. Empty input yields
/// `false`.
pub struct CheckBoxFieldSerializer<F> {
    _field: PhantomData<fn() -> F>,
}

impl<F: BooleanValue> CheckBoxFieldSerializer<F> {
    pub fn new() -> Self {
        Self {
            _field: PhantomData,
        }
    }
}

impl<F: BooleanValue> Default for CheckBoxFieldSerializer<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: BooleanValue> fmt::Debug for CheckBoxFieldSerializer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CheckBoxFieldSerializer<{}>", F::KIND)
    }
}

impl<F: BooleanValue> FieldSerializer for CheckBoxFieldSerializer<F> {
    fn kind(&self) -> FieldKind {
        F::KIND
    }

    fn serialize(&self, field: &Field) -> Result<Option<String>> {
        let field = expect_field::<F>(field)?;
        let text = if field.boolean() { TRUE } else { FALSE };
        Ok(Some(text.to_string()))
    }

    fn deserialize(&self, text: Option<&str>) -> Result<Field> {
        let value = match non_blank(text) {
            None => false,
            Some(text) if text.eq_ignore_ascii_case(TRUE) => true,
            Some(text) if text.eq_ignore_ascii_case(FALSE) => false,
            Some(text) => {
                return Err(SerializerError::format(
                    F::KIND,
                    text,
                    "expected 'True' or 'False'",
                ))
            }
        };
        Ok(F::from_boolean(value).into())
    }
}

use std::fmt;
use std::marker::PhantomData;

use super::FieldSerializer;
use crate::error::{Result, SerializerError};
use crate::fields::{Field, SelectEnum, SelectField};
use crate::kind::FieldKind;

/// Serializes select fields over `E` as the member name.
///
/// Parsing is lenient: text that is not exactly one of `E`'s member names
/// (including the empty marker) falls back to the first declared member.
pub struct SelectFieldSerializer<E> {
    _enum: PhantomData<fn() -> E>,
}

impl<E: SelectEnum> SelectFieldSerializer<E> {
    pub fn new() -> Self {
        Self { _enum: PhantomData }
    }
}

impl<E: SelectEnum> Default for SelectFieldSerializer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: SelectEnum> fmt::Debug for SelectFieldSerializer<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SelectFieldSerializer<{}>", E::NAME)
    }
}

impl<E: SelectEnum> FieldSerializer for SelectFieldSerializer<E> {
    fn kind(&self) -> FieldKind {
        SelectField::<E>::KIND
    }

    fn serialize(&self, field: &Field) -> Result<Option<String>> {
        match field {
            Field::Select(select) if select.enum_name == E::NAME => Ok(Some(select.value.clone())),
            other => Err(SerializerError::type_mismatch(self.kind(), other.kind())),
        }
    }

    fn deserialize(&self, text: Option<&str>) -> Result<Field> {
        let field = match text.and_then(E::from_name) {
            Some(member) => SelectField::new(member),
            None => SelectField::<E>::default(),
        };
        Ok(field.into())
    }
}

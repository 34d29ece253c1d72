use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use super::{expect_field, non_blank, FieldSerializer};
use crate::error::{Result, SerializerError};
use crate::fields::{DateField, Field, FieldValue};
use crate::kind::FieldKind;

/// Output format used unless configured otherwise.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date-time forms accepted on input besides the configured format.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Dates written and read back while validating a format. They sit far from
/// 2000 so two-digit years fail, and their day exceeds 12 so a swapped day
/// and month fail.
const SAMPLE_DATES: &[(i32, u32, u32)] = &[(1901, 12, 31), (2087, 6, 15)];

/// Check that `format` is a strftime pattern chrono understands and that
/// text written with it reads back as the same day.
///
/// # Errors
///
/// [`SerializerError::InvalidDateFormat`] for an empty or malformed pattern,
/// or one that loses the year, month or day (`%Y-%m`, `%d.%m.%y`).
pub fn validate_date_format(format: &str) -> Result<()> {
    let invalid = || SerializerError::InvalidDateFormat {
        format: format.to_string(),
    };

    let malformed = StrftimeItems::new(format).any(|item| matches!(item, Item::Error));
    if format.trim().is_empty() || malformed {
        return Err(invalid());
    }

    let serializer = DateFieldSerializer::with_format(format);
    let samples = SAMPLE_DATES
        .iter()
        .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d));
    for date in samples {
        let text = serializer.render(date.and_time(NaiveTime::MIN))?;
        let read = serializer.parse(text.trim()).map(|value| value.date());
        if read != Some(date) {
            return Err(invalid());
        }
    }
    Ok(())
}

/// Serializes date fields as their date only (`2001-01-05`).
///
/// Input may carry a time of day; it is kept on the parsed value even though
/// it is never written back out.
#[derive(Debug, Clone)]
pub struct DateFieldSerializer {
    format: String,
}

impl DateFieldSerializer {
    pub fn new() -> Self {
        Self::with_format(DEFAULT_DATE_FORMAT)
    }

    /// Use a custom strftime output format. The format is also tried first
    /// when parsing. It is not checked; see [`try_with_format`](Self::try_with_format).
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    /// Like [`with_format`](Self::with_format), rejecting formats that fail
    /// [`validate_date_format`].
    pub fn try_with_format(format: impl Into<String>) -> Result<Self> {
        let format = format.into();
        validate_date_format(&format)?;
        Ok(Self::with_format(format))
    }

    // chrono reports a bad pattern as a fmt::Error while rendering
    fn render(&self, value: NaiveDateTime) -> Result<String> {
        let mut text = String::new();
        write!(text, "{}", value.format(&self.format)).map_err(|_| {
            SerializerError::InvalidDateFormat {
                format: self.format.clone(),
            }
        })?;
        Ok(text)
    }

    fn parse(&self, text: &str) -> Option<NaiveDateTime> {
        let custom = (self.format != DEFAULT_DATE_FORMAT).then_some(self.format.as_str());

        let date_times = custom.into_iter().chain(DATE_TIME_FORMATS.iter().copied());
        for format in date_times {
            if let Ok(value) = NaiveDateTime::parse_from_str(text, format) {
                return Some(value);
            }
        }

        let dates = custom.into_iter().chain(std::iter::once(DEFAULT_DATE_FORMAT));
        for format in dates {
            if let Ok(date) = NaiveDate::parse_from_str(text, format) {
                return Some(date.and_time(NaiveTime::MIN));
            }
        }

        DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|value| value.naive_local())
    }
}

impl Default for DateFieldSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldSerializer for DateFieldSerializer {
    fn kind(&self) -> FieldKind {
        DateField::KIND
    }

    fn serialize(&self, field: &Field) -> Result<Option<String>> {
        let field = expect_field::<DateField>(field)?;
        field.value.map(|value| self.render(value)).transpose()
    }

    fn deserialize(&self, text: Option<&str>) -> Result<Field> {
        let Some(text) = non_blank(text) else {
            return Ok(DateField::default().into());
        };
        let value = self.parse(text).ok_or_else(|| {
            SerializerError::format(FieldKind::Date, text, "not a recognized date or date-time")
        })?;
        Ok(DateField::new(value).into())
    }
}

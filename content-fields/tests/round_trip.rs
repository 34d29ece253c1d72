//! Property tests: deserialize(serialize(field)) gives the field back.

use chrono::NaiveDate;
use content_fields::{
    validate_date_format, AudioField, CheckBoxField, ColorField, DateField, DocumentField, Field,
    FieldKind, HtmlField, ImageField, MarkdownField, MediaField, NumberField, PageField,
    PostField, ReadonlyField, SelectEnum, SelectField, SerializerConfig, SerializerManager,
    StringField, TextField, VideoField,
};
use proptest::prelude::*;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Priority {
    Low,
    Normal,
    High,
}

impl SelectEnum for Priority {
    const NAME: &'static str = "Priority";
    const VARIANTS: &'static [Self] = &[Priority::Low, Priority::Normal, Priority::High];

    fn name(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Normal => "Normal",
            Priority::High => "High",
        }
    }
}

fn manager() -> SerializerManager {
    let manager = SerializerManager::with_defaults();
    manager.register(
        SelectField::<Priority>::KIND,
        content_fields::SelectFieldSerializer::<Priority>::new(),
    );
    manager
}

fn round_trip(manager: &SerializerManager, field: Field) -> Field {
    let text = manager.serialize(&field).unwrap();
    manager.deserialize(field.kind(), text.as_deref()).unwrap()
}

fn uuid() -> impl Strategy<Value = Uuid> {
    any::<u128>().prop_map(Uuid::from_u128)
}

/// Formats a deployment might configure, each one that reads back its own output.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%d.%m.%Y",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%d %B %Y",
    "%d %b %Y",
    "%Y-%m-%d %H:%M",
];

fn day() -> impl Strategy<Value = NaiveDate> {
    (1i32..=9999, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    #[test]
    fn number_round_trips(value in any::<i32>()) {
        let field: Field = NumberField::new(value).into();
        prop_assert_eq!(round_trip(&manager(), field.clone()), field);
    }

    #[test]
    fn text_round_trips_verbatim(value in ".*") {
        let manager = manager();
        for field in [
            Field::from(TextField::new(value.clone())),
            Field::from(StringField::new(value.clone())),
            Field::from(HtmlField::new(value.clone())),
            Field::from(MarkdownField::new(value.clone())),
            Field::from(ColorField::new(value.clone())),
            Field::from(ReadonlyField::new(value)),
        ] {
            prop_assert_eq!(round_trip(&manager, field.clone()), field);
        }
    }

    #[test]
    fn references_round_trip(id in uuid()) {
        let manager = manager();
        for field in [
            Field::from(ImageField::new(id)),
            Field::from(VideoField::new(id)),
            Field::from(AudioField::new(id)),
            Field::from(DocumentField::new(id)),
            Field::from(MediaField::new(id)),
            Field::from(PageField::new(id)),
            Field::from(PostField::new(id)),
        ] {
            prop_assert_eq!(round_trip(&manager, field.clone()), field);
        }
    }

    #[test]
    fn date_keeps_the_day(date in day(), hour in 0u32..24, minute in 0u32..60) {
        let value = date.and_hms_opt(hour, minute, 0).unwrap();
        let field: Field = DateField::new(value).into();
        let back = DateField::try_from(round_trip(&manager(), field)).unwrap();
        prop_assert_eq!(back.value.map(|v| v.date()), Some(date));
    }

    #[test]
    fn configured_date_format_keeps_the_day(
        format in prop::sample::select(DATE_FORMATS),
        date in day(),
        hour in 0u32..24,
    ) {
        prop_assert!(validate_date_format(format).is_ok());
        let config = SerializerConfig {
            date_format: format.to_string(),
            ..SerializerConfig::default()
        };
        let manager = SerializerManager::from_config(&config).unwrap();

        let field: Field = DateField::new(date.and_hms_opt(hour, 0, 0).unwrap()).into();
        let back = DateField::try_from(round_trip(&manager, field)).unwrap();
        prop_assert_eq!(back.value.map(|v| v.date()), Some(date));
    }

    #[test]
    fn checkbox_round_trips(value in any::<bool>()) {
        let field: Field = CheckBoxField::new(value).into();
        prop_assert_eq!(round_trip(&manager(), field.clone()), field);
    }

    #[test]
    fn select_round_trips(index in 0usize..Priority::VARIANTS.len()) {
        let member = Priority::VARIANTS[index];
        let field: Field = SelectField::new(member).into();
        let back = SelectField::<Priority>::try_from(round_trip(&manager(), field)).unwrap();
        prop_assert_eq!(back.member(), Some(member));
    }

    #[test]
    fn unknown_select_names_fall_back(name in "[a-z]{1,12}") {
        let field = manager()
            .deserialize(FieldKind::Select(Priority::NAME), Some(&name))
            .unwrap();
        let select = SelectField::<Priority>::try_from(field).unwrap();
        prop_assert_eq!(select.member(), Some(Priority::Low));
    }
}

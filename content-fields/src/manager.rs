//! SerializerManager: registry binding field kinds to serializers.
//!
//! The manager is an explicit object owned by whoever persists fields; there
//! is no process-global instance. Registration, removal and lookup may be
//! called concurrently: the map sits behind a read/write lock and every
//! operation takes it exactly once.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::config::SerializerConfig;
use crate::error::{Result, SerializerError};
use crate::fields::{
    AudioField, CheckBoxField, ColorField, DocumentField, Field, FieldValue, HtmlField,
    ImageField, MarkdownField, MediaField, NumberField, PageField, PostField, ReadonlyField,
    StringField, TextField, VideoField,
};
use crate::kind::FieldKind;
use crate::serializers::{
    CheckBoxFieldSerializer, DateFieldSerializer, FieldSerializer, IntegerFieldSerializer,
    MediaReferenceSerializer, ReferenceFieldSerializer, StringFieldSerializer,
};

/// Shared handle to a registered serializer.
pub type SharedSerializer = Arc<dyn FieldSerializer>;

/// Registry of serializers keyed by [`FieldKind`].
///
/// Each kind is either unregistered or bound to exactly one serializer.
/// Registering a kind again replaces the previous serializer.
///
/// ```
/// use content_fields::{FieldKind, SerializerManager, StringFieldSerializer, TextField};
///
/// let manager = SerializerManager::new();
/// manager.register(FieldKind::Text, StringFieldSerializer::<TextField>::new());
/// assert!(manager.get(FieldKind::Text).is_some());
///
/// manager.unregister(FieldKind::Text);
/// assert!(manager.get(FieldKind::Text).is_none());
/// ```
#[derive(Default)]
pub struct SerializerManager {
    serializers: RwLock<HashMap<FieldKind, SharedSerializer>>,
}

impl SerializerManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self {
            serializers: RwLock::new(HashMap::new()),
        }
    }

    /// Create a manager with a serializer for every built-in kind.
    pub fn with_defaults() -> Self {
        Self::with_built_ins(&SerializerConfig::default())
    }

    /// Create a manager with the built-in serializers, honoring the
    /// configured date format and leaving out disabled kinds.
    ///
    /// # Errors
    ///
    /// [`SerializerError::InvalidDateFormat`] if dates written with the
    /// configured format would not read back as the same day.
    pub fn from_config(config: &SerializerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_built_ins(config))
    }

    fn with_built_ins(config: &SerializerConfig) -> Self {
        let manager = Self::new();
        let disabled = config.disabled_kinds();

        for kind in FieldKind::BUILT_IN {
            if disabled.contains(kind) {
                continue;
            }
            if let Some(serializer) = built_in_serializer(*kind, config) {
                manager.register_shared(*kind, serializer);
            }
        }

        debug!(
            serializers = manager.len(),
            disabled = disabled.len(),
            date_format = %config.date_format,
            "serializer manager initialized"
        );
        manager
    }

    /// Register `serializer` for `kind`, replacing any previous one.
    pub fn register<S>(&self, kind: FieldKind, serializer: S)
    where
        S: FieldSerializer + 'static,
    {
        self.register_shared(kind, Arc::new(serializer));
    }

    /// Register for the kind of field type `F`.
    pub fn register_for<F, S>(&self, serializer: S)
    where
        F: FieldValue,
        S: FieldSerializer + 'static,
    {
        self.register(F::KIND, serializer);
    }

    /// Register an already shared serializer for `kind`.
    pub fn register_shared(&self, kind: FieldKind, serializer: SharedSerializer) {
        if serializer.kind() != kind {
            warn!(
                %kind,
                serializer_kind = %serializer.kind(),
                "registering serializer under a kind it was not built for"
            );
        }
        let previous = self.write().insert(kind, serializer);
        if previous.is_some() {
            debug!(%kind, "replaced field serializer");
        } else {
            debug!(%kind, "registered field serializer");
        }
    }

    /// Remove the serializer for `kind`. Returns whether one was registered.
    pub fn unregister(&self, kind: FieldKind) -> bool {
        let removed = self.write().remove(&kind).is_some();
        if removed {
            debug!(%kind, "unregistered field serializer");
        }
        removed
    }

    /// Remove the serializer for the kind of field type `F`.
    pub fn unregister_for<F: FieldValue>(&self) -> bool {
        self.unregister(F::KIND)
    }

    /// The serializer registered for `kind`, if any.
    pub fn get(&self, kind: FieldKind) -> Option<SharedSerializer> {
        self.read().get(&kind).cloned()
    }

    /// The serializer registered for the kind of field type `F`, if any.
    pub fn get_for<F: FieldValue>(&self) -> Option<SharedSerializer> {
        self.get(F::KIND)
    }

    /// Whether a serializer is registered for `kind`.
    pub fn contains(&self, kind: FieldKind) -> bool {
        self.read().contains_key(&kind)
    }

    /// All registered kinds, sorted by display name.
    pub fn kinds(&self) -> Vec<FieldKind> {
        let mut kinds: Vec<_> = self.read().keys().copied().collect();
        kinds.sort_by_cached_key(|kind| kind.to_string());
        kinds
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no serializer is registered.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Serialize `field` with the serializer registered for its kind.
    ///
    /// # Errors
    ///
    /// [`SerializerError::NotRegistered`] if no serializer handles the field's
    /// kind, otherwise whatever the serializer reports.
    pub fn serialize(&self, field: &Field) -> Result<Option<String>> {
        self.require(field.kind())?.serialize(field)
    }

    /// Deserialize `text` with the serializer registered for `kind`.
    ///
    /// # Errors
    ///
    /// [`SerializerError::NotRegistered`] if no serializer handles `kind`,
    /// otherwise whatever the serializer reports.
    pub fn deserialize(&self, kind: FieldKind, text: Option<&str>) -> Result<Field> {
        self.require(kind)?.deserialize(text)
    }

    fn require(&self, kind: FieldKind) -> Result<SharedSerializer> {
        self.get(kind)
            .ok_or(SerializerError::NotRegistered { kind })
    }

    // Every mutation is a single insert or remove, so a poisoned map is
    // still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<FieldKind, SharedSerializer>> {
        self.serializers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<FieldKind, SharedSerializer>> {
        self.serializers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for SerializerManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializerManager")
            .field("kinds", &self.kinds())
            .finish()
    }
}

/// The serializer shipped for a built-in kind.
fn built_in_serializer(kind: FieldKind, config: &SerializerConfig) -> Option<SharedSerializer> {
    let serializer: SharedSerializer = match kind {
        FieldKind::Text => Arc::new(StringFieldSerializer::<TextField>::new()),
        FieldKind::String => Arc::new(StringFieldSerializer::<StringField>::new()),
        FieldKind::Html => Arc::new(StringFieldSerializer::<HtmlField>::new()),
        FieldKind::Markdown => Arc::new(StringFieldSerializer::<MarkdownField>::new()),
        FieldKind::Color => Arc::new(StringFieldSerializer::<ColorField>::new()),
        FieldKind::Readonly => Arc::new(StringFieldSerializer::<ReadonlyField>::new()),
        FieldKind::Number => Arc::new(IntegerFieldSerializer::<NumberField>::new()),
        FieldKind::Date => Arc::new(DateFieldSerializer::with_format(config.date_format.clone())),
        FieldKind::CheckBox => Arc::new(CheckBoxFieldSerializer::<CheckBoxField>::new()),
        FieldKind::Image => Arc::new(MediaReferenceSerializer::<ImageField>::new()),
        FieldKind::Video => Arc::new(MediaReferenceSerializer::<VideoField>::new()),
        FieldKind::Audio => Arc::new(MediaReferenceSerializer::<AudioField>::new()),
        FieldKind::Document => Arc::new(MediaReferenceSerializer::<DocumentField>::new()),
        FieldKind::Media => Arc::new(MediaReferenceSerializer::<MediaField>::new()),
        FieldKind::Page => Arc::new(ReferenceFieldSerializer::<PageField>::new()),
        FieldKind::Post => Arc::new(ReferenceFieldSerializer::<PostField>::new()),
        FieldKind::Select(_) => return None,
    };
    Some(serializer)
}

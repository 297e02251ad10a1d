//! Option groups and picker configuration.

use std::fmt;

use floem::reactive::ReadSignal;
use indexmap::IndexMap;

use crate::constants;
use crate::error::PickerError;

/// One named column: its options, their labels, a title, and the bound value.
///
/// The value signal is owned by the consumer. The picker only reads it and
/// reports new selections through its change callback.
pub struct OptionGroup<T: 'static> {
    options: Vec<T>,
    texts: Vec<String>,
    title: String,
    value: ReadSignal<T>,
}

impl<T: Clone + PartialEq + 'static> OptionGroup<T> {
    pub fn new(
        title: impl Into<String>,
        options: Vec<T>,
        texts: Vec<String>,
        value: ReadSignal<T>,
    ) -> Self {
        Self {
            options,
            texts,
            title: title.into(),
            value,
        }
    }

    /// Group whose labels are the options' `Display` output.
    pub fn from_options(title: impl Into<String>, options: Vec<T>, value: ReadSignal<T>) -> Self
    where
        T: fmt::Display,
    {
        let texts = options.iter().map(ToString::to_string).collect();
        Self::new(title, options, texts, value)
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn value(&self) -> ReadSignal<T> {
        self.value
    }

    /// Position of `value` among the options.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.options.iter().position(|o| o == value)
    }

    pub(crate) fn into_parts(self) -> (String, Vec<T>, Vec<String>, ReadSignal<T>) {
        (self.title, self.options, self.texts, self.value)
    }

    fn validate(&self, name: &str) -> Result<(), PickerError> {
        if self.options.is_empty() {
            return Err(PickerError::EmptyGroup {
                group: name.to_string(),
            });
        }
        if self.options.len() != self.texts.len() {
            return Err(PickerError::LengthMismatch {
                group: name.to_string(),
                options: self.options.len(),
                texts: self.texts.len(),
            });
        }
        Ok(())
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for OptionGroup<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionGroup")
            .field("title", &self.title)
            .field("options", &self.options)
            .field("texts", &self.texts)
            .finish_non_exhaustive()
    }
}

/// Everything the picker renders: groups in column order plus row sizing.
#[derive(Debug)]
pub struct PickerConfig<T: 'static> {
    pub(crate) groups: IndexMap<String, OptionGroup<T>>,
    pub(crate) item_height: f64,
    pub(crate) height: f64,
}

impl<T: Clone + PartialEq + 'static> Default for PickerConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq + 'static> PickerConfig<T> {
    pub fn new() -> Self {
        Self {
            groups: IndexMap::new(),
            item_height: constants::ITEM_HEIGHT,
            height: constants::HEIGHT,
        }
    }

    /// Height of one option row (default 36).
    pub fn item_height(mut self, item_height: f64) -> Self {
        self.item_height = item_height;
        self
    }

    /// Height of the visible scroll window (default 216).
    pub fn height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Append a column. Columns render left to right in insertion order;
    /// re-using a name replaces that column in place.
    pub fn group(mut self, name: impl Into<String>, group: OptionGroup<T>) -> Result<Self, PickerError> {
        let name = name.into();
        group.validate(&name)?;
        self.groups.insert(name, group);
        Ok(self)
    }

    /// Assemble groups from per-name mappings, ordered by `option_groups`.
    pub fn from_maps(
        option_groups: IndexMap<String, Vec<T>>,
        mut text_groups: IndexMap<String, Vec<String>>,
        mut value_groups: IndexMap<String, ReadSignal<T>>,
        mut title_groups: IndexMap<String, String>,
    ) -> Result<Self, PickerError> {
        let missing = |group: &str, mapping: &'static str| PickerError::MissingEntry {
            group: group.to_string(),
            mapping,
        };
        let mut config = Self::new();
        for (name, options) in option_groups {
            let texts = text_groups
                .shift_remove(&name)
                .ok_or_else(|| missing(&name, "text groups"))?;
            let value = value_groups
                .shift_remove(&name)
                .ok_or_else(|| missing(&name, "value groups"))?;
            let title = title_groups
                .shift_remove(&name)
                .ok_or_else(|| missing(&name, "title groups"))?;
            config = config.group(name, OptionGroup::new(title, options, texts, value))?;
        }
        Ok(config)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&OptionGroup<T>> {
        self.groups.get(name)
    }
}

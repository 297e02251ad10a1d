//! Error types for picker configuration.

use thiserror::Error;

/// Problems with the option groups handed to the picker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    /// The bound value matches none of the group's options.
    ///
    /// Reported as a warning only; the column recovers by selecting the
    /// first option.
    #[error("\"{group}\" doesn't contain an option of \"{value}\"")]
    ValueNotFound { group: String, value: String },

    #[error("\"{group}\" has {options} options but {texts} labels")]
    LengthMismatch {
        group: String,
        options: usize,
        texts: usize,
    },

    #[error("\"{group}\" has no entry in {mapping}")]
    MissingEntry { group: String, mapping: &'static str },

    #[error("\"{group}\" has no options")]
    EmptyGroup { group: String },
}

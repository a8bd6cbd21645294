use crate::field::FieldKind;

/// Construction-time configuration failures. None of these are recoverable
/// at the point they surface; they indicate a wrong model declaration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("no editor for parameter `{name}` of kind {kind}")]
    NoEditor { name: String, kind: FieldKind },

    #[error("model `{model}` has no parameter named `{name}`")]
    UnknownParameter { model: String, name: String },

    #[error("an interactive window needs at least one model")]
    NoModels,
}

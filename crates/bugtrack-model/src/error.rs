use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("catalog has no modules")]
    EmptyCatalog,

    #[error(
        "invalid module name {name:?}: names must start with a letter and \
         contain only ASCII letters, digits, and spaces"
    )]
    InvalidModuleName { name: String },

    #[error("module {name:?} has no sections")]
    EmptySections { name: String },

    #[error("section {section:?} of module {name:?} is empty")]
    EmptySectionName { name: String, section: String },

    #[error("modules {first:?} and {second:?} both derive the range identifier {identifier:?}")]
    DuplicateRangeName {
        first: String,
        second: String,
        identifier: String,
    },

    #[error("catalog has {count} modules, the reference sheet holds at most {max}")]
    TooManyModules { count: usize, max: usize },

    #[error("failed to parse catalog TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;

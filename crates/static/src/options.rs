//! Functional options shared by every static resource constructor.
//!
//! Each [`HostOption`] sets exactly one field of [`Options`]. Resolution starts
//! from [`Options::default`] (every field empty) and applies options in order,
//! so a later option for the same field wins.
//!
//! ```rust
//! use hostcat_static::options::{get_opts, with_name, with_public_id};
//!
//! let opts = get_opts([with_name("alpha"), with_public_id("id-1")]);
//! assert_eq!(opts.public_id(), "id-1");
//! assert_eq!(opts.name(), "alpha");
//! assert_eq!(opts.description(), "");
//! ```

use serde::{Deserialize, Serialize};

/// Resolved options. Empty strings mean "not provided".
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    public_id: String,
    name: String,
    description: String,
}

impl Options {
    #[must_use]
    pub fn public_id(&self) -> &str {
        &self.public_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Converts a resolved record back into the options that reproduce it.
    ///
    /// Empty fields are skipped, so the result can serve as a baseline that
    /// call-site options extend or override.
    #[must_use]
    pub fn into_opts(self) -> Vec<HostOption> {
        [
            HostOption::PublicId(self.public_id),
            HostOption::Name(self.name),
            HostOption::Description(self.description),
        ]
        .into_iter()
        .filter(|opt| !opt.value().is_empty())
        .collect()
    }
}

impl FromIterator<HostOption> for Options {
    fn from_iter<I: IntoIterator<Item = HostOption>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut opts, opt| {
            opt.apply(&mut opts);
            opts
        })
    }
}

/// A single option, applied to [`Options`] during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HostOption {
    PublicId(String),
    Name(String),
    Description(String),
}

impl HostOption {
    /// Writes this option's value into its field, replacing any previous value.
    pub fn apply(self, opts: &mut Options) {
        match self {
            Self::PublicId(id) => opts.public_id = id,
            Self::Name(name) => opts.name = name,
            Self::Description(desc) => opts.description = desc,
        }
    }

    fn value(&self) -> &str {
        match self {
            Self::PublicId(v) | Self::Name(v) | Self::Description(v) => v,
        }
    }
}

/// Resolves a sequence of options over the defaults.
///
/// An empty sequence yields [`Options::default`].
pub fn get_opts(opts: impl IntoIterator<Item = HostOption>) -> Options {
    opts.into_iter().collect()
}

/// Provides an optional public id.
pub fn with_public_id(id: impl Into<String>) -> HostOption {
    HostOption::PublicId(id.into())
}

/// Provides an optional name.
pub fn with_name(name: impl Into<String>) -> HostOption {
    HostOption::Name(name.into())
}

/// Provides an optional description.
pub fn with_description(desc: impl Into<String>) -> HostOption {
    HostOption::Description(desc.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_options_yields_defaults() {
        let opts = get_opts([]);
        assert_eq!(opts, Options::default());
        assert_eq!(opts.public_id(), "");
        assert_eq!(opts.name(), "");
        assert_eq!(opts.description(), "");
    }

    #[test]
    fn each_option_sets_only_its_field() {
        let opts = get_opts([with_public_id("hst_23456789AB")]);
        assert_eq!(opts.public_id(), "hst_23456789AB");
        assert_eq!(opts.name(), "");
        assert_eq!(opts.description(), "");

        let opts = get_opts([with_name("alpha")]);
        assert_eq!(opts.public_id(), "");
        assert_eq!(opts.name(), "alpha");
        assert_eq!(opts.description(), "");

        let opts = get_opts([with_description("rack 4")]);
        assert_eq!(opts.public_id(), "");
        assert_eq!(opts.name(), "");
        assert_eq!(opts.description(), "rack 4");
    }

    #[test]
    fn last_write_wins() {
        let opts = get_opts([with_description("x"), with_description("y")]);
        assert_eq!(opts.description(), "y");
        assert_eq!(opts.public_id(), "");
        assert_eq!(opts.name(), "");
    }

    #[test]
    fn explicit_empty_value_clears_field() {
        let opts = get_opts([with_name("alpha"), with_name("")]);
        assert_eq!(opts.name(), "");
    }

    #[test]
    fn into_opts_skips_empty_fields() {
        let opts = get_opts([with_name("alpha"), with_description("rack 4")]);
        assert_eq!(opts.clone().into_opts(), vec![with_name("alpha"), with_description("rack 4")]);
        assert!(Options::default().into_opts().is_empty());
    }

    #[test]
    fn deserializes_partial_record() {
        let opts: Options = serde_json::from_str(r#"{ "name": "alpha" }"#).unwrap();
        assert_eq!(opts, get_opts([with_name("alpha")]));
    }
}

//! Attribute selection options passed through to the serializer.

use crate::error::SerializationResult;
use crate::serialization::path::AttributePath;

/// A single attribute selection directive.
///
/// `Include` corresponds to the SCIM `attributes` query parameter and
/// `Exclude` to `excludedAttributes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializeOptions {
    Include(Vec<String>),
    Exclude(Vec<String>),
}

impl SerializeOptions {
    pub fn include<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Include(paths.into_iter().map(Into::into).collect())
    }

    pub fn exclude<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Exclude(paths.into_iter().map(Into::into).collect())
    }

    /// Build options from raw `attributes` / `excludedAttributes` query values.
    ///
    /// Values are comma-separated; blank entries are skipped and absent or
    /// empty parameters produce no option.
    pub fn from_query(attributes: Option<&str>, excluded_attributes: Option<&str>) -> Vec<Self> {
        let mut options = Vec::new();
        if let Some(paths) = attributes.map(split_list).filter(|p| !p.is_empty()) {
            options.push(Self::Include(paths));
        }
        if let Some(paths) = excluded_attributes.map(split_list).filter(|p| !p.is_empty()) {
            options.push(Self::Exclude(paths));
        }
        options
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The effective selection after merging every option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// No selection, every returnable attribute is emitted
    All,
    Include(Vec<AttributePath>),
    Exclude(Vec<AttributePath>),
}

impl Selection {
    /// Merge options into a single selection.
    ///
    /// Every path is parsed, including ones that end up unused. When any
    /// include path is present, exclusions are ignored.
    pub fn from_options(options: &[SerializeOptions], schemas: &[String]) -> SerializationResult<Self> {
        let mut included = Vec::new();
        let mut excluded = Vec::new();

        for option in options {
            match option {
                SerializeOptions::Include(paths) => {
                    for raw in paths {
                        included.push(AttributePath::parse(raw, schemas)?);
                    }
                }
                SerializeOptions::Exclude(paths) => {
                    for raw in paths {
                        excluded.push(AttributePath::parse(raw, schemas)?);
                    }
                }
            }
        }

        if !included.is_empty() {
            if !excluded.is_empty() {
                log::debug!(
                    "Ignoring {} excluded attribute(s) because attributes were requested",
                    excluded.len()
                );
            }
            Ok(Self::Include(included))
        } else if !excluded.is_empty() {
            Ok(Self::Exclude(excluded))
        } else {
            Ok(Self::All)
        }
    }
}

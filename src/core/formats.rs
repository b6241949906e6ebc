//! Country → TIN format table.

use std::collections::BTreeMap;

use regex::Regex;

use super::{Template, TinError};

/// A country's format table: `(type_name, template)` in match order.
pub type FormatTable<'a> = &'a [(&'a str, &'a [(&'a str, &'a str)])];

/// Formats shipped with the crate.
///
/// Order inside a country matters: the first structural match wins.
pub const BUILTIN_FORMATS: FormatTable<'static> = &[
    ("AU", &[("au_abn", "NN NNN NNN NNN"), ("au_acn", "NNN NNN NNN")]),
    ("CA", &[("ca_gst", "NNNNNNNNN[RT0001]")]),
    ("IN", &[("in_gst", "NNXXXXXXXXXXNAN")]),
];

/// A named TIN format belonging to one country, with its compiled matcher.
#[derive(Debug, Clone)]
pub struct FormatSpec {
    country: String,
    type_name: String,
    template: Template,
    matcher: Regex,
}

impl FormatSpec {
    /// Parse and compile a format.
    ///
    /// # Errors
    ///
    /// Returns [`TinError::Template`] if the template is malformed.
    pub fn new(country: &str, type_name: &str, template: &str) -> Result<Self, TinError> {
        let template = Template::parse(template)?;
        let matcher = Regex::new(&template.to_regex_source())
            .map_err(|e| TinError::Template(format!("{type_name}: {e}")))?;
        Ok(Self {
            country: country.to_string(),
            type_name: type_name.to_string(),
            template,
            matcher,
        })
    }

    /// Country code the format belongs to.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Stable identifier such as `au_abn`.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Whether the whole of `normalized` matches this format.
    pub fn matches(&self, normalized: &str) -> bool {
        self.matcher.is_match(normalized)
    }

    /// Display form of `normalized` under this format.
    pub fn render(&self, normalized: &str) -> String {
        self.template.render(normalized)
    }
}

/// Immutable lookup of formats by country code.
///
/// Matchers are compiled once, when the registry is built; afterwards the
/// registry is read-only and can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    countries: BTreeMap<String, Vec<FormatSpec>>,
}

impl FormatRegistry {
    /// Registry holding [`BUILTIN_FORMATS`].
    ///
    /// # Errors
    ///
    /// Only fails if a built-in template is malformed.
    pub fn builtin() -> Result<Self, TinError> {
        Self::from_table(BUILTIN_FORMATS)
    }

    /// Build a registry from a custom table.
    ///
    /// A country listed twice has its formats appended in order.
    ///
    /// # Errors
    ///
    /// Returns [`TinError::Template`] for the first malformed template.
    pub fn from_table(table: FormatTable<'_>) -> Result<Self, TinError> {
        let mut countries: BTreeMap<String, Vec<FormatSpec>> = BTreeMap::new();
        for &(country, formats) in table {
            let entry = countries.entry(country.to_string()).or_default();
            for &(type_name, template) in formats {
                entry.push(FormatSpec::new(country, type_name, template)?);
            }
        }
        Ok(Self { countries })
    }

    /// Formats for `country_code` in declaration order.
    ///
    /// An unknown country yields an empty slice rather than an error.
    pub fn formats_for(&self, country_code: &str) -> &[FormatSpec] {
        self.countries
            .get(country_code)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether `country_code` has at least one format.
    pub fn is_known_country(&self, country_code: &str) -> bool {
        !self.formats_for(country_code).is_empty()
    }

    /// Configured country codes, sorted.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }
}

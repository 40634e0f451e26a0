//! The closed set of built-in formats

use std::fmt;
use std::str::FromStr;

use crate::error::RegistryError;
use crate::{datetime, host, identifier, ip, pattern, pointer, template, uri};

/// A built-in format assertion.
///
/// Names are matched case-sensitively against the JSON Schema vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Format {
    DateTime,
    Date,
    Time,
    Duration,
    Period,
    Hostname,
    Email,
    Ipv4,
    Ipv6,
    Uri,
    UriReference,
    Iri,
    IriReference,
    UriTemplate,
    Regex,
    JsonPointer,
    RelativeJsonPointer,
    Uuid,
}

impl Format {
    /// Every built-in format, in declaration order
    pub const ALL: [Format; 18] = [
        Format::DateTime,
        Format::Date,
        Format::Time,
        Format::Duration,
        Format::Period,
        Format::Hostname,
        Format::Email,
        Format::Ipv4,
        Format::Ipv6,
        Format::Uri,
        Format::UriReference,
        Format::Iri,
        Format::IriReference,
        Format::UriTemplate,
        Format::Regex,
        Format::JsonPointer,
        Format::RelativeJsonPointer,
        Format::Uuid,
    ];

    /// The name used in a schema's `format` keyword
    pub const fn name(self) -> &'static str {
        match self {
            Format::DateTime => "date-time",
            Format::Date => "date",
            Format::Time => "time",
            Format::Duration => "duration",
            Format::Period => "period",
            Format::Hostname => "hostname",
            Format::Email => "email",
            Format::Ipv4 => "ipv4",
            Format::Ipv6 => "ipv6",
            Format::Uri => "uri",
            Format::UriReference => "uri-reference",
            Format::Iri => "iri",
            Format::IriReference => "iri-reference",
            Format::UriTemplate => "uri-template",
            Format::Regex => "regex",
            Format::JsonPointer => "json-pointer",
            Format::RelativeJsonPointer => "relative-json-pointer",
            Format::Uuid => "uuid",
        }
    }

    /// Resolves a built-in by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        let format = match name {
            "date-time" => Format::DateTime,
            "date" => Format::Date,
            "time" => Format::Time,
            "duration" => Format::Duration,
            "period" => Format::Period,
            "hostname" => Format::Hostname,
            "email" => Format::Email,
            "ipv4" => Format::Ipv4,
            "ipv6" => Format::Ipv6,
            "uri" => Format::Uri,
            "uri-reference" => Format::UriReference,
            "iri" => Format::Iri,
            "iri-reference" => Format::IriReference,
            "uri-template" => Format::UriTemplate,
            "regex" => Format::Regex,
            "json-pointer" => Format::JsonPointer,
            "relative-json-pointer" => Format::RelativeJsonPointer,
            "uuid" => Format::Uuid,
            _ => return None,
        };
        Some(format)
    }

    /// Checks `value` against this format.
    pub fn is_valid(self, value: &str) -> bool {
        match self {
            Format::DateTime => datetime::is_date_time(value),
            Format::Date => datetime::is_date(value),
            Format::Time => datetime::is_time(value),
            Format::Duration => datetime::is_duration(value),
            Format::Period => datetime::is_period(value),
            Format::Hostname => host::is_hostname(value),
            Format::Email => host::is_email(value),
            Format::Ipv4 => ip::is_ipv4(value),
            Format::Ipv6 => ip::is_ipv6(value),
            Format::Uri => uri::is_uri(value),
            Format::UriReference => uri::is_uri_reference(value),
            Format::Iri => uri::is_iri(value),
            Format::IriReference => uri::is_iri_reference(value),
            Format::UriTemplate => template::is_uri_template(value),
            Format::Regex => pattern::is_regex(value),
            Format::JsonPointer => pointer::is_json_pointer(value),
            Format::RelativeJsonPointer => pointer::is_relative_json_pointer(value),
            Format::Uuid => identifier::is_uuid(value),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::from_name(s).ok_or_else(|| RegistryError::UnknownFormat(s.to_string()))
    }
}

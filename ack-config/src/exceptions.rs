use std::{collections::BTreeMap, fmt};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Unexpected, Visitor},
};

use crate::serde_helpers::null_as_default;

/// Maps HTTP status codes to exception shapes for a resource.
///
/// Needed for APIs whose model carries no error status metadata (the EC2
/// model has none at all), chiefly so the generator can recognise a
/// "not found" response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionsConfig {
    /// Exception shape name keyed by HTTP status code
    #[serde(default, deserialize_with = "null_as_default")]
    pub codes: BTreeMap<HttpStatus, String>,
}

impl ExceptionsConfig {
    /// Get the exception shape for a status code.
    pub fn shape_for(&self, status: HttpStatus) -> Option<&str> {
        self.codes.get(&status).map(String::as_str)
    }

    /// Get the exception shape that signals a missing resource.
    pub fn not_found_shape(&self) -> Option<&str> {
        self.shape_for(HttpStatus::NOT_FOUND)
    }
}

/// An HTTP status code used as an exceptions table key.
///
/// Deserializes from an integer, or from a string of digits since TOML and
/// JSON keys are always strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HttpStatus(u16);

impl HttpStatus {
    pub const NOT_FOUND: HttpStatus = HttpStatus(404);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Returns true if the code is in the 100..=599 range HTTP defines.
    pub fn is_valid(&self) -> bool {
        (100..=599).contains(&self.0)
    }
}

impl From<u16> for HttpStatus {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for HttpStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(self.0)
    }
}

impl<'de> Deserialize<'de> for HttpStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HttpStatusVisitor;

        impl Visitor<'_> for HttpStatusVisitor {
            type Value = HttpStatus;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer HTTP status code")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                u16::try_from(v)
                    .map(HttpStatus)
                    .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                u16::try_from(v)
                    .map(HttpStatus)
                    .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if v.is_empty() || !v.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(E::invalid_value(Unexpected::Str(v), &self));
                }
                v.parse::<u16>()
                    .map(HttpStatus)
                    .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(HttpStatusVisitor)
    }
}

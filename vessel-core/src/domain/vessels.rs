use crate::{ParseStringError, parse_string_error::EmptySnafu};
use serde::{
    Deserialize, Serialize,
    de::{self, Visitor},
};
use std::{fmt::Display, num::ParseIntError, ops::Deref, str::FromStr};

/// ERS radio call sign, the vessel key of all fishing-event and port-call
/// reports. AIS positions are resolved to a call sign upstream through the
/// vessel register.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Ord, PartialOrd)]
pub struct CallSign(String);

impl CallSign {
    pub fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for CallSign {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for CallSign {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_ref()
    }
}

impl FromStr for CallSign {
    type Err = ParseStringError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() {
            EmptySnafu.fail()
        } else {
            Ok(Self(value.into()))
        }
    }
}

impl Display for CallSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CallSign {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(CallSignVisitor)
    }
}

struct CallSignVisitor;

impl Visitor<'_> for CallSignVisitor {
    type Value = CallSign;

    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("a non-empty call sign string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        value.parse().map_err(de::Error::custom)
    }
}

/// Maritime Mobile Service Identity, the vessel key of raw AIS data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct Mmsi(i32);

impl Mmsi {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> i32 {
        self.0
    }
}

impl FromStr for Mmsi {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl Display for Mmsi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

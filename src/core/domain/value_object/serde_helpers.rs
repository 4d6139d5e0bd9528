//! Serde helpers for the loosely typed values the Proxmox API returns.
//!
//! The API is not consistent about number encodings: a VM id may arrive as
//! `100` or `"100"` depending on the endpoint, and flags are `0`/`1` integers.

use serde::{Deserialize, Deserializer, Serializer, de::Error};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    String(String),
}

fn parse_vmid<E: Error>(raw: NumberOrString) -> Result<u32, E> {
    let value = match raw {
        NumberOrString::Number(n) => n,
        NumberOrString::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| E::custom(format!("invalid vmid '{}'", s)))?,
    };
    u32::try_from(value).map_err(|_| E::custom(format!("vmid {} out of range", value)))
}

/// A VM id given either as a JSON number or as a numeric string.
pub mod vmid {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        parse_vmid(NumberOrString::deserialize(deserializer)?)
    }

    pub fn serialize<S>(vmid: &u32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(*vmid)
    }
}

/// Optional variant of [`vmid`]; an empty string counts as absent.
pub mod option_vmid {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<NumberOrString>::deserialize(deserializer)? {
            None => Ok(None),
            Some(NumberOrString::String(s)) if s.trim().is_empty() => Ok(None),
            Some(raw) => parse_vmid(raw).map(Some),
        }
    }

    pub fn serialize<S>(vmid: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match vmid {
            Some(id) => serializer.serialize_u32(*id),
            None => serializer.serialize_none(),
        }
    }
}

/// A `0`/`1` integer flag (booleans are accepted too), written back as `0`/`1`.
pub mod int_bool {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrBool {
        Int(i64),
        Bool(bool),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match IntOrBool::deserialize(deserializer)? {
            IntOrBool::Int(n) => n != 0,
            IntOrBool::Bool(b) => b,
        })
    }

    pub fn serialize<S>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*flag))
    }
}

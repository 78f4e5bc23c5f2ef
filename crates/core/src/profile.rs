//! The profile record and its wire representation.

use crate::timezone::{self, ZoneOption};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// The timezone field as held in memory.
///
/// On the wire the timezone is always a bare IANA zone string or absent; in
/// memory it is either unset, a hydrated picker option whose value appears in
/// the static catalog, or a raw string that failed hydration. Raw values are
/// passed through untouched rather than dropped, so a record fetched with a
/// zone name the catalog does not know still round-trips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TimezoneField {
    /// No timezone set.
    #[default]
    Unset,
    /// A catalog-backed picker option.
    Zone(ZoneOption),
    /// A fetched zone string with no catalog match.
    Raw(String),
}

impl TimezoneField {
    /// Whether the field is unset.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Flatten to the wire representation: the plain zone-name string, the
    /// raw value when no hydrated option is present, or nothing.
    #[must_use]
    pub fn as_wire(&self) -> Option<&str> {
        match self {
            Self::Unset => None,
            Self::Zone(opt) => Some(&opt.value),
            Self::Raw(raw) => Some(raw),
        }
    }

    /// Hydrate a wire value into a picker option by exact-match catalog
    /// lookup. Unmatched names stay raw.
    #[must_use]
    pub fn hydrate(self) -> Self {
        match self {
            Self::Raw(raw) => match timezone::find_zone(&raw) {
                Some(opt) => Self::Zone(opt.clone()),
                None => Self::Raw(raw),
            },
            other => other,
        }
    }
}

impl Serialize for TimezoneField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_wire() {
            Some(name) => serializer.serialize_some(name),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for TimezoneField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Hydration is an explicit controller step, not a serde concern.
        Ok(Option::<String>::deserialize(deserializer)?.map_or(Self::Unset, Self::Raw))
    }
}

/// The profile record.
///
/// Mirrors the server-side snapshot field for field; the client only ever
/// reads a full snapshot, mutates a local copy, and writes the full snapshot
/// back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// First name, free text.
    #[serde(default)]
    pub first_name: String,
    /// Last name, free text.
    #[serde(default)]
    pub last_name: String,
    /// Gender, free text.
    #[serde(default)]
    pub gender: Option<String>,
    /// Orientation, free text.
    #[serde(default)]
    pub orientation: Option<String>,
    /// Birthday, expected `YYYY-MM-DD`. Not validated beyond the zodiac
    /// pattern match.
    #[serde(default)]
    pub birthday: String,
    /// Timezone; bare IANA string on the wire, picker option in memory.
    #[serde(default, skip_serializing_if = "TimezoneField::is_unset")]
    pub timezone: TimezoneField,
    /// Free-form bio.
    #[serde(default)]
    pub bio: String,
    /// Opt-in therapist directory flag.
    #[serde(default)]
    pub therapist: bool,
}

/// Transient, UI-local edit bookkeeping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditState {
    /// Unsaved local edits exist.
    pub dirty: bool,
    /// A write just completed.
    pub saved: bool,
}

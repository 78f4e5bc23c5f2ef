//! Static IANA timezone catalog for the profile timezone picker.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A selectable choice in a dropdown-style control.
///
/// For timezones both sides carry the IANA zone name; the pair shape exists
/// so pickers can attach a display label distinct from the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneOption {
    /// The stored value, an IANA zone name.
    pub value: String,
    /// The display label.
    pub label: String,
}

impl ZoneOption {
    /// Create an option whose value and label are both `name`.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            value: name.to_string(),
            label: name.to_string(),
        }
    }
}

/// Full catalog of recognized IANA zone names, built once at first use.
static ZONE_OPTIONS: Lazy<Vec<ZoneOption>> = Lazy::new(|| {
    chrono_tz::TZ_VARIANTS
        .iter()
        .map(|tz| ZoneOption::new(tz.name()))
        .collect()
});

/// The picker's option set: every recognized IANA zone as a
/// [`ZoneOption`] with `value == label == zone name`.
#[must_use]
pub fn zone_options() -> &'static [ZoneOption] {
    &ZONE_OPTIONS
}

/// Exact-match lookup of a zone name against the catalog.
///
/// Returns `None` for names outside the catalog; callers decide whether to
/// pass the raw name through (hydration does).
#[must_use]
pub fn find_zone(name: &str) -> Option<&'static ZoneOption> {
    ZONE_OPTIONS.iter().find(|opt| opt.value == name)
}

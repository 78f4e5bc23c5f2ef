//! Core business logic for account-rs.
//!
//! The account area's client-side domain:
//!
//! - **Profile record**: the editable snapshot via [`ProfileRecord`] and its
//!   wire format
//! - **Form controller**: fetch/edit/submit state machine via [`ProfileForm`]
//! - **Store**: the remote collaborator seam via [`ProfileStore`]
//! - **Timezones**: the static IANA picker catalog via [`zone_options`]
//! - **Zodiac**: birthday-to-sign derivation via [`ZodiacSign`]
//! - **Page**: the two-card account page composition via [`ProfilePage`]

pub mod page;
pub mod profile;
pub mod services;
pub mod store;
pub mod timezone;
pub mod zodiac;

pub use page::{Card, GridLayout, ProfilePage, PEOPLE_CARD, PROFILE_CARD};
pub use profile::{EditState, ProfileRecord, TimezoneField};
pub use services::{ProfileForm, TextField};
pub use store::{InMemoryProfileStore, ProfileStore};
pub use timezone::{find_zone, zone_options, ZoneOption};
pub use zodiac::{sign_for, sign_for_birthday, ZodiacSign};

//! Profile form controller.

use crate::profile::{EditState, ProfileRecord, TimezoneField};
use crate::store::ProfileStore;
use crate::timezone::ZoneOption;
use crate::zodiac::{self, ZodiacSign};
use account_common::{AppError, AppResult, FormConfig, SavedFlagPolicy};

/// A text-like profile field, edited through a change event's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    FirstName,
    LastName,
    Gender,
    Orientation,
    Birthday,
    Bio,
}

impl TextField {
    /// The field's record key, for logging.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Gender => "gender",
            Self::Orientation => "orientation",
            Self::Birthday => "birthday",
            Self::Bio => "bio",
        }
    }
}

/// Controller for the single-record profile form.
///
/// Owns a local editable copy of the remote record plus dirty/saved
/// bookkeeping, and moves between states only through the named transitions
/// below: [`load`](Self::load), the field edits, and
/// [`submit`](Self::submit). The impersonation flag is passed in at
/// construction; while it is set, text fields are read-only (the timezone
/// picker and, by default, the therapist checkbox are not — that mirrors the
/// form this controller replaces, see [`FormConfig`]).
pub struct ProfileForm<S: ProfileStore> {
    store: S,
    config: FormConfig,
    read_only: bool,
    profile: ProfileRecord,
    edit: EditState,
}

impl<S: ProfileStore> ProfileForm<S> {
    /// Create a controller over `store`.
    ///
    /// `read_only` is the impersonation flag: set when viewing or editing as
    /// another identity.
    #[must_use]
    pub fn new(store: S, config: FormConfig, read_only: bool) -> Self {
        Self {
            store,
            config,
            read_only,
            profile: ProfileRecord::default(),
            edit: EditState::default(),
        }
    }

    /// The current local record.
    #[must_use]
    pub const fn profile(&self) -> &ProfileRecord {
        &self.profile
    }

    /// The dirty/saved bookkeeping.
    #[must_use]
    pub const fn edit_state(&self) -> EditState {
        self.edit
    }

    /// Whether the impersonation flag is set.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// The Save button's gate: there are unsaved edits to submit.
    #[must_use]
    pub const fn can_submit(&self) -> bool {
        self.edit.dirty
    }

    /// Zodiac sign derived from the current birthday field, recomputed on
    /// every call. Non-date birthday strings produce no sign.
    #[must_use]
    pub fn zodiac(&self) -> Option<ZodiacSign> {
        zodiac::sign_for_birthday(&self.profile.birthday)
    }

    /// Fetch the record and replace local state with it.
    ///
    /// An empty response leaves local state untouched: nothing to populate,
    /// not an error. A present record has its timezone hydrated against the
    /// static catalog (unmatched zone names stay raw) and then replaces the
    /// local record wholesale. Dirty/saved flags are not touched by a plain
    /// load.
    pub async fn load(&mut self) -> AppResult<()> {
        self.refresh(false).await
    }

    /// Replace a single text field's value.
    ///
    /// Rejected while impersonating; text inputs are the only controls the
    /// read-only gate covers.
    pub fn edit_field(&mut self, field: TextField, value: impl Into<String>) -> AppResult<()> {
        if self.read_only {
            return Err(AppError::Forbidden(
                "profile text fields are read-only while impersonating".to_string(),
            ));
        }

        let value = value.into();
        tracing::debug!(field = field.as_str(), "Profile field edited");

        match field {
            TextField::FirstName => self.profile.first_name = value,
            TextField::LastName => self.profile.last_name = value,
            TextField::Gender => self.profile.gender = Some(value),
            TextField::Orientation => self.profile.orientation = Some(value),
            TextField::Birthday => self.profile.birthday = value,
            TextField::Bio => self.profile.bio = value,
        }

        self.mark_dirty();
        Ok(())
    }

    /// Replace the timezone with a picker option.
    ///
    /// The picker hands over the full option directly; there is no event
    /// value to extract and no read-only gate on this control.
    pub fn set_timezone(&mut self, option: ZoneOption) {
        tracing::debug!(zone = %option.value, "Profile timezone selected");
        self.profile.timezone = TimezoneField::Zone(option);
        self.mark_dirty();
    }

    /// Set the therapist directory flag from the checkbox's checked state.
    ///
    /// Ungated by default even while impersonating;
    /// [`FormConfig::readonly_locks_therapist`] opts it into the same gate as
    /// text fields.
    pub fn set_therapist(&mut self, checked: bool) -> AppResult<()> {
        if self.read_only && self.config.readonly_locks_therapist {
            return Err(AppError::Forbidden(
                "therapist flag is read-only while impersonating".to_string(),
            ));
        }

        tracing::debug!(checked, "Therapist flag toggled");
        self.profile.therapist = checked;
        self.mark_dirty();
        Ok(())
    }

    /// Write the full record, then resync with server state.
    ///
    /// The wire record carries the timezone flattened to its plain zone-name
    /// string (the raw value when no hydrated option is present). On
    /// completion the flags flip to `dirty = false, saved = true` and the
    /// record is refetched; under the default policy the refetch leaves
    /// `saved` standing.
    pub async fn submit(&mut self) -> AppResult<()> {
        self.store.save(&self.profile).await?;
        tracing::info!("Profile saved");

        self.edit = EditState {
            dirty: false,
            saved: true,
        };

        self.refresh(true).await
    }

    async fn refresh(&mut self, after_submit: bool) -> AppResult<()> {
        let Some(mut record) = self.store.fetch().await? else {
            tracing::debug!("Profile fetch returned nothing, keeping local state");
            return Ok(());
        };

        record.timezone = record.timezone.hydrate();
        self.profile = record;
        tracing::debug!("Profile loaded");

        if after_submit && self.config.saved_flag == SavedFlagPolicy::ClearOnRefetch {
            self.edit.saved = false;
        }

        Ok(())
    }

    fn mark_dirty(&mut self) {
        self.edit = EditState {
            dirty: true,
            saved: false,
        };
    }
}

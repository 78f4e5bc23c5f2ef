//! Account page composition.

use crate::services::ProfileForm;
use crate::store::ProfileStore;

/// Static card descriptor: a title plus its explanatory copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    /// Card title.
    pub title: &'static str,
    /// Lead-in line of the info box.
    pub summary: &'static str,
    /// Muted fine print of the info box.
    pub detail: &'static str,
}

/// Left card: the profile form.
pub const PROFILE_CARD: Card = Card {
    title: "Profile",
    summary: "Optionally fill out a profile.",
    detail: "You can optionally share your profile with therapists. Fields which might be \
             important (like gender, orientation) might be used in AI. I'm still experimenting \
             with how AI would use this stuff.",
};

/// Right card: the People collaborator.
pub const PEOPLE_CARD: Card = Card {
    title: "People",
    summary: "Optionally add \"who's who\" in your life.",
    detail: "When sharing profile with therapists, it would help them to have a \"directory\" to \
             refresh their memory. It also feeds into the AI's summaries, question-answering, \
             etc.",
};

/// Responsive card grid: two columns at the large breakpoint, one below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Columns at and above the large breakpoint.
    pub columns_wide: u8,
    /// Columns below it.
    pub columns_narrow: u8,
}

impl GridLayout {
    /// The page's two-card layout.
    pub const TWO_COLUMN: Self = Self {
        columns_wide: 2,
        columns_narrow: 1,
    };
}

/// The account page: the profile form and the People collaborator side by
/// side.
///
/// Pure composition. The People component is opaque: it manages its own
/// fetch/save lifecycle, receives nothing from this page, and returns
/// nothing to it. No data flows between the two cards.
pub struct ProfilePage<S: ProfileStore, P> {
    form: ProfileForm<S>,
    people: P,
}

impl<S: ProfileStore, P> ProfilePage<S, P> {
    /// Compose the page from its two halves.
    #[must_use]
    pub const fn new(form: ProfileForm<S>, people: P) -> Self {
        Self { form, people }
    }

    /// The profile form controller.
    #[must_use]
    pub const fn form(&self) -> &ProfileForm<S> {
        &self.form
    }

    /// Mutable access to the profile form controller.
    pub const fn form_mut(&mut self) -> &mut ProfileForm<S> {
        &mut self.form
    }

    /// The opaque People collaborator.
    #[must_use]
    pub const fn people(&self) -> &P {
        &self.people
    }

    /// Mutable access to the People collaborator.
    pub const fn people_mut(&mut self) -> &mut P {
        &mut self.people
    }

    /// The page's grid layout.
    #[must_use]
    pub const fn layout(&self) -> GridLayout {
        GridLayout::TWO_COLUMN
    }

    /// The two cards in render order.
    #[must_use]
    pub const fn cards(&self) -> [Card; 2] {
        [PROFILE_CARD, PEOPLE_CARD]
    }
}

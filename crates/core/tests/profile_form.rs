//! End-to-end exercise of the profile form through the public API.

use account_common::FormConfig;
use account_core::{
    InMemoryProfileStore, ProfileForm, ProfilePage, ProfileRecord, TextField, TimezoneField,
    ZodiacSign, ZoneOption,
};

#[tokio::test]
async fn fetch_edit_submit_refetch_round_trip() {
    let store = InMemoryProfileStore::with_record(ProfileRecord {
        first_name: "Ada".to_string(),
        birthday: "1984-02-19".to_string(),
        timezone: TimezoneField::Raw("America/New_York".to_string()),
        ..ProfileRecord::default()
    });
    let mut form = ProfileForm::new(store, FormConfig::default(), false);

    // Mount: fetch and hydrate
    form.load().await.unwrap();
    assert_eq!(form.profile().first_name, "Ada");
    assert_eq!(
        form.profile().timezone,
        TimezoneField::Zone(ZoneOption::new("America/New_York"))
    );
    assert_eq!(form.zodiac(), Some(ZodiacSign::Pisces));
    assert!(!form.can_submit());

    // Edit a few fields
    form.edit_field(TextField::LastName, "Lovelace").unwrap();
    form.edit_field(TextField::Bio, "Analyst").unwrap();
    form.set_timezone(ZoneOption::new("Europe/London"));
    form.set_therapist(true).unwrap();
    assert!(form.can_submit());
    assert!(form.edit_state().dirty);

    // Submit: write, flip flags, resync
    form.submit().await.unwrap();
    assert!(!form.edit_state().dirty);
    assert!(form.edit_state().saved);
    assert_eq!(form.profile().last_name, "Lovelace");
    assert!(form.profile().therapist);
    assert_eq!(
        form.profile().timezone,
        TimezoneField::Zone(ZoneOption::new("Europe/London"))
    );

    // The next edit clears the saved indicator
    form.edit_field(TextField::Bio, "Analyst and metaphysician")
        .unwrap();
    assert!(form.edit_state().dirty);
    assert!(!form.edit_state().saved);
}

#[tokio::test]
async fn page_hosts_an_independent_form() {
    struct People;

    let form = ProfileForm::new(InMemoryProfileStore::new(), FormConfig::default(), false);
    let mut page = ProfilePage::new(form, People);

    // Empty backend: mount leaves the blank defaults in place
    page.form_mut().load().await.unwrap();
    assert_eq!(*page.form().profile(), ProfileRecord::default());

    page.form_mut()
        .edit_field(TextField::FirstName, "Grace")
        .unwrap();
    page.form_mut().submit().await.unwrap();
    assert_eq!(page.form().profile().first_name, "Grace");
}

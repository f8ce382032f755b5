use homefin_core::ProfileStorage;
use homefin_domain::{Account, AccountKind, Profile};
use homefin_storage_json::JsonProfileStorage;
use tempfile::tempdir;

fn storage(dir: &std::path::Path) -> JsonProfileStorage {
    JsonProfileStorage::new(dir.join("profiles"), dir.join("backups")).expect("create storage")
}

#[test]
fn profiles_round_trip_through_disk() {
    let dir = tempdir().expect("tempdir");
    let storage = storage(dir.path());

    let mut profile = Profile::new("Family");
    profile.add_account(Account::new("Checking", AccountKind::Checking, "EUR").with_balance(1250.0));

    storage.save_profile("family", &profile).expect("save");
    let loaded = storage.load_profile("family").expect("load");

    assert_eq!(loaded.name, "Family");
    assert_eq!(loaded.accounts.len(), 1);
    assert_eq!(loaded.accounts[0].balance, 1250.0);
    assert!(storage.profile_path("family").exists());
}

#[test]
fn listing_reports_slugged_profile_names() {
    let dir = tempdir().expect("tempdir");
    let storage = storage(dir.path());

    storage
        .save_profile("Our Household", &Profile::new("Our Household"))
        .expect("save");

    let names = storage.list_profiles().expect("list");
    assert_eq!(names, vec!["our_household".to_string()]);
}

#[test]
fn overwriting_creates_a_backup_of_the_previous_document() {
    let dir = tempdir().expect("tempdir");
    let storage = storage(dir.path());

    let profile = Profile::new("Family");
    storage.save_profile("family", &profile).expect("first save");
    storage.save_profile("family", &profile).expect("second save");

    let backups = storage.list_backups("family").expect("list backups");
    assert!(!backups.is_empty());
}

#[test]
fn explicit_backups_are_restorable() {
    let dir = tempdir().expect("tempdir");
    let storage = storage(dir.path());

    let mut profile = Profile::new("Family");
    profile.add_account(Account::new("Savings", AccountKind::Savings, "EUR").with_balance(900.0));
    storage.save_profile("family", &profile).expect("save");

    let info = storage
        .backup_profile("family", &profile, Some("pre migration"))
        .expect("backup");
    assert!(info.id.contains("pre-migration"));

    storage.delete_profile("family").expect("delete");
    assert!(storage.list_profiles().expect("list").is_empty());

    let restored = storage.restore_backup(&info).expect("restore");
    assert_eq!(restored.accounts.len(), 1);
    assert!(storage.profile_path("family").exists());
}

#[test]
fn retention_prunes_old_backups() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonProfileStorage::with_retention(
        dir.path().join("profiles"),
        dir.path().join("backups"),
        2,
    )
    .expect("create storage");

    let profile = Profile::new("Family");
    for note in ["one", "two", "three", "four"] {
        storage
            .backup_profile("family", &profile, Some(note))
            .expect("backup");
    }

    let backups = storage.list_backups("family").expect("list backups");
    assert!(backups.len() <= 2);
}

//! Persistence abstraction for profile documents.

use std::{collections::HashSet, path::PathBuf};

use homefin_domain::Profile;

use crate::CoreError;

/// Describes a persisted backup artifact for a profile.
#[derive(Debug, Clone)]
pub struct ProfileBackupInfo {
    pub profile: String,
    pub id: String,
    pub created_at: String,
    pub path: PathBuf,
}

/// Abstraction over persistence backends capable of storing profiles and
/// their backups.
pub trait ProfileStorage: Send + Sync {
    fn save_profile(&self, name: &str, profile: &Profile) -> Result<(), CoreError>;
    fn load_profile(&self, name: &str) -> Result<Profile, CoreError>;
    fn list_profiles(&self) -> Result<Vec<String>, CoreError>;
    fn delete_profile(&self, name: &str) -> Result<(), CoreError>;
    fn backup_profile(
        &self,
        name: &str,
        profile: &Profile,
        note: Option<&str>,
    ) -> Result<ProfileBackupInfo, CoreError>;
    fn list_backups(&self, name: &str) -> Result<Vec<ProfileBackupInfo>, CoreError>;
    fn restore_backup(&self, backup: &ProfileBackupInfo) -> Result<Profile, CoreError>;
}

/// Detects dangling references within a profile snapshot.
pub fn profile_warnings(profile: &Profile) -> Vec<String> {
    let account_ids: HashSet<_> = profile.accounts.iter().map(|a| a.id).collect();
    let mut warnings = Vec::new();

    for account in &profile.accounts {
        if let Some(linked) = account.linked_account_id {
            if !account_ids.contains(&linked) {
                warnings.push(format!(
                    "account `{}` links to unknown account {}",
                    account.name, linked
                ));
            }
        }
    }
    for txn in &profile.transactions {
        if !account_ids.contains(&txn.account_id) {
            warnings.push(format!(
                "transaction {} references unknown account {}",
                txn.id, txn.account_id
            ));
        }
        if let Some(to) = txn.to_account_id {
            if !account_ids.contains(&to) {
                warnings.push(format!(
                    "transaction {} transfers to unknown account {}",
                    txn.id, to
                ));
            }
        }
    }
    for template in &profile.recurring_transactions {
        if !account_ids.contains(&template.account_id) {
            warnings.push(format!(
                "recurring transaction {} references unknown account {}",
                template.id, template.account_id
            ));
        }
    }
    for bill in &profile.bills {
        if let Some(account_id) = bill.account_id {
            if !account_ids.contains(&account_id) {
                warnings.push(format!(
                    "bill `{}` references unknown account {}",
                    bill.name, account_id
                ));
            }
        }
    }
    for account_id in profile.payment_overrides.keys() {
        if !account_ids.contains(account_id) {
            warnings.push(format!(
                "payment overrides reference unknown account {}",
                account_id
            ));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use homefin_domain::{Account, AccountKind, Transaction, TransactionKind};
    use uuid::Uuid;

    #[test]
    fn clean_profiles_produce_no_warnings() {
        let mut profile = Profile::new("Clean");
        let checking =
            profile.add_account(Account::new("Checking", AccountKind::Checking, "EUR"));
        profile.add_transaction(Transaction::new(
            checking,
            TransactionKind::Expense,
            12.0,
            "EUR",
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
        ));
        assert!(profile_warnings(&profile).is_empty());
    }

    #[test]
    fn dangling_references_are_reported() {
        let mut profile = Profile::new("Dangling");
        profile.add_transaction(Transaction::new(
            Uuid::new_v4(),
            TransactionKind::Expense,
            12.0,
            "EUR",
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
        ));
        let warnings = profile_warnings(&profile);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("unknown account"));
    }
}

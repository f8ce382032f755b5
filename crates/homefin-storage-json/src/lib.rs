//! Filesystem-backed JSON persistence for profiles and their backups.
//!
//! The whole financial profile is stored as one JSON document per user.
//! Writes go through a temp file and rename; overwrites first copy the
//! previous document into the backup directory, pruned to a retention limit.

use std::{
    cmp::Reverse,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, NaiveDateTime, Utc};

use homefin_core::{CoreError, ProfileBackupInfo, ProfileStorage};
use homefin_domain::Profile;

const PROFILE_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_RETENTION: usize = 5;

#[derive(Clone)]
pub struct JsonProfileStorage {
    profiles_dir: PathBuf,
    backups_dir: PathBuf,
    retention: usize,
}

impl JsonProfileStorage {
    pub fn new(profiles_dir: PathBuf, backups_dir: PathBuf) -> Result<Self, CoreError> {
        Self::with_retention(profiles_dir, backups_dir, DEFAULT_RETENTION)
    }

    pub fn with_retention(
        profiles_dir: PathBuf,
        backups_dir: PathBuf,
        retention: usize,
    ) -> Result<Self, CoreError> {
        fs::create_dir_all(&profiles_dir)?;
        fs::create_dir_all(&backups_dir)?;
        Ok(Self {
            profiles_dir,
            backups_dir,
            retention: retention.max(1),
        })
    }

    pub fn profile_path(&self, name: &str) -> PathBuf {
        self.profiles_dir
            .join(format!("{}.{}", slug(name), PROFILE_EXTENSION))
    }

    fn backup_dir(&self, name: &str) -> PathBuf {
        self.backups_dir.join(slug(name))
    }

    fn write_backup_file(
        &self,
        profile: &Profile,
        name: &str,
        note: Option<&str>,
    ) -> Result<ProfileBackupInfo, CoreError> {
        let dir = self.backup_dir(name);
        fs::create_dir_all(&dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let mut stem = format!("{}_{}", slug(name), timestamp);
        if let Some(label) = sanitize_backup_note(note) {
            stem.push('_');
            stem.push_str(&label);
        }
        let file_name = format!("{}.{}", stem, PROFILE_EXTENSION);
        let path = dir.join(&file_name);
        write_atomic(&path, &serialize_profile(profile)?)?;
        self.prune_backups(name)?;
        Ok(ProfileBackupInfo {
            profile: slug(name),
            id: file_name,
            created_at: timestamp,
            path,
        })
    }

    fn backup_existing_file(&self, name: &str, path: &Path) -> Result<(), CoreError> {
        if !path.exists() {
            return Ok(());
        }
        let dir = self.backup_dir(name);
        fs::create_dir_all(&dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let file_name = format!("{}_{}.{}", slug(name), timestamp, PROFILE_EXTENSION);
        fs::copy(path, dir.join(file_name))?;
        self.prune_backups(name)?;
        Ok(())
    }

    fn prune_backups(&self, name: &str) -> Result<(), CoreError> {
        let mut entries = self.list_backups(name)?;
        entries.sort_by_key(|info| Reverse(parse_backup_timestamp(&info.id)));
        for entry in entries.into_iter().skip(self.retention) {
            let _ = fs::remove_file(entry.path);
        }
        Ok(())
    }
}

impl ProfileStorage for JsonProfileStorage {
    fn save_profile(&self, name: &str, profile: &Profile) -> Result<(), CoreError> {
        let path = self.profile_path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        if path.exists() {
            self.backup_existing_file(name, &path)?;
        }
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &serialize_profile(profile)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn load_profile(&self, name: &str) -> Result<Profile, CoreError> {
        load_profile_from_path(&self.profile_path(name))
    }

    fn list_profiles(&self) -> Result<Vec<String>, CoreError> {
        if !self.profiles_dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.profiles_dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(PROFILE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn delete_profile(&self, name: &str) -> Result<(), CoreError> {
        let path = self.profile_path(name);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn backup_profile(
        &self,
        name: &str,
        profile: &Profile,
        note: Option<&str>,
    ) -> Result<ProfileBackupInfo, CoreError> {
        self.write_backup_file(profile, name, note)
    }

    fn list_backups(&self, name: &str) -> Result<Vec<ProfileBackupInfo>, CoreError> {
        let dir = self.backup_dir(name);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let profile_slug = slug(name);
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(PROFILE_EXTENSION) {
                continue;
            }
            if let Some(file_name) = path.file_name().and_then(|name| name.to_str()) {
                entries.push(ProfileBackupInfo {
                    profile: profile_slug.clone(),
                    id: file_name.to_string(),
                    created_at: file_name.to_string(),
                    path: path.clone(),
                });
            }
        }
        entries.sort_by_key(|info| Reverse(parse_backup_timestamp(&info.id)));
        Ok(entries)
    }

    fn restore_backup(&self, backup: &ProfileBackupInfo) -> Result<Profile, CoreError> {
        if !backup.path.exists() {
            return Err(CoreError::Storage(format!(
                "backup `{}` not found",
                backup.id
            )));
        }
        let target = self.profile_path(&backup.profile);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&backup.path, &target)?;
        load_profile_from_path(&target)
    }
}

/// Loads a profile from the provided filesystem path.
pub fn load_profile_from_path(path: &Path) -> Result<Profile, CoreError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
}

fn serialize_profile(profile: &Profile) -> Result<String, CoreError> {
    serde_json::to_string_pretty(profile).map_err(|err| CoreError::Serde(err.to_string()))
}

fn slug(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "profile".into()
    } else {
        sanitized
    }
}

fn sanitize_backup_note(note: Option<&str>) -> Option<String> {
    let raw = note?.trim();
    if raw.is_empty() {
        return None;
    }
    let mut sanitized = String::new();
    let mut last_dash = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            sanitized.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !sanitized.is_empty() && !last_dash {
            sanitized.push('-');
            last_dash = true;
        }
    }
    let trimmed = sanitized.trim_matches('-').to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn parse_backup_timestamp(name: &str) -> Option<DateTime<Utc>> {
    let trimmed = name.strip_suffix(&format!(".{}", PROFILE_EXTENSION))?;
    let segments: Vec<&str> = trimmed.split('_').collect();
    // slug_YYYYMMDD_HHMM with an optional trailing note segment.
    for pair in segments.windows(2) {
        if is_digits(pair[0], 8) && is_digits(pair[1], 4) {
            let raw = format!("{}{}", pair[0], pair[1]);
            return NaiveDateTime::parse_from_str(&raw, "%Y%m%d%H%M")
                .ok()
                .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc));
        }
    }
    None
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::err::SettingsError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Host key-value configuration store, addressed by `section` and `key`.
///
/// Reads are typed: a read fails when the key is absent or holds a value of the wrong type.
pub trait ConfigStore {
    fn get_float(&self, section: &str, key: &str) -> Option<f32>;
    fn get_int(&self, section: &str, key: &str) -> Option<i32>;
    fn set_float(&mut self, section: &str, key: &str, value: f32);
    fn set_int(&mut self, section: &str, key: &str, value: i32);
    /// Persists pending writes, stores without a backing medium keep this a no-op.
    fn flush(&mut self) -> Result<(), SettingsError> {
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredValue {
    Integer(i64),
    Float(f64),
}

type Sections = BTreeMap<String, BTreeMap<String, StoredValue>>;

/// [ConfigStore] kept as TOML tables, one table per section.
#[derive(Debug, Default, Clone)]
pub struct TomlConfigStore {
    sections: Sections,
    dirty: bool,
    backing_path: Option<PathBuf>,
}

impl TomlConfigStore {
    /// Store without a backing file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `path`, starting empty when the file does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let mut store = if path.exists() {
            let raw = fs::read_to_string(path)?;
            Self::from_toml_str(&raw)?
        } else {
            Self::new()
        };
        store.backing_path = Some(path.to_path_buf());
        Ok(store)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, SettingsError> {
        let sections: Sections =
            toml::from_str(raw).map_err(|e| SettingsError::StoreParse(e.to_string()))?;
        Ok(TomlConfigStore {
            sections,
            dirty: false,
            backing_path: None,
        })
    }

    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(&self.sections)
            .map_err(|e| SettingsError::StoreSerialize(e.to_string()))
    }

    pub fn backing_path(&self) -> Option<&Path> {
        self.backing_path.as_deref()
    }

    pub fn set_backing_path(&mut self, path: PathBuf) {
        self.backing_path = Some(path);
        self.dirty = true;
    }

    pub fn get(&self, section: &str, key: &str) -> Option<StoredValue> {
        self.sections.get(section)?.get(key).copied()
    }

    pub fn remove(&mut self, section: &str, key: &str) {
        if let Some(table) = self.sections.get_mut(section) {
            if table.remove(key).is_some() {
                self.dirty = true;
            }
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes the backing file when something changed since the last save.
    pub fn save(&mut self) -> Result<(), SettingsError> {
        let Some(path) = self.backing_path.as_ref() else {
            self.dirty = false;
            return Ok(());
        };
        if !self.dirty {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let serialized = self.to_toml_string()?;
        fs::write(path, serialized)?;
        self.dirty = false;
        Ok(())
    }

    fn put(&mut self, section: &str, key: &str, value: StoredValue) {
        let table = self.sections.entry(section.to_string()).or_default();
        if table.get(key) != Some(&value) {
            table.insert(key.to_string(), value);
            self.dirty = true;
        }
    }
}

impl ConfigStore for TomlConfigStore {
    fn get_float(&self, section: &str, key: &str) -> Option<f32> {
        match self.get(section, key)? {
            StoredValue::Float(value) if value.is_finite() => Some(value as f32),
            StoredValue::Float(_) => None,
            StoredValue::Integer(value) => Some(value as f32),
        }
    }

    fn get_int(&self, section: &str, key: &str) -> Option<i32> {
        match self.get(section, key)? {
            StoredValue::Integer(value) => i32::try_from(value).ok(),
            StoredValue::Float(_) => None,
        }
    }

    fn set_float(&mut self, section: &str, key: &str, value: f32) {
        self.put(section, key, StoredValue::Float(value as f64));
    }

    fn set_int(&mut self, section: &str, key: &str, value: i32) {
        self.put(section, key, StoredValue::Integer(value as i64));
    }

    fn flush(&mut self) -> Result<(), SettingsError> {
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn typed_reads_reject_mismatched_entries() {
        let mut store = TomlConfigStore::new();
        store.set_float("renodx-preset1", "exposure", 1.5);
        store.set_int("renodx-preset1", "toneMapperType", 3);

        assert_eq!(store.get_float("renodx-preset1", "exposure"), Some(1.5));
        assert_eq!(store.get_int("renodx-preset1", "exposure"), None);
        assert_eq!(store.get_int("renodx-preset1", "toneMapperType"), Some(3));
        assert_eq!(store.get_float("renodx-preset1", "toneMapperType"), Some(3.));
        assert_eq!(store.get_float("renodx-preset2", "exposure"), None);
    }

    #[test]
    fn non_finite_and_oversized_entries_fail_to_read() {
        let store = TomlConfigStore::from_toml_str(
            "[renodx-preset1]\nexposure = nan\nbig = 9000000000\n",
        )
        .unwrap();
        assert_eq!(store.get_float("renodx-preset1", "exposure"), None);
        assert_eq!(store.get_int("renodx-preset1", "big"), None);
    }

    #[test]
    fn file_roundtrip_preserves_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("renodx.toml");

        let mut store = TomlConfigStore::open(&path).unwrap();
        assert!(!store.is_dirty());
        store.set_float("renodx-preset2", "toneMapperPeakNits", 1000.);
        store.set_int("renodx-preset2", "effectBloom", 50);
        store.flush().unwrap();
        assert!(!store.is_dirty());

        let reloaded = TomlConfigStore::open(&path).unwrap();
        assert_eq!(
            reloaded.get_float("renodx-preset2", "toneMapperPeakNits"),
            Some(1000.)
        );
        assert_eq!(reloaded.get_int("renodx-preset2", "effectBloom"), Some(50));
    }

    #[test]
    fn unchanged_writes_keep_store_clean() {
        let mut store = TomlConfigStore::new();
        store.set_int("renodx-preset1", "debugValue00", 1);
        store.save().unwrap();
        store.set_int("renodx-preset1", "debugValue00", 1);
        assert!(!store.is_dirty());
        store.remove("renodx-preset1", "debugValue00");
        assert!(store.is_dirty());
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[renodx-preset1\nexposure = ").unwrap();
        let result = TomlConfigStore::open(&path);
        assert!(matches!(result, Err(SettingsError::StoreParse(_))));
    }
}

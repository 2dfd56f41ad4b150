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
use crate::preset::Preset;
use crate::setting::UserSetting;
use crate::store::ConfigStore;
use crate::ui::OverlayUi;
use crate::value::{SettingBounds, SettingValue};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub type PresetOffCallback<'a> = Box<dyn Fn() + Send + Sync + 'a>;

/// Ordered collection of settings with unique keys.
#[derive(Debug, Default)]
pub struct UserSettings<'a> {
    settings: Vec<UserSetting<'a>>,
}

impl<'a> UserSettings<'a> {
    pub fn new(settings: Vec<UserSetting<'a>>) -> Result<Self, SettingsError> {
        let mut collection = UserSettings {
            settings: Vec::with_capacity(settings.len()),
        };
        for setting in settings {
            collection.push(setting)?;
        }
        Ok(collection)
    }

    pub fn push(&mut self, setting: UserSetting<'a>) -> Result<(), SettingsError> {
        if self.find_setting(setting.key()).is_some() {
            return Err(SettingsError::DuplicateSetting(setting.key().to_string()));
        }
        self.settings.push(setting);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserSetting<'a>> {
        self.settings.iter()
    }

    pub fn find_setting(&self, key: &str) -> Option<&UserSetting<'a>> {
        self.settings.iter().find(|setting| setting.key() == key)
    }

    pub fn find_setting_mut(&mut self, key: &str) -> Option<&mut UserSetting<'a>> {
        self.settings.iter_mut().find(|setting| setting.key() == key)
    }

    /// Sets, clamps and publishes a value by key.
    pub fn update_user_setting(&mut self, key: &str, value: f32) -> Result<(), SettingsError> {
        let setting = self
            .find_setting_mut(key)
            .ok_or_else(|| SettingsError::UnknownSetting(key.to_string()))?;
        setting.set(value).clamp().write();
        Ok(())
    }

    /// Loads every setting from `section` in registration order, see [UserSetting::load_from].
    pub fn load_settings(&mut self, store: &dyn ConfigStore, section: &str) {
        for setting in self.settings.iter_mut() {
            setting.load_from(store, section);
        }
        log::debug!("Loaded {} user settings from {}", self.settings.len(), section);
    }

    /// Persists every setting into `section` and flushes the store.
    ///
    /// Flush failures are logged only, the in-memory values stay authoritative.
    pub fn save_settings(&self, store: &mut dyn ConfigStore, section: &str) {
        for setting in self.settings.iter() {
            setting.save_to(store, section);
        }
        match store.flush() {
            Ok(()) => log::debug!("Saved {} user settings to {}", self.settings.len(), section),
            Err(err) => log::warn!("Failed to persist user settings to {}: {}", section, err),
        }
    }

    /// Emits one control per setting and publishes every edited value.
    ///
    /// Returns `true` when any setting changed this frame.
    pub fn render(&mut self, ui: &mut dyn OverlayUi, preset_off: bool) -> bool {
        let mut any_change = false;
        let mut last_section = "";
        for setting in self.settings.iter_mut() {
            if setting.section() != last_section {
                ui.separator_text(setting.section());
                last_section = setting.section();
            }

            let is_disabled = preset_off || !setting.is_enabled();
            ui.begin_disabled(is_disabled);

            let mut changed = render_control(ui, setting);
            if !setting.tooltip().is_empty() {
                ui.set_item_tooltip(setting.tooltip());
            }

            if !preset_off && setting.can_reset() {
                ui.same_line();
                ui.begin_disabled(setting.is_default());
                if ui.reset_button(setting.key()) {
                    setting.reset();
                    changed = true;
                }
                ui.end_disabled();
            }

            if changed {
                setting.write();
                any_change = true;
            }
            ui.end_disabled();
        }
        any_change
    }
}

fn render_control(ui: &mut dyn OverlayUi, setting: &mut UserSetting<'_>) -> bool {
    let label = setting.label();
    let format = setting.format();
    let display = setting.display_text();
    let (min, max) = (setting.min(), setting.max());
    let (int_min, int_max) = match setting.bounds() {
        SettingBounds::Integer { min, max } => (min, max),
        SettingBounds::Float { min, max } => (min as i32, max as i32),
    };
    match setting.stored_mut() {
        SettingValue::Float(value) => ui.slider_float(label, value, min, max, format),
        SettingValue::Integer(value) => ui.slider_int(label, value, int_min, int_max, display),
        SettingValue::Boolean(value) => ui.slider_int(label, value, 0, 1, display),
    }
}

struct RegistryState<'a> {
    settings: UserSettings<'a>,
    preset: Preset,
    on_preset_off: Option<PresetOffCallback<'a>>,
}

impl RegistryState<'_> {
    fn select_preset(&mut self, preset: Preset, store: &mut dyn ConfigStore) {
        self.preset = preset;
        match preset.section() {
            Some(section) => self.settings.load_settings(store, section),
            None => {
                log::debug!("Preset off, reverting to vanilla");
                if let Some(on_preset_off) = &self.on_preset_off {
                    on_preset_off();
                }
            }
        }
    }
}

/// Owner of the settings and the active preset.
///
/// Every access goes through one mutex, so the overlay pass and external updates never race.
pub struct SettingsRegistry<'a> {
    state: Mutex<RegistryState<'a>>,
}

impl<'a> SettingsRegistry<'a> {
    pub fn new(settings: UserSettings<'a>, on_preset_off: Option<PresetOffCallback<'a>>) -> Self {
        SettingsRegistry {
            state: Mutex::new(RegistryState {
                settings,
                preset: Preset::default(),
                on_preset_off,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState<'a>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn preset(&self) -> Preset {
        self.lock().preset
    }

    pub fn len(&self) -> usize {
        self.lock().settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().settings.is_empty()
    }

    /// Switches presets as if chosen in the overlay: loads the preset section, or runs the
    /// preset off callback for [Preset::Off].
    pub fn select_preset(&self, preset: Preset, store: &mut dyn ConfigStore) {
        self.lock().select_preset(preset, store);
    }

    /// Loads `section` into every setting without touching the active preset.
    pub fn load_settings(&self, store: &dyn ConfigStore, section: &str) {
        self.lock().settings.load_settings(store, section);
    }

    pub fn save_settings(&self, store: &mut dyn ConfigStore, section: &str) {
        self.lock().settings.save_settings(store, section);
    }

    pub fn update_user_setting(&self, key: &str, value: f32) -> Result<(), SettingsError> {
        self.lock().settings.update_user_setting(key, value)
    }

    /// Runs `f` on the setting registered under `key` while holding the registry lock.
    pub fn with_setting<R>(&self, key: &str, f: impl FnOnce(&mut UserSetting<'a>) -> R) -> Option<R> {
        self.lock().settings.find_setting_mut(key).map(f)
    }

    /// One overlay frame: preset selector, then every setting control.
    ///
    /// A frame that changes the preset only performs that switch. Otherwise any edit saves
    /// the whole registry into the active preset; [Preset::Off] is never saved to.
    pub fn render_overlay(&self, ui: &mut dyn OverlayUi, store: &mut dyn ConfigStore) {
        let mut state = self.lock();

        let mut index = state.preset.index();
        let last_index = Preset::Preset3.index();
        let selected = if ui.slider_int("Preset", &mut index, 0, last_index, state.preset.label()) {
            Preset::from_index(index)
        } else {
            None
        };
        if let Some(preset) = selected {
            state.select_preset(preset, store);
            return;
        }

        let preset = state.preset;
        let any_change = state.settings.render(ui, preset.is_off());
        if any_change {
            if let Some(section) = preset.section() {
                state.settings.save_settings(store, section);
            }
        }
    }
}

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
use crate::registry::{PresetOffCallback, SettingsRegistry, UserSettings};
use crate::store::ConfigStore;
use crate::ui::OverlayUi;
use std::sync::OnceLock;

/// Name the overlay is registered under with the host.
pub const OVERLAY_NAME: &str = "RenoDX";

/// Plugin host callbacks used across the add-on lifecycle.
pub trait AddonHost {
    fn register_overlay(&mut self, name: &str);
    fn unregister_overlay(&mut self, name: &str);
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum AddonEvent {
    Attach,
    Detach,
}

/// Process-lifetime owner of the settings registry.
///
/// The registry is created by the first attach only; later attaches are ignored.
pub struct SettingsAddon<'a> {
    registry: OnceLock<SettingsRegistry<'a>>,
}

impl Default for SettingsAddon<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> SettingsAddon<'a> {
    pub const fn new() -> Self {
        SettingsAddon {
            registry: OnceLock::new(),
        }
    }

    pub fn registry(&self) -> Option<&SettingsRegistry<'a>> {
        self.registry.get()
    }

    pub fn is_attached(&self) -> bool {
        self.registry.get().is_some()
    }

    /// Installs `settings`, loads the default preset into their bindings and registers the
    /// overlay. Returns `false` when already attached, in which case nothing happens.
    pub fn attach(
        &self,
        settings: UserSettings<'a>,
        on_preset_off: Option<PresetOffCallback<'a>>,
        host: &mut dyn AddonHost,
        store: &dyn ConfigStore,
    ) -> bool {
        let mut first_attach = false;
        let registry = self.registry.get_or_init(|| {
            first_attach = true;
            let registry = SettingsRegistry::new(settings, on_preset_off);
            if let Some(section) = registry.preset().section() {
                registry.load_settings(store, section);
            }
            registry
        });
        if !first_attach {
            log::debug!("{} already attached", OVERLAY_NAME);
            return false;
        }

        host.register_overlay(OVERLAY_NAME);
        log::info!("{} attached with {} user settings", OVERLAY_NAME, registry.len());
        true
    }

    /// Unregisters the overlay, the registry and its values stay alive.
    pub fn detach(&self, host: &mut dyn AddonHost) {
        host.unregister_overlay(OVERLAY_NAME);
        log::info!("{} detached", OVERLAY_NAME);
    }

    /// Dispatches a host lifecycle notification, `init` only runs on a first attach.
    pub fn handle_event<F>(
        &self,
        event: AddonEvent,
        host: &mut dyn AddonHost,
        store: &dyn ConfigStore,
        init: F,
    ) -> bool
    where
        F: FnOnce() -> (UserSettings<'a>, Option<PresetOffCallback<'a>>),
    {
        match event {
            AddonEvent::Attach => {
                if self.is_attached() {
                    return false;
                }
                let (settings, on_preset_off) = init();
                self.attach(settings, on_preset_off, host, store)
            }
            AddonEvent::Detach => {
                self.detach(host);
                true
            }
        }
    }

    /// Overlay callback body, a no-op before the first attach.
    pub fn render_overlay(&self, ui: &mut dyn OverlayUi, store: &mut dyn ConfigStore) {
        if let Some(registry) = self.registry.get() {
            registry.render_overlay(ui, store);
        }
    }
}

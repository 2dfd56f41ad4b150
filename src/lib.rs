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
//! User setting registry and overlay for HDR tone mapping add-ons.
//!
//! Settings are typed ([ValueKind]) values bound to externally owned [BindingCell]s, persisted
//! per [Preset] into a [ConfigStore], and edited once per frame through an [OverlayUi].
#![allow(clippy::manual_clamp)]
mod addon;
mod binding;
pub mod cp2077;
mod err;
mod inject;
mod preset;
mod registry;
mod setting;
mod store;
mod ui;
mod value;

pub use addon::{AddonEvent, AddonHost, SettingsAddon, OVERLAY_NAME};
pub use binding::BindingCell;
pub use err::SettingsError;
pub use inject::{OutputType, ShaderInjectCells, ShaderInjectData, ToneMapperType};
pub use preset::Preset;
pub use registry::{PresetOffCallback, SettingsRegistry, UserSettings};
pub use setting::{EnabledPredicate, ParseFn, UserSetting};
pub use store::{ConfigStore, StoredValue, TomlConfigStore};
pub use ui::OverlayUi;
pub use value::{SettingBounds, SettingValue, ValueKind};

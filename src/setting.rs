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
use crate::binding::BindingCell;
use crate::store::ConfigStore;
use crate::value::{SettingBounds, SettingValue, ValueKind};
use std::fmt::{Debug, Formatter};

pub type EnabledPredicate<'a> = Box<dyn Fn() -> bool + Send + Sync + 'a>;
pub type ParseFn<'a> = Box<dyn Fn(f32) -> f32 + Send + Sync + 'a>;

/// Named, typed, user adjustable value mirrored into an externally owned [BindingCell].
///
/// The binding is borrowed for `'a`, so the storage it points at must outlive every registry
/// holding this setting.
pub struct UserSetting<'a> {
    key: &'a str,
    binding: &'a BindingCell,
    value: SettingValue,
    default_value: f32,
    can_reset: bool,
    label: &'a str,
    section: &'a str,
    tooltip: &'a str,
    labels: Vec<&'a str>,
    min: f32,
    max: f32,
    format: &'a str,
    is_enabled: Option<EnabledPredicate<'a>>,
    parse: Option<ParseFn<'a>>,
}

impl<'a> UserSetting<'a> {
    /// Float setting in `[0, 100]` defaulting to `0`, resettable, always enabled.
    pub fn new(key: &'a str, binding: &'a BindingCell) -> Self {
        UserSetting {
            key,
            binding,
            value: SettingValue::Float(0.),
            default_value: 0.,
            can_reset: true,
            label: key,
            section: "",
            tooltip: "",
            labels: Vec::new(),
            min: 0.,
            max: 100.,
            format: "%.0f",
            is_enabled: None,
            parse: None,
        }
    }

    pub fn with_kind(mut self, kind: ValueKind) -> Self {
        self.value = SettingValue::new(kind, self.default_value);
        self
    }

    /// Sets the default and makes it the current value.
    pub fn with_default(mut self, default_value: f32) -> Self {
        self.default_value = default_value;
        self.value = SettingValue::new(self.value.kind(), default_value);
        self
    }

    pub fn with_can_reset(mut self, can_reset: bool) -> Self {
        self.can_reset = can_reset;
        self
    }

    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    pub fn with_section(mut self, section: &'a str) -> Self {
        self.section = section;
        self
    }

    pub fn with_tooltip(mut self, tooltip: &'a str) -> Self {
        self.tooltip = tooltip;
        self
    }

    pub fn with_labels<I: IntoIterator<Item = &'a str>>(mut self, labels: I) -> Self {
        self.labels = labels.into_iter().collect();
        self
    }

    pub fn with_min(mut self, min: f32) -> Self {
        self.min = min;
        self
    }

    pub fn with_max(mut self, max: f32) -> Self {
        self.max = max;
        self
    }

    pub fn with_format(mut self, format: &'a str) -> Self {
        self.format = format;
        self
    }

    /// Predicate must be side-effect free, it runs every frame.
    pub fn with_is_enabled<F: Fn() -> bool + Send + Sync + 'a>(mut self, predicate: F) -> Self {
        self.is_enabled = Some(Box::new(predicate));
        self
    }

    /// Transform applied to the effective value before it reaches the binding.
    pub fn with_parse<F: Fn(f32) -> f32 + Send + Sync + 'a>(mut self, parse: F) -> Self {
        self.parse = Some(Box::new(parse));
        self
    }

    pub fn key(&self) -> &'a str {
        self.key
    }

    pub fn label(&self) -> &'a str {
        self.label
    }

    pub fn section(&self) -> &'a str {
        self.section
    }

    pub fn tooltip(&self) -> &'a str {
        self.tooltip
    }

    pub fn labels(&self) -> &[&'a str] {
        &self.labels
    }

    pub fn format(&self) -> &'a str {
        self.format
    }

    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }

    pub fn default_value(&self) -> f32 {
        self.default_value
    }

    pub fn can_reset(&self) -> bool {
        self.can_reset
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    /// Raw in-kind stored value, as persisted.
    pub fn stored(&self) -> SettingValue {
        self.value
    }

    pub(crate) fn stored_mut(&mut self) -> &mut SettingValue {
        &mut self.value
    }

    pub fn binding(&self) -> &'a BindingCell {
        self.binding
    }

    /// Stores `raw` without clamping, follow with [UserSetting::write] to publish it.
    pub fn set(&mut self, raw: f32) -> &mut Self {
        self.value.set(raw);
        self
    }

    /// Pulls the stored value back inside [UserSetting::bounds].
    pub fn clamp(&mut self) -> &mut Self {
        self.value = self.value.clamp(self.bounds());
        self
    }

    /// Effective value, booleans read as exactly `0` or `1`.
    pub fn value(&self) -> f32 {
        self.value.effective()
    }

    /// Upper bound after kind rules: `1` for booleans, `labels.len() - 1` for labelled integers.
    pub fn max(&self) -> f32 {
        match self.value.kind() {
            ValueKind::Boolean => 1.,
            ValueKind::Integer if !self.labels.is_empty() => (self.labels.len() - 1) as f32,
            ValueKind::Integer | ValueKind::Float => self.max,
        }
    }

    pub fn bounds(&self) -> SettingBounds {
        match self.value.kind() {
            ValueKind::Float => SettingBounds::Float {
                min: self.min,
                max: self.max,
            },
            ValueKind::Integer => SettingBounds::integral(self.min, self.max()),
            ValueKind::Boolean => SettingBounds::Integer { min: 0, max: 1 },
        }
    }

    pub fn parsed_value(&self) -> f32 {
        let value = self.value();
        match &self.parse {
            Some(parse) => parse(value),
            None => value,
        }
    }

    /// Publishes `parse(value())` into the binding.
    pub fn write(&self) -> &Self {
        self.binding.store(self.parsed_value());
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.is_enabled.as_ref().map_or(true, |predicate| predicate())
    }

    pub fn is_default(&self) -> bool {
        self.value() == self.default_value
    }

    pub fn reset(&mut self) -> &mut Self {
        let default_value = self.default_value;
        self.set(default_value)
    }

    /// Text shown inside integral sliders.
    pub fn display_text(&self) -> &'a str {
        match self.value {
            SettingValue::Float(_) => self.format,
            SettingValue::Integer(value) => self.label_at(value).unwrap_or(self.format),
            SettingValue::Boolean(value) => match self.label_at(value) {
                Some(text) => text,
                None if self.labels.is_empty() && value == 0 => "Off",
                None if self.labels.is_empty() => "On",
                None => self.format,
            },
        }
    }

    fn label_at(&self, index: i32) -> Option<&'a str> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.labels.get(index))
            .copied()
    }

    /// Reads this setting from `section`, falling back to the default when the entry is
    /// missing or mistyped, clamps to [UserSetting::bounds] and writes the binding.
    pub fn load_from(&mut self, store: &dyn ConfigStore, section: &str) -> &Self {
        let loaded = match self.value.kind() {
            ValueKind::Float => store.get_float(section, self.key).map(SettingValue::Float),
            ValueKind::Integer => store.get_int(section, self.key).map(SettingValue::Integer),
            ValueKind::Boolean => store.get_int(section, self.key).map(SettingValue::Boolean),
        };
        let value =
            loaded.unwrap_or_else(|| SettingValue::new(self.value.kind(), self.default_value));
        self.value = value;
        self.clamp().write()
    }

    /// Persists the stored value verbatim.
    pub fn save_to(&self, store: &mut dyn ConfigStore, section: &str) {
        match self.value {
            SettingValue::Float(value) => store.set_float(section, self.key, value),
            SettingValue::Integer(value) | SettingValue::Boolean(value) => {
                store.set_int(section, self.key, value)
            }
        }
    }
}

impl Debug for UserSetting<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserSetting")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("default_value", &self.default_value)
            .field("section", &self.section)
            .field("min", &self.min)
            .field("max", &self.max())
            .field("labels", &self.labels)
            .finish_non_exhaustive()
    }
}

/// Debug scalar setting: key `debug<name>`, default `1`, range `[0, 2]`, section "Debug".
#[macro_export]
macro_rules! debug_setting {
    ($binding:expr, $name:literal) => {
        $crate::UserSetting::new(concat!("debug", $name), $binding)
            .with_default(1.)
            .with_label(concat!("Debug", $name))
            .with_section("Debug")
            .with_max(2.)
            .with_format("%.2f")
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TomlConfigStore;

    const SECTION: &str = "renodx-preset1";

    fn exposure(cell: &BindingCell) -> UserSetting<'_> {
        UserSetting::new("exposure", cell)
            .with_min(0.)
            .with_max(4.)
            .with_default(1.)
    }

    #[test]
    fn write_publishes_parsed_value() {
        let cell = BindingCell::zeroed();
        let mut setting = UserSetting::new("highlights", &cell)
            .with_default(50.)
            .with_parse(|value| value * 0.02);
        setting.write();
        assert_eq!(cell.load(), 1.);
        setting.set(25.).write();
        assert_eq!(cell.load(), setting.parsed_value());
        assert_eq!(cell.load(), 0.5);
    }

    #[test]
    fn boolean_set_normalizes_on_read() {
        let cell = BindingCell::zeroed();
        let mut setting = UserSetting::new("effectToggle", &cell).with_kind(ValueKind::Boolean);
        setting.set(42.).write();
        assert_eq!(setting.value(), 1.);
        assert_eq!(setting.stored(), SettingValue::Boolean(42));
        assert_eq!(cell.load(), 1.);
        assert_eq!(setting.max(), 1.);
    }

    #[test]
    fn labelled_integer_max_ignores_configured_max() {
        let cell = BindingCell::zeroed();
        let setting = UserSetting::new("quality", &cell)
            .with_kind(ValueKind::Integer)
            .with_max(10.)
            .with_labels(["Low", "Medium", "High"]);
        assert_eq!(setting.max(), 2.);
        assert_eq!(setting.bounds(), SettingBounds::Integer { min: 0, max: 2 });
    }

    #[test]
    fn missing_entry_falls_back_to_default() {
        let cell = BindingCell::zeroed();
        let store = TomlConfigStore::new();
        let mut setting = exposure(&cell);
        setting.set(3.);
        setting.load_from(&store, SECTION);
        assert_eq!(setting.value(), 1.);
        assert_eq!(cell.load(), 1.);
    }

    #[test]
    fn out_of_range_entry_is_clamped() {
        let cell = BindingCell::zeroed();
        let mut store = TomlConfigStore::new();
        store.set_float(SECTION, "exposure", 6.);
        let mut setting = exposure(&cell);
        setting.load_from(&store, SECTION);
        assert_eq!(setting.value(), 4.);
        assert_eq!(cell.load(), 4.);

        store.set_float(SECTION, "exposure", -2.);
        setting.load_from(&store, SECTION);
        assert_eq!(setting.value(), 0.);
    }

    #[test]
    fn labelled_integer_entry_clamps_to_last_label() {
        let cell = BindingCell::zeroed();
        let mut store = TomlConfigStore::new();
        store.set_int(SECTION, "quality", 5);
        let mut setting = UserSetting::new("quality", &cell)
            .with_kind(ValueKind::Integer)
            .with_labels(["Low", "Medium", "High"]);
        setting.load_from(&store, SECTION);
        assert_eq!(setting.stored(), SettingValue::Integer(2));
        assert_eq!(setting.display_text(), "High");
        assert_eq!(cell.load(), 2.);
    }

    #[test]
    fn mistyped_entry_falls_back_to_default() {
        let cell = BindingCell::zeroed();
        let mut store = TomlConfigStore::new();
        store.set_float(SECTION, "toneMapperType", 2.5);
        let mut setting = UserSetting::new("toneMapperType", &cell)
            .with_kind(ValueKind::Integer)
            .with_default(3.)
            .with_labels(["None", "Vanilla", "ACES", "OpenDRT"]);
        setting.set(0.);
        setting.load_from(&store, SECTION);
        assert_eq!(setting.stored(), SettingValue::Integer(3));
    }

    #[test]
    fn boolean_entry_clamps_to_unit_range() {
        let cell = BindingCell::zeroed();
        let mut store = TomlConfigStore::new();
        store.set_int(SECTION, "toggle", 9);
        let mut setting = UserSetting::new("toggle", &cell)
            .with_kind(ValueKind::Boolean)
            .with_min(-5.);
        setting.load_from(&store, SECTION);
        assert_eq!(setting.stored(), SettingValue::Boolean(1));

        store.set_int(SECTION, "toggle", -9);
        setting.load_from(&store, SECTION);
        assert_eq!(setting.stored(), SettingValue::Boolean(0));
        assert_eq!(setting.display_text(), "Off");
    }

    #[test]
    fn save_then_load_reproduces_in_range_values() {
        let float_cell = BindingCell::zeroed();
        let int_cell = BindingCell::zeroed();
        let mut store = TomlConfigStore::new();

        let mut float_setting = exposure(&float_cell);
        let mut int_setting = UserSetting::new("grain", &int_cell)
            .with_kind(ValueKind::Integer)
            .with_default(50.);
        float_setting.set(2.75);
        int_setting.set(17.);
        float_setting.save_to(&mut store, SECTION);
        int_setting.save_to(&mut store, SECTION);

        float_setting.reset();
        int_setting.reset();
        float_setting.load_from(&store, SECTION);
        int_setting.load_from(&store, SECTION);
        assert_eq!(float_setting.stored(), SettingValue::Float(2.75));
        assert_eq!(int_setting.stored(), SettingValue::Integer(17));
    }

    #[test]
    fn reset_restores_default() {
        let cell = BindingCell::zeroed();
        let mut setting = exposure(&cell);
        setting.set(2.);
        assert!(!setting.is_default());
        setting.reset().write();
        assert!(setting.is_default());
        assert_eq!(cell.load(), 1.);
    }

    #[test]
    fn debug_macro_builds_debug_scalar() {
        let cell = BindingCell::zeroed();
        let setting = crate::debug_setting!(&cell, "Value00");
        assert_eq!(setting.key(), "debugValue00");
        assert_eq!(setting.label(), "DebugValue00");
        assert_eq!(setting.section(), "Debug");
        assert_eq!(setting.value(), 1.);
        assert_eq!(setting.max(), 2.);
    }

    #[test]
    fn integer_display_uses_format_without_labels() {
        let cell = BindingCell::zeroed();
        let setting = UserSetting::new("grain", &cell).with_kind(ValueKind::Integer);
        assert_eq!(setting.display_text(), "%.0f");
        assert!(setting.is_enabled());
    }
}

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

/// Immediate-mode widget toolkit driven once per frame by the overlay.
///
/// Format strings use the toolkit's own (printf style) syntax and are forwarded verbatim.
/// Widgets emitted while any disabled scope is open must render inert and report no change.
pub trait OverlayUi {
    fn separator_text(&mut self, text: &str);

    /// Opens a disabled scope, nested scopes stack.
    fn begin_disabled(&mut self, disabled: bool);

    fn end_disabled(&mut self);

    /// Returns `true` when the user changed `value` this frame.
    fn slider_float(&mut self, label: &str, value: &mut f32, min: f32, max: f32, format: &str)
        -> bool;

    /// Slider without text input; `format` is either a format string or the literal text shown.
    fn slider_int(&mut self, label: &str, value: &mut i32, min: i32, max: i32, format: &str)
        -> bool;

    /// Tooltip attached to the previously emitted widget.
    fn set_item_tooltip(&mut self, text: &str);

    fn same_line(&mut self);

    /// Compact reset control placed next to the previous widget, `id` is unique per setting.
    fn reset_button(&mut self, id: &str) -> bool;
}

#[cfg(test)]
pub(crate) mod recording {
    use super::OverlayUi;
    use std::collections::{HashMap, HashSet};

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum UiEvent {
        Separator(String),
        SliderFloat { label: String, disabled: bool },
        SliderInt { label: String, format: String, disabled: bool },
        Tooltip(String),
        ResetButton { id: String, disabled: bool },
    }

    /// Scripted toolkit: applies queued edits to matching widgets and records every call.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingUi {
        pub(crate) events: Vec<UiEvent>,
        edits: HashMap<String, f32>,
        resets: HashSet<String>,
        disabled: Vec<bool>,
    }

    impl RecordingUi {
        pub(crate) fn edit(&mut self, label: &str, value: f32) -> &mut Self {
            self.edits.insert(label.to_string(), value);
            self
        }

        pub(crate) fn click_reset(&mut self, id: &str) -> &mut Self {
            self.resets.insert(id.to_string());
            self
        }

        pub(crate) fn next_frame(&mut self) {
            self.events.clear();
            assert!(self.disabled.is_empty(), "unbalanced disabled scopes");
        }

        fn is_disabled(&self) -> bool {
            self.disabled.iter().any(|d| *d)
        }

        pub(crate) fn separators(&self) -> Vec<String> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    UiEvent::Separator(text) => Some(text.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    impl OverlayUi for RecordingUi {
        fn separator_text(&mut self, text: &str) {
            self.events.push(UiEvent::Separator(text.to_string()));
        }

        fn begin_disabled(&mut self, disabled: bool) {
            self.disabled.push(disabled);
        }

        fn end_disabled(&mut self) {
            self.disabled.pop().expect("end_disabled without begin");
        }

        fn slider_float(&mut self, label: &str, value: &mut f32, _: f32, _: f32, _: &str) -> bool {
            let disabled = self.is_disabled();
            self.events.push(UiEvent::SliderFloat {
                label: label.to_string(),
                disabled,
            });
            if disabled {
                return false;
            }
            match self.edits.remove(label) {
                Some(edit) => {
                    *value = edit;
                    true
                }
                None => false,
            }
        }

        fn slider_int(&mut self, label: &str, value: &mut i32, _: i32, _: i32, format: &str) -> bool {
            let disabled = self.is_disabled();
            self.events.push(UiEvent::SliderInt {
                label: label.to_string(),
                format: format.to_string(),
                disabled,
            });
            if disabled {
                return false;
            }
            match self.edits.remove(label) {
                Some(edit) => {
                    *value = edit as i32;
                    true
                }
                None => false,
            }
        }

        fn set_item_tooltip(&mut self, text: &str) {
            self.events.push(UiEvent::Tooltip(text.to_string()));
        }

        fn same_line(&mut self) {}

        fn reset_button(&mut self, id: &str) -> bool {
            let disabled = self.is_disabled();
            self.events.push(UiEvent::ResetButton {
                id: id.to_string(),
                disabled,
            });
            !disabled && self.resets.remove(id)
        }
    }
}

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
use renodx::{AddonHost, OverlayUi};

/// Host stand-in that only logs overlay registration.
#[derive(Debug, Default)]
pub(crate) struct ConsoleHost;

impl AddonHost for ConsoleHost {
    fn register_overlay(&mut self, name: &str) {
        log::info!("registered overlay {}", name);
    }

    fn unregister_overlay(&mut self, name: &str) {
        log::info!("unregistered overlay {}", name);
    }
}

/// Text rendering of one overlay frame; it never reports interaction.
#[derive(Debug, Default)]
pub(crate) struct ConsoleUi {
    disabled: Vec<bool>,
    line: String,
}

impl ConsoleUi {
    fn is_disabled(&self) -> bool {
        self.disabled.iter().any(|d| *d)
    }

    fn flush_line(&mut self) {
        if !self.line.is_empty() {
            println!("{}", self.line);
            self.line.clear();
        }
    }

    fn widget(&mut self, text: String) {
        self.flush_line();
        let marker = if self.is_disabled() { "  (disabled)" } else { "" };
        self.line = format!("  {}{}", text, marker);
    }

    pub(crate) fn finish(&mut self) {
        self.flush_line();
    }
}

/// Expands a single printf style float conversion such as `%.2f`.
///
/// Only the first `%[.N]f` is understood, which covers the formats this harness prints.
/// `%%` escapes and width or flag fields (`%5.1f`, `%-8.2f`) are not supported: text
/// without an `f` after the `%` is returned verbatim and an unparsable precision falls
/// back to six digits.
fn printf_float(format: &str, value: f32) -> String {
    let Some(start) = format.find('%') else {
        return format.to_string();
    };
    let Some(end) = format[start..].find('f').map(|i| start + i) else {
        return format.to_string();
    };
    let precision = format[start + 1..end]
        .trim_start_matches('.')
        .parse::<usize>()
        .unwrap_or(6);
    format!(
        "{}{:.*}{}",
        &format[..start],
        precision,
        value,
        &format[end + 1..]
    )
}

impl OverlayUi for ConsoleUi {
    fn separator_text(&mut self, text: &str) {
        self.flush_line();
        println!("-- {} --", text);
    }

    fn begin_disabled(&mut self, disabled: bool) {
        self.disabled.push(disabled);
    }

    fn end_disabled(&mut self) {
        self.disabled.pop();
    }

    fn slider_float(&mut self, label: &str, value: &mut f32, min: f32, max: f32, format: &str) -> bool {
        self.widget(format!(
            "{}: {} [{}, {}]",
            label,
            printf_float(format, *value),
            min,
            max
        ));
        false
    }

    fn slider_int(&mut self, label: &str, value: &mut i32, min: i32, max: i32, format: &str) -> bool {
        let text = if format.contains('%') {
            printf_float(format, *value as f32)
        } else {
            format.to_string()
        };
        self.widget(format!("{}: {} [{}, {}]", label, text, min, max));
        false
    }

    fn set_item_tooltip(&mut self, _: &str) {}

    fn same_line(&mut self) {}

    fn reset_button(&mut self, _: &str) -> bool {
        if !self.is_disabled() {
            self.line.push_str("  (modified)");
        }
        false
    }
}

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

/// Selectable preset slot; [Preset::Off] disables all overrides.
#[derive(Debug, Default, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Preset {
    Off,
    #[default]
    Preset1,
    Preset2,
    Preset3,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Off, Preset::Preset1, Preset::Preset2, Preset::Preset3];

    pub fn from_index(index: i32) -> Option<Preset> {
        match index {
            0 => Some(Preset::Off),
            1 => Some(Preset::Preset1),
            2 => Some(Preset::Preset2),
            3 => Some(Preset::Preset3),
            _ => None,
        }
    }

    pub fn index(self) -> i32 {
        match self {
            Preset::Off => 0,
            Preset::Preset1 => 1,
            Preset::Preset2 => 2,
            Preset::Preset3 => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Preset::Off => "Off",
            Preset::Preset1 => "Preset #1",
            Preset::Preset2 => "Preset #2",
            Preset::Preset3 => "Preset #3",
        }
    }

    /// Configuration store section, `None` for [Preset::Off] which is never persisted.
    pub fn section(self) -> Option<&'static str> {
        match self {
            Preset::Off => None,
            Preset::Preset1 => Some("renodx-preset1"),
            Preset::Preset2 => Some("renodx-preset2"),
            Preset::Preset3 => Some("renodx-preset3"),
        }
    }

    pub fn is_off(self) -> bool {
        self == Preset::Off
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_mapping_is_stable() {
        for preset in Preset::ALL {
            assert_eq!(Preset::from_index(preset.index()), Some(preset));
        }
        assert_eq!(Preset::from_index(4), None);
        assert_eq!(Preset::from_index(-1), None);
    }

    #[test]
    fn only_numbered_presets_have_sections() {
        assert_eq!(Preset::Off.section(), None);
        assert_eq!(Preset::default().section(), Some("renodx-preset1"));
        assert_eq!(Preset::Preset3.section(), Some("renodx-preset3"));
    }
}

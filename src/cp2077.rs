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
//! Cyberpunk 2077 settings bound into [ShaderInjectCells].

use crate::debug_setting;
use crate::err::SettingsError;
use crate::inject::{ShaderInjectCells, ToneMapperType};
use crate::registry::{PresetOffCallback, UserSettings};
use crate::setting::UserSetting;
use crate::value::ValueKind;

const TONE_MAPPING: &str = "Tone Mapping";
const COLOR_GRADING: &str = "Color Grading";
const EFFECTS: &str = "Effects";

#[inline]
fn percent(value: f32) -> f32 {
    value * 0.01
}

/// Maps a `0..100` slider centred on `50` to a `0..2` multiplier.
#[inline]
fn centred_percent(value: f32) -> f32 {
    value * 0.02
}

fn is_hdr_tone_mapper(cells: &ShaderInjectCells) -> bool {
    cells.tone_mapper_type.load() >= ToneMapperType::Aces.value()
}

fn is_tone_mapped(cells: &ShaderInjectCells) -> bool {
    cells.tone_mapper_type.load() != ToneMapperType::None.value()
}

/// Every user facing setting of the add-on, in overlay order.
pub fn user_settings(cells: &ShaderInjectCells) -> Result<UserSettings<'_>, SettingsError> {
    UserSettings::new(vec![
        UserSetting::new("toneMapperType", &cells.tone_mapper_type)
            .with_kind(ValueKind::Integer)
            .with_default(ToneMapperType::OpenDrt.value())
            .with_can_reset(false)
            .with_label("Tone Mapper")
            .with_section(TONE_MAPPING)
            .with_tooltip("Sets the tone mapper type")
            .with_labels(["None", "Vanilla", "ACES", "OpenDRT"]),
        UserSetting::new("toneMapperPeakNits", &cells.tone_mapper_peak_nits)
            .with_default(1000.)
            .with_label("Peak Brightness")
            .with_section(TONE_MAPPING)
            .with_tooltip("Sets the value of peak white in nits")
            .with_min(48.)
            .with_max(4000.)
            .with_is_enabled(move || is_hdr_tone_mapper(cells)),
        UserSetting::new("toneMapperPaperWhite", &cells.tone_mapper_paper_white)
            .with_default(203.)
            .with_label("Game Brightness")
            .with_section(TONE_MAPPING)
            .with_tooltip("Sets the value of 100% white in nits")
            .with_min(48.)
            .with_max(500.)
            .with_is_enabled(move || is_hdr_tone_mapper(cells)),
        UserSetting::new("toneMapperColorSpace", &cells.tone_mapper_color_space)
            .with_kind(ValueKind::Integer)
            .with_label("Tone Mapper Color Space")
            .with_section(TONE_MAPPING)
            .with_labels(["BT709", "BT2020", "AP1"])
            .with_is_enabled(move || is_hdr_tone_mapper(cells)),
        UserSetting::new("toneMapperWhitePoint", &cells.tone_mapper_white_point)
            .with_kind(ValueKind::Integer)
            .with_label("White Point")
            .with_section(TONE_MAPPING)
            .with_labels(["D65", "D60"])
            .with_is_enabled(move || is_hdr_tone_mapper(cells)),
        UserSetting::new("toneMapperExposure", &cells.tone_mapper_exposure)
            .with_default(1.)
            .with_label("Exposure")
            .with_section(TONE_MAPPING)
            .with_max(10.)
            .with_format("%.2f")
            .with_is_enabled(move || is_tone_mapped(cells)),
        UserSetting::new("toneMapperHighlights", &cells.tone_mapper_highlights)
            .with_default(50.)
            .with_label("Highlights")
            .with_section(TONE_MAPPING)
            .with_is_enabled(move || is_tone_mapped(cells))
            .with_parse(centred_percent),
        UserSetting::new("toneMapperShadows", &cells.tone_mapper_shadows)
            .with_default(50.)
            .with_label("Shadows")
            .with_section(TONE_MAPPING)
            .with_is_enabled(move || is_tone_mapped(cells))
            .with_parse(centred_percent),
        UserSetting::new("toneMapperContrast", &cells.tone_mapper_contrast)
            .with_default(50.)
            .with_label("Contrast")
            .with_section(TONE_MAPPING)
            .with_is_enabled(move || is_tone_mapped(cells))
            .with_parse(centred_percent),
        UserSetting::new("toneMapperDechroma", &cells.tone_mapper_dechroma)
            .with_default(50.)
            .with_label("Dechroma")
            .with_section(TONE_MAPPING)
            .with_tooltip("Desaturates highlights as they approach peak brightness")
            .with_is_enabled(move || is_hdr_tone_mapper(cells))
            .with_parse(percent),
        UserSetting::new("colorGradingWorkflow", &cells.color_grading_workflow)
            .with_kind(ValueKind::Integer)
            .with_label("Workflow")
            .with_section(COLOR_GRADING)
            .with_labels(["Pre-tone map", "Post-tone map"])
            .with_is_enabled(move || is_tone_mapped(cells)),
        UserSetting::new("colorGradingStrength", &cells.color_grading_strength)
            .with_default(100.)
            .with_label("Strength")
            .with_section(COLOR_GRADING)
            .with_tooltip("Blends the game's color grade with the ungraded image")
            .with_parse(percent),
        UserSetting::new("colorGradingScaling", &cells.color_grading_scaling)
            .with_default(100.)
            .with_label("Scaling")
            .with_section(COLOR_GRADING)
            .with_is_enabled(move || is_tone_mapped(cells))
            .with_parse(percent),
        UserSetting::new("colorGradingSaturation", &cells.color_grading_saturation)
            .with_default(50.)
            .with_label("Saturation")
            .with_section(COLOR_GRADING)
            .with_parse(centred_percent),
        UserSetting::new("colorGradingCorrection", &cells.color_grading_correction)
            .with_default(100.)
            .with_label("Correction")
            .with_section(COLOR_GRADING)
            .with_tooltip("Restores hues clipped by the SDR grade")
            .with_is_enabled(move || is_tone_mapped(cells))
            .with_parse(percent),
        UserSetting::new("effectBloom", &cells.effect_bloom)
            .with_default(50.)
            .with_label("Bloom")
            .with_section(EFFECTS)
            .with_parse(centred_percent),
        UserSetting::new("effectVignette", &cells.effect_vignette)
            .with_default(50.)
            .with_label("Vignette")
            .with_section(EFFECTS)
            .with_parse(centred_percent),
        UserSetting::new("effectFilmGrain", &cells.effect_film_grain)
            .with_default(50.)
            .with_label("Film Grain")
            .with_section(EFFECTS)
            .with_parse(centred_percent),
        debug_setting!(&cells.debug_value_00, "Value00"),
        debug_setting!(&cells.debug_value_01, "Value01"),
        debug_setting!(&cells.debug_value_02, "Value02"),
        debug_setting!(&cells.debug_value_03, "Value03"),
    ])
}

/// Writes the values that reproduce the unmodified game into `cells`.
pub fn apply_vanilla(cells: &ShaderInjectCells) {
    cells.tone_mapper_type.store(ToneMapperType::Vanilla.value());
    cells.tone_mapper_exposure.store(1.);
    cells.tone_mapper_highlights.store(1.);
    cells.tone_mapper_shadows.store(1.);
    cells.tone_mapper_contrast.store(1.);
    cells.tone_mapper_dechroma.store(0.);
    cells.color_grading_workflow.store(0.);
    cells.color_grading_strength.store(1.);
    cells.color_grading_scaling.store(0.);
    cells.color_grading_saturation.store(1.);
    cells.color_grading_correction.store(0.);
    cells.effect_bloom.store(1.);
    cells.effect_vignette.store(1.);
    cells.effect_film_grain.store(0.);
}

pub fn preset_off_callback(cells: &ShaderInjectCells) -> PresetOffCallback<'_> {
    Box::new(move || apply_vanilla(cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::Preset;
    use crate::registry::SettingsRegistry;
    use crate::store::TomlConfigStore;

    #[test]
    fn defaults_reach_the_parameter_block() {
        let cells = ShaderInjectCells::new();
        let mut settings = user_settings(&cells).unwrap();
        settings.load_settings(&TomlConfigStore::new(), "renodx-preset1");

        let data = cells.snapshot();
        assert_eq!(data.tone_mapper_type, ToneMapperType::OpenDrt.value());
        assert_eq!(data.tone_mapper_peak_nits, 1000.);
        assert_eq!(data.tone_mapper_paper_white, 203.);
        assert_eq!(data.tone_mapper_highlights, 1.);
        assert_eq!(data.tone_mapper_dechroma, 0.5);
        assert_eq!(data.color_grading_strength, 1.);
        assert_eq!(data.effect_film_grain, 1.);
        assert_eq!(data.debug_value_02, 1.);
    }

    #[test]
    fn hdr_controls_follow_tone_mapper() {
        let cells = ShaderInjectCells::new();
        let mut settings = user_settings(&cells).unwrap();
        settings.update_user_setting("toneMapperType", 1.).unwrap();

        let peak = settings.find_setting("toneMapperPeakNits").unwrap();
        assert!(!peak.is_enabled());
        let exposure = settings.find_setting("toneMapperExposure").unwrap();
        assert!(exposure.is_enabled());

        settings.update_user_setting("toneMapperType", 0.).unwrap();
        let exposure = settings.find_setting("toneMapperExposure").unwrap();
        assert!(!exposure.is_enabled());
        let strength = settings.find_setting("colorGradingStrength").unwrap();
        assert!(strength.is_enabled());
    }

    #[test]
    fn preset_off_restores_vanilla_block() {
        let cells = ShaderInjectCells::new();
        let registry = SettingsRegistry::new(
            user_settings(&cells).unwrap(),
            Some(preset_off_callback(&cells)),
        );
        let mut store = TomlConfigStore::new();
        registry.select_preset(Preset::Preset1, &mut store);
        registry.update_user_setting("effectBloom", 0.).unwrap();
        assert_eq!(cells.effect_bloom.load(), 0.);

        registry.select_preset(Preset::Off, &mut store);
        let data = cells.snapshot();
        assert_eq!(data.tone_mapper_type, ToneMapperType::Vanilla.value());
        assert_eq!(data.effect_bloom, 1.);
        assert_eq!(data.color_grading_correction, 0.);
    }
}

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
use bytemuck::{Pod, Zeroable};

/// Tone mapper selected by the shader, as stored in [ShaderInjectData::tone_mapper_type].
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum ToneMapperType {
    None,
    Vanilla,
    Aces,
    OpenDrt,
}

impl ToneMapperType {
    pub const fn value(self) -> f32 {
        match self {
            ToneMapperType::None => 0.,
            ToneMapperType::Vanilla => 1.,
            ToneMapperType::Aces => 2.,
            ToneMapperType::OpenDrt => 3.,
        }
    }

    pub fn from_value(value: f32) -> Option<ToneMapperType> {
        [
            ToneMapperType::None,
            ToneMapperType::Vanilla,
            ToneMapperType::Aces,
            ToneMapperType::OpenDrt,
        ]
        .into_iter()
        .find(|mapper| mapper.value() == value)
    }
}

/// Swap chain output encoding.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[repr(u32)]
pub enum OutputType {
    Srgb8 = 0,
    Pq = 1,
    ScRgb = 2,
    Srgb10 = 3,
}

impl OutputType {
    pub const fn value(self) -> u32 {
        self as u32
    }

    pub fn from_value(value: u32) -> Option<OutputType> {
        match value {
            0 => Some(OutputType::Srgb8),
            1 => Some(OutputType::Pq),
            2 => Some(OutputType::ScRgb),
            3 => Some(OutputType::Srgb10),
            _ => None,
        }
    }
}

/// Parameter block uploaded to the replacement shaders.
///
/// Field order is a contract with the shader code. The trailing padding rounds the block up
/// to a whole number of 16 byte registers.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ShaderInjectData {
    pub tone_mapper_type: f32,
    pub tone_mapper_peak_nits: f32,
    pub tone_mapper_paper_white: f32,
    pub tone_mapper_color_space: f32,
    pub tone_mapper_white_point: f32,
    pub tone_mapper_exposure: f32,
    pub tone_mapper_highlights: f32,
    pub tone_mapper_shadows: f32,
    pub tone_mapper_contrast: f32,
    pub tone_mapper_dechroma: f32,
    pub color_grading_workflow: f32,
    pub color_grading_strength: f32,
    pub color_grading_scaling: f32,
    pub color_grading_saturation: f32,
    pub color_grading_correction: f32,
    pub effect_bloom: f32,
    pub effect_vignette: f32,
    pub effect_film_grain: f32,
    pub debug_value_00: f32,
    pub debug_value_01: f32,
    pub debug_value_02: f32,
    pub debug_value_03: f32,
    pub padding: [f32; 2],
}

const _: () = assert!(size_of::<ShaderInjectData>() % (4 * size_of::<f32>()) == 0);
const _: () = assert!(align_of::<ShaderInjectData>() == 4);

impl ShaderInjectData {
    /// Number of meaningful fields, padding excluded.
    pub const FIELD_COUNT: usize = 22;

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Live counterpart of [ShaderInjectData] that settings bind to.
#[derive(Debug, Default)]
pub struct ShaderInjectCells {
    pub tone_mapper_type: BindingCell,
    pub tone_mapper_peak_nits: BindingCell,
    pub tone_mapper_paper_white: BindingCell,
    pub tone_mapper_color_space: BindingCell,
    pub tone_mapper_white_point: BindingCell,
    pub tone_mapper_exposure: BindingCell,
    pub tone_mapper_highlights: BindingCell,
    pub tone_mapper_shadows: BindingCell,
    pub tone_mapper_contrast: BindingCell,
    pub tone_mapper_dechroma: BindingCell,
    pub color_grading_workflow: BindingCell,
    pub color_grading_strength: BindingCell,
    pub color_grading_scaling: BindingCell,
    pub color_grading_saturation: BindingCell,
    pub color_grading_correction: BindingCell,
    pub effect_bloom: BindingCell,
    pub effect_vignette: BindingCell,
    pub effect_film_grain: BindingCell,
    pub debug_value_00: BindingCell,
    pub debug_value_01: BindingCell,
    pub debug_value_02: BindingCell,
    pub debug_value_03: BindingCell,
}

impl ShaderInjectCells {
    pub const fn new() -> Self {
        ShaderInjectCells {
            tone_mapper_type: BindingCell::zeroed(),
            tone_mapper_peak_nits: BindingCell::zeroed(),
            tone_mapper_paper_white: BindingCell::zeroed(),
            tone_mapper_color_space: BindingCell::zeroed(),
            tone_mapper_white_point: BindingCell::zeroed(),
            tone_mapper_exposure: BindingCell::zeroed(),
            tone_mapper_highlights: BindingCell::zeroed(),
            tone_mapper_shadows: BindingCell::zeroed(),
            tone_mapper_contrast: BindingCell::zeroed(),
            tone_mapper_dechroma: BindingCell::zeroed(),
            color_grading_workflow: BindingCell::zeroed(),
            color_grading_strength: BindingCell::zeroed(),
            color_grading_scaling: BindingCell::zeroed(),
            color_grading_saturation: BindingCell::zeroed(),
            color_grading_correction: BindingCell::zeroed(),
            effect_bloom: BindingCell::zeroed(),
            effect_vignette: BindingCell::zeroed(),
            effect_film_grain: BindingCell::zeroed(),
            debug_value_00: BindingCell::zeroed(),
            debug_value_01: BindingCell::zeroed(),
            debug_value_02: BindingCell::zeroed(),
            debug_value_03: BindingCell::zeroed(),
        }
    }

    /// Copies the current cell values into an uploadable block.
    pub fn snapshot(&self) -> ShaderInjectData {
        ShaderInjectData {
            tone_mapper_type: self.tone_mapper_type.load(),
            tone_mapper_peak_nits: self.tone_mapper_peak_nits.load(),
            tone_mapper_paper_white: self.tone_mapper_paper_white.load(),
            tone_mapper_color_space: self.tone_mapper_color_space.load(),
            tone_mapper_white_point: self.tone_mapper_white_point.load(),
            tone_mapper_exposure: self.tone_mapper_exposure.load(),
            tone_mapper_highlights: self.tone_mapper_highlights.load(),
            tone_mapper_shadows: self.tone_mapper_shadows.load(),
            tone_mapper_contrast: self.tone_mapper_contrast.load(),
            tone_mapper_dechroma: self.tone_mapper_dechroma.load(),
            color_grading_workflow: self.color_grading_workflow.load(),
            color_grading_strength: self.color_grading_strength.load(),
            color_grading_scaling: self.color_grading_scaling.load(),
            color_grading_saturation: self.color_grading_saturation.load(),
            color_grading_correction: self.color_grading_correction.load(),
            effect_bloom: self.effect_bloom.load(),
            effect_vignette: self.effect_vignette.load(),
            effect_film_grain: self.effect_film_grain.load(),
            debug_value_00: self.debug_value_00.load(),
            debug_value_01: self.debug_value_01.load(),
            debug_value_02: self.debug_value_02.load(),
            debug_value_03: self.debug_value_03.load(),
            padding: [0.; 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_is_whole_registers() {
        assert_eq!(size_of::<ShaderInjectData>(), 24 * size_of::<f32>());
        assert_eq!(ShaderInjectData::default().as_bytes().len() % 16, 0);
    }

    #[test]
    fn snapshot_keeps_field_order() {
        let cells = ShaderInjectCells::new();
        cells.tone_mapper_type.store(ToneMapperType::Aces.value());
        cells.effect_film_grain.store(0.5);
        cells.debug_value_03.store(2.);

        let data = cells.snapshot();
        let floats: &[f32] = bytemuck::cast_slice(data.as_bytes());
        assert_eq!(floats[0], 2.);
        assert_eq!(floats[17], 0.5);
        assert_eq!(floats[ShaderInjectData::FIELD_COUNT - 1], 2.);
        assert_eq!(&floats[ShaderInjectData::FIELD_COUNT..], &[0., 0.]);
    }

    #[test]
    fn sentinel_values_map_back() {
        assert_eq!(ToneMapperType::from_value(3.), Some(ToneMapperType::OpenDrt));
        assert_eq!(ToneMapperType::from_value(1.5), None);
        assert_eq!(OutputType::from_value(OutputType::Pq.value()), Some(OutputType::Pq));
        assert_eq!(OutputType::ScRgb.value(), 2);
        assert_eq!(OutputType::from_value(4), None);
    }
}

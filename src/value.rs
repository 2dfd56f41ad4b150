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
use num_traits::AsPrimitive;

/// Storage representation, UI widget and clamping rule of a setting.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub enum ValueKind {
    #[default]
    Float,
    Integer,
    /// Stored as an integer, any non-zero magnitude reads back as `1`.
    Boolean,
}

/// Current value of a setting, carrying exactly the storage its kind needs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SettingValue {
    Float(f32),
    Integer(i32),
    Boolean(i32),
}

impl SettingValue {
    pub fn new(kind: ValueKind, raw: f32) -> SettingValue {
        let truncated: i32 = raw.as_();
        match kind {
            ValueKind::Float => SettingValue::Float(raw),
            ValueKind::Integer => SettingValue::Integer(truncated),
            ValueKind::Boolean => SettingValue::Boolean(truncated),
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            SettingValue::Float(_) => ValueKind::Float,
            SettingValue::Integer(_) => ValueKind::Integer,
            SettingValue::Boolean(_) => ValueKind::Boolean,
        }
    }

    /// Replaces the stored value, truncating toward zero for integral kinds.
    pub fn set(&mut self, raw: f32) {
        *self = SettingValue::new(self.kind(), raw);
    }

    /// Kind-normalized value: booleans collapse to exactly `0` or `1`.
    pub fn effective(&self) -> f32 {
        match *self {
            SettingValue::Float(value) => value,
            SettingValue::Integer(value) => value as f32,
            SettingValue::Boolean(value) => {
                if value == 0 {
                    0.
                } else {
                    1.
                }
            }
        }
    }

    pub fn clamp(self, bounds: SettingBounds) -> SettingValue {
        match (self, bounds) {
            (SettingValue::Float(value), SettingBounds::Float { min, max }) => {
                SettingValue::Float(clamp_ordered(value, min, max))
            }
            (SettingValue::Integer(value), SettingBounds::Integer { min, max }) => {
                SettingValue::Integer(clamp_ordered(value, min, max))
            }
            (SettingValue::Boolean(value), SettingBounds::Integer { min, max }) => {
                SettingValue::Boolean(clamp_ordered(value, min, max))
            }
            (value, _) => value,
        }
    }
}

/// Inclusive bounds a setting's stored value is clamped to, typed like its storage.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SettingBounds {
    Float { min: f32, max: f32 },
    Integer { min: i32, max: i32 },
}

impl SettingBounds {
    /// Integers contained in `[min, max]`.
    pub fn integral(min: f32, max: f32) -> SettingBounds {
        SettingBounds::Integer {
            min: min.ceil().as_(),
            max: max.floor().as_(),
        }
    }

    pub fn contains(&self, value: SettingValue) -> bool {
        match (*self, value) {
            (SettingBounds::Float { min, max }, SettingValue::Float(v)) => v >= min && v <= max,
            (SettingBounds::Integer { min, max }, SettingValue::Integer(v))
            | (SettingBounds::Integer { min, max }, SettingValue::Boolean(v)) => {
                v >= min && v <= max
            }
            _ => false,
        }
    }
}

/// The upper bound wins when the bounds are inverted.
#[inline]
fn clamp_ordered<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value > max {
        max
    } else if value < min {
        min
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_reads_binary_regardless_of_magnitude() {
        for raw in [0f32, 1., 7., -3., 250.9] {
            let value = SettingValue::new(ValueKind::Boolean, raw);
            let effective = value.effective();
            assert!(effective == 0. || effective == 1.);
            assert_eq!(effective == 1., raw as i32 != 0);
        }
    }

    #[test]
    fn integer_set_truncates_toward_zero() {
        let mut value = SettingValue::new(ValueKind::Integer, 0.);
        value.set(2.9);
        assert_eq!(value, SettingValue::Integer(2));
        value.set(-2.9);
        assert_eq!(value, SettingValue::Integer(-2));
        assert_eq!(value.kind(), ValueKind::Integer);
    }

    #[test]
    fn integral_bounds_stay_inside_float_range() {
        assert_eq!(
            SettingBounds::integral(0.5, 3.7),
            SettingBounds::Integer { min: 1, max: 3 }
        );
        assert_eq!(
            SettingBounds::integral(-1.5, -0.5),
            SettingBounds::Integer { min: -1, max: -1 }
        );
    }

    #[test]
    fn clamp_respects_kind() {
        let bounds = SettingBounds::Float { min: 0., max: 4. };
        assert_eq!(SettingValue::Float(6.).clamp(bounds), SettingValue::Float(4.));
        assert_eq!(SettingValue::Float(-1.).clamp(bounds), SettingValue::Float(0.));

        let bounds = SettingBounds::Integer { min: 0, max: 2 };
        assert_eq!(SettingValue::Integer(5).clamp(bounds), SettingValue::Integer(2));
        assert_eq!(SettingValue::Boolean(-4).clamp(bounds), SettingValue::Boolean(0));
        assert!(bounds.contains(SettingValue::Boolean(1)));
        assert!(!bounds.contains(SettingValue::Float(1.)));
    }
}

//! Fixed-capacity positional parameter vector.
//!
//! Slot meaning is defined per filter family by its [`ParamInfo`] table;
//! slot 0 is always the sample rate.
//!
//! [`ParamInfo`]: crate::ParamInfo

use core::ops::Index;

use crate::error::FilterError;

/// Hard cap on the number of parameters any filter exposes.
pub const MAX_PARAMETERS: usize = 8;

/// Parameter values for one filter, copied by value.
///
/// # Example
///
/// ```rust
/// use filtro_core::Params;
///
/// let mut params = Params::from_slice(&[44100.0, 4.0, 1000.0]).unwrap();
/// assert_eq!(params.sample_rate(), 44100.0);
/// assert_eq!(params.order(1), Ok(4));
/// params.set(2, 2000.0).unwrap();
/// assert_eq!(params[2], 2000.0);
/// assert!(params.set(8, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    values: [f64; MAX_PARAMETERS],
}

impl Params {
    /// All slots zero.
    pub const fn new() -> Self {
        Self {
            values: [0.0; MAX_PARAMETERS],
        }
    }

    /// Copies `values` into the leading slots.
    pub fn from_slice(values: &[f64]) -> Result<Self, FilterError> {
        if values.len() > MAX_PARAMETERS {
            return Err(FilterError::InvalidParamIndex {
                index: values.len() - 1,
                count: MAX_PARAMETERS,
            });
        }
        let mut params = Self::new();
        params.values[..values.len()].copy_from_slice(values);
        Ok(params)
    }

    /// Value at `index`, `None` past the cap.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Writes `value` at `index`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<(), FilterError> {
        let slot = self
            .values
            .get_mut(index)
            .ok_or(FilterError::InvalidParamIndex {
                index,
                count: MAX_PARAMETERS,
            })?;
        *slot = value;
        Ok(())
    }

    /// Every slot.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Slot 0.
    pub fn sample_rate(&self) -> f64 {
        self.values[0]
    }

    /// Reads slot `index` as a filter order.
    ///
    /// Orders are carried as reals; the nearest integer is used. The range
    /// check against a design's capacity happens in the design, which knows
    /// its maximum. Values that are not a plausible order at all (negative,
    /// non-finite or beyond `u32::MAX`) fail here with the value attached.
    pub fn order(&self, index: usize) -> Result<usize, FilterError> {
        let value = self.get(index).ok_or(FilterError::InvalidParamIndex {
            index,
            count: MAX_PARAMETERS,
        })?;
        if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
            return Err(FilterError::InvalidParameter {
                name: "order",
                value,
            });
        }
        Ok(libm::round(value) as usize)
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Params {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

//! Argument checks shared by every design entry point.
//!
//! All checks run before any layout or cascade is touched.

use filtro_core::FilterError;

/// Sample rate must be finite and positive.
pub fn sample_rate(sample_rate: f64) -> Result<(), FilterError> {
    if sample_rate.is_finite() && sample_rate > 0.0 {
        Ok(())
    } else {
        Err(FilterError::InvalidSampleRate(sample_rate))
    }
}

/// Order must lie in `1..=max_order`.
pub fn order(order: usize, max_order: usize) -> Result<(), FilterError> {
    if (1..=max_order).contains(&order) {
        Ok(())
    } else {
        Err(FilterError::InvalidOrder {
            order,
            max: max_order,
        })
    }
}

/// Frequency must lie strictly between DC and Nyquist.
pub fn frequency(frequency: f64, sample_rate: f64) -> Result<(), FilterError> {
    let nyquist = sample_rate * 0.5;
    if frequency.is_finite() && frequency > 0.0 && frequency < nyquist {
        Ok(())
    } else {
        Err(FilterError::FrequencyOutOfRange { frequency, nyquist })
    }
}

/// Value must be finite and strictly positive.
pub fn positive(name: &'static str, value: f64) -> Result<(), FilterError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FilterError::InvalidParameter { name, value })
    }
}

/// Value must be finite.
pub fn finite(name: &'static str, value: f64) -> Result<(), FilterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FilterError::InvalidParameter { name, value })
    }
}

//! Frequency/wavelength conversion in vacuum.

use crate::error::GridError;

/// Rounds `value` to `decimals` decimal places, half away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Converts a frequency in THz to a wavelength in nm, `lambda = c / f`.
///
/// `speed_of_light` is in m/s. Fails for a non-positive or non-finite frequency.
pub fn frequency_to_wavelength_nm(speed_of_light: f64, frequency_thz: f64) -> Result<f64, GridError> {
    if !frequency_thz.is_finite() || frequency_thz <= 0.0 {
        return Err(GridError::NonPositiveFrequency(frequency_thz));
    }
    Ok((speed_of_light / (frequency_thz * 1e12)) * 1e9)
}

/// Converts a wavelength in nm to a frequency in THz, `f = c / lambda`.
pub fn wavelength_to_frequency_thz(speed_of_light: f64, wavelength_nm: f64) -> Result<f64, GridError> {
    if !wavelength_nm.is_finite() || wavelength_nm <= 0.0 {
        return Err(GridError::NonPositiveWavelength(wavelength_nm));
    }
    Ok(speed_of_light / (wavelength_nm * 1e-9) / 1e12)
}

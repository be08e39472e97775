//! Closed-form Moxon rectangle proportions.
//!
//! Cebik's polynomial fit over `log10(wire diameter in wavelengths)`,
//! dimensions returned in wavelengths.

/// Wire diameters (in wavelengths) the polynomial fit was calibrated
/// over. Outside this window the fit extrapolates.
pub const CALIBRATED_RANGE: (f64, f64) = (1e-6, 1e-2);

/// Element lengths in wavelengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementLengths {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
}

/// Evaluate the rectangle proportions for one wire diameter.
pub fn element_lengths(dia_wl: f64) -> ElementLengths {
    if dia_wl < CALIBRATED_RANGE.0 || dia_wl > CALIBRATED_RANGE.1 {
        tracing::warn!(
            diameter_wavelengths = dia_wl,
            "wire diameter outside the calibrated fit range, extrapolating"
        );
    }

    let x = dia_wl.log10();
    let x2 = x * x;

    let a = -0.0008571428571 * x2 - 0.009571428571 * x + 0.3398571429;
    let b = -0.002142857143 * x2 - 0.02035714286 * x + 0.008285714286;
    let c = 0.001809523809 * x2 + 0.01780952381 * x + 0.05164761905;
    let d = 0.001 * x + 0.07178571429;

    ElementLengths {
        a,
        b,
        c,
        d,
        e: b + c + d,
    }
}

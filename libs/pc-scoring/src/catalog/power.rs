//! Battery life estimation
//!
//! A linear power model: the CPU draws a fraction of its TDP, the panel
//! draws in proportion to its diagonal, and the rest of the system adds a
//! fixed base load.

/// Share of the CPU's TDP drawn under typical use
pub const CPU_TDP_FACTOR: f64 = 0.4;
/// Watts per inch of screen diagonal
pub const SCREEN_WATTS_PER_INCH: f64 = 0.5;
/// Everything else, in watts
pub const BASE_SYSTEM_WATTS: f64 = 2.0;

/// Estimated average power draw in watts
pub fn estimate_power_draw(cpu_tdp_watts: f64, screen_size_inches: f64) -> f64 {
    cpu_tdp_watts * CPU_TDP_FACTOR + screen_size_inches * SCREEN_WATTS_PER_INCH + BASE_SYSTEM_WATTS
}

/// Estimated battery life in hours for a battery of `capacity_wh`.
///
/// `None` when the estimated draw is not a positive finite number.
pub fn estimate_battery_life(
    capacity_wh: f64,
    cpu_tdp_watts: f64,
    screen_size_inches: f64,
) -> Option<f64> {
    let power = estimate_power_draw(cpu_tdp_watts, screen_size_inches);
    if !(power > 0.0) || !power.is_finite() {
        return None;
    }

    Some(capacity_wh / power)
}

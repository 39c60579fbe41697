/// Physiological profile and achievement thresholds used by the metrics.
#[derive(Debug, Clone)]
pub struct PedometerConfig {
    /// Distance covered by one step, in meters
    pub step_length_m: f64,

    /// Walker profile
    pub weight_kg: f64,
    pub height_cm: f64,

    /// Calorie formula coefficients
    pub k1: f64,
    pub k2: f64,

    /// Achievement tiers by daily distance, in km
    pub excellent_km: f64,
    pub good_km: f64,
    pub keep_going_km: f64,
}

impl Default for PedometerConfig {
    fn default() -> Self {
        Self {
            step_length_m: 0.65,
            weight_kg: 75.0,
            height_cm: 175.0,
            k1: 0.035,
            k2: 0.029,
            excellent_km: 6.5,
            good_km: 3.9,
            keep_going_km: 2.0,
        }
    }
}

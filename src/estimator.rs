/// Speed of sound in air at roughly 20 °C.
pub const SPEED_OF_SOUND_CM_PER_US: f64 = 0.0343;

/// Converts an echo round-trip time into the one-way distance in centimeters.
pub fn to_distance_cm(duration_us: u32, speed_of_sound_cm_per_us: f64) -> f64 {
    // the burst travels to the object and back
    f64::from(duration_us) * (speed_of_sound_cm_per_us / 2.)
}

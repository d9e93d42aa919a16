use esp_idf_svc::sys::esp_timer_get_time;
use proximity_servo::MicrosClock;

/// Microseconds since boot from the ESP high resolution timer.
pub struct EspTimerClock;

impl MicrosClock for EspTimerClock {
    fn now_us(&self) -> u64 {
        // esp_timer is running before app_main is entered
        let now = unsafe { esp_timer_get_time() };
        u64::try_from(now).unwrap_or_default()
    }
}

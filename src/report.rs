use derive_more::Display;

/// One diagnostics line, e.g. `Distance: 17.15 cm`.
#[derive(Debug, Display, Clone, Copy, PartialEq)]
#[display("Distance: {_0:.2} cm")]
pub struct DistanceLine(pub f64);

pub trait DiagnosticsReporter {
    fn report(&mut self, distance_cm: f64);
}

impl<R: DiagnosticsReporter + ?Sized> DiagnosticsReporter for &mut R {
    fn report(&mut self, distance_cm: f64) {
        (**self).report(distance_cm)
    }
}

/// Prints to stdout, which is the console UART on ESP-IDF.
pub struct SerialReporter;

impl DiagnosticsReporter for SerialReporter {
    fn report(&mut self, distance_cm: f64) {
        println!("{}", DistanceLine(distance_cm));
    }
}

pub struct LogReporter;

impl DiagnosticsReporter for LogReporter {
    fn report(&mut self, distance_cm: f64) {
        log::info!("{}", DistanceLine(distance_cm));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use log::{Level, LevelFilter, Log, Metadata, Record};

    use super::*;

    /// Keeps records from this module only, other tests log concurrently.
    struct Capture(Mutex<Vec<(Level, String)>>);

    impl Log for Capture {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            if record.target() == "proximity_servo::report" {
                if let Ok(mut lines) = self.0.lock() {
                    lines.push((record.level(), record.args().to_string()));
                }
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

    #[test]
    fn line_format() {
        assert_eq!(DistanceLine(14.9891).to_string(), "Distance: 14.99 cm");
        assert_eq!(DistanceLine(17.15).to_string(), "Distance: 17.15 cm");
        assert_eq!(DistanceLine(0.).to_string(), "Distance: 0.00 cm");
    }

    #[test]
    fn log_reporter_emits_info_line() {
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(LevelFilter::Info);

        LogReporter.report(17.15);

        let lines = CAPTURE.0.lock().unwrap();
        assert_eq!(
            *lines,
            vec![(Level::Info, "Distance: 17.15 cm".to_string())]
        );
    }
}

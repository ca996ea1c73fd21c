//! Log records emitted by the statistics and clipping helpers.
//!
//! A single capturing logger is installed for this test binary. Tests run on
//! separate threads, so each one only looks at records logged from its own
//! thread.

use std::sync::{Mutex, Once};
use std::thread::{self, ThreadId};

use log::{Level, LevelFilter, Log, Metadata, Record};

use titania::{ClipOptions, aic, clip_outliers};

#[derive(Debug, Clone)]
struct Captured {
    thread: ThreadId,
    level: Level,
    target: String,
    message: String,
}

struct CaptureLogger {
    records: Mutex<Vec<Captured>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let captured = Captured {
            thread: thread::current().id(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        self.records.lock().unwrap().push(captured);
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INSTALL: Once = Once::new();

/// Run `f` and return the records it logged from the current thread.
fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<Captured>) {
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    let me = thread::current().id();
    let start = LOGGER.records.lock().unwrap().len();
    let out = f();
    let records = LOGGER.records.lock().unwrap()[start..]
        .iter()
        .filter(|r| r.thread == me)
        .cloned()
        .collect();
    (out, records)
}

fn spiky_series() -> (Vec<f64>, Vec<f64>) {
    let n = 60;
    let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.02).collect();
    let mut y: Vec<f64> = (0..n)
        .map(|i| 1.0 + 1e-3 * ((i as f64) * 1.7).sin())
        .collect();
    y[30] += 0.05;
    (x, y)
}

#[test]
fn singular_aic_warns_once_on_stats_target() {
    let (value, records) = capture(|| aic(-5.0, 4, 3));
    assert_eq!(value, 0.0);

    let warnings: Vec<_> = records.iter().filter(|r| r.level == Level::Warn).collect();
    assert_eq!(warnings.len(), 1, "{records:?}");
    assert_eq!(warnings[0].target, "titania::stats");
    assert!(
        warnings[0]
            .message
            .starts_with("AIC was NAN. Recording zero, but you should examine your fit."),
        "{}",
        warnings[0].message
    );
    assert!(warnings[0].message.contains("n=4, k=3"));
}

#[test]
fn finite_aic_is_silent() {
    let (value, records) = capture(|| aic(-50.0, 100, 3));
    assert!((value - 106.25).abs() < 1e-12);
    assert!(records.iter().all(|r| r.level != Level::Warn), "{records:?}");
}

#[test]
fn verbose_clipping_reports_rejected_count() {
    let (x, y) = spiky_series();
    let opts = ClipOptions::default();
    assert!(opts.verbose);

    let (res, records) = capture(|| clip_outliers(&x, &y, None, &opts).unwrap());
    assert_eq!(res.n_rejected(), 1);

    let infos: Vec<_> = records.iter().filter(|r| r.level == Level::Info).collect();
    assert_eq!(infos.len(), 1, "{records:?}");
    assert_eq!(infos[0].target, "titania::signal");
    assert_eq!(
        infos[0].message,
        "Rejected 1 points more than 5.0 x MAD from the median"
    );
}

#[test]
fn quiet_clipping_emits_no_summary() {
    let (x, y) = spiky_series();
    let opts = ClipOptions {
        verbose: false,
        ..ClipOptions::default()
    };

    let (res, records) = capture(|| clip_outliers(&x, &y, None, &opts).unwrap());
    assert_eq!(res.n_rejected(), 1);
    assert!(records.iter().all(|r| r.level != Level::Info), "{records:?}");
}

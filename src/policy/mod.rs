//! Serving radius selection by time of day.
//!
//! Peak windows shrink the radius so delivery partners stay close during rush
//! hours. One radius is chosen per request and used for every lookup in it.

use chrono::{NaiveTime, Timelike};

/// Radius used inside a peak window.
pub const PEAK_HOURS_SERVING_RADIUS_KM: f64 = 3.0;
/// Radius used outside peak windows.
pub const NORMAL_HOURS_SERVING_RADIUS_KM: f64 = 5.0;

/// Inclusive peak windows: 08:00-10:00, 13:00-14:00, 19:00-21:00.
pub const PEAK_WINDOWS: [PeakWindow; 3] = [
    PeakWindow::new(8, 0, 10, 0),
    PeakWindow::new(13, 0, 14, 0),
    PeakWindow::new(19, 0, 21, 0),
];

/// A `[start, end]` window at minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakWindow {
    start_minute: u32,
    end_minute: u32,
}

impl PeakWindow {
    pub const fn new(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> Self {
        Self {
            start_minute: start_hour * 60 + start_min,
            end_minute: end_hour * 60 + end_min,
        }
    }

    /// Seconds are ignored, so `10:00:59` is still inside a window ending at `10:00`.
    #[inline]
    pub fn contains(&self, time: NaiveTime) -> bool {
        let minute = time.hour() * 60 + time.minute();
        minute >= self.start_minute && minute <= self.end_minute
    }
}

/// Chooses the serving radius for a request time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServingPolicy {
    peak_radius_km: f64,
    normal_radius_km: f64,
}

impl Default for ServingPolicy {
    fn default() -> Self {
        Self {
            peak_radius_km: PEAK_HOURS_SERVING_RADIUS_KM,
            normal_radius_km: NORMAL_HOURS_SERVING_RADIUS_KM,
        }
    }
}

impl ServingPolicy {
    pub fn new(peak_radius_km: f64, normal_radius_km: f64) -> Self {
        Self {
            peak_radius_km,
            normal_radius_km,
        }
    }

    pub fn peak_radius_km(&self) -> f64 {
        self.peak_radius_km
    }

    pub fn normal_radius_km(&self) -> f64 {
        self.normal_radius_km
    }

    /// Returns `true` if `time` falls in any [`PEAK_WINDOWS`] entry.
    pub fn is_peak_hour(&self, time: NaiveTime) -> bool {
        PEAK_WINDOWS.iter().any(|window| window.contains(time))
    }

    pub fn serving_radius_km(&self, time: NaiveTime) -> f64 {
        if self.is_peak_hour(time) {
            self.peak_radius_km
        } else {
            self.normal_radius_km
        }
    }
}

// File: crates/insight-core/src/scale.rs
// Summary: Band, linear, and time scales mapping data values to pixels.
// Notes:
// - Degenerate domains (zero span) are widened to one unit so mapping never
//   divides by zero; empty pixel ranges map everything to the range start.

use chrono::{Datelike, Duration, NaiveDate};

/// Widen `[x0, x1]` by `k` times its span, half on each side.
pub fn pad((x0, x1): (f64, f64), k: f64) -> (f64, f64) {
    let dx = (x1 - x0) * k / 2.0;
    (x0 - dx, x1 + dx)
}

/// Step between "nice" ticks (1, 2, or 5 times a power of ten).
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let step0 = (stop - start).abs() / count.max(1) as f64;
    if !step0.is_finite() || step0 <= 0.0 {
        return 1.0;
    }
    let mut step1 = 10f64.powf(step0.log10().floor());
    let error = step0 / step1;
    if error >= 50f64.sqrt() {
        step1 *= 10.0;
    } else if error >= 10f64.sqrt() {
        step1 *= 5.0;
    } else if error >= 2f64.sqrt() {
        step1 *= 2.0;
    }
    step1
}

/// Continuous linear scale.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f32,
    r1: f32,
    round: bool,
}

impl LinearScale {
    pub fn new((d0, d1): (f64, f64), (r0, r1): (f32, f32)) -> Self {
        let (d0, d1) = if !d0.is_finite() || !d1.is_finite() {
            (0.0, 1.0)
        } else if (d1 - d0).abs() < 1e-12 {
            (d0, d0 + 1.0)
        } else {
            (d0, d1)
        };
        Self { d0, d1, r0, r1, round: false }
    }

    pub fn round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    /// Extend the domain outward to tick boundaries.
    pub fn nice(mut self, count: usize) -> Self {
        let (mut lo, mut hi, reversed) = if self.d0 <= self.d1 { (self.d0, self.d1, false) } else { (self.d1, self.d0, true) };
        for _ in 0..2 {
            let step = tick_step(lo, hi, count);
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
        }
        if reversed { (self.d0, self.d1) = (hi, lo) } else { (self.d0, self.d1) = (lo, hi) }
        self
    }

    pub fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }
    pub fn range(&self) -> (f32, f32) { (self.r0, self.r1) }

    #[inline]
    pub fn map(&self, v: f64) -> f32 {
        let t = (v - self.d0) / (self.d1 - self.d0);
        let px = self.r0 + t as f32 * (self.r1 - self.r0);
        if self.round { px.round() } else { px }
    }

    #[inline]
    pub fn invert(&self, px: f32) -> f64 {
        let span = self.r1 - self.r0;
        if span.abs() < f32::EPSILON {
            return self.d0;
        }
        self.d0 + ((px - self.r0) / span) as f64 * (self.d1 - self.d0)
    }

    /// Tick values inside the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.d0 <= self.d1 { (self.d0, self.d1) } else { (self.d1, self.d0) };
        let step = tick_step(lo, hi, count);
        let start = (lo / step).ceil() as i64;
        let stop = (hi / step).floor() as i64;
        (start..=stop).map(|i| i as f64 * step).collect()
    }
}

/// Categorical band scale: `n` equal bands with inner/outer padding.
#[derive(Clone, Debug)]
pub struct BandScale {
    starts: Vec<f32>,
    step: f32,
    bandwidth: f32,
}

impl BandScale {
    pub fn new(n: usize, (r0, r1): (f32, f32), padding: f32, round: bool) -> Self {
        let padding = padding.clamp(0.0, 1.0);
        let (start, stop) = if r1 < r0 { (r1, r0) } else { (r0, r1) };
        let span = (stop - start).max(0.0);
        let slots = (n as f32 - padding + padding * 2.0).max(1.0);
        let mut step = span / slots;
        if round {
            step = step.floor();
        }
        let mut first = start + (span - step * (n as f32 - padding)) * 0.5;
        let mut bandwidth = step * (1.0 - padding);
        if round {
            first = first.round();
            bandwidth = bandwidth.round();
        }
        let mut starts: Vec<f32> = (0..n).map(|i| first + step * i as f32).collect();
        if r1 < r0 {
            starts.reverse();
        }
        Self { starts, step, bandwidth: bandwidth.max(0.0) }
    }

    /// Left edge of band `i`, if it exists.
    pub fn position(&self, i: usize) -> Option<f32> { self.starts.get(i).copied() }
    pub fn bandwidth(&self) -> f32 { self.bandwidth }
    pub fn step(&self) -> f32 { self.step }
    pub fn len(&self) -> usize { self.starts.len() }
    pub fn is_empty(&self) -> bool { self.starts.is_empty() }

    /// Band whose extent contains `px`.
    pub fn index_at(&self, px: f32) -> Option<usize> {
        self.starts.iter().position(|&s| px >= s && px < s + self.bandwidth)
    }
}

/// Time scale over calendar dates, linear in days.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    inner: LinearScale,
}

fn day_number(d: NaiveDate) -> f64 {
    d.num_days_from_ce() as f64
}

impl TimeScale {
    pub fn new((d0, d1): (NaiveDate, NaiveDate), range: (f32, f32)) -> Self {
        Self { inner: LinearScale::new((day_number(d0), day_number(d1)), range) }
    }

    #[inline]
    pub fn map(&self, d: NaiveDate) -> f32 {
        self.inner.map(day_number(d))
    }

    /// Date nearest to pixel `px`.
    pub fn invert(&self, px: f32) -> Option<NaiveDate> {
        let days = self.inner.invert(px).round();
        NaiveDate::from_num_days_from_ce_opt(days as i32)
    }

    /// Dates at a day, week, or month-ish interval, about `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<NaiveDate> {
        let (d0, d1) = self.inner.domain();
        let span = (d1 - d0).abs();
        let raw = span / count.max(1) as f64;
        let every = [1i64, 2, 7, 14, 30, 90, 365]
            .into_iter()
            .find(|&d| d as f64 >= raw)
            .unwrap_or(365);
        let (Some(start), Some(end)) = (
            NaiveDate::from_num_days_from_ce_opt(d0.min(d1).ceil() as i32),
            NaiveDate::from_num_days_from_ce_opt(d0.max(d1).floor() as i32),
        ) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        let mut d = start;
        while d <= end {
            out.push(d);
            d += Duration::days(every);
        }
        out
    }
}

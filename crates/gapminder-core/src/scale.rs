// File: crates/gapminder-core/src/scale.rs
// Summary: Linear and square-root scale transforms with d3-compatible ticks and tick labels.

/// Domain value (fertility, population, year, ...).
pub type Value = f64;
/// Pixel coordinate.
pub type Pixel = f64;

/// Monotonic map from a data domain to a pixel range.
pub trait ScaleTransform {
    fn map(&self, v: Value) -> Pixel;
    fn invert(&self, px: Pixel) -> Value;
    fn range(&self) -> (Pixel, Pixel);
}

/// Linear interpolation with a d3-style degenerate-domain rule: when the
/// domain collapses to a point every input lands mid-range. No clamping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: Value,
    d1: Value,
    r0: Pixel,
    r1: Pixel,
}

impl LinearScale {
    pub fn new(domain: (Value, Value), range: (Pixel, Pixel)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    #[inline]
    fn normalize(&self, v: Value) -> f64 {
        let span = self.d1 - self.d0;
        if span == 0.0 { 0.5 } else { (v - self.d0) / span }
    }

    /// Up to roughly `count` evenly spaced "nice" values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<Value> {
        ticks(self.d0, self.d1, count)
    }

    /// Label formatter matching the tick step for `count` ticks.
    pub fn tick_format(&self, count: usize) -> impl Fn(Value) -> String {
        let step = tick_step(self.d0, self.d1, count);
        let precision = precision_fixed(step);
        move |v| format_grouped(v, precision)
    }
}

impl ScaleTransform for LinearScale {
    #[inline]
    fn map(&self, v: Value) -> Pixel {
        let t = self.normalize(v);
        self.r0 * (1.0 - t) + self.r1 * t
    }
    fn invert(&self, px: Pixel) -> Value {
        let span = self.r1 - self.r0;
        let t = if span == 0.0 { 0.5 } else { (px - self.r0) / span };
        self.d0 * (1.0 - t) + self.d1 * t
    }
    fn range(&self) -> (Pixel, Pixel) { (self.r0, self.r1) }
}

/// Power scale with exponent 0.5: area, not radius, grows linearly with the input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SqrtScale {
    inner: LinearScale,
}

#[inline]
fn signed_sqrt(v: f64) -> f64 {
    if v < 0.0 { -(-v).sqrt() } else { v.sqrt() }
}

#[inline]
fn signed_square(v: f64) -> f64 {
    if v < 0.0 { -(v * v) } else { v * v }
}

impl SqrtScale {
    pub fn new(domain: (Value, Value), range: (Pixel, Pixel)) -> Self {
        Self { inner: LinearScale::new((signed_sqrt(domain.0), signed_sqrt(domain.1)), range) }
    }
}

impl ScaleTransform for SqrtScale {
    fn map(&self, v: Value) -> Pixel { self.inner.map(signed_sqrt(v)) }
    fn invert(&self, px: Pixel) -> Value { signed_square(self.inner.invert(px)) }
    fn range(&self) -> (Pixel, Pixel) { self.inner.range() }
}

// ---- ticks ------------------------------------------------------------------

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Signed increment: positive is the step itself, negative is `-1/step` for sub-unit steps.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Absolute tick step for the given domain.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let step0 = (hi - lo).abs() / count.max(1) as f64;
    let mut step1 = 10f64.powf(step0.log10().floor());
    let error = step0 / step1;
    if error >= E10 { step1 *= 10.0 } else if error >= E5 { step1 *= 5.0 } else if error >= E2 { step1 *= 2.0 }
    step1
}

/// Nice tick values in ascending order, following d3-array's `ticks`.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let step = tick_increment(lo, hi, count);
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }
    if step > 0.0 {
        let r0 = (lo / step).ceil();
        let r1 = (hi / step).floor();
        if r1 < r0 { return Vec::new(); }
        (0..=(r1 - r0) as i64).map(|i| (r0 + i as f64) * step).collect()
    } else {
        let inv = -step;
        let r0 = (lo * inv).ceil();
        let r1 = (hi * inv).floor();
        if r1 < r0 { return Vec::new(); }
        (0..=(r1 - r0) as i64).map(|i| (r0 + i as f64) / inv).collect()
    }
}

/// Decimal places needed to tell ticks `step` apart.
pub fn precision_fixed(step: f64) -> usize {
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    let exp = step.abs().log10().floor() as i32;
    (-exp).max(0) as usize
}

/// Fixed-point with `,` thousands grouping on the integer part.
pub fn format_grouped(v: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, v.abs());
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s.as_str(), None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + precision + 2);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(f) = frac_part {
        grouped.push('.');
        grouped.push_str(f);
    }
    let negative = v < 0.0 && grouped.chars().any(|c| c.is_ascii_digit() && c != '0');
    if negative { format!("-{grouped}") } else { grouped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_formatting() {
        assert_eq!(format_grouped(1960.0, 0), "1,960");
        assert_eq!(format_grouped(1_234_567.0, 0), "1,234,567");
        assert_eq!(format_grouped(1.5, 1), "1.5");
        assert_eq!(format_grouped(-2500.25, 2), "-2,500.25");
        assert_eq!(format_grouped(-0.0001, 1), "0.0");
    }

    #[test]
    fn precision_tracks_step() {
        assert_eq!(precision_fixed(0.5), 1);
        assert_eq!(precision_fixed(0.05), 2);
        assert_eq!(precision_fixed(5.0), 0);
        assert_eq!(precision_fixed(200_000.0), 0);
    }
}

use std::ops::Range;

use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};

#[doc = r#"
    Linear f64 axis whose labels and grid lines sit exactly on precomputed ticks.

    Light mesh lines are never drawn; every tick is a bold point.
"#]
#[derive(Debug, Clone, PartialEq)]
pub struct TickedAxis {
    lo: f64,
    hi: f64,
    ticks: Vec<f64>,
}

impl TickedAxis {
    pub fn new(lo: f64, hi: f64, ticks: Vec<f64>) -> Self {
        let ticks: Vec<f64> = ticks.into_iter().filter(|t| *t >= lo && *t <= hi).collect();
        TickedAxis { lo, hi, ticks }
    }

    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }
}

impl Ranged for TickedAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        let span: f64 = self.hi - self.lo;
        let pixels: i32 = limit.1 - limit.0;

        if span == 0.0 || pixels == 0 {
            return limit.1;
        }

        let ratio: f64 = (*value - self.lo) / span;
        limit.0 + (pixels as f64 * ratio + 1e-3).floor() as i32
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        if hint.weight().allow_light_points() {
            return Vec::new();
        }

        self.ticks.clone()
    }

    fn range(&self) -> Range<f64> {
        self.lo..self.hi
    }
}

#[doc = "Every whole number from `min` to `max`, both ends truncated toward zero"]
pub fn integer_ticks(values: &[f64]) -> Vec<f64> {
    let Some((min, max)) = min_max(values) else {
        return Vec::new();
    };

    let start: i64 = min.trunc() as i64;
    let end: i64 = max.trunc() as i64;

    (start..=end).map(|tick| tick as f64).collect()
}

#[doc = r#"
    Round-step ticks inside `[min, max]`.

    The step is the smallest of 1, 2, 2.5, 5 or 10 times a power of ten that keeps
    the tick count at or below `target`.
"#]
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max < min || target == 0 {
        return Vec::new();
    }

    if max == min {
        return vec![min];
    }

    let raw_step: f64 = (max - min) / target as f64;
    let magnitude: f64 = 10f64.powf(raw_step.log10().floor());
    let residual: f64 = raw_step / magnitude;

    let nice: f64 = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 2.5 {
        2.5
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };

    let step: f64 = nice * magnitude;
    let first: i64 = (min / step).ceil() as i64;
    let last: i64 = (max / step).floor() as i64;

    (first..=last).map(|i| i as f64 * step).collect()
}

#[doc = r#"
    Plotted range of a series with 5% padding on both ends.

    A flat series is padded by 1 so the line is not drawn on the frame.
"#]
pub fn padded_range(values: &[f64]) -> anyhow::Result<(f64, f64)> {
    let (min, max) = min_max(values)
        .ok_or_else(|| anyhow::anyhow!("[padded_range] Cannot compute a range of empty data"))?;

    let padding: f64 = if max > min { (max - min) * 0.05 } else { 1.0 };

    Ok((min - padding, max + padding))
}

#[doc = "Tick label without trailing zeros: `3`, `0.15`, `2.5`"]
pub fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }

    let text: String = format!("{:.4}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_ticks_span_min_to_max() {
        assert_eq!(integer_ticks(&[3.0, 5.0]), vec![3.0, 4.0, 5.0]);
        assert_eq!(integer_ticks(&[4.0, 4.0, 4.0]), vec![4.0]);
        assert!(integer_ticks(&[]).is_empty());
    }

    #[test]
    fn integer_ticks_truncate_toward_zero() {
        assert_eq!(integer_ticks(&[-2.5, 1.7]), vec![-2.0, -1.0, 0.0, 1.0]);
        assert_eq!(integer_ticks(&[-0.4, 0.4]), vec![0.0]);
    }

    #[test]
    fn nice_ticks_use_round_steps() {
        assert_eq!(
            nice_ticks(0.0, 10.0, 5),
            vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]
        );
        assert_eq!(nice_ticks(2204.0, 4800.0, 5), vec![3000.0, 4000.0]);
        assert_eq!(nice_ticks(7.0, 7.0, 5), vec![7.0]);
    }

    #[test]
    fn padded_range_handles_flat_series() {
        assert_eq!(padded_range(&[4.0, 4.0]).unwrap(), (3.0, 5.0));

        let (lo, hi) = padded_range(&[0.0, 100.0]).unwrap();
        assert!((lo + 5.0).abs() < 1e-9);
        assert!((hi - 105.0).abs() < 1e-9);

        assert!(padded_range(&[]).is_err());
    }

    #[test]
    fn axis_maps_linearly_and_drops_outside_ticks() {
        let axis = TickedAxis::new(0.0, 10.0, vec![-2.0, 0.0, 5.0, 10.0, 12.0]);

        assert_eq!(axis.ticks(), &[0.0, 5.0, 10.0]);
        assert_eq!(axis.map(&0.0, (0, 100)), 0);
        assert_eq!(axis.map(&5.0, (0, 100)), 50);
        assert_eq!(axis.map(&10.0, (0, 100)), 100);
        assert_eq!(axis.range(), 0.0..10.0);
    }

    #[test]
    fn formats_ticks_compactly() {
        assert_eq!(format_tick(3.0), "3");
        assert_eq!(format_tick(0.15), "0.15");
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(-40.0), "-40");
    }
}

//! ASCII line plots in the style of asciigraph.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Plot dimensions. `width` resamples the series to that many points.
#[derive(Debug, Clone, Copy)]
pub struct PlotOptions {
    pub height: usize,
    pub width: Option<usize>,
}

impl PlotOptions {
    pub fn height(height: usize) -> Self {
        Self {
            height,
            width: None,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }
}

/// Plot input from decimal prices; values that do not fit an f64 are dropped.
pub fn series<I: IntoIterator<Item = Decimal>>(values: I) -> Vec<f64> {
    values.into_iter().filter_map(|v| v.to_f64()).collect()
}

/// Linear interpolation of `data` onto `count` evenly spaced points.
fn resample(data: &[f64], count: usize) -> Vec<f64> {
    if data.len() < 2 || count < 2 {
        return data.iter().copied().take(count.max(1)).collect();
    }

    let step = (data.len() - 1) as f64 / (count - 1) as f64;
    let mut out = Vec::with_capacity(count);
    out.push(data[0]);
    for i in 1..count - 1 {
        let point = i as f64 * step;
        let before = point.floor();
        let after = point.ceil();
        let fraction = point - before;
        let lo = data[before as usize];
        let hi = data[after as usize];
        out.push(lo + (hi - lo) * fraction);
    }
    out.push(data[data.len() - 1]);
    out
}

/// Render `series` as a line plot with a labelled y axis.
pub fn plot(series: &[f64], options: PlotOptions) -> String {
    if series.is_empty() {
        return String::new();
    }

    let data = match options.width {
        Some(width) if width > 0 && width != series.len() => resample(series, width),
        _ => series.to_vec(),
    };

    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let interval = max - min;
    let ratio = if interval > 0.0 {
        options.height.max(1) as f64 / interval
    } else {
        0.0
    };

    let min2 = (min * ratio).round() as i64;
    let max2 = (max * ratio).round() as i64;
    let rows = (max2 - min2).max(0) as usize;
    let scaled =
        |value: f64| ((value * ratio).round() as i64 - min2).clamp(0, rows as i64) as usize;

    let labels: Vec<String> = (0..=rows)
        .map(|row| {
            let value = if rows == 0 {
                max
            } else {
                max - row as f64 * interval / rows as f64
            };
            format!("{:.2}", value)
        })
        .collect();
    let label_width = labels.iter().map(String::len).max().unwrap_or(0);
    let offset = label_width + 2;

    let mut grid = vec![vec![' '; offset + data.len()]; rows + 1];
    for (row, label) in labels.iter().enumerate() {
        let padded = format!("{:>width$}", label, width = label_width);
        for (col, ch) in padded.chars().enumerate() {
            grid[row][col] = ch;
        }
        grid[row][offset - 1] = '┤';
    }

    grid[rows - scaled(data[0])][offset - 1] = '┼';

    for (x, pair) in data.windows(2).enumerate() {
        let col = x + offset;
        let y0 = scaled(pair[0]);
        let y1 = scaled(pair[1]);

        if y0 == y1 {
            grid[rows - y0][col] = '─';
            continue;
        }

        if y0 > y1 {
            grid[rows - y1][col] = '╰';
            grid[rows - y0][col] = '╮';
        } else {
            grid[rows - y1][col] = '╭';
            grid[rows - y0][col] = '╯';
        }

        for y in y0.min(y1) + 1..y0.max(y1) {
            grid[rows - y][col] = '│';
        }
    }

    grid.iter()
        .map(|line| line.iter().collect::<String>().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series() {
        assert_eq!(plot(&[], PlotOptions::height(8)), "");
    }

    #[test]
    fn test_flat_series() {
        assert_eq!(plot(&[5.0, 5.0, 5.0], PlotOptions::height(4)), "5.00 ┼──");
    }

    #[test]
    fn test_rising_series() {
        let expected = "3.00 ┤ ╭\n2.00 ┤╭╯\n1.00 ┼╯";
        assert_eq!(plot(&[1.0, 2.0, 3.0], PlotOptions::height(2)), expected);
    }

    #[test]
    fn test_falling_series_with_gap() {
        let expected = "3.00 ┼╮\n2.00 ┤│\n1.00 ┤╰";
        assert_eq!(plot(&[3.0, 1.0], PlotOptions::height(2)), expected);
    }

    #[test]
    fn test_height_bounds_rows() {
        let series: Vec<f64> = (0..50).map(|i| (i as f64).sin() * 10.0).collect();
        let out = plot(&series, PlotOptions::height(8));
        assert_eq!(out.lines().count(), 9);
    }

    #[test]
    fn test_series_from_decimals() {
        use rust_decimal_macros::dec;
        assert_eq!(series([dec!(1.5), dec!(2)]), vec![1.5, 2.0]);
    }

    #[test]
    fn test_resample() {
        assert_eq!(resample(&[0.0, 10.0], 3), vec![0.0, 5.0, 10.0]);
        assert_eq!(resample(&[0.0, 10.0, 20.0, 30.0, 40.0], 3), vec![0.0, 20.0, 40.0]);
    }

    #[test]
    fn test_width_limits_columns() {
        let series: Vec<f64> = (0..200).map(f64::from).collect();
        let out = plot(&series, PlotOptions::height(8).with_width(80));
        let widest = out.lines().map(|l| l.chars().count()).max().unwrap();
        assert!(widest <= 80 + "200.00".len() + 2);
    }
}

//! Pearson correlation over joined records

use tracing::warn;

use crate::models::{JoinedField, JoinedRecord};

/// Pearson correlation coefficient between two fields of the joined rows
///
/// Returns `None` when the coefficient is undefined: fewer than two rows, or
/// zero variance in either field. `None` must not be read as "no correlation".
pub fn correlation(joined: &[JoinedRecord], x: JoinedField, y: JoinedField) -> Option<f64> {
    let xs: Vec<f64> = joined.iter().map(|r| x.value(r)).collect();
    let ys: Vec<f64> = joined.iter().map(|r| y.value(r)).collect();

    let r = pearson(&xs, &ys);
    if r.is_none() {
        warn!(rows = joined.len(), x = %x, y = %y, "Correlation is undefined");
    }
    r
}

/// Pearson correlation of two equal-length samples
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    // Checked exactly: the float mean of a constant series is not always exact
    if is_constant(xs) || is_constant(ys) {
        return None;
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return None;
    }

    let r = sxy / (sxx.sqrt() * syy.sqrt());
    if r.is_finite() {
        Some(r.clamp(-1.0, 1.0))
    } else {
        None
    }
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::join::filter_and_join;
    use crate::test_utils::sample_dataset;

    fn row(year: i32, production: f64, rainfall_mm: f64) -> JoinedRecord {
        JoinedRecord {
            state: "A".into(),
            crop: "X".into(),
            year,
            production,
            rainfall_mm,
        }
    }

    #[test]
    fn test_perfect_positive() {
        let ds = sample_dataset();
        let joined = filter_and_join(&ds.production, &ds.rainfall, "Punjab", "Wheat");
        let r = correlation(&joined, JoinedField::Production, JoinedField::Rainfall).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_negative() {
        let ds = sample_dataset();
        let joined = filter_and_join(&ds.production, &ds.rainfall, "Punjab", "Rice");
        let r = correlation(&joined, JoinedField::Production, JoinedField::Rainfall).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_value() {
        // x = 1..5, y = 2,4,5,4,5 -> r = 0.7745966692
        let rows: Vec<_> = [2.0, 4.0, 5.0, 4.0, 5.0]
            .iter()
            .enumerate()
            .map(|(i, y)| row(2000 + i as i32, (i + 1) as f64, *y))
            .collect();
        let r = correlation(&rows, JoinedField::Production, JoinedField::Rainfall).unwrap();
        assert!((r - 0.774_596_669_2).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric() {
        let rows = vec![
            row(2018, 10.0, 3.0),
            row(2019, 7.5, 9.0),
            row(2020, 12.0, 1.0),
            row(2021, 3.3, 4.4),
        ];
        for (a, b) in [
            (JoinedField::Production, JoinedField::Rainfall),
            (JoinedField::Year, JoinedField::Production),
            (JoinedField::Year, JoinedField::Rainfall),
        ] {
            assert_eq!(correlation(&rows, a, b), correlation(&rows, b, a));
        }
    }

    #[test]
    fn test_fewer_than_two_rows_is_undefined() {
        assert_eq!(
            correlation(&[], JoinedField::Production, JoinedField::Rainfall),
            None
        );
        assert_eq!(
            correlation(
                &[row(2020, 1.0, 2.0)],
                JoinedField::Production,
                JoinedField::Rainfall
            ),
            None
        );
    }

    #[test]
    fn test_zero_variance_is_undefined() {
        let rows = vec![row(2018, 5.0, 1.0), row(2019, 5.0, 2.0), row(2020, 5.0, 3.0)];
        assert_eq!(
            correlation(&rows, JoinedField::Production, JoinedField::Rainfall),
            None
        );
    }

    #[test]
    fn test_inexact_constant_is_undefined() {
        for constant in [0.1, 11.3] {
            let rows = vec![
                row(2018, constant, 500.0),
                row(2019, constant, 650.0),
                row(2020, constant, 900.0),
            ];
            assert_eq!(
                correlation(&rows, JoinedField::Production, JoinedField::Rainfall),
                None,
                "constant {}",
                constant
            );
            assert_eq!(
                correlation(&rows, JoinedField::Rainfall, JoinedField::Production),
                None
            );
        }
    }

    #[test]
    fn test_constant_series_has_no_insight() {
        use crate::insights::analyze_selection;
        use crate::models::Dataset;
        use crate::test_utils::{production, rainfall};

        let dataset = Dataset::new(
            vec![
                production("Punjab", "Rice", 2018, 11.3),
                production("Punjab", "Rice", 2019, 11.3),
                production("Punjab", "Rice", 2020, 11.3),
            ],
            vec![
                rainfall("Punjab", 2018, 620.0),
                rainfall("Punjab", 2019, 580.0),
                rainfall("Punjab", 2020, 540.0),
            ],
        );
        let analysis = analyze_selection(&dataset, "Punjab", "Rice");
        assert_eq!(analysis.joined.len(), 3);
        assert_eq!(analysis.correlation, None);
        assert_eq!(analysis.insight, None);
    }

    #[test]
    fn test_result_in_range() {
        let rows = vec![
            row(2018, 0.1, 0.3),
            row(2019, 0.2, 0.6),
            row(2020, 0.3, 0.9),
        ];
        let r = correlation(&rows, JoinedField::Production, JoinedField::Rainfall).unwrap();
        assert!((-1.0..=1.0).contains(&r));
    }

    #[test]
    fn test_pearson_length_mismatch() {
        assert_eq!(pearson(&[1.0, 2.0], &[1.0]), None);
    }
}

//! Synthetic camera trajectory generator
//!
//! Produces `trajectory.txt`: one camera pose per line, written as
//! `tx ty tz qx qy qz qw`. The poses sweep half a turn around the vertical
//! axis at a fixed distance from the scene center.

use std::f64::consts::PI;
use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::{Path, PathBuf};

use glam::{DQuat, DVec3};

/// Name of the generated file inside the output directory
pub const TRAJECTORY_FILE_NAME: &str = "trajectory.txt";

/// Camera height used for every sample
pub const CAMERA_HEIGHT: f64 = -1.0;

#[derive(Debug, thiserror::Error)]
pub enum TrajectoryError {
    #[error("Sample count must be at least 1")]
    NoSamples,

    #[error("Failed to write trajectory {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line_number}: {message}")]
    Parse { line_number: usize, message: String },

    #[error("Failed to format trajectory: {0}")]
    Format(#[from] std::fmt::Error),
}

/// One camera pose
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    pub position: DVec3,
    pub rotation: DQuat,
}

/// `count` poses evenly spaced over `[-pi/2, pi/2)`, `distance` away from the
/// center along -Z.
pub fn half_turn_arc(count: usize, distance: f64) -> Result<Vec<TrajectorySample>, TrajectoryError> {
    if count == 0 {
        return Err(TrajectoryError::NoSamples);
    }

    let step = PI / count as f64;
    let position = DVec3::new(0.0, CAMERA_HEIGHT, -distance);

    Ok((0..count)
        .map(|i| {
            let alpha = i as f64 * step - PI / 2.0;
            TrajectorySample {
                position,
                rotation: DQuat::from_rotation_y(alpha),
            }
        })
        .collect())
}

/// Render samples in the `trajectory.txt` line format.
pub fn format_trajectory(samples: &[TrajectorySample]) -> Result<String, TrajectoryError> {
    let mut output = String::new();
    for sample in samples {
        let p = sample.position;
        let q = sample.rotation;
        writeln!(
            output,
            "{} {} {} {} {} {} {}",
            format_float(p.x),
            format_float(p.y),
            format_float(p.z),
            format_float(q.x),
            format_float(q.y),
            format_float(q.z),
            format_float(q.w)
        )?;
    }
    Ok(output)
}

/// Write samples to [`TRAJECTORY_FILE_NAME`] inside `output_dir`.
pub fn write_trajectory(
    output_dir: &Path,
    samples: &[TrajectorySample],
) -> Result<PathBuf, TrajectoryError> {
    let path = output_dir.join(TRAJECTORY_FILE_NAME);
    let contents = format_trajectory(samples)?;
    fs::write(&path, contents).map_err(|source| TrajectoryError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::info!("Wrote {} samples to {}", samples.len(), path.display());
    Ok(path)
}

/// Read poses back from `trajectory.txt` text. Blank lines are skipped.
pub fn parse_trajectory(text: &str) -> Result<Vec<TrajectorySample>, TrajectoryError> {
    let mut samples = Vec::new();

    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let values = line
            .split_whitespace()
            .map(|field| {
                field.parse::<f64>().map_err(|e| TrajectoryError::Parse {
                    line_number: i + 1,
                    message: format!("invalid number {:?}: {}", field, e),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let [tx, ty, tz, qx, qy, qz, qw] = values[..] else {
            return Err(TrajectoryError::Parse {
                line_number: i + 1,
                message: format!("expected 7 values, found {}", values.len()),
            });
        };

        samples.push(TrajectorySample {
            position: DVec3::new(tx, ty, tz),
            rotation: DQuat::from_xyzw(qx, qy, qz, qw),
        });
    }

    Ok(samples)
}

/// Shortest round-trip float text, with a `.0` on integral values and
/// exponent notation (at least two exponent digits) for very small or very
/// large magnitudes.
fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let magnitude = value.abs();
    if value != 0.0 && value.is_finite() && !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exp),
                };
                format!("{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => formatted,
        };
    }

    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(-0.0), "-0.0");
        assert_eq!(format_float(-1.0), "-1.0");
        assert_eq!(format_float(2.5), "2.5");
        assert_eq!(format_float(-0.7071067811865476), "-0.7071067811865476");
        assert_eq!(format_float(1.2246467991473532e-16), "1.2246467991473532e-16");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1e-5), "1e-05");
        assert_eq!(format_float(-1.5e-7), "-1.5e-07");
        assert_eq!(format_float(1e100), "1e+100");
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_tiny_distance_uses_two_digit_exponent() {
        let samples = half_turn_arc(1, 0.00001).expect("Failed to sample trajectory");
        let text = format_trajectory(&samples).expect("Failed to format trajectory");
        assert_eq!(
            text,
            "0.0 -1.0 -1e-05 0.0 -0.7071067811865475 0.0 0.7071067811865476\n"
        );
    }

    #[test]
    fn test_single_sample_faces_left() {
        let samples = half_turn_arc(1, 1.0).expect("Failed to sample trajectory");
        assert_eq!(samples.len(), 1);

        let s = samples[0];
        assert_eq!(s.position, DVec3::new(0.0, -1.0, -1.0));
        let half = -PI / 4.0;
        assert!((s.rotation.y - half.sin()).abs() < 1e-12);
        assert!((s.rotation.w - half.cos()).abs() < 1e-12);
        assert_eq!(s.rotation.x, 0.0);
        assert_eq!(s.rotation.z, 0.0);
    }

    #[test]
    fn test_samples_evenly_spaced() {
        let samples = half_turn_arc(4, 2.5).expect("Failed to sample trajectory");
        assert_eq!(samples.len(), 4);

        for (i, s) in samples.iter().enumerate() {
            let alpha = i as f64 * PI / 4.0 - PI / 2.0;
            assert!((s.rotation.y - (alpha / 2.0).sin()).abs() < 1e-12);
            assert!((s.rotation.w - (alpha / 2.0).cos()).abs() < 1e-12);
            assert!((s.rotation.length() - 1.0).abs() < 1e-12);
            assert_eq!(s.position.z, -2.5);
        }
    }

    #[test]
    fn test_zero_samples_rejected() {
        assert!(matches!(half_turn_arc(0, 1.0), Err(TrajectoryError::NoSamples)));
    }

    #[test]
    fn test_format_line_shape() {
        let text = format_trajectory(&half_turn_arc(3, 1.0).expect("Failed to sample trajectory")).expect("Failed to format trajectory");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            assert_eq!(line.split(' ').count(), 7);
            assert!(line.starts_with("0.0 -1.0 -1.0 0.0 "));
        }
    }

    #[test]
    fn test_parse_written_text() {
        let samples = half_turn_arc(5, 3.0).expect("Failed to sample trajectory");
        let parsed = parse_trajectory(&format_trajectory(&samples).expect("Failed to format trajectory")).expect("Failed to parse trajectory");
        assert_eq!(parsed, samples);
    }

    #[test]
    fn test_parse_rejects_short_line() {
        let err = parse_trajectory("0 0 0 0 0 0 1\n\n1 2 3\n").unwrap_err();
        match err {
            TrajectoryError::Parse { line_number, .. } => assert_eq!(line_number, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_trajectory("0 0 0 0 0 zero 1\n"),
            Err(TrajectoryError::Parse { line_number: 1, .. })
        ));
    }
}

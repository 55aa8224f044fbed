//! Validation of free-form numeric text typed into joint edit fields.
//!
//! Adapters call [`read_joint_input`] with the raw field contents and, on
//! success, hand the resulting [`AxisAngles`] to
//! [`JointPoseModel::apply`](crate::model::JointPoseModel::apply).

use crate::catalog::{Axis, JointConfig};
use crate::error::{InputError, InputErrorKind, InputErrors};
use crate::pose::AxisAngles;

/// Rewrites locale and full-width variants into a plain ASCII float literal.
///
/// Trims whitespace, strips `°`, maps `，` `。` `．` to `.`, full-width digits
/// to ASCII digits and `－` to `-`.
///
/// # Example
/// ```
/// use rigpose_core::input::normalize_number_text;
///
/// assert_eq!(normalize_number_text(" －４５。５° "), "-45.5");
/// ```
pub fn normalize_number_text(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|&c| c != '°')
        .map(|c| match c {
            '，' | '。' | '．' => '.',
            '－' => '-',
            '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
            other => other,
        })
        .collect()
}

/// Parses normalized text into a finite float.
pub fn parse_degrees(text: &str) -> Option<f64> {
    normalize_number_text(text)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Validates the text of up to three axis fields for one joint.
///
/// Non-controllable axes and blank fields produce no value. Failures are
/// collected across all axes instead of stopping at the first.
pub fn read_joint_input(
    config: &JointConfig,
    x: Option<&str>,
    y: Option<&str>,
    z: Option<&str>,
) -> Result<AxisAngles, InputErrors> {
    let mut angles = AxisAngles::new();
    let mut errors = Vec::new();

    for (axis, text) in [(Axis::X, x), (Axis::Y, y), (Axis::Z, z)] {
        let Some(limit) = config.limit(axis) else {
            continue;
        };
        let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
            continue;
        };
        match parse_degrees(text) {
            None => errors.push(InputError {
                axis,
                kind: InputErrorKind::InvalidNumber,
            }),
            Some(value) if !limit.contains(value) => errors.push(InputError {
                axis,
                kind: InputErrorKind::OutOfRange {
                    value,
                    min: limit.min,
                    max: limit.max,
                },
            }),
            Some(value) => angles.set(axis, Some(value)),
        }
    }

    if errors.is_empty() {
        Ok(angles)
    } else {
        Err(InputErrors(errors))
    }
}

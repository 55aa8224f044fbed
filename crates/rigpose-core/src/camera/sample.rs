//! Per-frame input summaries handed to the camera controller.

use glam::DVec2;

/// Touch state for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TouchSample {
    /// No touch in progress.
    #[default]
    None,
    /// A single finger moved by this many pixels.
    Drag(DVec2),
    /// Two fingers; positions this frame and last frame.
    Pinch {
        current: [DVec2; 2],
        previous: [DVec2; 2],
    },
}

impl TouchSample {
    /// Builds a pinch from current positions and per-finger deltas.
    pub fn pinch_from_deltas(current: [DVec2; 2], deltas: [DVec2; 2]) -> Self {
        TouchSample::Pinch {
            current,
            previous: [current[0] - deltas[0], current[1] - deltas[1]],
        }
    }

    /// Change in finger separation since the last frame, in pixels.
    /// Positive when the fingers spread apart.
    pub fn pinch_delta(&self) -> Option<f64> {
        match self {
            TouchSample::Pinch { current, previous } => {
                Some(current[0].distance(current[1]) - previous[0].distance(previous[1]))
            }
            _ => None,
        }
    }

    fn is_finite(&self) -> bool {
        match self {
            TouchSample::None => true,
            TouchSample::Drag(delta) => delta.is_finite(),
            TouchSample::Pinch { current, previous } => {
                current.iter().chain(previous.iter()).all(|p| p.is_finite())
            }
        }
    }
}

/// Everything the input layer observed during one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputSample {
    /// Name of a preset selected this frame.
    pub preset: Option<String>,
    /// Pointer drag in pixels, present only while the drag button is held.
    pub drag: Option<DVec2>,
    /// Vertical scroll delta; positive zooms in.
    pub scroll: f64,
    /// Touch state.
    pub touch: TouchSample,
}

impl InputSample {
    /// A frame with no input.
    pub fn idle() -> Self {
        Self::default()
    }

    /// A frame that selects a preset.
    pub fn select(name: impl Into<String>) -> Self {
        Self {
            preset: Some(name.into()),
            ..Self::default()
        }
    }

    /// A frame with a pointer drag.
    pub fn drag(dx: f64, dy: f64) -> Self {
        Self {
            drag: Some(DVec2::new(dx, dy)),
            ..Self::default()
        }
    }

    /// A frame with a scroll step.
    pub fn scroll(amount: f64) -> Self {
        Self {
            scroll: amount,
            ..Self::default()
        }
    }

    /// A frame with a touch state.
    pub fn touch(touch: TouchSample) -> Self {
        Self {
            touch,
            ..Self::default()
        }
    }

    /// Copy with non-finite components dropped, plus whether anything was dropped.
    pub(crate) fn sanitized(&self) -> (InputSample, bool) {
        let mut clean = self.clone();
        let mut dropped = false;
        if clean.drag.is_some_and(|d| !d.is_finite()) {
            clean.drag = None;
            dropped = true;
        }
        if !clean.scroll.is_finite() {
            clean.scroll = 0.0;
            dropped = true;
        }
        if !clean.touch.is_finite() {
            clean.touch = TouchSample::None;
            dropped = true;
        }
        (clean, dropped)
    }
}

// Loading splash model: a simulated load fills the bar over a fixed
// duration, the displayed value chases the target so the bar moves
// smoothly, status messages advance in stages, and the splash holds
// briefly before fading out.

use super::constants::{LOADING_BAR_LERP, LOADING_DURATION_MS, LOADING_FADE_MS, LOADING_HOLD_MS};

pub const LOADING_MESSAGES: [&str; 7] = [
    "Initializing interface...",
    "Calibrating portal field...",
    "Synchronizing data streams...",
    "Warming up shaders...",
    "Establishing secure session...",
    "Composing the scene...",
    "Finalizing setup...",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingStage {
    Filling,
    Holding,
    FadingOut,
    Done,
}

#[derive(Clone, Copy, Debug)]
pub struct LoadingView {
    pub bar_fraction: f32,
    pub message_index: usize,
    pub overlay_opacity: f32,
    pub stage: LoadingStage,
}

#[derive(Clone, Copy, Debug)]
pub struct LoadingModel {
    started_at_ms: f64,
    displayed_fraction: f32,
    stage: LoadingStage,
}

impl LoadingModel {
    pub fn new(now_ms: f64) -> Self {
        Self {
            started_at_ms: now_ms,
            displayed_fraction: 0.0,
            stage: LoadingStage::Filling,
        }
    }

    pub fn stage(&self) -> LoadingStage {
        self.stage
    }

    pub fn is_done(&self) -> bool {
        self.stage == LoadingStage::Done
    }

    pub fn tick(&mut self, now_ms: f64) -> LoadingView {
        let elapsed = (now_ms - self.started_at_ms).max(0.0);
        let target = (elapsed / LOADING_DURATION_MS).min(1.0) as f32;
        self.displayed_fraction += (target - self.displayed_fraction) * LOADING_BAR_LERP;

        let message_index =
            ((target * LOADING_MESSAGES.len() as f32) as usize).min(LOADING_MESSAGES.len() - 1);

        let hold_end = LOADING_DURATION_MS + LOADING_HOLD_MS;
        let fade_end = hold_end + LOADING_FADE_MS;
        self.stage = if elapsed < LOADING_DURATION_MS {
            LoadingStage::Filling
        } else if elapsed < hold_end {
            LoadingStage::Holding
        } else if elapsed < fade_end {
            LoadingStage::FadingOut
        } else {
            LoadingStage::Done
        };

        let overlay_opacity = match self.stage {
            LoadingStage::Filling | LoadingStage::Holding => 1.0,
            LoadingStage::FadingOut => 1.0 - ((elapsed - hold_end) / LOADING_FADE_MS) as f32,
            LoadingStage::Done => 0.0,
        };

        LoadingView {
            bar_fraction: self.displayed_fraction,
            message_index,
            overlay_opacity,
            stage: self.stage,
        }
    }
}

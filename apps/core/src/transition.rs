//! Two-phase pane transition: fade the current content out, then reveal the
//! replacement either by rolling the panes out to their width budget while
//! unfading (desktop) or by unfading alone (mobile).
//!
//! The engine never owns a timer. Hosts call [`TransitionEngine::tick`] once
//! per [`TransitionEngine::tick_interval`], and tests advance it by hand.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const FADE_TICK_MS: u64 = 40;
const FADE_FACTOR: f64 = 0.1;
const FADE_FLOOR: f64 = 0.1;
const REVEAL_START_OPACITY: f64 = 0.1;
const OPACITY_STEP: f64 = 0.1;
const OPACITY_CEILING: f64 = 1.0;
const ROLL_OUT_START_WIDTH: f64 = 1.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceProfile {
    #[default]
    Desktop,
    Firefox,
    Mobile,
}

impl DeviceProfile {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "desktop" => Some(Self::Desktop),
            "firefox" => Some(Self::Firefox),
            "mobile" => Some(Self::Mobile),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Firefox => "firefox",
            Self::Mobile => "mobile",
        }
    }

    pub const fn reveal_tick(self) -> Duration {
        match self {
            Self::Desktop => Duration::from_millis(10),
            Self::Firefox => Duration::from_millis(35),
            Self::Mobile => Duration::from_millis(50),
        }
    }

    pub const fn reveal_style(self) -> RevealStyle {
        match self {
            Self::Desktop | Self::Firefox => RevealStyle::RollOut,
            Self::Mobile => RevealStyle::Unfade,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealStyle {
    /// Grow width toward the budget while raising opacity.
    RollOut,
    /// Raise opacity at half the step, width untouched.
    Unfade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionConfig {
    pub fade_tick: Duration,
    pub reveal_tick: Duration,
    pub reveal_style: RevealStyle,
}

impl TransitionConfig {
    pub const fn for_profile(profile: DeviceProfile) -> Self {
        Self {
            fade_tick: Duration::from_millis(FADE_TICK_MS),
            reveal_tick: profile.reveal_tick(),
            reveal_style: profile.reveal_style(),
        }
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self::for_profile(DeviceProfile::default())
    }
}

/// Visual state of one content pane.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pane {
    pub content: String,
    pub opacity: f64,
    /// Explicit width in pixels; `None` leaves the natural width.
    pub width: Option<f64>,
    pub visible: bool,
}

impl Default for Pane {
    fn default() -> Self {
        Self {
            content: String::new(),
            opacity: OPACITY_CEILING,
            width: None,
            visible: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    FadeOut,
    RollOut,
    Unfade,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// Fade-out reached the floor; the reveal phase starts on the next tick.
    PhaseChanged,
    Completed,
}

#[derive(Debug, Clone)]
struct Target {
    content: String,
    budget: f64,
    width: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct TransitionEngine {
    config: TransitionConfig,
    phase: Phase,
    opacity: f64,
    targets: Vec<Target>,
    reveal_ticks: u32,
    ticks: u32,
}

impl TransitionEngine {
    /// `content` and `budgets` are matched to panes by position.
    ///
    /// A budget that is not a positive finite number collapses to the
    /// starting width, so the roll-out still terminates.
    pub fn new(config: TransitionConfig, content: Vec<String>, budgets: &[f64]) -> Self {
        let targets = content
            .into_iter()
            .zip(budgets.iter().copied())
            .map(|(content, budget)| Target {
                content,
                budget: usable_budget(budget),
                width: None,
            })
            .collect();

        Self {
            config,
            phase: Phase::FadeOut,
            opacity: OPACITY_CEILING,
            targets,
            reveal_ticks: 0,
            ticks: 0,
        }
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Done)
    }

    /// Ticks processed so far, across both phases.
    pub const fn ticks(&self) -> u32 {
        self.ticks
    }

    pub const fn tick_interval(&self) -> Duration {
        match self.phase {
            Phase::FadeOut => self.config.fade_tick,
            Phase::RollOut | Phase::Unfade | Phase::Done => self.config.reveal_tick,
        }
    }

    /// Advances every pane by one tick, in list order.
    pub fn tick(&mut self, panes: &mut [Pane]) -> TickOutcome {
        if self.is_finished() {
            return TickOutcome::Completed;
        }
        self.ticks += 1;

        match self.phase {
            Phase::FadeOut => self.fade_out(panes),
            Phase::RollOut => self.roll_out(panes),
            Phase::Unfade => self.unfade(panes),
            Phase::Done => TickOutcome::Completed,
        }
    }

    fn fade_out(&mut self, panes: &mut [Pane]) -> TickOutcome {
        let floor_reached = self.opacity <= FADE_FLOOR;
        for pane in panes.iter_mut().take(self.targets.len()) {
            if floor_reached {
                pane.visible = false;
                pane.content.clear();
            }
            pane.opacity = self.opacity;
        }
        self.opacity -= self.opacity * FADE_FACTOR;

        if !floor_reached {
            return TickOutcome::Continue;
        }

        self.phase = match self.config.reveal_style {
            RevealStyle::RollOut => Phase::RollOut,
            RevealStyle::Unfade => Phase::Unfade,
        };
        self.opacity = REVEAL_START_OPACITY;
        self.reveal_ticks = 0;
        tracing::trace!(phase = ?self.phase, ticks = self.ticks, "fade-out finished");
        TickOutcome::PhaseChanged
    }

    fn roll_out(&mut self, panes: &mut [Pane]) -> TickOutcome {
        #[allow(clippy::cast_precision_loss)]
        let tick_estimate = self.config.reveal_tick.as_millis().max(1) as f64;
        let first_tick = self.reveal_ticks == 0;
        let mut growing = false;

        for (pane, target) in panes.iter_mut().zip(self.targets.iter_mut()) {
            match target.width {
                Some(width) if width > target.budget => pane.width = Some(target.budget),
                current => {
                    let width = current.unwrap_or(ROLL_OUT_START_WIDTH);
                    pane.width = Some(width);
                    target.width = Some(width + target.budget / tick_estimate);
                    pane.opacity = self.opacity.min(OPACITY_CEILING);
                    if first_tick {
                        inject(pane, target);
                    }
                    growing = true;
                }
            }
        }

        self.finish_reveal_tick(OPACITY_STEP, growing)
    }

    fn unfade(&mut self, panes: &mut [Pane]) -> TickOutcome {
        let first_tick = self.reveal_ticks == 0;
        let mut raising = false;

        if self.opacity <= OPACITY_CEILING {
            for (pane, target) in panes.iter_mut().zip(self.targets.iter_mut()) {
                pane.opacity = self.opacity;
                if first_tick {
                    inject(pane, target);
                }
                raising = true;
            }
        }

        self.finish_reveal_tick(OPACITY_STEP / 2.0, raising)
    }

    fn finish_reveal_tick(&mut self, step: f64, still_moving: bool) -> TickOutcome {
        self.opacity += step;
        self.reveal_ticks += 1;

        if still_moving {
            TickOutcome::Continue
        } else {
            self.phase = Phase::Done;
            tracing::trace!(ticks = self.ticks, "transition finished");
            TickOutcome::Completed
        }
    }
}

fn usable_budget(budget: f64) -> f64 {
    if budget.is_finite() && budget > 0.0 {
        budget
    } else {
        tracing::warn!(budget, "unusable width budget, rolling out to the start width");
        ROLL_OUT_START_WIDTH
    }
}

fn inject(pane: &mut Pane, target: &mut Target) {
    pane.content.push_str(&std::mem::take(&mut target.content));
    pane.visible = true;
}

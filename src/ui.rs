//! HUD and phase overlays
//!
//! The view models are plain data built from [`GameState`]; only the
//! `dom` submodule touches the page.

use crate::sim::{GamePhase, GameState};

pub const TIMER_COLOR: &str = "#00ffff";
pub const TIMER_WARNING_COLOR: &str = "#ff0000";

/// Text shown in the HUD bar
#[derive(Debug, Clone, PartialEq)]
pub struct HudView {
    /// e.g. "Level 3: Gemini"
    pub level_label: String,
    /// e.g. "TIME: 26"
    pub timer_label: String,
    /// Countdown at or below the warning threshold
    pub warning: bool,
}

impl HudView {
    pub fn from_state(state: &GameState, low_time_warning: f32) -> Self {
        let remaining = state.level.time_remaining.max(0.0);
        Self {
            level_label: format!(
                "Level {}: {}",
                state.level.level_index + 1,
                state.level_def().name
            ),
            // Whole seconds, rounded up so "TIME: 0" only shows once expired
            timer_label: format!("TIME: {}", remaining.ceil() as u32),
            warning: remaining <= low_time_warning,
        }
    }

    pub fn timer_color(&self) -> &'static str {
        if self.warning { TIMER_WARNING_COLOR } else { TIMER_COLOR }
    }
}

/// Which screens are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlays {
    pub start: bool,
    pub fail: bool,
    pub win: bool,
    pub hud: bool,
}

impl Overlays {
    pub fn for_phase(phase: GamePhase) -> Self {
        Self {
            start: phase == GamePhase::Start,
            fail: phase == GamePhase::Fail,
            win: phase == GamePhase::Win,
            hud: phase == GamePhase::Playing,
        }
    }
}

/// DOM application (WASM only)
#[cfg(target_arch = "wasm32")]
pub mod dom {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, HtmlElement};

    use super::{HudView, Overlays};

    fn set_hidden(document: &Document, id: &str, hidden: bool) -> Result<(), JsValue> {
        if let Some(el) = document.get_element_by_id(id) {
            if hidden {
                el.class_list().add_1("hidden")?;
            } else {
                el.class_list().remove_1("hidden")?;
            }
        }
        Ok(())
    }

    /// Show/hide screens. Call on phase-change edges only.
    pub fn apply_overlays(document: &Document, overlays: Overlays) -> Result<(), JsValue> {
        set_hidden(document, "start-screen", !overlays.start)?;
        set_hidden(document, "fail-screen", !overlays.fail)?;
        set_hidden(document, "win-screen", !overlays.win)?;
        set_hidden(document, "hud", !overlays.hud)?;
        Ok(())
    }

    /// Update HUD text and countdown color
    pub fn apply_hud(document: &Document, hud: &HudView) -> Result<(), JsValue> {
        if let Some(el) = document.get_element_by_id("level-display") {
            el.set_text_content(Some(&hud.level_label));
        }
        if let Some(el) = document.get_element_by_id("timer-display") {
            el.set_text_content(Some(&hud.timer_label));
            if let Ok(el) = el.dyn_into::<HtmlElement>() {
                el.style().set_property("color", hud.timer_color())?;
            }
        }
        Ok(())
    }
}

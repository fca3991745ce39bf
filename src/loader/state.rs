/// Duration of the loading overlay's exit fade.
pub const OVERLAY_EXIT_FADE_MS: u64 = 600;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Page loading flag.
///
/// Starts [`LoadingState::Loading`] and moves to [`LoadingState::Ready`] exactly once.
pub enum LoadingState {
    /// The first load has not settled (or its minimum visible time has not elapsed).
    #[default]
    Loading,
    /// Loading is over for the lifetime of the page.
    Ready,
}

impl LoadingState {
    /// `true` while loading.
    pub fn is_loading(self) -> bool {
        self == Self::Loading
    }

    /// Transition to [`LoadingState::Ready`]; returns `true` only for the transition itself.
    pub fn finish(&mut self) -> bool {
        match self {
            Self::Loading => {
                *self = Self::Ready;
                true
            }
            Self::Ready => false,
        }
    }

    /// Overlay description for the current state.
    pub fn overlay(self) -> LoadingOverlay {
        LoadingOverlay {
            visible: self.is_loading(),
            label: "Synthesizing",
            exit_fade_ms: OVERLAY_EXIT_FADE_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Full-screen loading indicator.
///
/// While `visible` it occludes all other content. When it turns invisible the view layer plays
/// an opacity fade of `exit_fade_ms` instead of removing it abruptly.
pub struct LoadingOverlay {
    /// Overlay is shown.
    pub visible: bool,
    /// Caption under the spinner.
    pub label: &'static str,
    /// Exit fade duration in milliseconds.
    pub exit_fade_ms: u64,
}

#[cfg(test)]
#[path = "../../tests/unit/loader/state.rs"]
mod tests;

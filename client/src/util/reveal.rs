//! Scroll-triggered reveal model.
//!
//! A block starts hidden and becomes visible once the browser reports it
//! intersecting; the observer's threshold decides when that report fires.
//! With `trigger_once` it then stays visible and the observer can be
//! released; otherwise it hides again on leaving. The browser observer
//! lives in `components::reveal`; everything here is pure.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

pub const DEFAULT_THRESHOLD: f64 = 0.15;
pub const DEFAULT_ROOT_MARGIN: &str = "0px 0px -60px 0px";
pub const VISIBLE_CLASS: &str = "anim-visible";

/// Entrance animation applied through an `anim-<name>` class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Animation {
    #[default]
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    FadeIn,
    ScaleUp,
    ZoomRotate,
    BlurIn,
    BounceUp,
}

impl Animation {
    pub const ALL: [Animation; 9] = [
        Animation::FadeUp,
        Animation::FadeDown,
        Animation::FadeLeft,
        Animation::FadeRight,
        Animation::FadeIn,
        Animation::ScaleUp,
        Animation::ZoomRotate,
        Animation::BlurIn,
        Animation::BounceUp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FadeUp => "fade-up",
            Self::FadeDown => "fade-down",
            Self::FadeLeft => "fade-left",
            Self::FadeRight => "fade-right",
            Self::FadeIn => "fade-in",
            Self::ScaleUp => "scale-up",
            Self::ZoomRotate => "zoom-rotate",
            Self::BlurIn => "blur-in",
            Self::BounceUp => "bounce-up",
        }
    }

    /// CSS class carrying the hidden starting pose.
    pub fn class(self) -> String {
        format!("anim-{}", self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
    pub trigger_once: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN.to_owned(),
            trigger_once: true,
        }
    }
}

/// What the observer should do after an intersection update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObserveOutcome {
    Keep,
    Disconnect,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub visible: bool,
}

impl RevealState {
    /// Fold one intersection update into the state.
    pub fn observe(&mut self, is_intersecting: bool, opts: &RevealOptions) -> ObserveOutcome {
        if is_intersecting {
            self.visible = true;
            if opts.trigger_once {
                return ObserveOutcome::Disconnect;
            }
        } else if !opts.trigger_once {
            self.visible = false;
        }
        ObserveOutcome::Keep
    }
}

/// Class list for a reveal wrapper.
pub fn reveal_class(animation: Animation, visible: bool, extra: &str) -> String {
    let mut class = animation.class();
    if visible {
        class.push(' ');
        class.push_str(VISIBLE_CLASS);
    }
    let extra = extra.trim();
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Transition delay for the `index`-th child of a staggered group.
pub fn stagger_delay_ms(index: usize, stagger_ms: u32, visible: bool) -> u32 {
    if !visible {
        return 0;
    }
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(stagger_ms)
}

/// Inline style for a delay, empty when there is none.
pub fn delay_style(delay_ms: u32) -> String {
    if delay_ms == 0 {
        String::new()
    } else {
        format!("transition-delay: {delay_ms}ms")
    }
}

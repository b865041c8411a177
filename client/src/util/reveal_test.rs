use super::*;

#[test]
fn defaults_match_site_feel() {
    let opts = RevealOptions::default();
    assert_eq!(opts.threshold, 0.15);
    assert_eq!(opts.root_margin, "0px 0px -60px 0px");
    assert!(opts.trigger_once);
}

#[test]
fn starts_hidden_and_ignores_non_intersecting_updates() {
    let mut state = RevealState::default();
    let outcome = state.observe(false, &RevealOptions::default());
    assert!(!state.visible);
    assert_eq!(outcome, ObserveOutcome::Keep);
}

#[test]
fn trigger_once_reveals_permanently_and_disconnects() {
    let opts = RevealOptions::default();
    let mut state = RevealState::default();
    assert_eq!(state.observe(true, &opts), ObserveOutcome::Disconnect);
    assert!(state.visible);
    state.observe(false, &opts);
    assert!(state.visible);
}

#[test]
fn repeatable_reveal_hides_on_leave() {
    let opts = RevealOptions {
        trigger_once: false,
        ..RevealOptions::default()
    };
    let mut state = RevealState::default();
    assert_eq!(state.observe(true, &opts), ObserveOutcome::Keep);
    assert!(state.visible);
    state.observe(false, &opts);
    assert!(!state.visible);
    state.observe(true, &opts);
    assert!(state.visible);
}

#[test]
fn animation_classes_cover_every_variant() {
    let classes: Vec<_> = Animation::ALL.iter().map(|a| a.class()).collect();
    assert_eq!(classes[0], "anim-fade-up");
    assert_eq!(classes[6], "anim-zoom-rotate");
    assert!(classes.iter().all(|c| c.starts_with("anim-")));
}

#[test]
fn reveal_class_appends_visible_and_extra() {
    assert_eq!(reveal_class(Animation::FadeIn, false, ""), "anim-fade-in");
    assert_eq!(
        reveal_class(Animation::ScaleUp, true, " card "),
        "anim-scale-up anim-visible card"
    );
}

#[test]
fn stagger_delay_is_zero_until_visible() {
    assert_eq!(stagger_delay_ms(3, 100, false), 0);
    assert_eq!(stagger_delay_ms(0, 100, true), 0);
    assert_eq!(stagger_delay_ms(3, 100, true), 300);
}

#[test]
fn delay_style_omits_zero() {
    assert_eq!(delay_style(0), "");
    assert_eq!(delay_style(250), "transition-delay: 250ms");
}

use super::*;

#[test]
fn size_classes() {
    assert_eq!(HeroSize::Full.class(), "hero--full");
    assert_eq!(HeroSize::Medium.class(), "hero--medium");
    assert_eq!(HeroSize::Small.class(), "hero--small");
}

#[test]
fn overlay_defaults_to_blue() {
    assert_eq!(HeroOverlay::default(), HeroOverlay::Blue);
    assert!(HeroOverlay::Dark.class().ends_with("--dark"));
}

#[test]
fn only_full_heroes_get_particles() {
    assert_eq!(particle_count(HeroSize::Full), 6);
    assert_eq!(particle_count(HeroSize::Medium), 0);
    assert_eq!(particle_count(HeroSize::Small), 0);
}

#[test]
fn particles_spread_across_width() {
    assert_eq!(
        particle_style(0),
        "left: 15%; animation-duration: 6s; animation-delay: 0.0s"
    );
    assert_eq!(
        particle_style(5),
        "left: 90%; animation-duration: 16s; animation-delay: 4.0s"
    );
}

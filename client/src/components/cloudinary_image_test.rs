use super::*;

#[test]
fn class_list_reflects_load_state() {
    assert_eq!(image_class(false, false, ObjectFit::Cover, ""), "cdn-img img--cover");
    assert_eq!(
        image_class(true, false, ObjectFit::Contain, " logo "),
        "cdn-img cdn-img--loaded img--contain logo"
    );
}

#[test]
fn object_fit_none_adds_no_class() {
    assert_eq!(image_class(true, false, ObjectFit::None, ""), "cdn-img cdn-img--loaded");
}

#[test]
fn placeholder_class_only_until_loaded() {
    assert_eq!(
        image_class(false, true, ObjectFit::Cover, ""),
        "cdn-img cdn-img--placeholder img--cover"
    );
    assert_eq!(image_class(true, true, ObjectFit::Cover, ""), "cdn-img cdn-img--loaded img--cover");
}

#[test]
fn placeholder_backdrop_clears_once_loaded() {
    let url = "https://res.cloudinary.com/demo/image/upload/w_30/x";
    assert_eq!(
        placeholder_style(Some(url), false).as_deref(),
        Some("background-image: url('https://res.cloudinary.com/demo/image/upload/w_30/x')")
    );
    assert_eq!(placeholder_style(Some(url), true), None);
    assert_eq!(placeholder_style(None, false), None);
}

#[test]
fn image_finished_before_hydration_is_recognized() {
    assert_eq!(settled(true, 640), Some(Settled::Loaded));
    assert_eq!(settled(true, 0), Some(Settled::Failed));
    assert_eq!(settled(false, 0), None);
    assert_eq!(settled(false, 640), None);
}

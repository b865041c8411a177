use super::*;

const CLOUD: &str = "demo";

#[test]
fn default_flags_are_auto_format_and_quality() {
    assert_eq!(ImageOptions::default().transformations(), "f_auto,q_auto");
}

#[test]
fn flags_follow_fixed_order() {
    let opts = ImageOptions {
        width: Some(400),
        height: Some(300),
        crop: Some(Crop::Fill),
        gravity: Some(Gravity::Face),
        quality: Some(80),
        format: Format::Webp,
        dpr: Some(Dpr::Auto),
        custom: Some("e_sharpen".to_owned()),
    };
    assert_eq!(
        opts.transformations(),
        "f_webp,q_80,w_400,h_300,c_fill,g_face,dpr_auto,e_sharpen"
    );
}

#[test]
fn image_url_matches_cdn_layout() {
    let opts = ImageOptions {
        width: Some(400),
        height: Some(400),
        crop: Some(Crop::Fill),
        ..ImageOptions::default()
    };
    assert_eq!(
        image_url(CLOUD, "products/bracket", &opts),
        "https://res.cloudinary.com/demo/image/upload/f_auto,q_auto,w_400,h_400,c_fill/products/bracket"
    );
}

#[test]
fn srcset_lists_every_breakpoint() {
    let srcset = responsive_srcset(CLOUD, "hero/factory", &ImageOptions::default());
    let entries: Vec<_> = srcset.split(", ").collect();
    assert_eq!(entries.len(), SRCSET_WIDTHS.len());
    assert_eq!(
        entries[0],
        "https://res.cloudinary.com/demo/image/upload/f_auto,q_auto,w_320/hero/factory 320w"
    );
    assert!(entries[5].ends_with(" 1920w"));
}

#[test]
fn srcset_overrides_requested_width() {
    let opts = ImageOptions {
        width: Some(50),
        crop: Some(Crop::Fit),
        ..ImageOptions::default()
    };
    let srcset = responsive_srcset(CLOUD, "x", &opts);
    assert!(!srcset.contains("w_50"));
    assert!(srcset.contains("w_640,c_fit/x 640w"));
}

#[test]
fn blur_placeholder_is_tiny_and_blurred() {
    assert_eq!(
        blur_placeholder(CLOUD, "hero/factory"),
        "https://res.cloudinary.com/demo/image/upload/f_auto,q_30,w_30,e_blur:1000/hero/factory"
    );
}

#[test]
fn absolute_urls_pass_through() {
    let url = "https://images.unsplash.com/photo-1?w=600";
    assert_eq!(optimized_url(CLOUD, url, &ImageOptions::default()), url);
    assert_eq!(
        optimized_url(CLOUD, "http://example.test/a.png", &ImageOptions::default()),
        "http://example.test/a.png"
    );
    assert!(optimized_url(CLOUD, "logos/acme", &ImageOptions::default()).starts_with(&base_url(CLOUD)));
}

#[test]
fn dpr_ratio_renders_number() {
    let opts = ImageOptions {
        dpr: Some(Dpr::Ratio(2.0)),
        ..ImageOptions::default()
    };
    assert_eq!(opts.transformations(), "f_auto,q_auto,dpr_2");
}

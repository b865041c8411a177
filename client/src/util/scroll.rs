//! Window scroll helpers and the geometry behind scroll-driven styling.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scroll offset past which the header switches to its compact style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 20.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

/// Fraction of the timeline line to draw.
///
/// `top` and `height` are the container's bounding rect, `viewport` is the
/// window's inner height. Starts filling as the container enters from the
/// bottom and completes 30% of a viewport after its end passes.
pub fn timeline_progress(top: f64, height: f64, viewport: f64) -> f64 {
    let span = height + viewport * 0.3;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport - top) / span).clamp(0.0, 1.0)
}

/// Current vertical scroll offset; `0.0` outside the browser.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Window inner height; `0.0` outside the browser.
pub fn viewport_height() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smooth-scroll the window back to the top.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
}

/// Smooth-scroll the element with `id` to the top of the viewport.
pub fn scroll_to_element(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(id))
        {
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            opts.set_block(web_sys::ScrollLogicalPosition::Start);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

//! Scroll-triggered reveal wrappers.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`use_reveal`] attaches an `IntersectionObserver` to a node once it
//! mounts and exposes visibility as a signal. `Reveal` wraps a single block;
//! `StaggerGroup` shares one observer between its `StaggerItem` children so
//! they animate in sequence. During SSR every block renders hidden and the
//! browser reveals it after hydration.
//!
//! TRADE-OFFS
//! ==========
//! Observer callbacks are leaked closures. Teardown flips an alive flag and
//! the callback disconnects its observer on the next delivery, which the
//! browser sends when the node leaves the document.

use leptos::html::Div;
use leptos::prelude::*;

use crate::util::reveal::{
    Animation, DEFAULT_ROOT_MARGIN, DEFAULT_THRESHOLD, RevealOptions, delay_style, reveal_class, stagger_delay_ms,
};

/// Visibility of `target` as reported by an intersection observer.
pub fn use_reveal(target: NodeRef<Div>, opts: RevealOptions) -> RwSignal<bool> {
    let visible = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_cb = alive.clone();
        Effect::new(move |attached: Option<bool>| {
            if attached == Some(true) {
                return true;
            }
            let Some(el) = target.get() else {
                return false;
            };
            observe(&el, opts.clone(), visible, alive_cb.clone())
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, opts);
    }

    visible
}

#[cfg(feature = "hydrate")]
fn observe(
    el: &web_sys::Element,
    opts: RevealOptions,
    visible: RwSignal<bool>,
    alive: std::sync::Arc<std::sync::atomic::AtomicBool>,
) -> bool {
    use std::sync::atomic::Ordering;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::util::reveal::{ObserveOutcome, RevealState};

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(opts.threshold));
    init.set_root_margin(&opts.root_margin);

    let cb = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            if !alive.load(Ordering::Relaxed) {
                observer.disconnect();
                return;
            }
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                let mut state = RevealState {
                    visible: visible.get_untracked(),
                };
                let outcome = state.observe(entry.is_intersecting(), &opts);
                let _ = visible.try_set(state.visible);
                if outcome == ObserveOutcome::Disconnect {
                    observer.disconnect();
                    break;
                }
            }
        },
    );

    match web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(el);
            cb.forget();
            true
        }
        Err(_) => {
            // No observer support: show content rather than hide it forever.
            visible.set(true);
            true
        }
    }
}

/// Single block that animates in when scrolled into view.
#[component]
pub fn Reveal(
    #[prop(optional)] animation: Animation,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class_name: String,
    #[prop(default = DEFAULT_THRESHOLD)] threshold: f64,
    #[prop(default = true)] trigger_once: bool,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let visible = use_reveal(
        node_ref,
        RevealOptions {
            threshold,
            root_margin: DEFAULT_ROOT_MARGIN.to_owned(),
            trigger_once,
        },
    );

    view! {
        <div
            node_ref=node_ref
            class=move || reveal_class(animation, visible.get(), &class_name)
            style=delay_style(delay_ms)
        >
            {children()}
        </div>
    }
}

/// Shared visibility for a staggered group.
#[derive(Clone, Copy)]
struct StaggerContext {
    visible: RwSignal<bool>,
    stagger_ms: u32,
    animation: Animation,
}

/// Container whose `StaggerItem` children reveal one after another.
#[component]
pub fn StaggerGroup(
    #[prop(optional)] animation: Animation,
    #[prop(default = 100)] stagger_ms: u32,
    #[prop(default = 0.1)] threshold: f64,
    #[prop(optional, into)] class_name: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let visible = use_reveal(
        node_ref,
        RevealOptions {
            threshold,
            ..RevealOptions::default()
        },
    );
    provide_context(StaggerContext {
        visible,
        stagger_ms,
        animation,
    });

    view! {
        <div node_ref=node_ref class=class_name>
            {children()}
        </div>
    }
}

/// The `index`-th child of a [`StaggerGroup`].
#[component]
pub fn StaggerItem(index: usize, children: Children) -> impl IntoView {
    let ctx = expect_context::<StaggerContext>();
    let class = move || reveal_class(ctx.animation, ctx.visible.get(), "");
    let style = move || {
        let visible = ctx.visible.get();
        format!(
            "transition-delay: {}ms",
            stagger_delay_ms(index, ctx.stagger_ms, visible)
        )
    };

    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}

use dioxus::prelude::*;

use crate::utils::Viewport;

/// Current viewport class, updated on window resize
///
/// The resize listener is registered once for the lifetime of the calling
/// component and removed when it unmounts.
pub fn use_viewport() -> Signal<Viewport> {
    #[cfg_attr(not(target_arch = "wasm32"), allow(unused_mut))]
    let mut viewport = use_signal(|| Viewport::from_width(window_width()));

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::prelude::*;
        use wasm_bindgen::JsCast;

        let listener = use_hook(move || {
            let callback = Closure::wrap(Box::new(move |_: web_sys::Event| {
                let next = Viewport::from_width(window_width());
                if *viewport.peek() != next {
                    viewport.set(next);
                }
            }) as Box<dyn FnMut(web_sys::Event)>);

            if let Some(window) = web_sys::window() {
                if let Err(e) = window
                    .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
                {
                    log::warn!("Failed to listen for resize: {:?}", e);
                }
            }
            std::rc::Rc::new(callback)
        });

        use_drop(move || {
            let callback: &Closure<dyn FnMut(web_sys::Event)> = &listener;
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
            }
        });
    }

    viewport
}

fn window_width() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(width) = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
        {
            return width;
        }
    }
    // Desktop layout until a window says otherwise
    f64::INFINITY
}

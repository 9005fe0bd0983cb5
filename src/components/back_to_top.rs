use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config;

/// Whether the control should be offered at this scroll depth.
fn past_threshold(scroll_y: f64) -> bool {
    scroll_y > config::BACK_TO_TOP_THRESHOLD
}

/// Floating button that appears once the visitor has scrolled down and
/// smooth-scrolls back to the top of the page.
#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let shown = use_state(|| false);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(win) = window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let shown = shown.clone();
                        move || {
                            if let Some(win) = window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    shown.set(past_threshold(scroll_y));
                                }
                            }
                        }
                    });
                    if let Err(err) = win
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        log::warn!("failed to attach scroll listener: {:?}", err);
                    }
                    Box::new(move || {
                        if let Some(win) = window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let onclick = Callback::from(|_| {
        if let Some(win) = window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
        }
    });

    html! {
        <button
            class={classes!("back-to-top", if *shown { "show" } else { "" })}
            aria-label="Back to top"
            {onclick}
        >
            {"\u{2191}"}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_at_and_below_threshold() {
        assert!(!past_threshold(0.0));
        assert!(!past_threshold(299.0));
        assert!(!past_threshold(300.0));
    }

    #[test]
    fn test_shown_past_threshold() {
        assert!(past_threshold(300.5));
        assert!(past_threshold(2_000.0));
    }
}

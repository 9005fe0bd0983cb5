use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, MouseEvent, Node, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config;

/// Menu entries; each id must exist as a section on the landing page.
const NAV_SECTIONS: &[(&str, &str)] = &[
    ("space", "The Space"),
    ("features", "Features"),
    ("gallery", "Gallery"),
    ("requirements", "Leasing"),
    ("timeline", "Availability"),
    ("contact", "Contact"),
];

fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

/// Smooth-scroll the section with this id into view.
fn scroll_to_section(id: &str) {
    if let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id))
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn ref_contains(node_ref: &NodeRef, node: &Node) -> bool {
    node_ref
        .get()
        .map(|owner| owner.contains(Some(node)))
        .unwrap_or(false)
}

/// An open menu stays open only for clicks on the toggle or inside the menu
/// itself. The rest of the bar does not shield clicks, so the logo and the
/// bar padding close it like anywhere else on the page.
fn should_close_on_click(on_toggle: bool, in_menu: bool) -> bool {
    !on_toggle && !in_menu
}

/// Fixed top bar with the section links. Below the mobile breakpoint the
/// links collapse behind a hamburger button; the expanded menu closes on
/// link selection, on clicks outside the toggle and the menu, and when the
/// window grows back past the breakpoint.
#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let open = use_state(|| false);
    let toggle_ref = use_node_ref();
    let links_ref = use_node_ref();

    // Close the menu when a click lands outside the toggle and the menu.
    {
        let open = open.clone();
        let toggle_ref = toggle_ref.clone();
        let links_ref = links_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> =
                    if let Some(document) = window().and_then(|w| w.document()) {
                        let callback = Closure::<dyn Fn(Event)>::new(move |event: Event| {
                            let close = event
                                .target()
                                .and_then(|target| target.dyn_into::<Node>().ok())
                                .map(|node| {
                                    should_close_on_click(
                                        ref_contains(&toggle_ref, &node),
                                        ref_contains(&links_ref, &node),
                                    )
                                })
                                .unwrap_or(true);
                            if close {
                                open.set(false);
                            }
                        });
                        if let Err(err) = document.add_event_listener_with_callback(
                            "click",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            log::warn!("failed to attach document click listener: {:?}", err);
                        }
                        Box::new(move || {
                            if let Some(document) = window().and_then(|w| w.document()) {
                                let _ = document.remove_event_listener_with_callback(
                                    "click",
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

    // Collapse when the window grows past the mobile breakpoint, so the
    // desktop layout never renders with the hamburger state left open.
    {
        let open = open.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(win) = window() {
                    let closure = Closure::wrap(Box::new(move || {
                        if viewport_width() > config::MOBILE_NAV_BREAKPOINT {
                            open.set(false);
                        }
                    }) as Box<dyn FnMut()>);
                    let _ = win.add_event_listener_with_callback(
                        "resize",
                        closure.as_ref().unchecked_ref(),
                    );
                    closure.forget();
                }
                || ()
            },
            (),
        );
    }

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };

    let nav_link = |id: &'static str, label: &'static str| -> Html {
        let open = open.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            scroll_to_section(id);
            // On phones the expanded menu would cover the section we just
            // scrolled to.
            if viewport_width() <= config::MOBILE_NAV_BREAKPOINT {
                open.set(false);
            }
        });
        html! {
            <li><a href={format!("#{}", id)} {onclick}>{ label }</a></li>
        }
    };

    html! {
        <nav class="site-nav">
            <div class="nav-inner">
                <a class="nav-logo" href="#top">{"The Foundry"}</a>
                <button
                    ref={toggle_ref}
                    class={classes!("nav-toggle", if *open { "open" } else { "" })}
                    aria-label="Menu"
                    aria-expanded={if *open { "true" } else { "false" }}
                    onclick={on_toggle}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul ref={links_ref} class={classes!("nav-links", if *open { "open" } else { "" })}>
                    { NAV_SECTIONS.iter().map(|&(id, label)| nav_link(id, label)).collect::<Html>() }
                    <li><ThemeToggle /></li>
                </ul>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_beyond_toggle_and_menu_closes() {
        assert!(should_close_on_click(false, false));
    }

    #[test]
    fn test_clicks_on_toggle_or_in_menu_keep_it_open() {
        assert!(!should_close_on_click(true, false));
        assert!(!should_close_on_click(false, true));
    }
}

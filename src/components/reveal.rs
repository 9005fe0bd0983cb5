use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// Observer margin pulling the trigger line up from the viewport bottom, so
/// content animates in slightly before it would otherwise be visible.
fn reveal_root_margin() -> String {
    format!("0px 0px -{}px 0px", config::REVEAL_MARGIN_PX)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that fades its content in the first time it scrolls into view.
/// The reveal is one-way: once shown, the content stays shown and the
/// observer is disconnected.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let mut handle = None;
                if let Some(element) = node.cast::<Element>() {
                    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                                    if entry.is_intersecting() {
                                        visible.set(true);
                                        observer.disconnect();
                                    }
                                }
                            }
                        },
                    );
                    let options = IntersectionObserverInit::new();
                    options.set_root_margin(&reveal_root_margin());
                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            observer.observe(&element);
                            handle = Some((observer, callback));
                        }
                        Err(err) => log::warn!("failed to create reveal observer: {:?}", err),
                    }
                }
                move || {
                    if let Some((observer, _callback)) = handle {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", if *visible { "visible" } else { "" }, props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_matches_trigger_line() {
        assert_eq!(reveal_root_margin(), "0px 0px -80px 0px");
    }
}

use yew::prelude::*;

use crate::theme::{self, Theme};

/// Button flipping between the light and dark palette. The choice takes
/// effect immediately and is remembered for the next visit.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(theme::initial);

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = (*theme).toggled();
            theme::apply(next);
            theme::persist(next);
            theme.set(next);
        })
    };

    let icon = match *theme {
        Theme::Light => "\u{1F319}",
        Theme::Dark => "\u{2600}\u{FE0F}",
    };

    html! {
        <button class="theme-toggle" aria-label="Switch color theme" title="Switch color theme" {onclick}>
            { icon }
        </button>
    }
}

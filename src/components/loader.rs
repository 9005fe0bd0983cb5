use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long the loader stays fully opaque after the first paint.
const HOLD_MS: u32 = 1_200;
/// Fade-out length; matches the opacity transition in the stylesheet.
const FADE_MS: u32 = 500;

#[derive(Clone, Copy, PartialEq)]
enum Phase {
    Holding,
    Fading,
    Done,
}

/// Full-screen overlay covering the initial load. It holds briefly, fades
/// out, then unmounts entirely so it cannot intercept clicks.
#[function_component(PageLoader)]
pub fn page_loader() -> Html {
    let phase = use_state(|| Phase::Holding);

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |_| {
                let fade = {
                    let phase = phase.clone();
                    Timeout::new(HOLD_MS, move || phase.set(Phase::Fading))
                };
                let done = Timeout::new(HOLD_MS + FADE_MS, move || phase.set(Phase::Done));
                move || {
                    drop(fade);
                    drop(done);
                }
            },
            (),
        );
    }

    match *phase {
        Phase::Done => html! {},
        current => html! {
            <div
                class={classes!("page-loader", if current == Phase::Fading { "fade-out" } else { "" })}
                aria-hidden="true"
            >
                <div class="loader-mark"></div>
            </div>
        },
    }
}

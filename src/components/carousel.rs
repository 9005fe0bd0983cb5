use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, TouchEvent, VisibilityState};
use yew::prelude::*;

/// Cool-down between slide changes, matching the CSS track transition.
const TRANSITION_MS: u32 = 500;
/// Pause between automatic advances.
const AUTO_ADVANCE_MS: u32 = 5_000;
/// Minimum horizontal drag, in CSS pixels, that counts as a swipe. Anything
/// shorter is treated as a tap or scroll jitter.
const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// One panel of the gallery.
#[derive(Clone, PartialEq)]
pub struct Slide {
    pub image: String,
    pub alt: String,
    pub caption: String,
}

pub enum CarouselAction {
    /// Jump straight to a slide, as the indicator dots do.
    GoTo(usize),
    /// One step forward, wrapping from the last slide to the first.
    Advance,
    /// One step backward, wrapping from the first slide to the last.
    Retreat,
    /// Clear the transition lock armed by the transition named by `epoch`.
    Release { epoch: u64 },
}

/// Slide selection state. Every navigation source funnels into
/// [`Reducible::reduce`]; the view derives the track offset and the active
/// classes from `current` alone, so the state can never disagree with what
/// is shown.
#[derive(Clone, PartialEq, Debug)]
pub struct CarouselState {
    slide_count: usize,
    current: usize,
    in_transition: bool,
    epoch: u64,
}

impl CarouselState {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            current: 0,
            in_transition: false,
            epoch: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn in_transition(&self) -> bool {
        self.in_transition
    }

    /// Identifies the transition holding the current lock. Bumped on every
    /// accepted navigation, so a release armed by an earlier transition can
    /// be told apart from the live one.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    fn select(&self, target: usize) -> Self {
        Self {
            slide_count: self.slide_count,
            current: target,
            in_transition: true,
            epoch: self.epoch + 1,
        }
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: CarouselAction) -> Rc<Self> {
        match action {
            CarouselAction::Release { epoch } => {
                if epoch == self.epoch && self.in_transition {
                    let mut next = (*self).clone();
                    next.in_transition = false;
                    Rc::new(next)
                } else {
                    // Armed by an older transition; the live lock stands.
                    self
                }
            }
            // Requests during the cool-down are dropped, not queued.
            _ if self.in_transition || self.slide_count == 0 => self,
            CarouselAction::GoTo(target) => {
                debug_assert!(target < self.slide_count, "slide index out of range");
                if target >= self.slide_count {
                    return self;
                }
                Rc::new(self.select(target))
            }
            CarouselAction::Advance => Rc::new(self.select((self.current + 1) % self.slide_count)),
            CarouselAction::Retreat => Rc::new(
                self.select((self.current + self.slide_count - 1) % self.slide_count),
            ),
        }
    }
}

pub enum SwipeDirection {
    Next,
    Prev,
}

/// Direction selected by a completed horizontal drag, if it travelled
/// strictly further than the threshold.
pub fn swipe_direction(start_x: f64, end_x: f64) -> Option<SwipeDirection> {
    let delta = start_x - end_x;
    if delta > SWIPE_THRESHOLD_PX {
        Some(SwipeDirection::Next)
    } else if delta < -SWIPE_THRESHOLD_PX {
        Some(SwipeDirection::Prev)
    } else {
        None
    }
}

/// Auto-advance runs only while the pointer is elsewhere and the page is
/// actually being shown.
pub fn should_auto_advance(hovered: bool, page_visible: bool) -> bool {
    !hovered && page_visible
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: Vec<Slide>,
}

/// Auto-advancing photo carousel. Arrows, indicator dots, arrow keys and
/// touch swipes all drive the same state machine; hovering or hiding the
/// page pauses the automatic rotation.
#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let state = use_reducer_eq({
        let slide_count = props.slides.len();
        move || CarouselState::new(slide_count)
    });
    let hovered = use_state(|| false);
    let page_visible = use_state(|| true);
    let touch_start_x = use_mut_ref(|| None::<f64>);

    // Track the page-visibility signal so a background tab does not keep
    // rotating.
    {
        let page_visible = page_visible.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> =
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let callback = Closure::<dyn Fn()>::new({
                            let document = document.clone();
                            move || {
                                page_visible
                                    .set(document.visibility_state() == VisibilityState::Visible);
                            }
                        });
                        if let Err(err) = document.add_event_listener_with_callback(
                            "visibilitychange",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            log::warn!("failed to attach visibility listener: {:?}", err);
                        }
                        Box::new(move || {
                            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                                let _ = document.remove_event_listener_with_callback(
                                    "visibilitychange",
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

    // Auto-advance timer. Recreated whenever hover or visibility changes;
    // the cleanup drops the previous interval first, so at most one runs.
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |(hovered, visible): &(bool, bool)| {
                let interval = should_auto_advance(*hovered, *visible).then(|| {
                    Interval::new(AUTO_ADVANCE_MS, move || {
                        dispatcher.dispatch(CarouselAction::Advance);
                    })
                });
                move || drop(interval)
            },
            (*hovered, *page_visible),
        );
    }

    // Arm the lock release whenever a transition begins. The timeout always
    // fires; the reducer ignores a release whose epoch is no longer live.
    {
        let dispatcher = state.dispatcher();
        let in_transition = state.in_transition();
        use_effect_with_deps(
            move |epoch: &u64| {
                let timeout = in_transition.then(|| {
                    let epoch = *epoch;
                    Timeout::new(TRANSITION_MS, move || {
                        dispatcher.dispatch(CarouselAction::Release { epoch });
                    })
                });
                move || drop(timeout)
            },
            state.epoch(),
        );
    }

    let on_prev = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(CarouselAction::Retreat))
    };
    let on_next = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(CarouselAction::Advance))
    };
    let on_keydown = {
        let state = state.clone();
        Callback::from(move |event: KeyboardEvent| match event.key().as_str() {
            "ArrowLeft" => state.dispatch(CarouselAction::Retreat),
            "ArrowRight" => state.dispatch(CarouselAction::Advance),
            _ => {}
        })
    };
    let on_mouse_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_| hovered.set(true))
    };
    let on_mouse_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_| hovered.set(false))
    };
    let on_touch_start = {
        let touch_start_x = touch_start_x.clone();
        Callback::from(move |event: TouchEvent| {
            *touch_start_x.borrow_mut() =
                event.touches().get(0).map(|touch| touch.client_x() as f64);
        })
    };
    let on_touch_end = {
        let touch_start_x = touch_start_x.clone();
        let state = state.clone();
        Callback::from(move |event: TouchEvent| {
            let start = touch_start_x.borrow_mut().take();
            let end = event
                .changed_touches()
                .get(0)
                .map(|touch| touch.client_x() as f64);
            if let (Some(start), Some(end)) = (start, end) {
                match swipe_direction(start, end) {
                    Some(SwipeDirection::Next) => state.dispatch(CarouselAction::Advance),
                    Some(SwipeDirection::Prev) => state.dispatch(CarouselAction::Retreat),
                    None => {}
                }
            }
        })
    };

    if props.slides.is_empty() {
        return html! {};
    }

    let current = state.current();
    let track_style = format!("transform: translateX(-{}%);", current * 100);

    html! {
        <div
            class="carousel"
            tabindex="0"
            aria-label="Photo gallery"
            onkeydown={on_keydown}
            onmouseenter={on_mouse_enter}
            onmouseleave={on_mouse_leave}
            ontouchstart={on_touch_start}
            ontouchend={on_touch_end}
        >
            <style>{ carousel_css() }</style>
            <div class="carousel-track" style={track_style}>
                { props.slides.iter().enumerate().map(|(index, slide)| html! {
                    <figure class={classes!("carousel-slide", if index == current { "active" } else { "" })}>
                        <img
                            src={slide.image.clone()}
                            alt={slide.alt.clone()}
                            loading={if index == 0 { "eager" } else { "lazy" }}
                        />
                        <figcaption>{ slide.caption.clone() }</figcaption>
                    </figure>
                }).collect::<Html>() }
            </div>
            <button class="carousel-control prev" aria-label="Previous photo" onclick={on_prev}>
                {"\u{2039}"}
            </button>
            <button class="carousel-control next" aria-label="Next photo" onclick={on_next}>
                {"\u{203A}"}
            </button>
            <div class="carousel-dots">
                { (0..props.slides.len()).map(|index| {
                    let on_select = {
                        let state = state.clone();
                        Callback::from(move |_| state.dispatch(CarouselAction::GoTo(index)))
                    };
                    html! {
                        <button
                            class={classes!("carousel-dot", if index == current { "active" } else { "" })}
                            aria-label={format!("Go to photo {}", index + 1)}
                            onclick={on_select}
                        />
                    }
                }).collect::<Html>() }
            </div>
        </div>
    }
}

fn carousel_css() -> String {
    format!(
        r#"
        .carousel {{
            position: relative;
            overflow: hidden;
            border-radius: 14px;
            outline: none;
            box-shadow: var(--shadow);
        }}
        .carousel:focus-visible {{
            box-shadow: 0 0 0 3px var(--brand), var(--shadow);
        }}
        .carousel-track {{
            display: flex;
            transition: transform {transition}ms ease;
        }}
        .carousel-slide {{
            min-width: 100%;
            margin: 0;
            position: relative;
        }}
        .carousel-slide img {{
            display: block;
            width: 100%;
            height: 440px;
            object-fit: cover;
        }}
        .carousel-slide figcaption {{
            position: absolute;
            left: 0;
            right: 0;
            bottom: 0;
            padding: 1.75rem 1.5rem 1rem;
            background: linear-gradient(transparent, rgba(10, 10, 12, 0.75));
            color: #f5f2ec;
            font-size: 0.95rem;
            opacity: 0;
            transition: opacity {transition}ms ease;
        }}
        .carousel-slide.active figcaption {{
            opacity: 1;
        }}
        .carousel-control {{
            position: absolute;
            top: 50%;
            transform: translateY(-50%);
            width: 44px;
            height: 44px;
            border: none;
            border-radius: 50%;
            background: rgba(10, 10, 12, 0.45);
            color: #f5f2ec;
            font-size: 1.6rem;
            line-height: 1;
            cursor: pointer;
            transition: background 0.2s ease;
        }}
        .carousel-control:hover {{
            background: rgba(10, 10, 12, 0.75);
        }}
        .carousel-control.prev {{ left: 1rem; }}
        .carousel-control.next {{ right: 1rem; }}
        .carousel-dots {{
            position: absolute;
            left: 0;
            right: 0;
            bottom: 0.9rem;
            display: flex;
            justify-content: center;
            gap: 0.5rem;
        }}
        .carousel-dot {{
            width: 10px;
            height: 10px;
            padding: 0;
            border: none;
            border-radius: 50%;
            background: rgba(245, 242, 236, 0.45);
            cursor: pointer;
            transition: background 0.2s ease, transform 0.2s ease;
        }}
        .carousel-dot.active {{
            background: #f5f2ec;
            transform: scale(1.25);
        }}
        @media (max-width: 750px) {{
            .carousel-slide img {{ height: 300px; }}
            .carousel-control {{ width: 38px; height: 38px; }}
        }}
        "#,
        transition = TRANSITION_MS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(state: Rc<CarouselState>, action: CarouselAction) -> Rc<CarouselState> {
        state.reduce(action)
    }

    fn release(state: Rc<CarouselState>) -> Rc<CarouselState> {
        let epoch = state.epoch();
        state.reduce(CarouselAction::Release { epoch })
    }

    #[test]
    fn test_starts_on_first_slide_unlocked() {
        let state = CarouselState::new(5);
        assert_eq!(state.current(), 0);
        assert!(!state.in_transition());
    }

    #[test]
    fn test_advance_wraps_after_full_cycle() {
        let mut state = Rc::new(CarouselState::new(5));
        for expected in [1, 2, 3, 4, 0] {
            state = dispatch(state, CarouselAction::Advance);
            assert_eq!(state.current(), expected);
            state = release(state);
        }
    }

    #[test]
    fn test_retreat_wraps_after_full_cycle() {
        let mut state = Rc::new(CarouselState::new(5));
        for expected in [4, 3, 2, 1, 0] {
            state = dispatch(state, CarouselAction::Retreat);
            assert_eq!(state.current(), expected);
            state = release(state);
        }
    }

    #[test]
    fn test_retreat_from_first_wraps_to_last() {
        let state = Rc::new(CarouselState::new(3));
        let state = dispatch(state, CarouselAction::Retreat);
        assert_eq!(state.current(), 2);
        let state = release(state);
        let state = dispatch(state, CarouselAction::Advance);
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn test_requests_during_cooldown_are_dropped() {
        let state = Rc::new(CarouselState::new(4));
        let state = dispatch(state, CarouselAction::GoTo(2));
        assert_eq!(state.current(), 2);
        assert!(state.in_transition());

        // Nothing lands while the lock is held, and nothing replays after.
        let state = dispatch(state, CarouselAction::GoTo(1));
        assert_eq!(state.current(), 2);
        let state = dispatch(state, CarouselAction::Advance);
        assert_eq!(state.current(), 2);
        let state = dispatch(state, CarouselAction::Retreat);
        assert_eq!(state.current(), 2);

        let state = release(state);
        assert!(!state.in_transition());
        assert_eq!(state.current(), 2);

        let state = dispatch(state, CarouselAction::GoTo(1));
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn test_stale_release_does_not_unlock() {
        let state = Rc::new(CarouselState::new(3));
        let state = dispatch(state, CarouselAction::Advance);
        let stale_epoch = state.epoch();
        let state = release(state);
        let state = dispatch(state, CarouselAction::Advance);

        let state = state.reduce(CarouselAction::Release { epoch: stale_epoch });
        assert!(state.in_transition());

        let state = release(state);
        assert!(!state.in_transition());
    }

    #[test]
    fn test_release_without_transition_is_a_no_op() {
        let state = Rc::new(CarouselState::new(3));
        let epoch = state.epoch();
        let state = state.reduce(CarouselAction::Release { epoch });
        assert!(!state.in_transition());
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn test_indicator_jump_is_direct() {
        let state = Rc::new(CarouselState::new(5));
        let state = dispatch(state, CarouselAction::GoTo(3));
        assert_eq!(state.current(), 3);
        // A jump is a single transition, not a series of steps.
        assert_eq!(state.epoch(), 1);
    }

    #[test]
    fn test_reselecting_active_slide_still_locks() {
        let state = Rc::new(CarouselState::new(3));
        let state = dispatch(state, CarouselAction::GoTo(0));
        assert_eq!(state.current(), 0);
        assert!(state.in_transition());
    }

    #[test]
    fn test_auto_advance_visits_every_slide_in_order() {
        // Each 5000 ms tick lands long after the 500 ms lock has cleared.
        let mut state = Rc::new(CarouselState::new(5));
        let mut seen = Vec::new();
        for _ in 0..5 {
            state = dispatch(state, CarouselAction::Advance);
            state = release(state);
            seen.push(state.current());
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_current_stays_in_range_under_mixed_input() {
        let mut state = Rc::new(CarouselState::new(3));
        let actions = [
            CarouselAction::Advance,
            CarouselAction::Retreat,
            CarouselAction::GoTo(2),
            CarouselAction::Advance,
            CarouselAction::GoTo(0),
            CarouselAction::Retreat,
            CarouselAction::Retreat,
        ];
        for action in actions {
            state = dispatch(state, action);
            assert!(state.current() < 3);
            state = release(state);
        }
    }

    #[test]
    fn test_empty_carousel_ignores_input() {
        let state = Rc::new(CarouselState::new(0));
        let state = dispatch(state, CarouselAction::Advance);
        assert_eq!(state.current(), 0);
        assert!(!state.in_transition());
        let state = dispatch(state, CarouselAction::Retreat);
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn test_swipe_threshold_is_strict() {
        // Exactly the threshold is not a swipe in either direction.
        assert!(swipe_direction(50.0, 0.0).is_none());
        assert!(swipe_direction(0.0, 50.0).is_none());
        // One pixel past it is.
        assert!(matches!(
            swipe_direction(51.0, 0.0),
            Some(SwipeDirection::Next)
        ));
        assert!(matches!(
            swipe_direction(0.0, 51.0),
            Some(SwipeDirection::Prev)
        ));
    }

    #[test]
    fn test_short_drags_and_taps_do_nothing() {
        assert!(swipe_direction(10.0, 0.0).is_none());
        assert!(swipe_direction(120.0, 100.0).is_none());
        assert!(swipe_direction(80.0, 80.0).is_none());
    }

    #[test]
    fn test_swipe_left_means_next() {
        // Finger moves left, content follows, the next slide comes in.
        assert!(matches!(
            swipe_direction(300.0, 180.0),
            Some(SwipeDirection::Next)
        ));
        assert!(matches!(
            swipe_direction(180.0, 300.0),
            Some(SwipeDirection::Prev)
        ));
    }

    #[test]
    fn test_auto_advance_predicate() {
        assert!(should_auto_advance(false, true));
        assert!(!should_auto_advance(true, true));
        assert!(!should_auto_advance(false, false));
        assert!(!should_auto_advance(true, false));
    }
}

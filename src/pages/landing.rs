use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::carousel::{Carousel, Slide};
use crate::components::loader::PageLoader;
use crate::components::navbar::NavBar;
use crate::components::reveal::Reveal;
use crate::components::video_player::AutoplayVideo;
use crate::config;
use crate::utils;

/// Vertical background drift applied to the hero after `scroll_y` pixels of
/// page scroll.
fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * config::PARALLAX_FACTOR
}

fn gallery_slides() -> Vec<Slide> {
    vec![
        Slide {
            image: "/assets/gallery/facade.jpg".into(),
            alt: "Brick facade of The Foundry with full-width glazing".into(),
            caption: "The listed 1926 facade, re-glazed edge to edge in 2019".into(),
        },
        Slide {
            image: "/assets/gallery/main-hall.jpg".into(),
            alt: "Main hall with steel trusses and daylight from roof lanterns".into(),
            caption: "480 m\u{b2} of column-free floor under the original trusses".into(),
        },
        Slide {
            image: "/assets/gallery/mezzanine.jpg".into(),
            alt: "Mezzanine level overlooking the main hall".into(),
            caption: "The 120 m\u{b2} mezzanine, wired for office or studio use".into(),
        },
        Slide {
            image: "/assets/gallery/loading-bay.jpg".into(),
            alt: "Rear loading bay with roller door".into(),
            caption: "Rear loading bay off Chandler Lane, roller access at grade".into(),
        },
        Slide {
            image: "/assets/gallery/evening.jpg".into(),
            alt: "The hall lit for an evening event".into(),
            caption: "Set for an evening event, house rig and bar in place".into(),
        },
    ]
}

/// The single-page site: hero, building story, feature and leasing detail,
/// gallery, and the contact block.
#[function_component(Landing)]
pub fn landing() -> Html {
    let parallax = use_state(|| 0.0_f64);

    // Drift the hero background as the page scrolls.
    {
        let parallax = parallax.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(win) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let parallax = parallax.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    parallax.set(parallax_offset(scroll_y));
                                }
                            }
                        }
                    });
                    if let Err(err) = win.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    ) {
                        log::warn!("failed to attach scroll listener: {:?}", err);
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
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

    let on_brochure = Callback::from(|_| {
        if let Err(err) =
            utils::download::save_file(config::BROCHURE_PATH, config::BROCHURE_FILE_NAME)
        {
            log::error!("brochure download failed: {:?}", err);
        }
    });

    let hero_style = format!("background-position-y: {}px;", *parallax);

    html! {
        <>
            <style>{ page_css() }</style>
            <PageLoader />
            <NavBar />

            <header class="hero" id="top" style={hero_style}>
                <div class="hero-content">
                    <p class="hero-kicker">{"Showroom & event space to lease"}</p>
                    <h1 class="hero-title">{"The Foundry"}</h1>
                    <p class="hero-subtitle">
                        {"A restored 1926 machine-works showroom on the Dock Ward high \
                          street. 480 m\u{b2} of daylight, brick and steel, ready for \
                          retail or events."}
                    </p>
                    <div class="hero-cta-group">
                        <a class="btn-primary" href="#contact">{"Request a viewing"}</a>
                        <button class="btn-secondary" onclick={on_brochure.clone()}>
                            {"Download brochure"}
                        </button>
                    </div>
                </div>
            </header>

            <main>
                <section class="section" id="space">
                    <Reveal>
                        <h2>{"A century of making"}</h2>
                        <p class="section-lead">
                            {"Built in 1926 as the showroom of the Harland machine works, \
                              The Foundry kept its cast-iron columns, riveted trusses and \
                              roof lanterns through a full restoration in 2019. What was \
                              built to show off lathes now shows off whatever you bring \
                              to it."}
                        </p>
                        <p>
                            {"The ground floor is a single column-free hall behind a \
                              fourteen-metre glazed frontage, with a wired mezzanine \
                              above and a service yard behind. It has traded as a \
                              furniture showroom, a seasonal market and a supper club, \
                              and the building shrugs at all of it."}
                        </p>
                    </Reveal>
                </section>

                <section class="section" id="features">
                    <Reveal>
                        <h2>{"The numbers that matter"}</h2>
                        <ul class="feature-list">
                            <li>
                                <strong>{"480 m\u{b2}"}</strong>
                                {" column-free ground floor, plus a 120 m\u{b2} mezzanine"}
                            </li>
                            <li>
                                <strong>{"6.2 m"}</strong>
                                {" clear height to the trusses in the main hall"}
                            </li>
                            <li>
                                <strong>{"14 m"}</strong>
                                {" of glazed frontage directly onto the high street"}
                            </li>
                            <li>
                                <strong>{"Loading bay"}</strong>
                                {" at grade off Chandler Lane, with a 3.4 m roller door"}
                            </li>
                            <li>
                                <strong>{"3-phase power"}</strong>
                                {" at 120 A, house lighting rig and patched data runs"}
                            </li>
                            <li>
                                <strong>{"18,000"}</strong>
                                {" pedestrians past the frontage in an average week"}
                            </li>
                        </ul>
                    </Reveal>
                </section>

                <section class="section" id="gallery">
                    <Reveal>
                        <h2>{"Look around"}</h2>
                        <p class="section-lead">
                            {"Swipe or use the arrows; the gallery also rotates on its \
                              own while you read."}
                        </p>
                        <Carousel slides={gallery_slides()} />
                        <div class="gallery-media">
                            <AutoplayVideo
                                src="/assets/video/walkthrough.mp4"
                                poster="/assets/video/walkthrough-poster.jpg"
                            />
                            <p class="video-note">
                                {"Two minutes through the hall, mezzanine and yard, \
                                  shot on a quiet Tuesday."}
                            </p>
                        </div>
                    </Reveal>
                </section>

                <section class="section" id="requirements">
                    <Reveal>
                        <h2>{"Leasing terms"}</h2>
                        <div class="requirement-grid">
                            <div class="requirement-card">
                                <h3>{"Term"}</h3>
                                <p>
                                    {"Minimum three-year lease with an option to renew. \
                                      Shorter seasonal licences are considered for the \
                                      November and December trading window."}
                                </p>
                            </div>
                            <div class="requirement-card">
                                <h3>{"Use"}</h3>
                                <p>
                                    {"Retail, showroom and event use within Class E. \
                                      Late-licence events are capped at two nights a \
                                      week out of respect for the neighbours."}
                                </p>
                            </div>
                            <div class="requirement-card">
                                <h3>{"Covenant"}</h3>
                                <p>
                                    {"Two trading references and a deposit of six \
                                      months' rent, or a suitable guarantor for newer \
                                      ventures."}
                                </p>
                            </div>
                            <div class="requirement-card">
                                <h3>{"Fit-out"}</h3>
                                <p>
                                    {"Fit-out proposals need landlord sign-off. The \
                                      listed facade and the truss line stay as they \
                                      are; nearly everything else is negotiable."}
                                </p>
                            </div>
                        </div>
                    </Reveal>
                </section>

                <section class="section" id="timeline">
                    <Reveal>
                        <h2>{"Availability"}</h2>
                        <ol class="timeline">
                            <li class="timeline-item">
                                <h3>{"September 2026"}</h3>
                                <p>{"Viewings open, weekdays and Saturday mornings"}</p>
                            </li>
                            <li class="timeline-item">
                                <h3>{"6 October 2026"}</h3>
                                <p>{"Offers reviewed as received from this date"}</p>
                            </li>
                            <li class="timeline-item">
                                <h3>{"November 2026"}</h3>
                                <p>{"Fit-out window for the incoming tenant"}</p>
                            </li>
                            <li class="timeline-item">
                                <h3>{"January 2027"}</h3>
                                <p>{"Earliest trading date"}</p>
                            </li>
                        </ol>
                    </Reveal>
                </section>

                <section class="section contact-section" id="contact">
                    <Reveal>
                        <h2>{"Talk to the letting team"}</h2>
                        <p class="section-lead">
                            {"Viewings take about forty minutes and include the \
                              mezzanine and the yard. Bring your architect if you \
                              have one."}
                        </p>
                        <div class="contact-actions">
                            <a class="contact-btn" href="tel:+441632960077">
                                {"Call \u{2014} 01632 960 077"}
                            </a>
                            <a class="contact-btn" href="mailto:lettings@foundry.example">
                                {"lettings@foundry.example"}
                            </a>
                            <button class="btn-primary" onclick={on_brochure}>
                                {"Download the brochure"}
                            </button>
                        </div>
                    </Reveal>
                </section>
            </main>

            <footer class="site-footer">
                <p>{"The Foundry \u{b7} 14 Ironmonger Row, Dock Ward"}</p>
                <p>{"Let and managed by Harland Estates"}</p>
            </footer>

            <BackToTop />
        </>
    }
}

fn page_css() -> &'static str {
    r#"
    .gallery-media {
        margin-top: 2.5rem;
    }
    .tour-video {
        display: block;
        width: 100%;
        border-radius: 14px;
        box-shadow: var(--shadow);
    }
    .video-note {
        margin-top: 0.75rem;
        font-size: 0.9rem;
        color: var(--ink-soft);
    }
    "#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_is_zero_at_top() {
        assert_eq!(parallax_offset(0.0), 0.0);
    }

    #[test]
    fn test_parallax_moves_slower_than_the_page() {
        assert_eq!(parallax_offset(100.0), 30.0);
        assert_eq!(parallax_offset(250.0), 75.0);
        assert!(parallax_offset(1_000.0) < 1_000.0);
    }

    #[test]
    fn test_gallery_has_distinct_slides() {
        let slides = gallery_slides();
        assert_eq!(slides.len(), 5);
        for (index, slide) in slides.iter().enumerate() {
            assert!(slide.image.ends_with(".jpg"));
            assert!(!slide.alt.is_empty());
            for other in &slides[index + 1..] {
                assert_ne!(slide.image, other.image);
            }
        }
    }
}

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys;
use web_sys::{
    HtmlVideoElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

/// Fraction of the video that must be on screen before playback starts.
const PLAY_VISIBLE_RATIO: f64 = 0.5;

#[derive(Properties, PartialEq)]
pub struct AutoplayVideoProps {
    pub src: String,
    #[prop_or_default]
    pub poster: Option<String>,
}

fn toggle_playback(video: &HtmlVideoElement, on_screen: bool) {
    if on_screen {
        match video.play() {
            // play() resolves asynchronously and the host may refuse
            // autoplay outright; the visible controls stay as the manual
            // fallback either way.
            Ok(promise) => spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::warn!("video autoplay refused: {:?}", err);
                }
            }),
            Err(err) => log::warn!("video play() failed: {:?}", err),
        }
    } else if let Err(err) = video.pause() {
        log::warn!("video pause() failed: {:?}", err);
    }
}

/// Muted walkthrough clip that plays while at least half of it is on screen
/// and pauses as soon as it leaves the viewport.
#[function_component(AutoplayVideo)]
pub fn autoplay_video(props: &AutoplayVideoProps) -> Html {
    let video_ref = use_node_ref();

    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut handle = None;
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    let callback = {
                        let video = video.clone();
                        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                                for entry in entries.iter() {
                                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>()
                                    {
                                        toggle_playback(&video, entry.is_intersecting());
                                    }
                                }
                            },
                        )
                    };
                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from(PLAY_VISIBLE_RATIO));
                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            observer.observe(&video);
                            handle = Some((observer, callback));
                        }
                        Err(err) => log::warn!("failed to create video observer: {:?}", err),
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
        <video
            ref={video_ref}
            class="tour-video"
            src={props.src.clone()}
            poster={props.poster.clone()}
            muted=true
            loop=true
            controls=true
            playsinline=true
            preload="metadata"
        />
    }
}

#[cfg(test)]
mod tests {
    use yew::virtual_dom::VNode;

    use super::*;

    #[test]
    fn test_video_markup_keeps_inline_playback_flags() {
        // muted, loop, controls and playsinline are boolean attributes;
        // giving any of them a string value does not compile.
        let node = html! {
            <video muted=true loop=true controls=true playsinline=true preload="metadata" />
        };
        match node {
            VNode::VTag(tag) => assert_eq!(tag.tag(), "video"),
            _ => panic!("expected a single video tag"),
        }
    }
}

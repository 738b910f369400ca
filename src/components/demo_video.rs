use log::warn;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::config;

/// The parts of a media element touched before autoplay starts.
pub trait MediaTarget {
    fn mute(&self);
    fn set_flag(&self, name: &str);
}

impl MediaTarget for HtmlVideoElement {
    fn mute(&self) {
        // The `muted` attribute is only read when the element is parsed, so
        // set the live property as well.
        self.set_default_muted(true);
        self.set_muted(true);
    }

    fn set_flag(&self, name: &str) {
        if let Err(e) = self.set_attribute(name, "") {
            warn!("Failed to set {} on demo video: {:?}", name, e);
        }
    }
}

/// Muted, inline playback: what browsers require before they autoplay a video.
pub fn prepare_inline_autoplay<M: MediaTarget + ?Sized>(video: &M) {
    video.mute();
    video.set_flag("playsinline");
}

/// Looping, muted, control-less product demo.
#[function_component(DemoVideo)]
pub fn demo_video() -> Html {
    let video_ref = use_node_ref();

    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    prepare_inline_autoplay(&video);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <video ref={video_ref} class="demo-video" autoplay=true loop=true muted=true>
            <source src={config::DEMO_VIDEO_URL} type="video/webm" />
            {"The demo video could not be loaded."}
        </video>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeVideo {
        muted: RefCell<bool>,
        flags: RefCell<Vec<String>>,
    }

    impl MediaTarget for FakeVideo {
        fn mute(&self) {
            *self.muted.borrow_mut() = true;
        }

        fn set_flag(&self, name: &str) {
            self.flags.borrow_mut().push(name.to_string());
        }
    }

    #[test]
    fn autoplay_setup_mutes_and_plays_inline() {
        let video = FakeVideo::default();
        prepare_inline_autoplay(&video);
        assert!(*video.muted.borrow());
        assert_eq!(*video.flags.borrow(), vec!["playsinline".to_string()]);
    }
}

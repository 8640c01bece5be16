use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::config::MUSIC_URL;

const AUDIO_ID: &str = "koa-background-music";

/// Looping background track with a speaker toggle
///
/// Playback starts on mount when the browser allows autoplay; otherwise the
/// player shows as paused until the user presses the button.
#[component]
pub fn MusicPlayer() -> Element {
    let mut is_playing = use_signal(|| true);

    use_effect(move || {
        spawn(async move {
            match play().await {
                Ok(()) => log::info!("Music started automatically"),
                Err(e) => {
                    log::info!("Autoplay prevented: {}", e);
                    is_playing.set(false);
                }
            }
        });
    });

    let icon = if *is_playing.read() { "🔊" } else { "🔈" };

    rsx! {
        div {
            class: "music-player",
            audio {
                id: AUDIO_ID,
                src: MUSIC_URL,
                r#loop: true,
                preload: "auto",
            }
            button {
                class: "music-button",
                onclick: move |_| {
                    if *is_playing.read() {
                        pause();
                        is_playing.set(false);
                    } else {
                        is_playing.set(true);
                        spawn(async move {
                            if let Err(e) = play().await {
                                log::warn!("Playback failed: {}", e);
                                is_playing.set(false);
                            }
                        });
                    }
                },
                "{icon}"
            }
        }
    }
}

fn audio_element() -> Option<web_sys::HtmlAudioElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(AUDIO_ID)?
        .dyn_into::<web_sys::HtmlAudioElement>()
        .ok()
}

async fn play() -> Result<(), String> {
    let audio = audio_element().ok_or("Audio element not found")?;
    let promise = audio.play().map_err(|e| format!("{:?}", e))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

fn pause() {
    if let Some(audio) = audio_element() {
        if let Err(e) = audio.pause() {
            log::warn!("Failed to pause music: {:?}", e);
        }
    }
}

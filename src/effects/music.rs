//! Background music toggle for `#bgMusic`.
//!
//! Browsers may reject `play()` until the visitor interacts with the page.
//! The rejection is swallowed and the toggle still records "playing", so the
//! first click, key press or touch anywhere retries playback.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlMediaElement, Window};

use crate::dom::{self, ListenOptions};
use crate::error::Result;
use crate::view::View;

pub const BUTTON_SELECTOR: &str = "#musicBtn, .music-btn, .icon-music";
pub const ICON_PLAYING: &str = "🔊";
pub const ICON_MUTED: &str = "🔇";
const RESUME_EVENTS: [&str; 3] = ["click", "keydown", "touchstart"];

pub trait Player {
    /// Start playback. May fail later (autoplay policy) without telling us.
    fn play(&self);
    fn pause(&self);
}

pub struct MusicToggle<P, V> {
    player: Option<P>,
    buttons: Vec<V>,
    playing: bool,
}

impl<P: Player, V: View> MusicToggle<P, V> {
    pub fn new(player: Option<P>, buttons: Vec<V>) -> Self {
        Self { player, buttons, playing: false }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Flip playback. Without a media element the buttons do nothing.
    pub fn toggle(&mut self) {
        let Some(player) = &self.player else {
            return;
        };
        if self.playing {
            player.pause();
        } else {
            player.play();
        }
        self.playing = !self.playing;
        self.sync_buttons();
    }

    /// Retry playback after the first user gesture.
    pub fn resume(&self) {
        if let (Some(player), true) = (&self.player, self.playing) {
            player.play();
        }
    }

    fn sync_buttons(&self) {
        let (icon, pressed) = if self.playing { (ICON_PLAYING, "true") } else { (ICON_MUTED, "false") };
        for b in &self.buttons {
            b.set_text(icon);
            b.set_attribute("aria-pressed", pressed);
        }
    }
}

/// `HtmlMediaElement` whose rejected play promises are ignored.
pub struct MediaPlayer {
    media: HtmlMediaElement,
    ignore: Closure<dyn FnMut(JsValue)>,
}

impl MediaPlayer {
    pub fn new(media: HtmlMediaElement) -> Self {
        let ignore = Closure::wrap(Box::new(|err: JsValue| {
            debug!(?err, "playback blocked");
        }) as Box<dyn FnMut(JsValue)>);
        Self { media, ignore }
    }
}

impl Player for MediaPlayer {
    fn play(&self) {
        if let Ok(promise) = self.media.play() {
            let _ = promise.catch(&self.ignore);
        }
    }

    fn pause(&self) {
        self.media.pause().ok();
    }
}

pub fn install(win: &Window, doc: &Document) -> Result<()> {
    let player = doc
        .get_element_by_id("bgMusic")
        .and_then(|el| el.dyn_into::<HtmlMediaElement>().ok())
        .map(MediaPlayer::new);
    let buttons = dom::query_all(doc, BUTTON_SELECTOR);
    let has_player = player.is_some();
    let toggle: Rc<RefCell<MusicToggle<MediaPlayer, Element>>> = Rc::new(RefCell::new(MusicToggle::new(player, buttons.clone())));

    for btn in &buttons {
        let toggle = toggle.clone();
        dom::listen(btn, "click", move |evt| {
            evt.stop_propagation();
            toggle.borrow_mut().toggle();
        })?;
    }

    if has_player {
        for event in RESUME_EVENTS {
            let toggle = toggle.clone();
            dom::listen_with(win, event, ListenOptions { passive: false, once: true }, move |_| {
                toggle.borrow().resume();
            })?;
        }
    }
    Ok(())
}

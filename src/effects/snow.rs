//! Snowfall on `#snowCanvas`.
//!
//! Flakes never interact; each frame every flake falls by `sqrt(d) + 0.6` and
//! drifts sideways with one shared, slowly turning angle. A flake that leaves
//! the bottom edge comes back above the top at a fresh random column.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::dom;
use crate::error::{Result, ShopError};

pub const CANVAS_ID: &str = "snowCanvas";
/// Screen pixels per flake when sizing the flake set.
const PIXELS_PER_FLAKE: f64 = 6.0;
const ANGLE_STEP: f64 = 0.002;
const FALL_BASE: f64 = 0.6;
const DRIFT: f64 = 1.2;
const RESPAWN_Y: f64 = -10.0;
const BOTTOM_MARGIN: f64 = 5.0;
const FLAKE_FILL: &str = "rgba(255,255,255,0.9)";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flake {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    /// Depth; larger falls faster.
    pub d: f64,
}

/// Flake field. `R` yields uniform samples in `[0, 1)`.
pub struct Snowfall<R> {
    flakes: Vec<Flake>,
    width: f64,
    height: f64,
    angle: f64,
    rng: R,
}

/// `min(max, width / 6)`; fixed for the life of the field.
pub fn flake_count(width: f64, max: usize) -> usize {
    let by_width = (width / PIXELS_PER_FLAKE).floor().max(0.0) as usize;
    by_width.min(max)
}

impl<R: FnMut() -> f64> Snowfall<R> {
    pub fn new(width: f64, height: f64, max_flakes: usize, mut rng: R) -> Self {
        let count = flake_count(width, max_flakes);
        let flakes = (0..count)
            .map(|_| Flake {
                x: rng() * width,
                y: rng() * height,
                r: rng() * 3.0 + 0.8,
                d: rng() * count as f64,
            })
            .collect();
        Self { flakes, width, height, angle: 0.0, rng }
    }

    pub fn flakes(&self) -> &[Flake] {
        &self.flakes
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Follow the viewport; existing flakes keep their positions.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Advance one frame.
    pub fn step(&mut self) {
        self.angle += ANGLE_STEP;
        let drift = self.angle.sin() * DRIFT;
        for f in &mut self.flakes {
            f.y += f.d.sqrt() + FALL_BASE;
            f.x += drift;
            if f.y > self.height + BOTTOM_MARGIN {
                f.y = RESPAWN_Y;
                f.x = (self.rng)() * self.width;
            }
        }
    }

    pub fn draw(&self, ctx: &CanvasRenderingContext2d) {
        ctx.clear_rect(0.0, 0.0, self.width, self.height);
        ctx.set_fill_style_str(FLAKE_FILL);
        ctx.begin_path();
        for f in &self.flakes {
            ctx.move_to(f.x, f.y);
            ctx.arc(f.x, f.y, f.r, 0.0, TAU).ok();
        }
        ctx.fill();
    }
}

/// Generator seeded from `crypto.getRandomValues`, or from `Math.random`
/// when the platform source is unavailable.
pub fn browser_rng() -> StdRng {
    StdRng::from_rng(OsRng).unwrap_or_else(|err| {
        warn!(%err, "seeding snowfall from Math.random");
        StdRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
    })
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Start the snowfall if the page has a snow canvas.
pub fn install(win: &Window, doc: &Document, max_flakes: usize) -> Result<()> {
    let Some(el) = doc.get_element_by_id(CANVAS_ID) else {
        return Ok(());
    };
    let canvas: HtmlCanvasElement = el.dyn_into().map_err(|_| ShopError::Dom(format!("#{CANVAS_ID} is not a canvas")))?;
    let Some(ctx) = canvas.get_context("2d").map_err(ShopError::dom)? else {
        return Ok(());
    };
    let ctx: CanvasRenderingContext2d = ctx.dyn_into().map_err(|_| ShopError::Dom("2d context".into()))?;

    let (w, h) = (dom::inner_width(win), dom::inner_height(win));
    fit_canvas(&canvas, w, h);
    let mut rng = browser_rng();
    let field = Rc::new(RefCell::new(Snowfall::new(w, h, max_flakes, move || rng.gen_range(0.0..1.0))));
    debug!(flakes = field.borrow().flakes().len(), "snowfall started");

    {
        let field = field.clone();
        let canvas = canvas.clone();
        let win_resize = win.clone();
        dom::listen(win, "resize", move |_| {
            let (w, h) = (dom::inner_width(&win_resize), dom::inner_height(&win_resize));
            fit_canvas(&canvas, w, h);
            field.borrow_mut().resize(w, h);
        })?;
    }

    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        {
            let mut field = field.borrow_mut();
            field.draw(&ctx);
            field.step();
        }
        if let (Some(w), Some(cb)) = (web_sys::window(), f.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(cb) = g.borrow().as_ref() {
        win.request_animation_frame(cb.as_ref().unchecked_ref()).map_err(ShopError::dom)?;
    }
    Ok(())
}

fn fit_canvas(canvas: &HtmlCanvasElement, w: f64, h: f64) {
    canvas.set_width(w.max(0.0) as u32);
    canvas.set_height(h.max(0.0) as u32);
}

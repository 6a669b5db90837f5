use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::SmallRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, ImageBitmap, MouseEvent, WheelEvent};
use yew::prelude::*;

use super::dom::{EventListener, IntervalTimer};
use crate::config::ViewerConfig;
use crate::fetch::fetch_overview;
use crate::model::Point;
use crate::render::{CanvasSurface, Compositor};
use crate::state::{LoadingIndicator, PointerInput, Redraw, Viewer};
use crate::util::{js_error_message, seeded_rng};

type SharedViewer = Rc<RefCell<Viewer<ImageBitmap>>>;

#[derive(Properties, PartialEq, Clone)]
pub struct OverviewMapProps {
    pub config: ViewerConfig,
}

#[function_component(OverviewMap)]
pub fn overview_map(props: &OverviewMapProps) -> Html {
    let canvas_ref = use_node_ref();
    let rng = use_mut_ref(seeded_rng);
    let viewer = {
        let config = props.config.clone();
        let rng = rng.clone();
        use_mut_ref(move || Viewer::new(&config, &mut *rng.borrow_mut()))
    };
    let indicator = use_mut_ref(LoadingIndicator::idle);

    // Mount: canvas setup, listeners, timers and the image fetch
    {
        let canvas_ref = canvas_ref.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            let mounted = canvas_ref
                .cast::<HtmlCanvasElement>()
                .ok_or_else(|| JsValue::from_str("canvas not attached"))
                .and_then(|canvas| mount(canvas, config, viewer, indicator, rng))
                .map_err(|e| log::error!("overview map not mounted: {}", js_error_message(&e)))
                .ok();
            move || {
                if let Some(mounted) = mounted {
                    mounted.unmount();
                }
            }
        });
    }

    let side = props.config.viewport_size.to_string();
    html! {
        <canvas
            ref={canvas_ref}
            id="map-canvas"
            width={side.clone()}
            height={side}
            style="width:min(90vw, 90vh); aspect-ratio:1; touch-action:none; cursor:grab; background:#fff;"
        />
    }
}

struct Mounted {
    listeners: Vec<EventListener>,
    entity_timer: IntervalTimer,
    indicator: Rc<RefCell<LoadingIndicator>>,
}

impl Mounted {
    fn unmount(self) {
        for listener in self.listeners {
            listener.remove();
        }
        self.entity_timer.clear();
        self.indicator.borrow_mut().stop();
    }
}

/// Client pixels to canvas-local logical units. The canvas may be scaled by
/// CSS, but camera maths always runs in the fixed logical viewport.
fn canvas_point(canvas: &HtmlCanvasElement, e: &MouseEvent, logical: f64) -> Point {
    let rect = canvas.get_bounding_client_rect();
    let sx = if rect.width() > 0.0 { logical / rect.width() } else { 1.0 };
    let sy = if rect.height() > 0.0 { logical / rect.height() } else { 1.0 };
    Point::new(
        (f64::from(e.client_x()) - rect.left()) * sx,
        (f64::from(e.client_y()) - rect.top()) * sy,
    )
}

fn mount(
    canvas: HtmlCanvasElement,
    config: ViewerConfig,
    viewer: SharedViewer,
    indicator: Rc<RefCell<LoadingIndicator>>,
    rng: Rc<RefCell<SmallRng>>,
) -> Result<Mounted, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let side = config.viewport_size;
    canvas.set_width(side as u32);
    canvas.set_height(side as u32);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;
    ctx.set_image_smoothing_enabled(false);

    let draw: Rc<dyn Fn()> = {
        let canvas = canvas.clone();
        let viewer = viewer.clone();
        let compositor = Compositor::new(&config, js_sys::Date::now());
        Rc::new(move || {
            if !canvas.is_connected() {
                return;
            }
            let viewer = viewer.borrow();
            let mut surface = CanvasSurface::new(&ctx);
            if let Err(e) = compositor.redraw(&mut surface, viewer.scene(), js_sys::Date::now()) {
                log::warn!("redraw failed: {}", js_error_message(&e));
            }
        })
    };

    let on_input: Rc<dyn Fn(PointerInput)> = {
        let viewer = viewer.clone();
        let draw = draw.clone();
        Rc::new(move |input| {
            let redraw = viewer.borrow_mut().handle_input(input);
            if redraw == Redraw::Now {
                draw();
            }
        })
    };

    let pointer = |map: fn(Point) -> PointerInput| {
        let canvas = canvas.clone();
        let on_input = on_input.clone();
        move |e: Event| {
            if let Some(e) = e.dyn_ref::<MouseEvent>() {
                on_input(map(canvas_point(&canvas, e, side)));
            }
        }
    };
    let release = |input: PointerInput| {
        let on_input = on_input.clone();
        move |_: Event| on_input(input)
    };
    let wheel = {
        let canvas = canvas.clone();
        let on_input = on_input.clone();
        move |e: Event| {
            if let Some(e) = e.dyn_ref::<WheelEvent>() {
                e.prevent_default();
                let at = canvas_point(&canvas, e, side);
                on_input(PointerInput::Wheel { at, delta_y: e.delta_y() });
            }
        }
    };

    let target: &web_sys::EventTarget = canvas.as_ref();
    let listeners = vec![
        EventListener::new(target, "mousedown", pointer(PointerInput::Down))?,
        EventListener::new(target, "mousemove", pointer(PointerInput::Move))?,
        EventListener::new(target, "mouseup", release(PointerInput::Up))?,
        EventListener::new(target, "mouseleave", release(PointerInput::Leave))?,
        EventListener::new_active(target, "wheel", wheel)?,
    ];

    let indicator_timer = {
        let viewer = viewer.clone();
        let draw = draw.clone();
        IntervalTimer::start(&window, config.indicator_frame_ms, move || {
            let frame = viewer.borrow().indicator_frame();
            if frame == Redraw::Now {
                draw();
            }
        })?
    };
    *indicator.borrow_mut() = LoadingIndicator::running(Box::new(indicator_timer));

    let entity_timer = {
        let viewer = viewer.clone();
        let draw = draw.clone();
        IntervalTimer::start(&window, config.entity_tick_ms, move || {
            let redraw = viewer.borrow_mut().tick(&mut *rng.borrow_mut());
            if redraw == Redraw::Now {
                draw();
            }
        })?
    };

    {
        let indicator = indicator.clone();
        let draw = draw.clone();
        let url = config.overview_url.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_overview(&url).await;
            if let Err(err) = &result {
                log::warn!("failed to fetch overview from {url}: {err}");
            }
            let settled = viewer.borrow_mut().settle(&mut indicator.borrow_mut(), result);
            if settled {
                draw();
            }
        });
    }

    log::info!("overview map mounted ({side}x{side}, {} entities)", config.entity_count);
    draw();
    Ok(Mounted {
        listeners,
        entity_timer,
        indicator,
    })
}

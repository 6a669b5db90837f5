// Small browser-side helpers shared by the components and the loader.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::{JsCast, JsValue};

pub fn init_logging() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) is harmless; ignore it.
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Readable text for a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Entity simulation RNG, seeded from `Math.random` so no OS entropy
/// source is needed on wasm.
pub fn seeded_rng() -> SmallRng {
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    SmallRng::seed_from_u64(seed)
}

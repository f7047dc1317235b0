use leptos::*;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::HtmlScriptElement;

use geomark_core::LoaderState;

/// Loads an external script once and reports when it is ready.
///
/// `global` is the name the script registers on `window`;
/// if it is already present nothing is loaded.
pub fn use_script_loader(src: &'static str, global: &'static str) -> ReadSignal<LoaderState> {
    let (state, set_state) = create_signal(LoaderState::Loading);
    if is_global_defined(global) {
        set_state.set(LoaderState::Loaded);
        return state;
    }
    let on_load = move || {
        log::debug!("Script loaded: {src}");
        set_state.set(LoaderState::Loaded);
    };
    if let Err(err) = append_script(src, on_load) {
        log::error!("Unable to load script {src}: {err:?}");
    }
    state
}

fn is_global_defined(name: &str) -> bool {
    js_sys::Reflect::has(&window(), &JsValue::from_str(name)).unwrap_or(false)
}

fn append_script<F>(src: &'static str, on_load: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let doc = document();
    let script = doc
        .create_element("script")?
        .dyn_into::<HtmlScriptElement>()?;
    script.set_src(src);
    script.set_async(true);

    let on_load = Closure::once_into_js(on_load);
    script.set_onload(Some(on_load.unchecked_ref()));
    let on_error = Closure::once_into_js(move || {
        log::error!("Unable to load script {src}");
    });
    script.set_onerror(Some(on_error.unchecked_ref()));

    let head = doc
        .head()
        .ok_or_else(|| JsValue::from_str("Missing <head> element"))?;
    head.append_child(&script)?;
    Ok(())
}

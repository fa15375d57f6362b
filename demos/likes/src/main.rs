#[macro_use]
extern crate log;

use wasm_bindgen::prelude::*;

mod app;
mod feed;

pub fn main() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::default());

    yew::start_app::<app::App>();

    Ok(())
}

use std::rc::Rc;

use folio_platform::web::{WebOptions, run_web_app};
use wasm_bindgen::prelude::*;

use crate::{Site, app};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let site = Rc::new(Site::embedded().map_err(|e| JsValue::from_str(&e.to_string()))?);
    run_web_app(move || app(&site), WebOptions::new(Some("app".into())))
}

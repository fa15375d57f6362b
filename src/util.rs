use js_sys::Function;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::EventTarget;

/// Holds an event callback alive while it's attached to `target`. Detaches on drop.
pub struct ElementEvent {
    target: EventTarget,
    event_type: &'static str,
    function: Box<dyn AsRef<JsValue>>,
}

impl ElementEvent {
    pub fn link<C: AsRef<JsValue> + 'static>(
        target: EventTarget,
        event_type: &'static str,
        function: C,
    ) -> Result<Self, JsValue> {
        let this = Self {
            target,
            event_type,
            function: Box::new(function),
        };

        this.target
            .add_event_listener_with_callback(this.event_type, this.callback())?;

        Ok(this)
    }

    fn callback(&self) -> &Function {
        (*self.function).as_ref().unchecked_ref()
    }
}

impl Drop for ElementEvent {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.callback())
        {
            log::error!("Unable to detach {} listener: {e:?}", self.event_type);
        }
    }
}

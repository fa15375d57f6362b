use std::rc::Rc;

use like_toggle::ListenerHandle;
use web_sys::Element;
use yew::prelude::*;

use crate::feed::Feed;

#[function_component(App)]
pub fn app() -> Html {
    // Dropped with the component, which removes the listener.
    let handle = use_mut_ref(ListenerHandle::default);

    {
        let handle = handle.clone();

        // Buttons rendered later by Feed are picked up through delegation.
        yew_hooks::use_mount(move || {
            let on_toggle: like_toggle::ToggleCallback = Rc::new(|button: &Element, liked| {
                info!("{:?} is now liked: {liked:?}", button.get_attribute("data-message"));
            });

            match like_toggle::register(None, like_toggle::LikeConfig::default(), Some(on_toggle)) {
                Ok(registered) => {
                    debug!("Listening for likes: {}", registered.id().is_registered());
                    *handle.borrow_mut() = registered;
                }

                Err(e) => error!("Unable to listen for likes: {e}"),
            }
        });
    }

    html! {
        <div>
            <h2>{ "Warbler" }</h2>
            <Feed />
        </div>
    }
}

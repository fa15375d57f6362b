use yew::prelude::*;

const MESSAGES: [(u32, &str, bool); 3] = [
    (1, "Hello from the first warble.", false),
    (2, "Already liked this one.", true),
    (3, "Click the star, not the link.", false),
];

#[function_component(Feed)]
pub fn feed() -> Html {
    html! {
        <ul class="list-group">
            { for MESSAGES.iter().map(|&(id, text, liked)| html! {
                <li class="list-group-item" key={ id.to_string() }>
                    <p>{ text }</p>
                    <a href={ format!("/messages/{id}/like") } class="btn btn-sm like-btn" data-message={ id.to_string() }>
                        <i class={ classes!("fa-star", if liked { "fas" } else { "far" }) }></i>
                    </a>
                </li>
            }) }
        </ul>
    }
}

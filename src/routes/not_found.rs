use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "container py-5 text-center",
            h1 { class: "mb-4", "Page not found" }
            p { class: "lead mb-4", "Nothing lives at /{path}." }
            Link {
                to: Route::Home {},
                class: "btn btn-primary",
                "Back to Home"
            }
        }
    }
}

use dioxus::prelude::*;

use crate::config::{APP_NAME, LOGO_URL};
use crate::routes::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "container py-5",
            div {
                class: "row justify-content-center",
                div {
                    class: "col-lg-8 text-center",
                    img {
                        src: LOGO_URL,
                        alt: "{APP_NAME} Logo",
                        class: "img-fluid mb-4",
                        style: "max-width: 200px;",
                    }

                    h1 {
                        class: "display-4 mb-4",
                        "Welcome to {APP_NAME}"
                    }

                    p {
                        class: "lead mb-4",
                        "This simplified application demonstrates wallet connectivity and NFT minting functionality."
                    }

                    div {
                        class: "d-grid gap-3 d-sm-flex justify-content-sm-center",
                        Link {
                            to: Route::NftMint {},
                            class: "btn btn-primary btn-lg px-4 gap-3",
                            "Mint NFT"
                        }
                    }
                }
            }

            div {
                class: "row mt-5",
                div {
                    class: "col-md-6 offset-md-3",
                    div {
                        class: "card",
                        div {
                            class: "card-body",
                            h5 { class: "card-title", "Features" }
                            ul {
                                class: "list-group list-group-flush",
                                li { class: "list-group-item", "Wallet Connectivity" }
                                li { class: "list-group-item", "NFT Minting Interface" }
                                li { class: "list-group-item", "Client-side Routing" }
                            }
                        }
                    }
                }
            }
        }
    }
}

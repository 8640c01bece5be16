use dioxus::prelude::*;

use crate::config::{LOGO_URL, MAX_MINT, MINT_PRICE, RECIPIENT_ADDRESS, TARGET_NETWORK};
use crate::services::ethereum::InjectedProvider;
use crate::services::mint::{MintController, MintRequest};
use crate::stores::mint_store::{MintForm, MintOutcome};
use crate::stores::wallet_store::{BrowserWallet, WALLET_SESSION};
use crate::utils::units::parse_ether;

#[component]
pub fn NftMint() -> Element {
    let mut form = use_signal(MintForm::default);
    let session = WALLET_SESSION.read().clone();
    let unit_price = match parse_ether(MINT_PRICE) {
        Ok(price) => price,
        Err(e) => {
            log::error!("Invalid mint price {}: {}", MINT_PRICE, e);
            return rsx! {
                div { class: "alert alert-danger", "Minting is unavailable: invalid price configuration" }
            };
        }
    };

    let current = form.read().clone();
    let quantity = current.quantity;
    let button_label = current.button_label(&session, unit_price);
    let disabled = current.is_submit_disabled();
    let error = current.outcome.error().map(str::to_string);
    let explorer_link = current.explorer_link();
    let wrong_network = session.connected && !session.is_on_chain(TARGET_NETWORK.chain_id);
    let recipient = RECIPIENT_ADDRESS.to_checksum(None);
    let recipient_link = TARGET_NETWORK.address_url(&recipient);
    let network_name = TARGET_NETWORK.name;

    let handle_mint = move |_| {
        let quantity = form.read().quantity;
        let request = match MintRequest::from_config(quantity) {
            Ok(request) => request,
            Err(e) => {
                form.write().outcome = MintOutcome::Failure(e.to_string());
                return;
            }
        };

        spawn(async move {
            let provider = InjectedProvider::detect();
            let controller = MintController::new(&BrowserWallet, provider.as_ref());
            controller
                .mint(&request, |outcome| form.write().outcome = outcome)
                .await;
        });
    };

    rsx! {
        div {
            class: "container py-5",
            div {
                class: "card shadow p-4",
                h1 { class: "text-center mb-4", "Mint KOA NFT" }

                // NFT Preview
                div {
                    class: "text-center mb-4",
                    img {
                        src: LOGO_URL,
                        alt: "NFT Preview",
                        class: "img-fluid rounded",
                        style: "max-width: 300px;",
                    }
                }

                // Mint Controls
                div {
                    class: "mb-4",
                    div {
                        class: "form-group mb-3",
                        label { r#for: "mintCount", "Number of NFTs to mint (max {MAX_MINT}):" }
                        input {
                            r#type: "number",
                            id: "mintCount",
                            class: "form-control",
                            min: "1",
                            max: "{MAX_MINT}",
                            value: "{quantity}",
                            oninput: move |evt| {
                                form.write().set_quantity_input(&evt.value());
                            },
                        }
                    }

                    div {
                        class: "d-grid gap-2",
                        button {
                            class: "btn btn-primary btn-lg",
                            disabled: disabled,
                            onclick: handle_mint,
                            if disabled {
                                span {
                                    span {
                                        class: "spinner-border spinner-border-sm me-2",
                                        role: "status",
                                        "aria-hidden": "true",
                                    }
                                    "{button_label}"
                                }
                            } else {
                                "{button_label}"
                            }
                        }
                    }
                }

                if wrong_network {
                    div {
                        class: "alert alert-warning mb-4",
                        role: "alert",
                        "Your wallet is on another network. Switch to {network_name} to mint."
                    }
                }

                // Recipient Address
                div {
                    class: "alert alert-info mb-4",
                    role: "alert",
                    small {
                        strong { "Recipient Address: " }
                        a {
                            href: "{recipient_link}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{recipient}"
                        }
                    }
                }

                if let Some(error) = error {
                    div {
                        class: "alert alert-danger",
                        role: "alert",
                        "{error}"
                    }
                }

                if let Some(link) = explorer_link {
                    div {
                        class: "alert alert-success",
                        role: "alert",
                        "NFT minted successfully! "
                        a {
                            href: "{link}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "View transaction"
                        }
                    }
                }
            }
        }
    }
}

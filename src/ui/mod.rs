//! Dioxus front end.
//!
//! Two screens behind a persistent top bar:
//!   /        → home (welcome + "Start Exploring")
//!   /breeds  → breed browser (three-state view + navigation controls)
//!
//! Breed data is fetched by a single long-lived coroutine that receives
//! [`BreedCommand`]s from the screens; commands arriving while a request
//! is pending or after the sequence is loaded are ignored, so at most one
//! request is ever in flight.

use dioxus::prelude::*;
use futures::channel::mpsc::UnboundedReceiver;
use futures::StreamExt;
use tracing::{error, info};

use crate::api::BreedClient;
use crate::breeds::{build_records, BreedRecord};
use crate::browse::{select_view, BreedView, Cursor, FetchStatus};
use crate::config::AppConfig;

/// The one user-visible failure message; the detailed cause only goes to
/// the console log.
const FETCH_ERROR_MESSAGE: &str = "Failed to load dog data. Please try again later.";

/// Shared state for the routed screens.
#[derive(Clone, Copy)]
struct AppState {
    /// Browsable sequence, replaced wholesale on each successful fetch.
    breeds: Signal<Vec<BreedRecord>>,
    /// Index of the breed currently on screen.
    cursor: Signal<Cursor>,
    status: Signal<FetchStatus>,
}

/// Commands handled by the fetch coroutine.
enum BreedCommand {
    /// Load the breed list if it is empty and no request is pending.
    Load,
}

#[derive(Debug, Clone, PartialEq, Routable)]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/breeds")]
    Breeds {},
}

#[component]
pub fn App() -> Element {
    let breeds = use_signal(Vec::<BreedRecord>::new);
    let cursor = use_signal(Cursor::default);
    let status = use_signal(FetchStatus::default);
    let state = use_context_provider(|| AppState {
        breeds,
        cursor,
        status,
    });

    use_coroutine(move |mut rx: UnboundedReceiver<BreedCommand>| async move {
        let client = BreedClient::new(&AppConfig::from_build_env());
        while let Some(BreedCommand::Load) = rx.next().await {
            load_breeds(&client, state).await;
        }
    });

    rsx! {
        Router::<Route> {}
    }
}

async fn load_breeds(client: &BreedClient, mut state: AppState) {
    // A non-empty sequence is never refetched; the serialized command
    // channel already rules out a second in-flight request.
    if !state.breeds.read().is_empty() {
        return;
    }

    state.status.set(FetchStatus::Loading);
    match client.fetch_breeds().await {
        Ok(raw) => {
            let records = build_records(raw);
            info!(breeds = records.len(), "breed list loaded");
            state.cursor.set(Cursor::default());
            state.breeds.set(records);
            state.status.set(FetchStatus::Idle);
        }
        Err(e) => {
            error!("breed fetch failed: {}", e);
            state.status.set(FetchStatus::Failed(FETCH_ERROR_MESSAGE.to_string()));
        }
    }
}

#[component]
fn Shell() -> Element {
    rsx! {
        header { class: "app-bar",
            h1 { "Dog Breed App" }
        }
        main { class: "content",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        section { class: "home",
            h2 { "Welcome to Dog Breed Info" }
            p { "Explore detailed information about various dog breeds from The Dog API." }
            Link { to: Route::Breeds {}, class: "button", "Start Exploring" }
        }
    }
}

#[component]
fn Breeds() -> Element {
    let mut state = use_context::<AppState>();
    let service = use_coroutine_handle::<BreedCommand>();

    // Kick the fetch when this screen is shown; the coroutine ignores
    // the command once the sequence is loaded.
    use_hook(|| service.send(BreedCommand::Load));

    let breeds = state.breeds.read();
    let status = state.status.read();
    let cursor = *state.cursor.read();
    let loading = *status == FetchStatus::Loading;
    let position = format!("Breed {} of {}", cursor.index() + 1, breeds.len());

    let view = match select_view(&status, &breeds, cursor) {
        BreedView::Loading => rsx! {
            div { class: "spinner", "Loading…" }
        },
        BreedView::Error(msg) => rsx! {
            div { class: "alert", "{msg}" }
        },
        BreedView::Breed(record) => rsx! {
            BreedCard { record: record.clone() }
        },
        BreedView::Empty => rsx! {
            p { "No dog data available" }
        },
    };

    rsx! {
        section { class: "browser",
            {view}
            nav { class: "controls",
                Link { to: Route::Home {}, "Back to Home" }
                span { class: "position", "{position}" }
                div { class: "buttons",
                    button {
                        disabled: cursor.at_start() || loading,
                        onclick: move |_| state.cursor.write().retreat(),
                        "Previous"
                    }
                    button {
                        disabled: cursor.at_start() || loading,
                        onclick: move |_| state.cursor.write().rewind(),
                        "First"
                    }
                    button {
                        disabled: cursor.at_end(breeds.len()) || loading,
                        onclick: move |_| {
                            let len = state.breeds.read().len();
                            state.cursor.write().advance(len);
                        },
                        "Next"
                    }
                }
            }
        }
    }
}

#[component]
fn BreedCard(record: BreedRecord) -> Element {
    rsx! {
        article { class: "card",
            img {
                class: "card-image",
                src: "{record.image_url}",
                alt: "{record.name}",
            }
            div { class: "card-body",
                h2 { "{record.name}" }
                p { class: "origin", "Origin: {record.origin}" }
                p {
                    strong { "Breed Group: " }
                    "{record.breed_group}"
                }
                p {
                    strong { "Bred For: " }
                    "{record.bred_for}"
                }
                p {
                    strong { "Life Span: " }
                    "{record.life_span_min} - {record.life_span_max} years"
                }
                p {
                    strong { "Height: " }
                    "{record.height_min} - {record.height_max} cm"
                }
                p {
                    strong { "Weight: " }
                    "{record.weight} kg"
                }
                p {
                    strong { "Temperament:" }
                }
                TemperamentChips { record: record.clone() }
            }
        }
    }
}

/// Temperament entries as one chip per trait.
#[component]
fn TemperamentChips(record: BreedRecord) -> Element {
    rsx! {
        div { class: "chips",
            for tag in record.temperament_tags() {
                span { class: "chip", "{tag}" }
            }
        }
    }
}

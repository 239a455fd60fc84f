//! Entry point for the F1 season browser.
//! Wires the view components, favorites hook and season/detail loading.

use f1_browser::{
    cache::SeasonCache,
    components::{
        DetailDialog, DetailRequest, FavoritesDialog, RaceDetail, RaceList, SeasonSelect,
    },
    config::{FETCH_FAILED_MESSAGE, MOUNT_POINT_ID},
    details::{DetailController, DetailModal},
    error::AppError,
    gateway::Gateway,
    hooks::use_favorites,
    loader::SeasonLoader,
    models::{Circuit, Race, Season, SeasonData},
    storage::browser_store,
    utils::js_error_message,
};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
enum View {
    Home,
    Loading(Season),
    Browse { season: Season, data: Rc<SeasonData> },
}

#[derive(Clone, PartialEq)]
enum Overlay {
    None,
    Detail(DetailModal),
    Favorites,
}

fn alert(message: &str) {
    if let Err(e) = gloo_utils::window().alert_with_message(message) {
        log::warn!("Could not show alert: {}", js_error_message(&e));
    }
}

// ──────────────────────────────────────────────────────────────────────────────

#[function_component]
fn App() -> Html {
    let view = use_state(|| View::Home);
    let selected_race = use_state(|| None::<Race>);
    let overlay = use_state(|| Overlay::None);
    // Bumped on every selection and on going home; loads that finish under an
    // older token are not shown
    let load_token = use_mut_ref(|| 0u32);

    let store = use_memo((), |_| browser_store());
    let gateway = use_memo((), |_| Gateway::browser());
    let controller = {
        let overlay = overlay.clone();
        let gateway = gateway.clone();
        use_memo((), move |_| {
            DetailController::new(
                gateway,
                Callback::from(move |modal| overlay.set(Overlay::Detail(modal))),
            )
        })
    };
    let favorites = use_favorites((*store).clone());

    let season_data = match &*view {
        View::Browse { data, .. } => Some(data.clone()),
        _ => None,
    };
    let races = use_memo(season_data.clone(), |data| {
        data.as_ref()
            .map(|d| d.races_by_round())
            .unwrap_or_default()
    });

    let on_season = {
        let view = view.clone();
        let selected_race = selected_race.clone();
        let load_token = load_token.clone();
        let store = store.clone();
        let gateway = gateway.clone();
        Callback::from(move |season: Season| {
            let token = {
                let mut current = load_token.borrow_mut();
                *current = current.wrapping_add(1);
                *current
            };
            selected_race.set(None);
            view.set(View::Loading(season));

            let loader = SeasonLoader::new(SeasonCache::new((*store).clone()), gateway.clone());
            let view = view.clone();
            let load_token = load_token.clone();
            spawn_local(async move {
                let outcome = loader.load(season).await;
                if *load_token.borrow() != token {
                    log::debug!("Discarding stale load of season {}", season);
                    return;
                }
                match outcome {
                    Ok(data) => view.set(View::Browse {
                        season,
                        data: Rc::new(data),
                    }),
                    Err(_) => {
                        alert(FETCH_FAILED_MESSAGE);
                        view.set(View::Home);
                    }
                }
            });
        })
    };

    let on_home = {
        let view = view.clone();
        let selected_race = selected_race.clone();
        let overlay = overlay.clone();
        let load_token = load_token.clone();
        Callback::from(move |_: MouseEvent| {
            let mut current = load_token.borrow_mut();
            *current = current.wrapping_add(1);
            selected_race.set(None);
            overlay.set(Overlay::None);
            view.set(View::Home);
        })
    };

    let on_race = {
        let selected_race = selected_race.clone();
        Callback::from(move |race: Race| selected_race.set(Some(race)))
    };

    let on_circuit = {
        let controller = controller.clone();
        Callback::from(move |circuit: Circuit| controller.show_circuit_details(&circuit))
    };

    let on_detail = {
        let controller = controller.clone();
        let season_data = season_data.clone();
        Callback::from(move |request: DetailRequest| {
            let Some(data) = season_data.clone() else {
                return;
            };
            let controller = controller.clone();
            spawn_local(async move {
                match request {
                    DetailRequest::Driver { driver_ref, year } => {
                        controller
                            .show_driver_details(&driver_ref, &year, &data.results)
                            .await
                    }
                    DetailRequest::Constructor { name, year } => {
                        controller
                            .show_constructor_details(&name, &year, &data.results)
                            .await
                    }
                }
            });
        })
    };

    let on_close = {
        let overlay = overlay.clone();
        Callback::from(move |_: ()| overlay.set(Overlay::None))
    };

    let on_favorites = {
        let overlay = overlay.clone();
        Callback::from(move |_: MouseEvent| overlay.set(Overlay::Favorites))
    };

    let body = match &*view {
        View::Home => html! {
            <section id="home">
                <h1>{ "F1 Dashboard" }</h1>
                <p>{ "Browse the races, qualifying sessions and results of a Formula One season." }</p>
                <SeasonSelect selected={None::<Season>} on_select={on_season.clone()} />
            </section>
        },
        View::Loading(season) => html! {
            <div class="loading">
                <div class="loader"></div>
                <p>{ format!("Loading {} season...", season) }</p>
            </div>
        },
        View::Browse { season, data } => html! {
            <main id="browse">
                <aside class="race-list">
                    <SeasonSelect selected={Some(*season)} on_select={on_season.clone()} />
                    <RaceList season={*season} races={races.clone()} on_select={on_race} />
                </aside>
                if let Some(race) = &*selected_race {
                    <RaceDetail race={race.clone()} data={data.clone()}
                        on_circuit={on_circuit} on_detail={on_detail} />
                } else {
                    <section id="raceResults" class="placeholder">
                        <p>{ "Select a race to view its qualifying and results." }</p>
                    </section>
                }
            </main>
        },
    };

    html! {
        <div class="container">
            <header class="navbar">
                <button id="logo" class="logo" onclick={on_home}>{ "F1 Dashboard" }</button>
                <button id="favoritesButton" class="button-style" onclick={on_favorites}>
                    { "Favorites" }
                </button>
            </header>
            { body }
            {
                match &*overlay {
                    Overlay::None => html! {},
                    Overlay::Detail(modal) => html! {
                        <DetailDialog modal={modal.clone()} favorites={favorites.clone()}
                            on_close={on_close.clone()} />
                    },
                    Overlay::Favorites => html! {
                        <FavoritesDialog favorites={favorites.clone()} on_close={on_close.clone()} />
                    },
                }
            }
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    match gloo_utils::document().get_element_by_id(MOUNT_POINT_ID) {
        Some(root) => {
            yew::Renderer::<App>::with_root(root).render();
        }
        None => log::error!(
            "{}",
            AppError::Init(format!("mount point #{} not found", MOUNT_POINT_ID))
        ),
    }
}

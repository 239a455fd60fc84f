//! Yew view components for the season browser.
//!
//! Row builders are plain functions so the table contents can be checked
//! without a browser; the components only memoize and render them.

use crate::config::{
    MISSING_VALUE, NOT_AVAILABLE, PLACEHOLDER_IMAGE, QUALIFYING_TABLE_ID, RACES_TABLE_ID,
    RESULTS_TABLE_ID,
};
use crate::details::{ConstructorDetails, DetailModal, DriverDetails};
use crate::favorites::FavoriteKind;
use crate::hooks::FavoritesHandle;
use crate::models::{Circuit, QualifyingEntry, Race, ResultEntry, Season, SeasonData};
use crate::table::{Cell, Header, Podium, SortDirection, TableModel};
use crate::utils::or_fallback;
use std::rc::Rc;
use web_sys::{EventTarget, HtmlSelectElement};
use yew::prelude::*;

/// A click on a driver or constructor name inside a race table.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailRequest {
    Driver { driver_ref: String, year: String },
    Constructor { name: String, year: String },
}

// ──────────────────────────────────────────────────────────────────────────────
// Table

#[derive(Properties, PartialEq, Clone)]
pub struct DataTableProps {
    pub headers: Rc<Vec<Header>>,
    pub rows: Rc<Vec<Vec<Cell>>>,
    #[prop_or_default]
    pub table_id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

/// Sortable table: clicking a header sorts by that column, clicking it again
/// reverses the order.
#[function_component(DataTable)]
pub fn data_table(props: &DataTableProps) -> Html {
    let model = {
        let props = props.clone();
        use_state_eq(move || TableModel::new(props.headers, props.rows, props.table_id))
    };

    // New data replaces the table and drops any sort
    {
        let model = model.clone();
        use_effect_with(
            (
                props.headers.clone(),
                props.rows.clone(),
                props.table_id.clone(),
            ),
            move |(headers, rows, table_id)| {
                let mut next = (*model).clone();
                next.reload(headers.clone(), rows.clone(), table_id.clone());
                model.set(next);
                || ()
            },
        );
    }

    let on_sort = {
        let model = model.clone();
        Callback::from(move |column: usize| {
            let mut next = (*model).clone();
            next.sort_by(column);
            model.set(next);
        })
    };

    html! {
        <table id={model.table_id().cloned()} class={props.class.clone()}>
            <thead>
                <tr>
                    { for model.headers().iter().enumerate().map(|(i, header)| {
                        let class = model.direction(i).map(SortDirection::class);
                        html! {
                            <th class={classes!("sortable", class)}
                                onclick={on_sort.reform(move |_: MouseEvent| i)}>
                                { header.label.as_str() }
                            </th>
                        }
                    }) }
                </tr>
            </thead>
            <tbody>
                { for model.rows().map(|row| {
                    let podium = model.podium(row);
                    html! {
                        <tr class={classes!(podium.map(Podium::class))}
                            style={podium.map(|p| format!("background-color: {}", p.color()))}>
                            { for row.iter().map(render_cell) }
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}

fn render_cell(cell: &Cell) -> Html {
    match cell {
        Cell::Text(text) => html! { <td>{ text.as_str() }</td> },
        Cell::Action {
            label,
            class,
            on_click,
        } => {
            let onclick = on_click.reform(|_: MouseEvent| ());
            html! {
                <td><button class={*class} {onclick}>{ label.as_str() }</button></td>
            }
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Row builders

pub fn race_headers() -> Vec<Header> {
    vec![Header::number("Rnd#"), Header::text("Race Name")]
}

/// One row per race; the race name button selects the race.
pub fn race_rows(races: &[Race], on_select: &Callback<Race>) -> Vec<Vec<Cell>> {
    races
        .iter()
        .map(|race| {
            let selected = race.clone();
            vec![
                Cell::text(race.round),
                Cell::button(&race.name, on_select.reform(move |_| selected.clone())),
            ]
        })
        .collect()
}

pub fn qualifying_headers() -> Vec<Header> {
    vec![
        Header::number("Pos#"),
        "Driver".into(),
        "Constructor".into(),
        "Q1".into(),
        "Q2".into(),
        "Q3".into(),
    ]
}

pub fn qualifying_rows(
    entries: &[QualifyingEntry],
    on_detail: &Callback<DetailRequest>,
) -> Vec<Vec<Cell>> {
    entries
        .iter()
        .map(|q| {
            let year = q.race.year.to_string();
            vec![
                Cell::text(position_text(q.position)),
                driver_cell(&q.driver.reference, &q.driver.full_name(), &year, on_detail),
                constructor_cell(&q.constructor.name, &year, on_detail),
                Cell::text(or_fallback(q.q1.as_deref(), MISSING_VALUE)),
                Cell::text(or_fallback(q.q2.as_deref(), MISSING_VALUE)),
                Cell::text(or_fallback(q.q3.as_deref(), MISSING_VALUE)),
            ]
        })
        .collect()
}

pub fn result_headers() -> Vec<Header> {
    vec![
        Header::number("Pos#"),
        "Driver".into(),
        "Constructor".into(),
        Header::number("Laps"),
        Header::number("Pts"),
    ]
}

/// Zero laps or points show as `-`, like missing ones.
pub fn result_rows(entries: &[ResultEntry], on_detail: &Callback<DetailRequest>) -> Vec<Vec<Cell>> {
    entries
        .iter()
        .map(|r| {
            let year = r.race.year.to_string();
            vec![
                Cell::text(number_or_dash(r.position.map(f64::from))),
                driver_cell(&r.driver.reference, &r.driver.full_name(), &year, on_detail),
                constructor_cell(&r.constructor.name, &year, on_detail),
                Cell::text(number_or_dash(r.laps.map(f64::from))),
                Cell::text(number_or_dash(r.points)),
            ]
        })
        .collect()
}

fn number_or_dash(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 => v.to_string(),
        _ => MISSING_VALUE.to_string(),
    }
}

fn driver_cell(
    driver_ref: &str,
    name: &str,
    year: &str,
    on_detail: &Callback<DetailRequest>,
) -> Cell {
    let request = DetailRequest::Driver {
        driver_ref: driver_ref.to_string(),
        year: year.to_string(),
    };
    Cell::action(name, on_detail.reform(move |_| request.clone()))
}

fn constructor_cell(name: &str, year: &str, on_detail: &Callback<DetailRequest>) -> Cell {
    let request = DetailRequest::Constructor {
        name: name.to_string(),
        year: year.to_string(),
    };
    Cell::action(name, on_detail.reform(move |_| request.clone()))
}

// ──────────────────────────────────────────────────────────────────────────────
// Season selection and race views

#[derive(Properties, PartialEq)]
pub struct SeasonSelectProps {
    pub selected: Option<Season>,
    pub on_select: Callback<Season>,
}

#[function_component(SeasonSelect)]
pub fn season_select(props: &SeasonSelectProps) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            if value.is_empty() {
                return;
            }
            match value.parse::<Season>() {
                Ok(season) => on_select.emit(season),
                Err(e) => log::warn!("{}", e),
            }
        })
    };

    html! {
        <div class="form-group">
            <label for="seasonList">{ "Season:" }</label>
            <select id="seasonList" {onchange}>
                <option value="" disabled=true selected={props.selected.is_none()}>
                    { "Select a season" }
                </option>
                { for Season::all().into_iter().map(|season| html! {
                    <option value={season.to_string()} selected={props.selected == Some(season)}>
                        { season.to_string() }
                    </option>
                }) }
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RaceListProps {
    pub season: Season,
    /// Races in display order.
    pub races: Rc<Vec<Race>>,
    pub on_select: Callback<Race>,
}

#[function_component(RaceList)]
pub fn race_list(props: &RaceListProps) -> Html {
    let headers = use_memo((), |_| race_headers());
    let rows = {
        let on_select = props.on_select.clone();
        use_memo(props.races.clone(), move |races| race_rows(races, &on_select))
    };

    html! {
        <section id="races">
            <h2>{ format!("{} Races", props.season) }</h2>
            <DataTable {headers} {rows} table_id={AttrValue::Static(RACES_TABLE_ID)} />
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct RaceDetailProps {
    pub race: Race,
    pub data: Rc<SeasonData>,
    pub on_circuit: Callback<Circuit>,
    pub on_detail: Callback<DetailRequest>,
}

/// Race information plus its qualifying and results tables.
#[function_component(RaceDetail)]
pub fn race_detail(props: &RaceDetailProps) -> Html {
    let qualifying_headers = use_memo((), |_| qualifying_headers());
    let result_headers = use_memo((), |_| result_headers());
    let qualifying = {
        let on_detail = props.on_detail.clone();
        use_memo(
            (props.race.round, props.data.clone()),
            move |(round, data)| qualifying_rows(&data.qualifying_for(*round), &on_detail),
        )
    };
    let results = {
        let on_detail = props.on_detail.clone();
        use_memo(
            (props.race.round, props.data.clone()),
            move |(round, data)| result_rows(&data.results_for(*round), &on_detail),
        )
    };

    let race = &props.race;
    let on_circuit = {
        let on_circuit = props.on_circuit.clone();
        let circuit = race.circuit.clone();
        Callback::from(move |_: MouseEvent| on_circuit.emit(circuit.clone()))
    };

    html! {
        <section id="raceResults">
            <div id="raceInfo">
                <h2>{ format!("Results for {} {}", race.year, race.name) }</h2>
                <ul>
                    <li><strong>{ "Race Name: " }</strong>{ &race.name }</li>
                    <li><strong>{ "Rnd#: " }</strong>{ race.round }</li>
                    <li><strong>{ "Year: " }</strong>{ race.year }</li>
                    <li>
                        <strong>{ "Circuit Name: " }</strong>
                        <button class="hyperlink-style" id="circuitLink" onclick={on_circuit}>
                            { &race.circuit.name }
                        </button>
                    </li>
                    <li><strong>{ "Date: " }</strong>{ &race.date }</li>
                    <li>
                        <strong>{ "URL: " }</strong>
                        <a href={race.circuit.url.clone()} target="_blank">{ &race.circuit.url }</a>
                    </li>
                </ul>
            </div>
            <div id="qualifying">
                <h3>{ "Qualifying" }</h3>
                <DataTable headers={qualifying_headers} rows={qualifying}
                    table_id={AttrValue::Static(QUALIFYING_TABLE_ID)} class={classes!("results")} />
            </div>
            <div id="results">
                <h3>{ "Race Results" }</h3>
                <DataTable headers={result_headers} rows={results}
                    table_id={AttrValue::Static(RESULTS_TABLE_ID)} class={classes!("results")} />
            </div>
        </section>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Overlays

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub id: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

/// Whether a click on the backdrop should close the dialog: only when it
/// landed on the backdrop itself, not on anything inside the dialog box.
pub fn is_outside_click<T: PartialEq>(target: Option<&T>, backdrop: Option<&T>) -> bool {
    matches!((target, backdrop), (Some(t), Some(b)) if t == b)
}

/// Overlay dialog; closes on its close button or a click outside the box.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let backdrop = use_node_ref();
    // Yew delegates events to the app root, so `current_target` is never the
    // backdrop; compare against the rendered node instead.
    let on_backdrop = {
        let on_close = props.on_close.clone();
        let backdrop = backdrop.clone();
        Callback::from(move |e: MouseEvent| {
            let node = backdrop.get().map(EventTarget::from);
            if is_outside_click(e.target().as_ref(), node.as_ref()) {
                on_close.emit(());
            }
        })
    };

    html! {
        <div class="modal-backdrop" id={props.id.clone()} ref={backdrop} onclick={on_backdrop}>
            <div class="modal" role="dialog">
                <button class="close-button" onclick={props.on_close.reform(|_: MouseEvent| ())}>
                    { "Close" }
                </button>
                { props.children.clone() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FavoriteButtonProps {
    pub name: AttrValue,
    pub kind: FavoriteKind,
    pub favorites: FavoritesHandle,
}

#[function_component(FavoriteButton)]
pub fn favorite_button(props: &FavoriteButtonProps) -> Html {
    let active = props.favorites.is_favorite(&props.name, props.kind);
    let onclick = {
        let toggle = props.favorites.toggle.clone();
        let name = props.name.to_string();
        let kind = props.kind;
        Callback::from(move |_: MouseEvent| toggle.emit((kind, name.clone())))
    };
    let title = if active {
        "Remove from favorites"
    } else {
        "Add to favorites"
    };

    html! {
        <button class={classes!("favorite-toggle", active.then_some("active"))} {title} {onclick}>
            { if active { "★" } else { "☆" } }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct DetailDialogProps {
    pub modal: DetailModal,
    pub favorites: FavoritesHandle,
    pub on_close: Callback<()>,
}

#[function_component(DetailDialog)]
pub fn detail_dialog(props: &DetailDialogProps) -> Html {
    let (id, body) = match &props.modal {
        DetailModal::Circuit(content) => (
            "circuit",
            match content {
                Ok(circuit) => circuit_body(circuit, &props.favorites),
                Err(message) => error_line(message),
            },
        ),
        DetailModal::Driver(content) => (
            "driver",
            match content {
                Ok(details) => driver_body(details, &props.favorites),
                Err(message) => error_line(message),
            },
        ),
        DetailModal::Constructor(content) => (
            "constructor",
            match content {
                Ok(details) => constructor_body(details, &props.favorites),
                Err(message) => error_line(message),
            },
        ),
    };

    html! {
        <Modal id={AttrValue::Static(id)} on_close={props.on_close.clone()}>
            <div class="details">{ body }</div>
        </Modal>
    }
}

fn error_line(message: &str) -> Html {
    html! { <p class="error-message">{ message.to_string() }</p> }
}

fn external_link(url: Option<&str>) -> Html {
    match url.filter(|u| !u.trim().is_empty()) {
        Some(url) => html! { <a href={url.to_string()} target="_blank">{ url.to_string() }</a> },
        None => html! { { NOT_AVAILABLE } },
    }
}

fn circuit_body(circuit: &Circuit, favorites: &FavoritesHandle) -> Html {
    html! {
        <>
            <h2>{ "Circuit Details" }</h2>
            <img src={PLACEHOLDER_IMAGE} alt="Circuit image placeholder" />
            <ul>
                <li>
                    <strong>{ "Name: " }</strong>{ &circuit.name }
                    <FavoriteButton name={circuit.name.clone()} kind={FavoriteKind::Circuits}
                        favorites={favorites.clone()} />
                </li>
                <li>
                    <strong>{ "Location: " }</strong>
                    { format!("{}, {}", circuit.location, circuit.country) }
                </li>
                <li><strong>{ "URL: " }</strong>{ external_link(Some(circuit.url.as_str())) }</li>
            </ul>
        </>
    }
}

fn driver_body(details: &DriverDetails, favorites: &FavoritesHandle) -> Html {
    let driver = &details.driver;
    let name = driver.full_name();

    html! {
        <div class="driver-content">
            <div class="driver-info">
                <h2>{ "Driver Details" }</h2>
                <img src={PLACEHOLDER_IMAGE} alt="Driver image placeholder" />
                <ul>
                    <li>
                        <strong>{ "Name: " }</strong>{ &name }
                        <FavoriteButton name={name.clone()} kind={FavoriteKind::Drivers}
                            favorites={favorites.clone()} />
                    </li>
                    <li>
                        <strong>{ "Date of Birth: " }</strong>
                        { or_fallback(driver.dob.as_deref(), NOT_AVAILABLE) }
                    </li>
                    <li>
                        <strong>{ "Nationality: " }</strong>
                        { or_fallback(driver.nationality.as_deref(), NOT_AVAILABLE) }
                    </li>
                    <li><strong>{ "URL: " }</strong>{ external_link(driver.url.as_deref()) }</li>
                </ul>
            </div>
            <div class="race-results">
                <h3>{ "Race Results" }</h3>
                <div class="modal-table">
                    <table>
                        <thead>
                            <tr>
                                <th>{ "Rnd#" }</th>
                                <th>{ "Race Name" }</th>
                                <th>{ "Pos#" }</th>
                                <th>{ "Pts" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for details.results.iter().map(|r| html! {
                                <tr>
                                    <td>{ r.round }</td>
                                    <td>{ &r.race_name }</td>
                                    <td>{ position_text(r.position) }</td>
                                    <td>{ r.points }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

fn constructor_body(details: &ConstructorDetails, favorites: &FavoritesHandle) -> Html {
    let constructor = &details.constructor;

    html! {
        <div class="constructor-content">
            <div class="constructor-info">
                <h2>{ "Constructor Details" }</h2>
                <img src={PLACEHOLDER_IMAGE} alt="Constructor image placeholder" />
                <ul>
                    <li>
                        <strong>{ "Name: " }</strong>{ &constructor.name }
                        <FavoriteButton name={constructor.name.clone()} kind={FavoriteKind::Constructors}
                            favorites={favorites.clone()} />
                    </li>
                    <li>
                        <strong>{ "Nationality: " }</strong>
                        { or_fallback(constructor.nationality.as_deref(), NOT_AVAILABLE) }
                    </li>
                    <li><strong>{ "URL: " }</strong>{ external_link(constructor.url.as_deref()) }</li>
                </ul>
            </div>
            <div class="race-results">
                <h3>{ "Race Results" }</h3>
                <div class="modal-table">
                    <table>
                        <thead>
                            <tr>
                                <th>{ "Rnd#" }</th>
                                <th>{ "Race Name" }</th>
                                <th>{ "Driver" }</th>
                                <th>{ "Pos#" }</th>
                                <th>{ "Pts" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for details.results.iter().map(|r| html! {
                                <tr>
                                    <td>{ r.round }</td>
                                    <td>{ &r.race_name }</td>
                                    <td>{ &r.driver_name }</td>
                                    <td>{ position_text(r.position) }</td>
                                    <td>{ r.points }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

fn position_text(position: Option<u32>) -> String {
    position
        .map(|p| p.to_string())
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

#[derive(Properties, PartialEq)]
pub struct FavoritesDialogProps {
    pub favorites: FavoritesHandle,
    pub on_close: Callback<()>,
}

/// Lists every favorite by category with a Remove button per entry.
#[function_component(FavoritesDialog)]
pub fn favorites_dialog(props: &FavoritesDialogProps) -> Html {
    html! {
        <Modal id={AttrValue::Static("favorite")} on_close={props.on_close.clone()}>
            <h2>{ "Favorites" }</h2>
            { for FavoriteKind::ALL.iter().map(|&kind| {
                let names = props.favorites.state.list(kind);
                html! {
                    <section class="favorite-section">
                        <h3>{ kind.title() }</h3>
                        if names.is_empty() {
                            <p>{ format!("No favorite {} yet!", kind) }</p>
                        } else {
                            <ul>
                                { for names.iter().map(|name| {
                                    let remove = props.favorites.remove.clone();
                                    let entry = name.clone();
                                    let onclick = Callback::from(move |_: MouseEvent| {
                                        remove.emit((kind, entry.clone()))
                                    });
                                    html! {
                                        <li>
                                            { name }
                                            <button class="remove-favorite" {onclick}>{ "Remove" }</button>
                                        </li>
                                    }
                                }) }
                            </ul>
                        }
                    </section>
                }
            }) }
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntrantConstructor, EntrantDriver, RaceRef};
    use std::cell::RefCell;

    fn recorder() -> (Callback<DetailRequest>, Rc<RefCell<Vec<DetailRequest>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (
            Callback::from(move |r: DetailRequest| sink.borrow_mut().push(r)),
            seen,
        )
    }

    fn texts(rows: &[Vec<Cell>]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.display_text().to_string()).collect())
            .collect()
    }

    fn qualifying(position: Option<u32>, q3: Option<&str>) -> QualifyingEntry {
        QualifyingEntry {
            race: RaceRef {
                round: 5,
                year: 2022,
                name: String::new(),
            },
            position,
            driver: EntrantDriver {
                reference: "max_verstappen".into(),
                forename: "Max".into(),
                surname: "Verstappen".into(),
            },
            constructor: EntrantConstructor {
                name: "Red Bull".into(),
            },
            q1: Some("1:29.366".into()),
            q2: Some("1:28.868".into()),
            q3: q3.map(str::to_string),
        }
    }

    #[test]
    fn qualifying_rows_fill_missing_times() {
        let (on_detail, _) = recorder();
        let rows = qualifying_rows(
            &[
                qualifying(Some(1), Some("1:28.652")),
                qualifying(Some(11), None),
                qualifying(None, None),
            ],
            &on_detail,
        );
        assert_eq!(
            texts(&rows),
            vec![
                vec!["1", "Max Verstappen", "Red Bull", "1:29.366", "1:28.868", "1:28.652"],
                vec!["11", "Max Verstappen", "Red Bull", "1:29.366", "1:28.868", "-"],
                vec!["-", "Max Verstappen", "Red Bull", "1:29.366", "1:28.868", "-"],
            ]
        );
        assert_eq!(rows[0].len(), qualifying_headers().len());
    }

    #[test]
    fn name_buttons_request_details_for_the_entry_year() {
        let (on_detail, seen) = recorder();
        let rows = qualifying_rows(&[qualifying(Some(1), None)], &on_detail);
        for cell in &rows[0][1..3] {
            if let Cell::Action { on_click, .. } = cell {
                on_click.emit(());
            }
        }
        assert_eq!(
            *seen.borrow(),
            vec![
                DetailRequest::Driver {
                    driver_ref: "max_verstappen".into(),
                    year: "2022".into()
                },
                DetailRequest::Constructor {
                    name: "Red Bull".into(),
                    year: "2022".into()
                },
            ]
        );
    }

    #[test]
    fn result_rows_dash_missing_and_zero_values() {
        let (on_detail, _) = recorder();
        let entry = |position, laps, points| ResultEntry {
            race: RaceRef {
                round: 5,
                year: 2022,
                name: "Miami Grand Prix".into(),
            },
            position,
            driver: EntrantDriver::default(),
            constructor: EntrantConstructor::default(),
            laps,
            points,
        };
        let rows = result_rows(
            &[
                entry(Some(1), Some(57), Some(26.0)),
                entry(Some(10), Some(57), Some(0.5)),
                entry(None, Some(0), None),
            ],
            &on_detail,
        );
        let cols: Vec<(String, String, String)> = texts(&rows)
            .into_iter()
            .map(|r| (r[0].clone(), r[3].clone(), r[4].clone()))
            .collect();
        assert_eq!(
            cols,
            vec![
                ("1".into(), "57".into(), "26".into()),
                ("10".into(), "57".into(), "0.5".into()),
                ("-".into(), "-".into(), "-".into()),
            ]
        );
    }

    #[test]
    fn only_clicks_on_the_backdrop_itself_close() {
        let backdrop = "favorite";
        assert!(is_outside_click(Some(&backdrop), Some(&"favorite")));
        assert!(!is_outside_click(Some(&"close-button"), Some(&backdrop)));
        assert!(!is_outside_click(Some(&"modal"), Some(&backdrop)));
        assert!(!is_outside_click(None, Some(&backdrop)));
        // Not rendered yet
        assert!(!is_outside_click(Some(&backdrop), None));
    }

    #[test]
    fn race_rows_select_the_clicked_race() {
        let race = Race {
            round: 7,
            name: "Monaco Grand Prix".into(),
            year: 2022,
            date: "2022-05-29".into(),
            circuit: Circuit::default(),
        };
        let picked = Rc::new(RefCell::new(None));
        let sink = picked.clone();
        let rows = race_rows(
            std::slice::from_ref(&race),
            &Callback::from(move |r: Race| *sink.borrow_mut() = Some(r)),
        );
        assert_eq!(texts(&rows), vec![vec!["7", "Monaco Grand Prix"]]);

        if let Cell::Action { on_click, class, .. } = &rows[0][1] {
            assert_eq!(*class, "button-style");
            on_click.emit(());
        }
        assert_eq!(*picked.borrow(), Some(race));
    }
}

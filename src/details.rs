//! Detail overlays for circuits, drivers and constructors.
//!
//! The builders in this module are pure: they join a catalog with the
//! season's results and either produce the rows an overlay shows or say why
//! they cannot. [`DetailController`] wraps them with the catalog fetches and
//! hands the outcome to an injected view callback. A failure always becomes a
//! single error line in the overlay, never an unhandled error.

use crate::error::{AppError, Result};
use crate::gateway::{Gateway, Transport};
use crate::models::{Circuit, Constructor, Driver, ResultEntry};
use crate::utils::parse_leading_int;
use std::rc::Rc;
use yew::Callback;

pub const CIRCUIT_ERROR: &str = "Error loading circuit details. Please try again later.";
pub const DRIVER_ERROR: &str = "Error loading driver details. Please try again later.";
pub const CONSTRUCTOR_ERROR: &str = "Error loading constructor details. Please try again later.";

#[derive(Debug, Clone, PartialEq)]
pub struct DriverResultRow {
    pub round: u32,
    pub race_name: String,
    pub position: Option<u32>,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriverDetails {
    pub driver: Driver,
    pub results: Vec<DriverResultRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorResultRow {
    pub round: u32,
    pub race_name: String,
    pub driver_name: String,
    pub position: Option<u32>,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorDetails {
    pub constructor: Constructor,
    pub results: Vec<ConstructorResultRow>,
}

/// What an overlay shows: its content, or the one-line error message.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailModal {
    Circuit(std::result::Result<Circuit, String>),
    Driver(std::result::Result<DriverDetails, String>),
    Constructor(std::result::Result<ConstructorDetails, String>),
}

fn coerce_year(year: &str) -> Result<i64> {
    parse_leading_int(year)
        .ok_or_else(|| AppError::NoResults(format!("'{}' is not a season year", year)))
}

/// Circuit overlays render straight from the race's circuit object.
pub fn circuit_details(circuit: &Circuit) -> Result<Circuit> {
    if circuit.name.trim().is_empty() {
        return Err(AppError::NotFound("Circuit".to_string()));
    }
    Ok(circuit.clone())
}

/// Join the driver catalog with the driver's results of `year`.
pub fn driver_details(
    catalog: &[Driver],
    driver_ref: &str,
    year: &str,
    results: &[ResultEntry],
) -> Result<DriverDetails> {
    let driver = catalog
        .iter()
        .find(|d| d.driver_ref == driver_ref)
        .ok_or_else(|| AppError::NotFound("Driver".to_string()))?;
    let year = coerce_year(year)?;

    let rows: Vec<DriverResultRow> = results
        .iter()
        .filter(|r| r.driver.reference == driver_ref && i64::from(r.race.year) == year)
        .map(|r| DriverResultRow {
            round: r.race.round,
            race_name: r.race.name.clone(),
            position: r.position,
            points: r.points_or_zero(),
        })
        .collect();
    if rows.is_empty() {
        return Err(AppError::NoResults(
            "No race results available for this driver in the selected year".to_string(),
        ));
    }

    Ok(DriverDetails {
        driver: driver.clone(),
        results: rows,
    })
}

/// Join the constructor catalog with the team's results of `year`.
///
/// Teams are matched by exact name, the only key the result entries share
/// with the catalog.
pub fn constructor_details(
    catalog: &[Constructor],
    constructor_name: &str,
    year: &str,
    results: &[ResultEntry],
) -> Result<ConstructorDetails> {
    let constructor = catalog
        .iter()
        .find(|c| c.name == constructor_name)
        .ok_or_else(|| AppError::NotFound("Constructor".to_string()))?;
    let year = coerce_year(year)?;

    let rows: Vec<ConstructorResultRow> = results
        .iter()
        .filter(|r| r.constructor.name == constructor_name && i64::from(r.race.year) == year)
        .map(|r| ConstructorResultRow {
            round: r.race.round,
            race_name: r.race.name.clone(),
            driver_name: r.driver.full_name(),
            position: r.position,
            points: r.points_or_zero(),
        })
        .collect();
    if rows.is_empty() {
        return Err(AppError::NoResults(
            "No race results available for this constructor in the selected year".to_string(),
        ));
    }

    Ok(ConstructorDetails {
        constructor: constructor.clone(),
        results: rows,
    })
}

/// Opens detail overlays by emitting their content to `view`.
pub struct DetailController<T: Transport> {
    gateway: Rc<Gateway<T>>,
    view: Callback<DetailModal>,
}

impl<T: Transport> DetailController<T> {
    pub fn new(gateway: Rc<Gateway<T>>, view: Callback<DetailModal>) -> Self {
        Self { gateway, view }
    }

    pub fn show_circuit_details(&self, circuit: &Circuit) {
        let content = circuit_details(circuit).map_err(|e| {
            log::error!("Error displaying circuit details: {}", e);
            CIRCUIT_ERROR.to_string()
        });
        self.view.emit(DetailModal::Circuit(content));
    }

    pub async fn show_driver_details(&self, driver_ref: &str, year: &str, results: &[ResultEntry]) {
        let content = match self.gateway.fetch_drivers().await {
            Ok(catalog) => driver_details(&catalog, driver_ref, year, results),
            Err(e) => Err(e),
        }
        .map_err(|e| {
            log::error!("Error fetching driver details for '{}': {}", driver_ref, e);
            DRIVER_ERROR.to_string()
        });
        self.view.emit(DetailModal::Driver(content));
    }

    pub async fn show_constructor_details(
        &self,
        constructor_name: &str,
        year: &str,
        results: &[ResultEntry],
    ) {
        let content = match self.gateway.fetch_constructors().await {
            Ok(catalog) => constructor_details(&catalog, constructor_name, year, results),
            Err(e) => Err(e),
        }
        .map_err(|e| {
            log::error!(
                "Error fetching constructor details for '{}': {}",
                constructor_name,
                e
            );
            CONSTRUCTOR_ERROR.to_string()
        });
        self.view.emit(DetailModal::Constructor(content));
    }
}

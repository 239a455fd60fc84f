//! Sortable table model behind the [`DataTable`](crate::components::DataTable)
//! component.
//!
//! A table is a list of typed headers and a list of rows of [`Cell`]s. The
//! model never reorders the rows themselves; it keeps a permutation of row
//! indices that each header click re-sorts in place, so rows that compare
//! equal keep the order they had before the click.

use crate::config::RESULTS_TABLE_ID;
use crate::utils::{parse_leading_int, parse_number};
use std::cmp::Ordering;
use std::rc::Rc;
use yew::{AttrValue, Callback};

/// How a column's displayed text is compared when sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnType {
    Number,
    #[default]
    String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub label: AttrValue,
    pub kind: ColumnType,
}

impl Header {
    pub fn number(label: &'static str) -> Self {
        Self {
            label: AttrValue::Static(label),
            kind: ColumnType::Number,
        }
    }

    pub fn text(label: &'static str) -> Self {
        Self {
            label: AttrValue::Static(label),
            kind: ColumnType::String,
        }
    }
}

/// A bare label is a string-typed column.
impl From<&'static str> for Header {
    fn from(label: &'static str) -> Self {
        Header::text(label)
    }
}

/// One table cell: plain text, or a button bound to an action.
#[derive(Clone, PartialEq)]
pub enum Cell {
    Text(AttrValue),
    Action {
        label: AttrValue,
        class: &'static str,
        on_click: Callback<()>,
    },
}

impl Cell {
    pub fn text(value: impl ToString) -> Self {
        Cell::Text(AttrValue::from(value.to_string()))
    }

    /// A link-styled button; `on_click` closes over whatever it needs.
    pub fn action(label: impl ToString, on_click: Callback<()>) -> Self {
        Cell::Action {
            label: AttrValue::from(label.to_string()),
            class: "hyperlink-style",
            on_click,
        }
    }

    pub fn button(label: impl ToString, on_click: Callback<()>) -> Self {
        Cell::Action {
            label: AttrValue::from(label.to_string()),
            class: "button-style",
            on_click,
        }
    }

    /// The text a user sees in the cell, which is also its sort key.
    pub fn display_text(&self) -> &str {
        match self {
            Cell::Text(text) => text.as_str().trim(),
            Cell::Action { label, .. } => label.as_str().trim(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn class(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// Row highlight for the top three finishers of a results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Podium {
    Gold,
    Silver,
    Bronze,
}

impl Podium {
    pub fn from_position(position: i64) -> Option<Self> {
        match position {
            1 => Some(Podium::Gold),
            2 => Some(Podium::Silver),
            3 => Some(Podium::Bronze),
            _ => None,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Podium::Gold => "#FFD700",
            Podium::Silver => "#C0C0C0",
            Podium::Bronze => "#CD7F32",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Podium::Gold => "podium-gold",
            Podium::Silver => "podium-silver",
            Podium::Bronze => "podium-bronze",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct TableModel {
    headers: Rc<Vec<Header>>,
    rows: Rc<Vec<Vec<Cell>>>,
    table_id: Option<AttrValue>,
    order: Vec<usize>,
    sort: Option<(usize, SortDirection)>,
}

impl TableModel {
    pub fn new(
        headers: Rc<Vec<Header>>,
        rows: Rc<Vec<Vec<Cell>>>,
        table_id: Option<AttrValue>,
    ) -> Self {
        if let Some(bad) = rows.iter().position(|r| r.len() != headers.len()) {
            log::warn!(
                "Row {} has {} cells but the table has {} columns",
                bad,
                rows[bad].len(),
                headers.len()
            );
        }
        let order = (0..rows.len()).collect();
        Self {
            headers,
            rows,
            table_id,
            order,
            sort: None,
        }
    }

    /// Swap in new data. The previous order and sort indicator are dropped,
    /// so rows show in input order again.
    pub fn reload(
        &mut self,
        headers: Rc<Vec<Header>>,
        rows: Rc<Vec<Vec<Cell>>>,
        table_id: Option<AttrValue>,
    ) {
        *self = TableModel::new(headers, rows, table_id);
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    pub fn table_id(&self) -> Option<&AttrValue> {
        self.table_id.as_ref()
    }

    /// Sort indicator of a column; only the last clicked column has one.
    pub fn direction(&self, column: usize) -> Option<SortDirection> {
        match self.sort {
            Some((c, direction)) if c == column => Some(direction),
            _ => None,
        }
    }

    /// Rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.order.iter().map(move |&i| self.rows[i].as_slice())
    }

    /// Podium highlight for a row, only in the results table.
    pub fn podium(&self, row: &[Cell]) -> Option<Podium> {
        if self.table_id.as_deref() != Some(RESULTS_TABLE_ID) {
            return None;
        }
        row.first()
            .and_then(|cell| parse_leading_int(cell.display_text()))
            .and_then(Podium::from_position)
    }

    /// Handle a click on a header: ascending on first click or after another
    /// column was sorted, otherwise flip the direction.
    pub fn sort_by(&mut self, column: usize) {
        let Some(header) = self.headers.get(column) else {
            return;
        };
        let kind = header.kind;
        let direction = match self.sort {
            Some((c, SortDirection::Ascending)) if c == column => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };

        let rows = &self.rows;
        self.order.sort_by(|&a, &b| {
            compare_cells(
                kind,
                direction,
                cell_text(&rows[a], column),
                cell_text(&rows[b], column),
            )
        });
        self.sort = Some((column, direction));
    }
}

fn cell_text(row: &[Cell], column: usize) -> &str {
    row.get(column).map(Cell::display_text).unwrap_or("")
}

/// Numbers compare numerically and text case-insensitively. Cells of a
/// numeric column that hold no number (`-`) stay at the bottom either way.
fn compare_cells(kind: ColumnType, direction: SortDirection, a: &str, b: &str) -> Ordering {
    let ordering = match kind {
        ColumnType::Number => match (parse_number(a), parse_number(b)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (None, None) => return Ordering::Equal,
        },
        ColumnType::String => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b)),
    };

    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

// ABOUTME: Table rendering for status and port listings.
// ABOUTME: Fixed column widths so rows line up regardless of content.

use crate::ports::PortRow;
use crate::status::StatusRow;
use comfy_table::{ColumnConstraint, Table, Width};

const NAME_WIDTH: u16 = 30;
const IP_WIDTH: u16 = 22;
const LOCATION_WIDTH: u16 = 36;
const PORTS_WIDTH: u16 = 48;

fn fixed(widths: &[u16]) -> Vec<ColumnConstraint> {
    widths
        .iter()
        .map(|&w| ColumnConstraint::Absolute(Width::Fixed(w)))
        .collect()
}

/// `Container Name | Public IP Address | Location`
pub fn status_table(rows: &[StatusRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Container Name", "Public IP Address", "Location"]);
    for row in rows {
        table.add_row(vec![
            row.name.clone(),
            row.status.to_string(),
            row.location.to_string(),
        ]);
    }
    table.set_constraints(fixed(&[NAME_WIDTH, IP_WIDTH, LOCATION_WIDTH]));
    table
}

/// `Container Name | Ports`, bindings stacked inside the cell.
pub fn ports_table(rows: &[PortRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Container Name", "Ports"]);
    for row in rows {
        table.add_row(vec![row.name.clone(), row.ports.clone()]);
    }
    table.set_constraints(fixed(&[NAME_WIDTH, PORTS_WIDTH]));
    table
}

/// Print a fatal error the way the CLI reports it.
pub fn error(message: &str) {
    eprintln!("Error: {message}");
}

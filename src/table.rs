use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::model::Airport;

fn preset(dark: bool) -> &'static str {
    if dark {
        UTF8_FULL_CONDENSED
    } else {
        UTF8_FULL
    }
}

fn header_cell(text: &str, dark: bool) -> Cell {
    if dark {
        Cell::new(text).fg(Color::Yellow)
    } else {
        Cell::new(text)
    }
}

pub fn render(airports: &[&Airport], dark: bool) -> String {
    let mut table = Table::new();
    table
        .load_preset(preset(dark))
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            header_cell("IATA", dark),
            header_cell("ICAO", dark),
            header_cell("Name", dark),
            header_cell("City", dark),
            header_cell("Country", dark),
            header_cell("GMT", dark),
            header_cell("Lat", dark),
            header_cell("Lon", dark),
        ]);

    for airport in airports {
        table.add_row(vec![
            airport.iata_code.clone(),
            airport.icao_code.clone(),
            airport.airport_name.clone(),
            airport.city_name.clone(),
            airport.country_name.clone(),
            airport.gmt.clone(),
            format!("{:.4}", airport.latitude),
            format!("{:.4}", airport.longitude),
        ]);
    }

    table.to_string()
}

/// Detail card for one airport, the CLI counterpart of the detail page.
pub fn render_detail(airport: &Airport, dark: bool) -> String {
    let mut table = Table::new();
    table.load_preset(preset(dark));

    let rows: [(&str, String); 9] = [
        ("Name", airport.airport_name.clone()),
        ("IATA", airport.iata_code.clone()),
        ("ICAO", airport.icao_code.clone()),
        ("City", airport.city_name.clone()),
        ("Country", airport.country_name.clone()),
        ("GMT offset", airport.gmt.clone()),
        ("Latitude", airport.latitude.to_string()),
        ("Longitude", airport.longitude.to_string()),
        ("Map", airport.map_url()),
    ];

    for (label, value) in rows {
        table.add_row(vec![header_cell(label, dark), Cell::new(value)]);
    }

    table.to_string()
}

/// Footer line under the directory table.
pub fn page_footer(page: u32, total_pages: u32, total: u32) -> String {
    format!("Page {page} of {total_pages} ({total} airports)")
}

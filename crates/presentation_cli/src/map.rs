//! Terminal locator map
//!
//! A single-point map: the coordinates, an OpenStreetMap link, and an
//! equirectangular grid of the world with the city marked.

use domain::value_objects::GeoLocation;

/// Grid width in characters
pub const GRID_WIDTH: usize = 49;

/// Grid height in lines
pub const GRID_HEIGHT: usize = 17;

/// Zoom level used in the OpenStreetMap link
const OSM_ZOOM: u8 = 10;

/// OpenStreetMap link centred on the location
pub fn osm_link(location: GeoLocation) -> String {
    let lat = format!("{:.4}", location.latitude());
    let lon = format!("{:.4}", location.longitude());
    format!("https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map={OSM_ZOOM}/{lat}/{lon}")
}

/// Grid cell `(row, col)` of a location, row 0 at the north pole
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn grid_position(location: GeoLocation, width: usize, height: usize) -> (usize, usize) {
    // GeoLocation keeps lat/lon in range, so both fractions are in [0, 1]
    let col_fraction = (location.longitude() + 180.0) / 360.0;
    let row_fraction = (90.0 - location.latitude()) / 180.0;

    let col = (col_fraction * (width.saturating_sub(1)) as f64).round() as usize;
    let row = (row_fraction * (height.saturating_sub(1)) as f64).round() as usize;
    (row, col)
}

/// Render the map block
pub fn render_map(location: GeoLocation) -> String {
    let mut out = String::new();
    out.push_str(&format!("  Koordináták: {location}\n"));
    out.push_str(&format!("  {}\n", osm_link(location)));

    let (marker_row, marker_col) = grid_position(location, GRID_WIDTH, GRID_HEIGHT);
    let equator = GRID_HEIGHT / 2;
    let meridian = GRID_WIDTH / 2;

    for row in 0..GRID_HEIGHT {
        out.push_str("  ");
        for col in 0..GRID_WIDTH {
            let cell = if row == marker_row && col == marker_col {
                '*'
            } else if row == equator && col == meridian {
                '+'
            } else if row == equator {
                '-'
            } else if col == meridian {
                '|'
            } else {
                '.'
            };
            out.push(cell);
        }
        out.push('\n');
    }
    out
}

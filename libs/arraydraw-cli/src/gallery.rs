//! The seven reference drawings written by `arraydraw gallery`.

use arraydraw::{ColorGrid, CubeColor, DrawError, DrawOptions, Legends, Rgb};

const HEAT_FACE: [[&str; 3]; 3] = [
    ["#ff0000", "#ffffff", "#ffff00"],
    ["#0000ff", "#0000ff", "#ff8c00"],
    ["#00ff00", "#ff0000", "#ffff00"],
];

const HEAT_ROOF: [[&str; 3]; 3] = [
    ["#ffffff", "#ff8c00", "#0000ff"],
    ["#ff0000", "#ffff00", "#00ff00"],
    ["#ff8c00", "#ffffff", "#ffffff"],
];

const HEAT_SIDE: [[&str; 3]; 3] = [
    ["#00ff00", "#0000ff", "#ff0000"],
    ["#ffff00", "#ff0000", "#ff0000"],
    ["#ff0000", "#ffff00", "#ff8c00"],
];

/// Named gallery entries, in output order.
pub fn gallery() -> Result<Vec<(String, DrawOptions)>, DrawError> {
    let red = Rgb::from_hex("#ff0000")?;
    let green = Rgb::from_hex("#00ff00")?;
    let blue = Rgb::from_hex("#0000ff")?;

    let heat_map = CubeColor::families(
        ColorGrid::from_hex_rows(HEAT_FACE)?,
        ColorGrid::from_hex_rows(HEAT_ROOF)?,
        ColorGrid::from_hex_rows(HEAT_SIDE)?,
    );

    let entries = vec![
        DrawOptions::new(&[4, 3, 0]),
        DrawOptions::new(&[4, 3, 1]),
        DrawOptions::new(&[4, 3, 2]),
        DrawOptions::new(&[4, 3, 2])
            .with_cube_color(Rgb::from_hex("#304e6c")?)
            .with_line_color(Rgb::from_hex("#6f6f6f")?),
        DrawOptions::new(&[4, 3, 2]).with_cube_color(CubeColor::families(red, green, blue)),
        DrawOptions::new(&[3, 3, 3]).with_cube_color(heat_map),
        DrawOptions::new(&[4, 3, 2])
            .with_cube_color(CubeColor::families(red, green, blue))
            .with_legends(Legends::new("Frequency", "Time", "Channel"))
            .with_title("Spectrogram")
            .with_background(Rgb::WHITE),
    ];

    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(i, options)| (format!("example_{}.svg", i + 1), options))
        .collect())
}

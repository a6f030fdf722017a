// Stroke colors offered by the control row.

use egui::Color32;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteColor {
    #[default]
    Black,
    White,
    Red,
    Blue,
    Yellow,
    Green,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 6] = [
        PaletteColor::Black,
        PaletteColor::White,
        PaletteColor::Red,
        PaletteColor::Blue,
        PaletteColor::Yellow,
        PaletteColor::Green,
    ];

    /// CSS named-color values.
    pub fn color32(self) -> Color32 {
        match self {
            PaletteColor::Black => Color32::from_rgb(0, 0, 0),
            PaletteColor::White => Color32::from_rgb(255, 255, 255),
            PaletteColor::Red => Color32::from_rgb(255, 0, 0),
            PaletteColor::Blue => Color32::from_rgb(0, 0, 255),
            PaletteColor::Yellow => Color32::from_rgb(255, 255, 0),
            PaletteColor::Green => Color32::from_rgb(0, 128, 0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaletteColor::Black => "black",
            PaletteColor::White => "white",
            PaletteColor::Red => "red",
            PaletteColor::Blue => "blue",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Green => "green",
        }
    }
}

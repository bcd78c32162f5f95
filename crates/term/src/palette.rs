//! Palette: concrete colors for the board's symbolic color names.
//!
//! A palette is built once and handed to the [`GameView`](crate::GameView);
//! nothing here is global.

use crate::fb::{CellStyle, Rgb};
use crate::types::ColorName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub cyan: Rgb,
    pub blue: Rgb,
    pub orange: Rgb,
    pub white: Rgb,
    pub green: Rgb,
    pub purple: Rgb,
    pub red: Rgb,
    pub border: CellStyle,
    pub text: CellStyle,
    pub warning: CellStyle,
}

impl Palette {
    /// Eight-color terminal look: solid blocks on black.
    pub fn classic() -> Self {
        let black = Rgb::new(0, 0, 0);
        Self {
            background: black,
            cyan: Rgb::new(0, 205, 205),
            blue: Rgb::new(0, 0, 238),
            orange: Rgb::new(205, 205, 0),
            white: Rgb::new(229, 229, 229),
            green: Rgb::new(0, 205, 0),
            purple: Rgb::new(205, 0, 205),
            red: Rgb::new(205, 0, 0),
            border: CellStyle::new(Rgb::new(229, 229, 229), black),
            text: CellStyle::new(Rgb::new(220, 220, 220), black),
            warning: CellStyle::new(Rgb::new(205, 0, 0), black).bold().underline(),
        }
    }

    pub fn color(&self, name: ColorName) -> Rgb {
        match name {
            ColorName::Background => self.background,
            ColorName::Cyan => self.cyan,
            ColorName::Blue => self.blue,
            ColorName::Orange => self.orange,
            ColorName::White => self.white,
            ColorName::Green => self.green,
            ColorName::Purple => self.purple,
            ColorName::Red => self.red,
        }
    }

    /// Solid style for a board cell (glyph and background share the color).
    pub fn cell_style(&self, name: ColorName) -> CellStyle {
        let c = self.color(name);
        CellStyle::new(c, c)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_style_is_solid() {
        let p = Palette::classic();
        let style = p.cell_style(ColorName::Red);
        assert_eq!(style.fg, p.red);
        assert_eq!(style.bg, p.red);
        assert_eq!(p.cell_style(ColorName::Background).bg, p.background);
    }

    #[test]
    fn every_piece_color_differs_from_background() {
        let p = Palette::classic();
        for value in 1..=7 {
            let name = ColorName::from_cell(value).unwrap();
            assert_ne!(p.color(name), p.background, "{name}");
        }
    }
}

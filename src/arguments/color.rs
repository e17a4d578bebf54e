use crate::{
    arg::Argument,
    arguments::EnumArgument,
    feedback::{exceptions, CommandSyntaxError, ErrorKind},
    reader::ArgumentReader,
};
use disparser_macros::EnumArgument;

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    #[allow(missing_docs)]
    pub red: u8,
    #[allow(missing_docs)]
    pub green: u8,
    #[allow(missing_docs)]
    pub blue: u8,
}

impl Color {
    #[allow(missing_docs)]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    /// Unpacks a colour from an integer where bits 16-23 hold red, 8-15 green and 0-7 blue.
    /// Higher bits are ignored.
    pub const fn from_rgb(rgb: i32) -> Self {
        Color {
            red: ((rgb >> 16) & 0xFF) as u8,
            green: ((rgb >> 8) & 0xFF) as u8,
            blue: (rgb & 0xFF) as u8,
        }
    }

    /// Packs this colour into an integer, see [`from_rgb`](Color::from_rgb).
    pub const fn rgb(&self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | self.blue as u32
    }
}

/// The colours that can be given by name.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumArgument)]
pub enum ColorType {
    White,
    Black,
    Brown,
    LightGray,
    Gray,
    DarkGray,
    Red,
    Pink,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Magenta,
}

impl ColorType {
    /// The colour this name stands for.
    pub const fn color(self) -> Color {
        match self {
            ColorType::White => Color::new(255, 255, 255),
            ColorType::Black => Color::new(0, 0, 0),
            ColorType::Brown => Color::new(102, 51, 0),
            ColorType::LightGray => Color::new(192, 192, 192),
            ColorType::Gray => Color::new(128, 128, 128),
            ColorType::DarkGray => Color::new(64, 64, 64),
            ColorType::Red => Color::new(255, 0, 0),
            ColorType::Pink => Color::new(255, 175, 175),
            ColorType::Orange => Color::new(255, 200, 0),
            ColorType::Yellow => Color::new(255, 255, 0),
            ColorType::Green => Color::new(0, 255, 0),
            ColorType::Cyan => Color::new(0, 255, 255),
            ColorType::Blue => Color::new(0, 0, 255),
            ColorType::Purple => Color::new(102, 0, 153),
            ColorType::Magenta => Color::new(255, 0, 255),
        }
    }
}

/// A colour given either by name (see [`ColorType`]) or as a packed RGB integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorArgument {
    named: EnumArgument<ColorType>,
}

impl ColorArgument {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        ColorArgument {
            named: EnumArgument::new(),
        }
    }
}

impl<C: ?Sized> Argument<C> for ColorArgument {
    type Output = Color;

    fn parse(&self, reader: &mut ArgumentReader<'_, C>) -> Result<Color, CommandSyntaxError> {
        if let Some(color_type) = reader.try_parse(&self.named).into_result() {
            return Ok(color_type.color());
        }

        match reader.next_int() {
            Ok(rgb) => Ok(Color::from_rgb(rgb)),
            Err(error) if error.kind() == ErrorKind::InvalidFormat => Err(exceptions::INVALID_COLOR
                .create(reader.current_token().unwrap_or_default())),
            Err(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_and_packed_colors() {
        let mut reader = ArgumentReader::new("!paint light_gray DARK_GRAY light-gray 16711680 0x00ff00", &());
        let argument = ColorArgument::new();

        assert_eq!(argument.parse(&mut reader), Ok(Color::new(192, 192, 192)));
        assert_eq!(argument.parse(&mut reader), Ok(Color::new(64, 64, 64)));
        assert_eq!(argument.parse(&mut reader), Ok(Color::new(192, 192, 192)));
        assert_eq!(argument.parse(&mut reader), Ok(Color::new(255, 0, 0)));

        let error = argument.parse(&mut reader).unwrap_err();
        assert_eq!(error.to_string(), "`0x00ff00` is not a valid color value!");
    }

    #[test]
    fn packing_round_trips_the_low_bits() {
        assert_eq!(Color::from_rgb(0x0102_0304).rgb(), 0x0002_0304);
        assert_eq!(Color::from_rgb(-1), Color::new(255, 255, 255));
    }
}

//! Farbspektrum: feste Tabelle mit 18 benannten Farben
//!
//! Die Tabelle wird nie verändert. Index `i` zeigt während der gesamten
//! Laufzeit auf dieselbe Farbe und denselben Namen.

use rgb::RGB8;

use crate::log::{debug, error};
use crate::traits::{Dwell, LedError, SmartLedWriter};

/// Anzahl der Farben in der Tabelle
pub const SPECTRUM_LEN: usize = 18;

/// Standard-Helligkeit für `display_color()`
pub const DEFAULT_BRIGHTNESS: f32 = 1.0;

/// Spektrum-Tabelle (Werte im Bereich 0-255) mit passendem Namen
pub const SPECTRUM_TABLE: [(RGB8, &str); SPECTRUM_LEN] = [
    (RGB8 { r: 255, g: 0, b: 0 }, "Red"),
    (RGB8 { r: 255, g: 64, b: 0 }, "Orange-Red"),
    (RGB8 { r: 255, g: 128, b: 0 }, "Orange"),
    (RGB8 { r: 255, g: 191, b: 0 }, "Golden Yellow"),
    (RGB8 { r: 255, g: 255, b: 0 }, "Yellow"),
    (RGB8 { r: 191, g: 255, b: 0 }, "Lime Green"),
    (RGB8 { r: 128, g: 255, b: 0 }, "Green-Yellow"),
    (RGB8 { r: 0, g: 255, b: 0 }, "Green"),
    (RGB8 { r: 0, g: 255, b: 128 }, "Teal"),
    (RGB8 { r: 0, g: 255, b: 255 }, "Cyan"),
    (RGB8 { r: 0, g: 191, b: 255 }, "Light Blue"),
    (RGB8 { r: 0, g: 128, b: 255 }, "Blue"),
    (RGB8 { r: 0, g: 0, b: 255 }, "Deep Blue"),
    (RGB8 { r: 128, g: 0, b: 255 }, "Violet"),
    (RGB8 { r: 255, g: 0, b: 255 }, "Magenta"),
    (RGB8 { r: 255, g: 0, b: 128 }, "Hot Pink"),
    (RGB8 { r: 255, g: 255, b: 255 }, "White"),
    (RGB8 { r: 0, g: 0, b: 0 }, "Black"),
];

/// Benannte Farben, Reihenfolge identisch mit `SPECTRUM_TABLE`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SpectrumColor {
    Red = 0,
    OrangeRed,
    Orange,
    GoldenYellow,
    Yellow,
    LimeGreen,
    GreenYellow,
    Green,
    Teal,
    Cyan,
    LightBlue,
    Blue,
    DeepBlue,
    Violet,
    Magenta,
    HotPink,
    White,
    Black,
}

impl SpectrumColor {
    /// Alle Farben in Tabellen-Reihenfolge
    pub const ALL: [SpectrumColor; SPECTRUM_LEN] = [
        Self::Red,
        Self::OrangeRed,
        Self::Orange,
        Self::GoldenYellow,
        Self::Yellow,
        Self::LimeGreen,
        Self::GreenYellow,
        Self::Green,
        Self::Teal,
        Self::Cyan,
        Self::LightBlue,
        Self::Blue,
        Self::DeepBlue,
        Self::Violet,
        Self::Magenta,
        Self::HotPink,
        Self::White,
        Self::Black,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unskalierte Farbe aus der Tabelle
    pub const fn rgb(self) -> RGB8 {
        SPECTRUM_TABLE[self as usize].0
    }

    pub const fn name(self) -> &'static str {
        SPECTRUM_TABLE[self as usize].1
    }
}

impl core::convert::TryFrom<u8> for SpectrumColor {
    type Error = ();

    /// Ids ab `SPECTRUM_LEN` sind ungültig
    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(usize::from(id)).copied().ok_or(())
    }
}

/// Helligkeit im Bereich 0.0 bis 1.0
///
/// Werte außerhalb werden geklemmt, NaN zählt als 0.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brightness(f32);

impl Brightness {
    pub const FULL: Self = Self(1.0);
    pub const OFF: Self = Self(0.0);

    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::OFF;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for Brightness {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

/// Maximaler Kanalwert, auf den eine volle Helligkeit abgebildet wird
///
/// `FULL` (255) entspricht der Tabelle 1:1. Auf dem ESP32 ist die
/// Standard-Helligkeit der eingebauten LED 64.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelScale(pub u8);

impl ChannelScale {
    pub const FULL: Self = Self(255);
}

/// Skaliert eine Tabellenfarbe: `channel * (scale * brightness / 255)`
///
/// Das Ergebnis wird kaufmännisch gerundet.
pub fn scale_color(color: RGB8, brightness: Brightness, scale: ChannelScale) -> RGB8 {
    let factor = f32::from(scale.0) * brightness.value() / 255.0;
    let channel = |value: u8| (f32::from(value) * factor + 0.5) as u8;

    RGB8 {
        r: channel(color.r),
        g: channel(color.g),
        b: channel(color.b),
    }
}

/// Zeigt eine benannte Farbe an (volle Skala, nur mit `brightness` multipliziert)
pub fn display_color<L: SmartLedWriter>(
    led: &mut L,
    color: SpectrumColor,
    brightness: f32,
) -> Result<(), LedError> {
    led.write(scale_color(
        color.rgb(),
        Brightness::new(brightness),
        ChannelScale::FULL,
    ))
}

/// Wie `display_color()`, aber mit roher Id
///
/// Ungültige Ids werden still ignoriert, es wird nichts geschrieben.
pub fn display_color_id<L: SmartLedWriter>(
    led: &mut L,
    id: u8,
    brightness: f32,
) -> Result<(), LedError> {
    match SpectrumColor::try_from(id) {
        Ok(color) => display_color(led, color, brightness),
        Err(()) => Ok(()),
    }
}

/// Durchläuft die Tabelle reihum
///
/// Der Index ist flüchtiger Zustand: er gehört dem Aufrufer und geht
/// beim Deep Sleep verloren.
#[derive(Debug, Clone)]
pub struct ColorSpectrum {
    index: usize,
    scale: ChannelScale,
}

impl ColorSpectrum {
    pub const fn new(scale: ChannelScale) -> Self {
        Self { index: 0, scale }
    }

    /// Index der Farbe, die beim nächsten `next_color()` angezeigt wird
    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn scale(&self) -> ChannelScale {
        self.scale
    }

    /// Zeigt die aktuelle Farbe an und rückt den Index weiter
    ///
    /// Gibt den Namen der gerade angezeigten Farbe zurück. Nach
    /// `SPECTRUM_LEN` Aufrufen beginnt die Folge von vorn.
    ///
    /// # Fehlerbehandlung
    /// Schlägt das Schreiben fehl, bleibt der Index stehen.
    pub fn next_color<L: SmartLedWriter>(
        &mut self,
        led: &mut L,
        brightness: f32,
    ) -> Result<&'static str, LedError> {
        let (color, name) = SPECTRUM_TABLE[self.index];
        debug!("Color index: {}", self.index);

        led.write(scale_color(color, Brightness::new(brightness), self.scale))?;

        self.index = (self.index + 1) % SPECTRUM_LEN;
        Ok(name)
    }
}

impl Default for ColorSpectrum {
    fn default() -> Self {
        Self::new(ChannelScale::FULL)
    }
}

/// Einmal komplett durch das Spektrum laufen (LED-Selbsttest)
///
/// Schreibfehler werden geloggt, der Durchlauf geht weiter.
/// Gibt die Anzahl der fehlgeschlagenen Schritte zurück.
pub fn sweep_spectrum<L: SmartLedWriter, D: Dwell>(
    led: &mut L,
    dwell: &mut D,
    spectrum: &mut ColorSpectrum,
    brightness: f32,
    step_ms: u32,
) -> usize {
    let mut failures = 0;

    for _ in 0..SPECTRUM_LEN {
        match spectrum.next_color(led, brightness) {
            Ok(_name) => debug!("Spectrum: {}", _name),
            Err(_e) => {
                error!("Failed to write to LED");
                failures += 1;
                // Index steht noch, weiterschalten damit der Durchlauf endet
                spectrum.index = (spectrum.index + 1) % SPECTRUM_LEN;
            }
        }
        dwell.dwell_ms(step_ms);
    }

    failures
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for SpectrumColor {
    fn format(&self, fmt: defmt::Formatter) {
        let rgb = self.rgb();
        defmt::write!(
            fmt,
            "{} ({}, {}, {})",
            self.name(),
            rgb.r,
            rgb.g,
            rgb.b
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LastWrite(Option<RGB8>);

    impl SmartLedWriter for LastWrite {
        fn write(&mut self, color: RGB8) -> Result<(), LedError> {
            self.0 = Some(color);
            Ok(())
        }
    }

    #[test]
    fn test_table_matches_enum_order() {
        for (i, color) in SpectrumColor::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
            assert_eq!(color.name(), SPECTRUM_TABLE[i].1);
        }
    }

    #[test]
    fn test_try_from_out_of_range() {
        assert_eq!(SpectrumColor::try_from(17u8), Ok(SpectrumColor::Black));
        assert_eq!(SpectrumColor::try_from(18u8), Err(()));
        assert_eq!(SpectrumColor::try_from(255u8), Err(()));
    }

    #[test]
    fn test_brightness_clamps() {
        assert_eq!(Brightness::new(1.5).value(), 1.0);
        assert_eq!(Brightness::new(-0.3).value(), 0.0);
        assert_eq!(Brightness::new(f32::NAN).value(), 0.0);
        assert_eq!(Brightness::new(0.25).value(), 0.25);
    }

    #[test]
    fn test_scale_color_full_is_identity() {
        let orange = SpectrumColor::Orange.rgb();
        assert_eq!(scale_color(orange, Brightness::FULL, ChannelScale::FULL), orange);
    }

    #[test]
    fn test_scale_color_platform_scale() {
        let white = SpectrumColor::White.rgb();
        let scaled = scale_color(white, Brightness::FULL, ChannelScale(64));
        assert_eq!(scaled, RGB8 { r: 64, g: 64, b: 64 });
    }

    #[test]
    fn test_next_color_wraps() {
        let mut led = LastWrite(None);
        let mut spectrum = ColorSpectrum::default();

        for _ in 0..SPECTRUM_LEN {
            spectrum.next_color(&mut led, 1.0).unwrap();
        }
        assert_eq!(spectrum.current_index(), 0);
        assert_eq!(spectrum.next_color(&mut led, 1.0), Ok("Red"));
        assert_eq!(led.0, Some(RGB8 { r: 255, g: 0, b: 0 }));
    }
}

//! Tunable render parameters and the control-panel surface that edits them.

use std::fmt;
use std::str::FromStr;

use cadran_engine::canvas::Font;
use cadran_engine::coords::Viewport;
use cadran_engine::paint::Color;

use crate::error::ClockError;
use crate::zone::Zone;

/// Allowed stroke widths for outline, ticks and hands.
pub const LINE_WIDTH_RANGE: (f32, f32) = (1.0, 10.0);
/// Allowed label font sizes in logical pixels.
pub const FONT_SIZE_RANGE: (f32, f32) = (20.0, 100.0);
/// Default indicator position relative to the vertical center.
pub const DEFAULT_CENTER_Y_OFFSET: f32 = -180.0;

// ── FontName ──────────────────────────────────────────────────────────────

/// Label font families offered by the control panel.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum FontName {
    #[default]
    Arial,
    Verdana,
    TimesNewRoman,
}

impl FontName {
    pub const ALL: [FontName; 3] = [FontName::Arial, FontName::Verdana, FontName::TimesNewRoman];

    pub const fn as_str(self) -> &'static str {
        match self {
            FontName::Arial => "Arial",
            FontName::Verdana => "Verdana",
            FontName::TimesNewRoman => "Times New Roman",
        }
    }
}

impl FromStr for FontName {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FontName::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ClockError::UnknownFont(s.to_string()))
    }
}

impl fmt::Display for FontName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ParamKey ──────────────────────────────────────────────────────────────

/// Names of the tunable fields, spelled as the control panel spells them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ParamKey {
    LineWidth,
    Timezone,
    FontSize,
    FontName,
    CenterY,
    Color,
    FlagColor,
}

impl ParamKey {
    pub const ALL: [ParamKey; 7] = [
        ParamKey::LineWidth,
        ParamKey::Timezone,
        ParamKey::FontSize,
        ParamKey::FontName,
        ParamKey::CenterY,
        ParamKey::Color,
        ParamKey::FlagColor,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ParamKey::LineWidth => "line-width",
            ParamKey::Timezone => "timezone",
            ParamKey::FontSize => "fontSize",
            ParamKey::FontName => "fontName",
            ParamKey::CenterY => "centerY",
            ParamKey::Color => "color",
            ParamKey::FlagColor => "flagColor",
        }
    }
}

impl FromStr for ParamKey {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ParamKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ClockError::UnknownParam(s.to_string()))
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Controls ──────────────────────────────────────────────────────────────

/// Widget a host panel should show for a parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlKind {
    /// Numeric slider over `[min, max]`.
    Range { min: f32, max: f32 },
    /// Drop-down of `(label, value)` pairs; `value` is what [`RenderParams::apply`] takes.
    Options(Vec<(&'static str, &'static str)>),
    /// Color picker; any string [`Color::parse`] accepts.
    Color,
}

/// Description of one tunable field.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub key: ParamKey,
    pub kind: ControlKind,
}

/// Describes every tunable field for a surface of the given size.
///
/// The `centerY` range depends on the surface height, so hosts should rebuild
/// the panel after a resize.
pub fn controls(viewport: Viewport) -> Vec<Control> {
    ParamKey::ALL
        .into_iter()
        .map(|key| Control { key, kind: control_kind(key, viewport) })
        .collect()
}

fn control_kind(key: ParamKey, viewport: Viewport) -> ControlKind {
    match key {
        ParamKey::LineWidth => ControlKind::Range {
            min: LINE_WIDTH_RANGE.0,
            max: LINE_WIDTH_RANGE.1,
        },
        ParamKey::FontSize => ControlKind::Range {
            min: FONT_SIZE_RANGE.0,
            max: FONT_SIZE_RANGE.1,
        },
        ParamKey::CenterY => ControlKind::Range {
            min: 0.0,
            max: viewport.height.max(0.0),
        },
        ParamKey::Timezone => {
            ControlKind::Options(Zone::ALL.iter().map(|z| (z.country(), z.iana())).collect())
        }
        ParamKey::FontName => {
            ControlKind::Options(FontName::ALL.iter().map(|f| (f.as_str(), f.as_str())).collect())
        }
        ParamKey::Color | ParamKey::FlagColor => ControlKind::Color,
    }
}

// ── RenderParams ──────────────────────────────────────────────────────────

/// Style parameters read by the renderer every frame.
///
/// Owned by the host. The renderer never keeps a copy between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    /// Stroke width for outline, ticks, hands and sun.
    pub line_width: f32,
    pub timezone: Zone,
    /// Label font size in logical pixels.
    pub font_size: f32,
    pub font_name: FontName,
    /// Vertical position of the day/night indicator.
    pub center_y: f32,
    /// Stroke color for outline, ticks, hands and sun.
    pub color: Color,
    /// Fill color of the country label.
    pub flag_color: Color,
}

impl RenderParams {
    /// Defaults for a surface of the given size.
    ///
    /// The indicator sits 180px above the center; on short surfaces that can
    /// be negative, which only moves it off-screen.
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self {
            line_width: 2.0,
            timezone: Zone::Paris,
            font_size: 30.0,
            font_name: FontName::Arial,
            center_y: viewport.height / 2.0 + DEFAULT_CENTER_Y_OFFSET,
            color: Color::white(),
            flag_color: Color::white(),
        }
    }

    /// Label font, e.g. `30px Arial`.
    pub fn font(&self) -> Font {
        Font::new(self.font_size, self.font_name.as_str())
    }

    /// Applies one control-panel change.
    ///
    /// The value is parsed and validated before anything is written; on error
    /// the params are left untouched.
    pub fn apply(
        &mut self,
        key: &str,
        value: &str,
        viewport: Viewport,
    ) -> Result<ParamKey, ClockError> {
        let key: ParamKey = key.parse()?;
        match key {
            ParamKey::LineWidth | ParamKey::FontSize | ParamKey::CenterY => {
                let v = parse_number(key, value)?;
                if let ControlKind::Range { min, max } = control_kind(key, viewport) {
                    if v < min || v > max {
                        return Err(ClockError::OutOfRange { key, value: v, min, max });
                    }
                }
                match key {
                    ParamKey::LineWidth => self.line_width = v,
                    ParamKey::FontSize => self.font_size = v,
                    _ => self.center_y = v,
                }
            }
            ParamKey::Timezone => self.timezone = value.parse()?,
            ParamKey::FontName => self.font_name = value.parse()?,
            ParamKey::Color | ParamKey::FlagColor => {
                let c = Color::parse(value)
                    .map_err(|source| ClockError::InvalidColor { key, source })?;
                if key == ParamKey::Color {
                    self.color = c;
                } else {
                    self.flag_color = c;
                }
            }
        }
        log::debug!("param {key} = {}", self.get(key));
        Ok(key)
    }

    /// Current value of a field, formatted the way [`apply`](Self::apply) accepts it.
    pub fn get(&self, key: ParamKey) -> String {
        match key {
            ParamKey::LineWidth => self.line_width.to_string(),
            ParamKey::Timezone => self.timezone.iana().to_string(),
            ParamKey::FontSize => self.font_size.to_string(),
            ParamKey::FontName => self.font_name.to_string(),
            ParamKey::CenterY => self.center_y.to_string(),
            ParamKey::Color => self.color.to_string(),
            ParamKey::FlagColor => self.flag_color.to_string(),
        }
    }
}

fn parse_number(key: ParamKey, value: &str) -> Result<f32, ClockError> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ClockError::InvalidNumber { key, value: value.to_string() })
}

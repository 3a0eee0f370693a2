//! The option schema: every build option the configurator knows about.
//!
//! Definitions are listed in form order, panel by panel. That order is also the
//! enumeration order of a freshly seeded [`crate::OptionStore`], and therefore the
//! column order of exported CSV presets.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::values::*;

/// Form panel an option belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Controller,
    Mount,
    Rotator,
    Focusers,
    Auxiliary,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Controller,
        Section::Mount,
        Section::Rotator,
        Section::Focusers,
        Section::Auxiliary,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Section::Controller => "Controller",
            Section::Mount => "Mount",
            Section::Rotator => "Rotator",
            Section::Focusers => "Focusers",
            Section::Auxiliary => "Auxiliary",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = Section::ALL.iter().map(Section::name).collect();
                format!("unknown section '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

/// How an option is edited
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionKind {
    /// Pick one of a fixed list of firmware tokens
    Enum(&'static [&'static str]),
    /// Numeric entry, kept as text
    Number,
    /// Unconstrained text entry
    FreeText,
}

impl OptionKind {
    pub fn name(&self) -> &'static str {
        match self {
            OptionKind::Enum(_) => "enum",
            OptionKind::Number => "number",
            OptionKind::FreeText => "text",
        }
    }

    /// Allowed values, empty for unconstrained kinds
    pub fn allowed(&self) -> &'static [&'static str] {
        match self {
            OptionKind::Enum(values) => *values,
            OptionKind::Number | OptionKind::FreeText => &[],
        }
    }
}

/// A single build option
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionDefinition {
    pub key: String,
    pub section: Section,
    pub kind: OptionKind,
    pub default: String,
}

impl OptionDefinition {
    /// Display label, e.g. `AXIS1 DRIVER MODEL`
    pub fn label(&self) -> String {
        self.key.replace('_', " ")
    }

    /// Whether `value` is one of the allowed values.
    ///
    /// Purely advisory: the store accepts any text for any option.
    pub fn accepts(&self, value: &str) -> bool {
        match self.kind {
            OptionKind::Enum(values) => values.contains(&value),
            OptionKind::Number | OptionKind::FreeText => true,
        }
    }
}

struct SchemaBuilder {
    section: Section,
    definitions: Vec<OptionDefinition>,
}

impl SchemaBuilder {
    fn new() -> Self {
        Self {
            section: Section::Controller,
            definitions: Vec::new(),
        }
    }

    fn section(&mut self, section: Section) -> &mut Self {
        self.section = section;
        self
    }

    fn push(&mut self, key: impl Into<String>, kind: OptionKind, default: impl Into<String>) -> &mut Self {
        self.definitions.push(OptionDefinition {
            key: key.into(),
            section: self.section,
            kind,
            default: default.into(),
        });
        self
    }

    fn choice(&mut self, key: impl Into<String>, values: &'static [&'static str], default: &str) -> &mut Self {
        self.push(key, OptionKind::Enum(values), default)
    }

    fn number(&mut self, key: impl Into<String>, default: &str) -> &mut Self {
        self.push(key, OptionKind::Number, default)
    }

    fn text(&mut self, key: impl Into<String>, default: impl Into<String>) -> &mut Self {
        self.push(key, OptionKind::FreeText, default)
    }

    fn switches(&mut self, keys: &[String], default: &str) -> &mut Self {
        for key in keys {
            self.choice(key.as_str(), ON_OFF, default);
        }
        self
    }

    fn build(self) -> Vec<OptionDefinition> {
        self.definitions
    }
}

fn axis_keys(axis: u8, suffixes: &[&str]) -> Vec<String> {
    suffixes.iter().map(|suffix| format!("AXIS{axis}_{suffix}")).collect()
}

fn controller(b: &mut SchemaBuilder) {
    b.section(Section::Controller).choice("PINMAP", PINMAPS, "BTT_SKR_PRO");
    for (port, default) in [('A', "9600"), ('B', "230400"), ('C', OFF), ('D', OFF), ('E', OFF)] {
        b.choice(format!("SERIAL_{port}_BAUD_DEFAULT"), SERIAL_BAUD_RATES, default);
    }
    b.choice("SERIAL_B_ESP_FLASHING", ON_OFF, "ON")
        .choice("SERIAL_RADIO", SERIAL_RADIO, OFF)
        .choice("WIFI_MODULE", WIFI_MODULE, "CH_PD")
        .choice("STATUS_LED", ON_OFF, "ON")
        .choice("RETICLE_LED_DEFAULT", ON_OFF, OFF)
        .choice("RETICLE_LED_MEMORY", ON_OFF, OFF)
        .choice("RETICLE_LED_INVERT", ON_OFF, OFF)
        .choice("WEATHER", WEATHER_SENSORS, OFF)
        .choice("STEP_WAVE_FORM", STEP_WAVE_FORMS, "PULSE")
        .choice("NV_DRIVER", NV_DRIVERS, "NV_AT24C32");
}

/// Right ascension / azimuth and declination / altitude axes
fn mount_axis(b: &mut SchemaBuilder, axis: u8, limit_min: &str, limit_max: &str) {
    b.choice(format!("AXIS{axis}_DRIVER_MODEL"), DRIVER_MODELS, "TMC2130");
    for (suffix, default) in [
        ("STEPS_PER_DEGREE", "24888"),
        ("LIMIT_MIN", limit_min),
        ("LIMIT_MAX", limit_max),
        ("DRIVER_MICROSTEPS", "16"),
        ("DRIVER_MICROSTEPS_GOTO", "1"),
        ("DRIVER_IHOLD", "500"),
        ("DRIVER_IRUN", "800"),
        ("DRIVER_IGOTO", "1200"),
    ] {
        b.number(format!("AXIS{axis}_{suffix}"), default);
    }
    b.switches(&axis_keys(axis, &["REVERSE", "POWER_DOWN", "SENSE_HOME"]), OFF)
        .choice(format!("AXIS{axis}_DRIVER_STATUS"), DRIVER_STATUS, "ON");
    for key in axis_keys(axis, &["DRIVER_DECAY", "DRIVER_DECAY_GOTO"]) {
        b.choice(key, DRIVER_DECAY_MODES, OFF);
    }
    for key in axis_keys(axis, &["SENSE_LIMIT_MIN", "SENSE_LIMIT_MAX"]) {
        b.choice(key, LIMIT_SENSE_LEVEL, "LIMIT_SENSE");
    }
}

fn mount(b: &mut SchemaBuilder) {
    b.section(Section::Mount);
    mount_axis(b, 1, "-180", "180");
    mount_axis(b, 2, "-90", "90");

    b.choice("MOUNT_TYPE", MOUNT_TYPES, "GEM")
        .choice("MOUNT_COORDS", MOUNT_COORDS, "TOPOCENTRIC")
        .choice("MOUNT_COORDS_MEMORY", ON_OFF, OFF)
        .choice("MOUNT_ENABLE_IN_STANDBY", ON_OFF, OFF)
        .choice("TIME_LOCATION_SOURCE", TIME_LOCATION_SOURCES, "DS3231")
        .choice("TIME_LOCATION_PPS_SENSE", PPS_SENSE, "HIGH")
        .choice("STATUS_MOUNT_LED", ON_OFF, OFF)
        .choice("STATUS_BUZZER_DEFAULT", ON_OFF, OFF)
        .choice("STATUS_BUZZER_MEMORY", ON_OFF, OFF)
        .text("STATUS_BUZZER", OFF)
        .choice("ST4_INTERFACE", ON_OFF, OFF)
        .choice("ST4_HAND_CONTROL", ON_OFF, "ON")
        .choice("ST4_HAND_CONTROL_FOCUSER", ON_OFF, "ON")
        .number("GUIDE_TIME_LIMIT", "10")
        .choice("GUIDE_DISABLE_BACKLASH", ON_OFF, OFF)
        .choice("LIMIT_SENSE", SENSE_LEVEL, OFF)
        .choice("LIMIT_STRICT", ON_OFF, OFF);
    for key in ["PARK_SENSE", "PARK_SIGNAL", "PARK_STATUS", "PARK_STRICT"] {
        b.choice(key, SENSE_LEVEL, OFF);
    }
    b.number("PEC_STEPS_PER_WORM_ROTATION", "0")
        .choice("PEC_SENSE", SENSE_LEVEL, OFF)
        .number("PEC_BUFFER_SIZE_LIMIT", "720")
        .number("TRACK_BACKLASH_RATE", "2")
        .choice("TRACK_AUTOSTART", ON_OFF, OFF)
        .choice("TRACK_COMPENSATION_DEFAULT", TRACK_COMPENSATION, OFF)
        .choice("TRACK_COMPENSATION_MEMORY", ON_OFF, OFF)
        .number("SLEW_RATE_BASE_DESIRED", "1")
        .choice("SLEW_RATE_MEMORY", ON_OFF, OFF)
        .number("SLEW_ACCELERATION_DIST", "5.0")
        .number("SLEW_RAPID_STOP_DIST", "2.0")
        .number("GOTO_OFFSET", "0.25")
        .choice("GOTO_FEATURE", ON_OFF, "ON")
        .choice("GOTO_OFFSET_ALIGN", ON_OFF, OFF);
    for key in [
        "MFLIP_SKIP_HOME",
        "MFLIP_AUTOMATIC_DEFAULT",
        "MFLIP_AUTOMATIC_MEMORY",
        "MFLIP_PAUSE_HOME_DEFAULT",
        "MFLIP_PAUSE_HOME_MEMORY",
        "PIER_SIDE_SYNC_CHANGE_SIDES",
    ] {
        b.choice(key, ON_OFF, OFF);
    }
    b.choice("PIER_SIDE_PREFERRED_DEFAULT", PIER_SIDES, "BEST")
        .choice("PIER_SIDE_PREFERRED_MEMORY", ON_OFF, OFF)
        .choice("ALIGN_AUTO_HOME", ON_OFF, OFF)
        .choice("ALIGN_MODEL_MEMORY", ON_OFF, OFF)
        .choice("ALIGN_MAX_STARS", ALIGN_MAX_STARS, "AUTO");
}

/// Rotator and focuser axes share one layout after their motion parameters
fn auxiliary_axis(b: &mut SchemaBuilder, axis: u8, motion: &[(&str, &str)]) {
    b.choice(format!("AXIS{axis}_DRIVER_MODEL"), DRIVER_MODELS, OFF);
    for (suffix, default) in motion {
        b.number(format!("AXIS{axis}_{suffix}"), default);
    }
    b.switches(&axis_keys(axis, &["REVERSE", "POWER_DOWN", "SENSE_HOME"]), OFF)
        .choice(format!("AXIS{axis}_DRIVER_STATUS"), DRIVER_STATUS, OFF);
    for key in axis_keys(
        axis,
        &[
            "DRIVER_MICROSTEPS",
            "DRIVER_MICROSTEPS_GOTO",
            "DRIVER_IHOLD",
            "DRIVER_IRUN",
            "DRIVER_IGOTO",
        ],
    ) {
        b.text(key, OFF);
    }
    for key in axis_keys(axis, &["DRIVER_DECAY", "DRIVER_DECAY_GOTO"]) {
        b.choice(key, DRIVER_DECAY_MODES, OFF);
    }
    for key in axis_keys(axis, &["SENSE_LIMIT_MIN", "SENSE_LIMIT_MAX"]) {
        b.choice(key, SENSE_LEVEL, OFF);
    }
}

fn rotator(b: &mut SchemaBuilder) {
    b.section(Section::Rotator);
    auxiliary_axis(
        b,
        3,
        &[
            ("SLEW_RATE_BASE_DESIRED", "1.0"),
            ("STEPS_PER_DEGREE", "64.0"),
            ("LIMIT_MIN", "0"),
            ("LIMIT_MAX", "360"),
        ],
    );
}

fn focusers(b: &mut SchemaBuilder) {
    b.section(Section::Focusers);
    auxiliary_axis(
        b,
        4,
        &[
            ("SLEW_RATE_BASE_DESIRED", "500"),
            ("SLEW_RATE_MINIMUM", "20"),
            ("STEPS_PER_MICRON", "0.5"),
            ("LIMIT_MIN", "0"),
            ("LIMIT_MAX", "50"),
        ],
    );
    b.choice("FOCUSER_TEMPERATURE", FOCUSER_TEMPERATURE, OFF);
}

fn auxiliary(b: &mut SchemaBuilder) {
    b.section(Section::Auxiliary);
    for i in 1..=FEATURE_SLOTS {
        b.choice(format!("FEATURE{i}_PURPOSE"), FEATURE_PURPOSES, OFF)
            .text(format!("FEATURE{i}_NAME"), format!("FEATURE{i}"));
        for param in ["TEMP", "PIN", "VALUE_DEFAULT"] {
            b.text(format!("FEATURE{i}_{param}"), OFF);
        }
        b.choice(format!("FEATURE{i}_VALUE_MEMORY"), ON_OFF, OFF)
            .choice(format!("FEATURE{i}_ON_STATE"), FEATURE_ON_STATES, "HIGH");
    }
}

static DEFINITIONS: Lazy<Vec<OptionDefinition>> = Lazy::new(|| {
    let mut b = SchemaBuilder::new();
    controller(&mut b);
    mount(&mut b);
    rotator(&mut b);
    focusers(&mut b);
    auxiliary(&mut b);
    b.build()
});

static INDEX: Lazy<IndexMap<&'static str, usize>> = Lazy::new(|| {
    DEFINITIONS
        .iter()
        .enumerate()
        .map(|(i, def)| (def.key.as_str(), i))
        .collect()
});

/// All option definitions in form order
pub fn definitions() -> &'static [OptionDefinition] {
    &DEFINITIONS
}

pub fn lookup(key: &str) -> Option<&'static OptionDefinition> {
    INDEX.get(key).map(|&i| &DEFINITIONS[i])
}

pub fn is_known(key: &str) -> bool {
    INDEX.contains_key(key)
}

pub fn in_section(section: Section) -> impl Iterator<Item = &'static OptionDefinition> {
    DEFINITIONS.iter().filter(move |def| def.section == section)
}

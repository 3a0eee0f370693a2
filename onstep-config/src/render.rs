//! `Config.h` renderer
//!
//! Output is driven by a fixed template, not by the schema or the store: the
//! template decides which options appear, in which order and with which
//! column alignment. Store keys the template does not mention are never
//! emitted, and a template key missing from the store aborts the render.

use once_cell::sync::Lazy;

use crate::error::{ConfigError, ConfigResult};
use crate::store::OptionStore;
use crate::values::{EXTENDED_CONFIG_INCLUDE, FEATURE_SLOTS, FILE_VERSION_CONFIG};

/// Column widths of the `#define` name field. The firmware's sample config is
/// not aligned consistently and the generated file keeps its layout.
const WIDE: usize = 30;
const NARROW: usize = 29;

const CONTROLLER: &[(&str, usize)] = &[
    ("PINMAP", WIDE),
    ("SERIAL_A_BAUD_DEFAULT", NARROW),
    ("SERIAL_B_BAUD_DEFAULT", NARROW),
    ("SERIAL_B_ESP_FLASHING", WIDE),
    ("SERIAL_C_BAUD_DEFAULT", NARROW),
    ("SERIAL_D_BAUD_DEFAULT", NARROW),
    ("SERIAL_E_BAUD_DEFAULT", NARROW),
    ("SERIAL_RADIO", WIDE),
    ("WIFI_MODULE", NARROW),
    ("STATUS_LED", WIDE),
    ("RETICLE_LED_DEFAULT", WIDE),
    ("RETICLE_LED_MEMORY", WIDE),
    ("RETICLE_LED_INVERT", WIDE),
    ("WEATHER", WIDE),
    ("STEP_WAVE_FORM", WIDE),
    ("NV_DRIVER", WIDE),
];

/// Axis lines following the axis-specific motion parameters
const AXIS_TAIL: &[&str] = &[
    "REVERSE",
    "LIMIT_MIN",
    "LIMIT_MAX",
    "DRIVER_MICROSTEPS",
    "DRIVER_MICROSTEPS_GOTO",
    "DRIVER_IHOLD",
    "DRIVER_IRUN",
    "DRIVER_IGOTO",
    "DRIVER_STATUS",
    "DRIVER_DECAY",
    "DRIVER_DECAY_GOTO",
    "POWER_DOWN",
    "SENSE_HOME",
    "SENSE_LIMIT_MIN",
    "SENSE_LIMIT_MAX",
];

const MOUNT: &[(&str, usize)] = &[
    ("MOUNT_TYPE", WIDE),
    ("MOUNT_COORDS", WIDE),
    ("MOUNT_COORDS_MEMORY", WIDE),
    ("MOUNT_ENABLE_IN_STANDBY", WIDE),
    ("TIME_LOCATION_SOURCE", WIDE),
    ("TIME_LOCATION_PPS_SENSE", WIDE),
    ("STATUS_MOUNT_LED", NARROW),
    ("STATUS_BUZZER", NARROW),
    ("STATUS_BUZZER_DEFAULT", NARROW),
    ("STATUS_BUZZER_MEMORY", NARROW),
    ("ST4_INTERFACE", NARROW),
    ("ST4_HAND_CONTROL", NARROW),
    ("ST4_HAND_CONTROL_FOCUSER", NARROW),
    ("GUIDE_TIME_LIMIT", NARROW),
    ("GUIDE_DISABLE_BACKLASH", NARROW),
    ("LIMIT_SENSE", NARROW),
    ("LIMIT_STRICT", NARROW),
    ("PARK_SENSE", NARROW),
    ("PARK_SIGNAL", NARROW),
    ("PARK_STATUS", NARROW),
    ("PARK_STRICT", NARROW),
    ("PEC_STEPS_PER_WORM_ROTATION", NARROW),
    ("PEC_SENSE", NARROW),
    ("PEC_BUFFER_SIZE_LIMIT", NARROW),
    ("TRACK_BACKLASH_RATE", NARROW),
    ("TRACK_AUTOSTART", NARROW),
    ("TRACK_COMPENSATION_DEFAULT", NARROW),
    ("TRACK_COMPENSATION_MEMORY", NARROW),
    ("SLEW_RATE_BASE_DESIRED", NARROW),
    ("SLEW_RATE_MEMORY", NARROW),
    ("SLEW_ACCELERATION_DIST", NARROW),
    ("SLEW_RAPID_STOP_DIST", NARROW),
    ("GOTO_FEATURE", NARROW),
    ("GOTO_OFFSET", NARROW),
    ("GOTO_OFFSET_ALIGN", NARROW),
    ("MFLIP_SKIP_HOME", NARROW),
    ("MFLIP_AUTOMATIC_DEFAULT", NARROW),
    ("MFLIP_AUTOMATIC_MEMORY", NARROW),
    ("MFLIP_PAUSE_HOME_DEFAULT", NARROW),
    ("MFLIP_PAUSE_HOME_MEMORY", NARROW),
    ("PIER_SIDE_SYNC_CHANGE_SIDES", NARROW),
    ("PIER_SIDE_PREFERRED_DEFAULT", NARROW),
    ("PIER_SIDE_PREFERRED_MEMORY", NARROW),
    ("ALIGN_AUTO_HOME", NARROW),
    ("ALIGN_MODEL_MEMORY", NARROW),
    ("ALIGN_MAX_STARS", NARROW),
];

/// Feature lines; widths are for the rendered `FEATUREn_` prefix
const FEATURE: &[(&str, usize)] = &[
    ("PURPOSE", WIDE - 2),
    ("NAME", NARROW - 2),
    ("TEMP", NARROW - 2),
    ("PIN", NARROW - 2),
    ("VALUE_DEFAULT", NARROW - 2),
    ("VALUE_MEMORY", NARROW - 2),
    ("ON_STATE", NARROW - 2),
];

/// One `#define` line bound to an option
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directive {
    pub key: String,
    width: usize,
    quoted: bool,
}

impl Directive {
    fn new(key: impl Into<String>, width: usize) -> Self {
        Self {
            key: key.into(),
            width,
            quoted: false,
        }
    }

    fn quoted(mut self) -> Self {
        self.quoted = true;
        self
    }

    fn render(&self, store: &OptionStore) -> ConfigResult<String> {
        let value = store.get(&self.key).map_err(|_| ConfigError::MissingOption {
            key: self.key.clone(),
        })?;
        let line = if self.quoted {
            format!("#define {:<width$}\"{}\"", self.key, value, width = self.width)
        } else {
            format!("#define {:<width$}{}", self.key, value, width = self.width)
        };
        Ok(line)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateLine {
    /// Literal text: banner, section comment, blank separator or trailer
    Text(String),
    Define(Directive),
}

impl TemplateLine {
    fn render(&self, store: &OptionStore) -> ConfigResult<String> {
        match self {
            TemplateLine::Text(text) => Ok(text.clone()),
            TemplateLine::Define(directive) => directive.render(store),
        }
    }
}

#[derive(Default)]
struct TemplateBuilder {
    lines: Vec<TemplateLine>,
}

impl TemplateBuilder {
    fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(TemplateLine::Text(text.into()));
        self
    }

    fn blank(&mut self) -> &mut Self {
        self.text("")
    }

    /// Blank separator followed by a section comment
    fn section(&mut self, title: &str) -> &mut Self {
        self.blank().text(format!("// {title}"))
    }

    fn define(&mut self, directive: Directive) -> &mut Self {
        self.lines.push(TemplateLine::Define(directive));
        self
    }

    fn defines(&mut self, entries: &[(&str, usize)]) -> &mut Self {
        for &(key, width) in entries {
            self.define(Directive::new(key, width));
        }
        self
    }

    /// Driver model, the axis' motion parameters, then the shared axis tail
    fn axis(&mut self, axis: u8, motion: &[&str]) -> &mut Self {
        let mut suffixes = vec!["DRIVER_MODEL"];
        suffixes.extend_from_slice(motion);
        suffixes.extend_from_slice(AXIS_TAIL);
        for suffix in suffixes {
            let width = match suffix {
                "DRIVER_MODEL" | "REVERSE" => WIDE,
                _ => NARROW,
            };
            self.define(Directive::new(format!("AXIS{axis}_{suffix}"), width));
        }
        self
    }

    fn feature(&mut self, index: usize) -> &mut Self {
        for &(suffix, width) in FEATURE {
            let directive = Directive::new(format!("FEATURE{index}_{suffix}"), width);
            self.define(if suffix == "NAME" { directive.quoted() } else { directive });
        }
        self.blank()
    }

    fn build(self) -> Vec<TemplateLine> {
        self.lines
    }
}

static TEMPLATE: Lazy<Vec<TemplateLine>> = Lazy::new(|| {
    let mut b = TemplateBuilder::default();
    b.text("/* Configuration for OnStepX */");

    b.section("CONTROLLER").defines(CONTROLLER);

    b.section("MOUNT").axis(1, &["STEPS_PER_DEGREE"]);
    b.blank().axis(2, &["STEPS_PER_DEGREE"]);
    b.blank().defines(MOUNT);

    b.section("ROTATOR")
        .axis(3, &["SLEW_RATE_BASE_DESIRED", "STEPS_PER_DEGREE"]);

    b.section("FOCUSERS")
        .axis(4, &["SLEW_RATE_BASE_DESIRED", "SLEW_RATE_MINIMUM", "STEPS_PER_MICRON"])
        .define(Directive::new("FOCUSER_TEMPERATURE", WIDE));

    b.section("AUXILIARY FEATURES");
    for index in 1..=FEATURE_SLOTS {
        b.feature(index);
    }

    b.text(format!("#define FileVersionConfig {FILE_VERSION_CONFIG}"))
        .text(format!("#include \"{EXTENDED_CONFIG_INCLUDE}\""));
    b.build()
});

/// The fixed template, in output order
pub fn template() -> &'static [TemplateLine] {
    &TEMPLATE
}

/// Keys referenced by the template, in output order
pub fn template_keys() -> impl Iterator<Item = &'static str> {
    TEMPLATE.iter().filter_map(|line| match line {
        TemplateLine::Define(directive) => Some(directive.key.as_str()),
        TemplateLine::Text(_) => None,
    })
}

/// Render the store into `Config.h` lines.
///
/// Fails with [`ConfigError::MissingOption`] on the first template key the store
/// lacks; no partial output is returned.
pub fn render(store: &OptionStore) -> ConfigResult<Vec<String>> {
    TEMPLATE.iter().map(|line| line.render(store)).collect()
}

/// Rendered lines joined with `\n`, without a trailing newline
pub fn render_text(store: &OptionStore) -> ConfigResult<String> {
    Ok(render(store)?.join("\n"))
}

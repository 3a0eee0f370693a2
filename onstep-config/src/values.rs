//! Allowed value sets shared by the option schema
//!
//! These tokens are copied verbatim into the generated `Config.h`, so their
//! spelling must match what the OnStepX firmware expects.

// ============================================================================
// Generic switches
// ============================================================================

pub const OFF: &str = "OFF";

pub const ON_OFF: &[&str] = &["OFF", "ON"];

/// Logic level of a sense input
pub const SENSE_LEVEL: &[&str] = &["OFF", "HIGH", "LOW"];

/// Driver status reporting
pub const DRIVER_STATUS: &[&str] = &["OFF", "ON", "HIGH", "LOW"];

/// Axis 1/2 limit sense, which may defer to the global `LIMIT_SENSE`
pub const LIMIT_SENSE_LEVEL: &[&str] = &["OFF", "HIGH", "LOW", "LIMIT_SENSE"];

// ============================================================================
// Controller
// ============================================================================

pub const PINMAPS: &[&str] = &[
    "OFF",
    "BTT_SKR_PRO",
    "MiniPCB",
    "MiniPCB2",
    "MaxPCB2",
    "MaxESP3",
    "CNC3",
    "STM32Blue",
];

pub const SERIAL_BAUD_RATES: &[&str] = &["OFF", "9600", "19200", "57600", "115200", "230400", "460800"];

pub const SERIAL_RADIO: &[&str] = &["OFF", "BLUETOOTH", "WIFI_ACCESS_POINT", "WIFI_STATION"];

pub const WIFI_MODULE: &[&str] = &["OFF", "CH_PD"];

pub const WEATHER_SENSORS: &[&str] = &[
    "OFF",
    "BME280",
    "BME280_0x76",
    "BME280_SPI",
    "BMP280",
    "BMP280_0x76",
    "BMP280_SPI",
];

pub const STEP_WAVE_FORMS: &[&str] = &["SQUARE", "PULSE"];

pub const NV_DRIVERS: &[&str] = &["NV_DEFAULT", "NV_AT24C32"];

// ============================================================================
// Axes
// ============================================================================

pub const DRIVER_MODELS: &[&str] = &[
    "OFF", "A4988", "DRV8825", "LV8729", "S109", "TMC2130", "TMC5160", "TMC2209",
];

pub const DRIVER_DECAY_MODES: &[&str] = &["OFF", "STEALTHCHOP", "SPREADCYCLE"];

// ============================================================================
// Mount
// ============================================================================

pub const MOUNT_TYPES: &[&str] = &[
    "GEM",
    "GEM_TA",
    "GEM_TAC",
    "FORK",
    "FORK_TA",
    "FORK_TAC",
    "ALTAZM",
    "ALTAZM_UNL",
];

pub const MOUNT_COORDS: &[&str] = &["TOPOCENTRIC", "TOPO_STRICT", "OBSERVED_PLACE"];

pub const TIME_LOCATION_SOURCES: &[&str] = &["OFF", "DS3231", "SD3031", "TEENSY", "GPS", "NTP"];

pub const PPS_SENSE: &[&str] = &["OFF", "HIGH", "LOW", "BOTH"];

pub const TRACK_COMPENSATION: &[&str] = &["OFF", "REFRACTION", "REFRACTION_DUAL", "MODEL", "MODEL_DUAL"];

pub const PIER_SIDES: &[&str] = &["BEST", "EAST", "WEST"];

pub const ALIGN_MAX_STARS: &[&str] = &["AUTO", "1", "3", "4", "5", "6", "7", "8", "9"];

// ============================================================================
// Focuser and auxiliary features
// ============================================================================

pub const FOCUSER_TEMPERATURE: &[&str] = &["OFF", "THERMISTOR"];

/// Number of auxiliary feature slots
pub const FEATURE_SLOTS: usize = 8;

pub const FEATURE_PURPOSES: &[&str] = &[
    "OFF",
    "SWITCH",
    "MOMENTARY_SWITCH",
    "ANALOG_OUT",
    "DEW_HEATER",
    "INTERVALOMETER",
];

pub const FEATURE_ON_STATES: &[&str] = &["HIGH", "LOW"];

// ============================================================================
// Generated file trailer
// ============================================================================

/// Value of `FileVersionConfig` expected by the firmware
pub const FILE_VERSION_CONFIG: u32 = 6;

/// Header pulled in after the generated block
pub const EXTENDED_CONFIG_INCLUDE: &str = "Extended.config.h";

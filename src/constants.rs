// Shared constants for the lab session and reaction engine.

pub const ROOM_TEMP_C: f64 = 25.0; // resting ambient temperature
pub const HEATER_CEILING_C: f64 = 100.0;
pub const HEATER_STEP_C: f64 = 5.0; // per tick while the heater is on
pub const COOLING_STEP_C: f64 = 2.0; // per tick while cooling back down
pub const FLAME_REVEAL_TEMP_C: f64 = 50.0; // flame tests only show above this

pub const TICK_INTERVAL_SECS: u64 = 1;

// One pour from the reagent shelf.
pub const VOLUME_INCREMENT_ML: f64 = 10.0;
pub const DEFAULT_CONCENTRATION: f64 = 1.0;

// Default glassware capacities, in ml
pub const BEAKER_CAPACITY_ML: f64 = 250.0;
pub const TEST_TUBE_CAPACITY_ML: f64 = 50.0;
pub const FLASK_CAPACITY_ML: f64 = 150.0;

// Display colors the mixture resolver falls back to
pub const TRANSPARENT_COLOR: &str = "transparent";
pub const MIXED_COLOR: &str = "#8a9a9a";
pub const NEUTRAL_SALT_WATER_COLOR: &str = "#e8f4f8";

// The metal + strong acid special case always reports hydrogen evolution
// with this equation, independent of which metal fired it.
pub const HYDROGEN_GAS_EQUATION: &str = "Zn + 2HCl → ZnCl₂ + H₂↑";
pub const HYDROGEN_GAS_NAME: &str = "Hydrogen";

pub const REPORT_HEADER: &str = "VIRTUAL CHEMISTRY LAB - EXPERIMENT REPORT";

//! HTTP path constants

pub const HEALTH: &str = "/health";

pub const PETS: &str = "/pets";
pub const PET_BY_ID: &str = "/pets/{id}";
pub const PETS_RESET: &str = "/pets/reset";

pub const HIT: &str = "/hit";
pub const HITS: &str = "/hits";
pub const COUNTER_RESET: &str = "/reset";

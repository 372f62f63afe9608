// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const KEBABS: &str = "/kebabs";
pub const KEBAB_ITEM: &str = "/kebabs/{id}";

pub mod cmd {
    pub const CONFIG_INIT: &str =
        "plantbender config init --records-code <CODE> --activation-code <CODE>";
    pub const CONFIG_SHOW: &str = "plantbender config show";
    pub const STATUS: &str = "plantbender status";
    pub const HISTORY: &str = "plantbender history";
    pub const WATER_START: &str = "plantbender water start";
    pub const WATER_STOP: &str = "plantbender water stop";
    pub const WATER_START_FORCE: &str = "plantbender water start --force";
}

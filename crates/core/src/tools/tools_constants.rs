/// Codes of the tools in the standard rental catalog
pub mod tool_codes {
    pub const CHNS: &str = "CHNS";
    pub const LADW: &str = "LADW";
    pub const JAKD: &str = "JAKD";
    pub const JAKR: &str = "JAKR";
}

/// Brands stocked in the standard rental catalog
pub mod tool_brands {
    pub const STIHL: &str = "Stihl";
    pub const WERNER: &str = "Werner";
    pub const DEWALT: &str = "DeWalt";
    pub const RIGID: &str = "Rigid";
}

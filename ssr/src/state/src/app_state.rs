#[derive(Clone)]
pub struct AppState {
    pub name: &'static str,
    pub tagline: &'static str,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            name: "RideNova",
            tagline: "Ride together. Earn together.",
        }
    }
}

impl AppState {
    pub fn asset_path(&self) -> &'static str {
        "img/ridenova"
    }
}

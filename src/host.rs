//! Ports for the page around the table. The round engine never calls these;
//! the host wires them up before or alongside a round.

pub const DEFAULT_BACKDROP: &str = "#228B22";

/// Supplies the one-line joke shown on the start screen.
pub trait JokeSource {
    fn joke(&self) -> Result<String, String>;
}

/// Resolves the visitor's region (a US state name) for the table backdrop.
pub trait RegionSource {
    fn region(&self) -> Result<String, String>;
}

pub fn backdrop_color(region: &str) -> &'static str {
    match region {
        "Alabama" => "#FF5733",
        "Alaska" => "#33C4FF",
        "Arizona" => "#FF33FF",
        "Arkansas" => "#33FF57",
        "California" => "#FFDDC1",
        "Colorado" => "#FFD733",
        "Connecticut" => "#C1C1FF",
        "Delaware" => "#33FFDD",
        "Florida" => "#FF33AA",
        "Georgia" => "#FFA833",
        "Hawaii" => "#33FFA8",
        "Idaho" => "#FFA833",
        "Illinois" => "#FF5733",
        "Indiana" => "#33C4FF",
        "Iowa" => "#FF33FF",
        "Kansas" => "#33FF57",
        "Kentucky" => "#FFDDC1",
        "Louisiana" => "#FFD733",
        "Maine" => "#C1C1FF",
        "Maryland" => "#33FFDD",
        "Massachusetts" => "#FF33AA",
        "Michigan" => "#FFA833",
        "Minnesota" => "#33FFA8",
        "Mississippi" => "#FFA833",
        "Missouri" => "#FF5733",
        "Montana" => "#33C4FF",
        "Nebraska" => "#FF33FF",
        "Nevada" => "#33FF57",
        "New Hampshire" => "#FFDDC1",
        "New Jersey" => "#FFD733",
        "New Mexico" => "#C1C1FF",
        "New York" => "#33FFDD",
        "North Carolina" => "#FF33AA",
        "North Dakota" => "#FFA833",
        "Ohio" => "#33FFA8",
        "Oklahoma" => "#FFA833",
        "Oregon" => "#FF5733",
        "Pennsylvania" => "#33C4FF",
        "Rhode Island" => "#FF33FF",
        "South Carolina" => "#33FF57",
        "South Dakota" => "#FFDDC1",
        "Tennessee" => "#FFD733",
        "Texas" => "#FFC1C1",
        "Utah" => "#C1D1FF",
        "Vermont" => "#33FFDD",
        "Virginia" => "#FF33AA",
        "Washington" => "#FFA833",
        "West Virginia" => "#33FFA8",
        "Wisconsin" => "#FFA833",
        "Wyoming" => "#FF5733",
        _ => DEFAULT_BACKDROP,
    }
}

/// Backdrop for the visitor, or the default felt green when the lookup fails.
pub fn resolve_backdrop(source: &dyn RegionSource) -> &'static str {
    match source.region() {
        Ok(region) => backdrop_color(&region),
        Err(err) => {
            log::warn!("region lookup failed: {err}");
            DEFAULT_BACKDROP
        }
    }
}

pub fn joke_banner(source: &dyn JokeSource) -> Option<String> {
    source
        .joke()
        .map_err(|err| log::warn!("joke fetch failed: {err}"))
        .ok()
        .filter(|joke| !joke.trim().is_empty())
}

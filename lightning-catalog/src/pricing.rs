use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use lightning_core::round_half_up;
use serde::{Deserialize, Serialize};

/// Cabin the fare is quoted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CabinClass {
    #[default]
    Economy,
    Business,
    First,
}

impl CabinClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            CabinClass::Economy => "economy",
            CabinClass::Business => "business",
            CabinClass::First => "first",
        }
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised labels price at the neutral multiplier, i.e. as business.
impl FromStr for CabinClass {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "economy" => CabinClass::Economy,
            "first" => CabinClass::First,
            _ => CabinClass::Business,
        })
    }
}

/// A fare range: `floor + floor(draw * span)` for a draw in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareBand {
    pub floor: u32,
    pub span: u32,
}

impl FareBand {
    pub const fn new(floor: u32, span: u32) -> Self {
        Self { floor, span }
    }

    pub fn pick(&self, draw: f64) -> u32 {
        self.floor + (draw * self.span as f64).floor() as u32
    }
}

/// Pricing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    pub first_multiplier: f64,
    pub business_multiplier: f64,
    pub economy_multiplier: f64,

    /// Multiplier applied to a one-stop fare before the cabin multiplier.
    pub connection_discount: f64,

    /// Long-haul: $599 - $1,299
    pub transatlantic: FareBand,
    /// Over 5 hours: $199 - $449
    pub cross_country: FareBand,
    /// Over 4 hours: $179 - $399
    pub long_domestic: FareBand,
    /// Over 2 hours: $129 - $349
    pub medium_domestic: FareBand,
    /// Everything shorter: $89 - $249
    pub short_domestic: FareBand,
    /// Non-long-haul routes touching the Europe regional set: $249 - $599
    pub europe_regional: FareBand,
    /// Branded early-morning cross-country departures.
    pub redbird: FareBand,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            first_multiplier: 1.4,
            business_multiplier: 1.0,
            economy_multiplier: 0.9,
            connection_discount: 0.8,
            transatlantic: FareBand::new(599, 700),
            cross_country: FareBand::new(199, 250),
            long_domestic: FareBand::new(179, 220),
            medium_domestic: FareBand::new(129, 220),
            short_domestic: FareBand::new(89, 160),
            europe_regional: FareBand::new(249, 350),
            redbird: FareBand::new(199, 250),
        }
    }
}

/// One-stop fares are tiered on the direct route's average block time.
const CONNECTING_BANDS: [(f64, FareBand); 3] = [
    (480.0, FareBand::new(599, 500)),
    (300.0, FareBand::new(199, 200)),
    (180.0, FareBand::new(149, 150)),
];
const CONNECTING_SHORT: FareBand = FareBand::new(99, 100);
const CONNECTING_UNTABLED: FareBand = FareBand::new(149, 200);

/// How a direct route is classified for fare purposes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FareRoute {
    pub transatlantic: bool,
    pub europe_regional: bool,
}

/// Fare engine. All prices are whole dollars.
pub struct PricingEngine {
    config: PricingConfig,
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn cabin_multiplier(&self, cabin: CabinClass) -> f64 {
        match cabin {
            CabinClass::First => self.config.first_multiplier,
            CabinClass::Business => self.config.business_multiplier,
            CabinClass::Economy => self.config.economy_multiplier,
        }
    }

    /// Per-passenger base fare of a nonstop, before the cabin multiplier.
    pub fn direct_base_fare(&self, draw: f64, route: FareRoute, duration_minutes: i64) -> u32 {
        let band = if route.transatlantic {
            self.config.transatlantic
        } else if route.europe_regional {
            self.config.europe_regional
        } else if duration_minutes > 300 {
            self.config.cross_country
        } else if duration_minutes > 240 {
            self.config.long_domestic
        } else if duration_minutes > 120 {
            self.config.medium_domestic
        } else {
            self.config.short_domestic
        };
        band.pick(draw)
    }

    /// Per-passenger base fare of a one-stop itinerary, discount included.
    /// `direct_average` is the tabled average block time of the nonstop route.
    pub fn connecting_base_fare(&self, draw: f64, direct_average: Option<f64>) -> u32 {
        let band = match direct_average {
            Some(average) => CONNECTING_BANDS
                .iter()
                .find(|(threshold, _)| average > *threshold)
                .map(|(_, band)| *band)
                .unwrap_or(CONNECTING_SHORT),
            None => CONNECTING_UNTABLED,
        };
        round_half_up(band.pick(draw) as f64 * self.config.connection_discount) as u32
    }

    pub fn redbird_base_fare(&self, draw: f64) -> u32 {
        self.config.redbird.pick(draw)
    }

    /// `round(base * passengers * cabin multiplier)`
    pub fn final_fare(&self, base: u32, passengers: u32, cabin: CabinClass) -> u32 {
        round_half_up(base as f64 * passengers as f64 * self.cabin_multiplier(cabin)) as u32
    }
}

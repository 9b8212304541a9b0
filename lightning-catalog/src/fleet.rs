use lightning_shared::{Aircraft, BodyType};

/// The airline's fleet. Narrow-bodies fly every domestic and regional route;
/// the single wide-body type is reserved for long-haul.
pub struct Fleet;

impl Fleet {
    pub fn narrow_bodies() -> [Aircraft; 2] {
        [
            Aircraft {
                name: "Airbus A321-211".to_string(),
                body: BodyType::NarrowBody,
                rows: 32,
                seats_per_row: 6,
            },
            Aircraft {
                name: "Boeing 737-700".to_string(),
                body: BodyType::NarrowBody,
                rows: 33,
                seats_per_row: 6,
            },
        ]
    }

    pub fn long_haul() -> Aircraft {
        Aircraft {
            name: "Airbus A350-900".to_string(),
            body: BodyType::WideBody,
            rows: 40,
            seats_per_row: 9,
        }
    }

    /// Picks a narrow-body uniformly from a draw in `[0, 1)`.
    pub fn narrow_body(draw: f64) -> Aircraft {
        let [a321, b737] = Self::narrow_bodies();
        if draw < 0.5 {
            a321
        } else {
            b737
        }
    }

    /// Aircraft for a route: long-haul always gets the wide-body.
    pub fn for_route(long_haul: bool, draw: f64) -> Aircraft {
        if long_haul {
            Self::long_haul()
        } else {
            Self::narrow_body(draw)
        }
    }
}

use super::{checked_mul, compute_total_building_area, ensure_positive, PricingError};
use rust_decimal::Decimal;
use serde::Serialize;

/// How the building's floor area is described
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorPlan {
    /// Every floor has the same area
    Uniform { floors: u32, area_per_floor: Decimal },
    /// One entry per floor, ground floor first
    PerFloor(Vec<Decimal>),
}

impl FloorPlan {
    /// Build a floor plan from a floor count and either a uniform area or an
    /// explicit list of per-floor areas.
    ///
    /// The count is checked first. An explicit list must then contain exactly
    /// `floors` entries when a count is given.
    pub fn from_parts(
        floors: Option<u32>,
        area_per_floor: Option<Decimal>,
        floor_areas: Option<Vec<Decimal>>,
    ) -> Result<FloorPlan, PricingError> {
        if floors == Some(0) {
            return Err(PricingError::invalid("floors", "must be at least 1"));
        }

        match (area_per_floor, floor_areas) {
            (Some(_), Some(_)) => Err(PricingError::invalid(
                "floor_areas",
                "give either a uniform floor area or per-floor areas, not both",
            )),
            (Some(area), None) => {
                let floors = floors.ok_or_else(|| PricingError::missing("floors"))?;
                let plan = FloorPlan::Uniform {
                    floors,
                    area_per_floor: ensure_positive("floor_area", area)?,
                };
                Ok(plan)
            }
            (None, Some(areas)) => {
                if let Some(expected) = floors {
                    if areas.len() != expected as usize {
                        return Err(PricingError::invalid(
                            "floor_areas",
                            format!("expected {} floor areas, got {}", expected, areas.len()),
                        ));
                    }
                }
                // validates emptiness and every entry
                compute_total_building_area(&areas)?;
                Ok(FloorPlan::PerFloor(areas))
            }
            (None, None) => Err(PricingError::missing("floor_area")),
        }
    }

    pub fn floors(&self) -> usize {
        match self {
            FloorPlan::Uniform { floors, .. } => *floors as usize,
            FloorPlan::PerFloor(areas) => areas.len(),
        }
    }

    /// Sum of all floor areas, computed without expanding uniform plans
    pub fn total_area(&self) -> Result<Decimal, PricingError> {
        match self {
            FloorPlan::Uniform {
                floors,
                area_per_floor,
            } => {
                if *floors == 0 {
                    return Err(PricingError::invalid("floors", "must be at least 1"));
                }
                let area = ensure_positive("floor_area", *area_per_floor)?;
                checked_mul("floor_area", area, Decimal::from(*floors))
            }
            FloorPlan::PerFloor(areas) => compute_total_building_area(areas),
        }
    }
}

/// Land and building attributes of one property
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyInput {
    land_area: Decimal,
    floor_plan: FloorPlan,
    land_value: Decimal,
    building_cost: Decimal,
}

impl PropertyInput {
    /// `land_value` and `building_cost` are per square metre.
    pub fn new(
        land_area: Decimal,
        floor_plan: FloorPlan,
        land_value: Decimal,
        building_cost: Decimal,
    ) -> Result<PropertyInput, PricingError> {
        floor_plan.total_area()?;
        Ok(PropertyInput {
            land_area: ensure_positive("land_area", land_area)?,
            floor_plan,
            land_value: ensure_positive("land_value", land_value)?,
            building_cost: ensure_positive("building_cost", building_cost)?,
        })
    }

    pub fn land_area(&self) -> Decimal {
        self.land_area
    }

    pub fn floor_plan(&self) -> &FloorPlan {
        &self.floor_plan
    }

    pub fn land_value(&self) -> Decimal {
        self.land_value
    }

    pub fn building_cost(&self) -> Decimal {
        self.building_cost
    }
}

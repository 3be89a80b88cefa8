use super::{
    checked_add, checked_mul, ensure_positive, Jurisdiction, PricingError, PropertyInput,
};
use rust_decimal::Decimal;
use serde::Serialize;

/// Fair price and stamp duty for one property
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceResult {
    pub jurisdiction: Jurisdiction,
    pub total_building_area: Decimal,
    pub land_component: Decimal,
    pub building_component: Decimal,
    pub fair_price: Decimal,
    pub stamp_duty_rate: Decimal,
    pub stamp_duty: Decimal,
}

/// Sum of all floor areas. Empty plans and non-positive floors are rejected.
pub fn compute_total_building_area(floor_areas: &[Decimal]) -> Result<Decimal, PricingError> {
    if floor_areas.is_empty() {
        return Err(PricingError::invalid(
            "floor_areas",
            "at least one floor is required",
        ));
    }
    let mut total = Decimal::ZERO;
    for (i, area) in floor_areas.iter().enumerate() {
        let area = ensure_positive(&format!("floor_areas[{}]", i + 1), *area)?;
        total = checked_add("floor_areas", total, area)?;
    }
    Ok(total)
}

/// Land value plus replacement cost of the building, with no market premium
pub fn compute_fair_price(
    land_area: Decimal,
    land_value_per_unit: Decimal,
    total_building_area: Decimal,
    building_cost_per_unit: Decimal,
) -> Result<Decimal, PricingError> {
    let (land, building) = price_components(
        land_area,
        land_value_per_unit,
        total_building_area,
        building_cost_per_unit,
    )?;
    checked_add("fair_price", land, building)
}

fn price_components(
    land_area: Decimal,
    land_value_per_unit: Decimal,
    total_building_area: Decimal,
    building_cost_per_unit: Decimal,
) -> Result<(Decimal, Decimal), PricingError> {
    let land = checked_mul(
        "land_area",
        ensure_positive("land_area", land_area)?,
        ensure_positive("land_value", land_value_per_unit)?,
    )?;
    let building = checked_mul(
        "total_building_area",
        ensure_positive("total_building_area", total_building_area)?,
        ensure_positive("building_cost", building_cost_per_unit)?,
    )?;
    Ok((land, building))
}

/// The rate is below one, so the product never exceeds `fair_price`
pub fn compute_stamp_duty(fair_price: Decimal, jurisdiction: Jurisdiction) -> Decimal {
    fair_price * jurisdiction.stamp_duty_rate()
}

/// Price a property and estimate the stamp duty payable in `jurisdiction`
pub fn quote(
    input: &PropertyInput,
    jurisdiction: Jurisdiction,
) -> Result<PriceResult, PricingError> {
    let floors = input.floor_plan().floors();
    let total_building_area = input.floor_plan().total_area()?;
    let (land_component, building_component) = price_components(
        input.land_area(),
        input.land_value(),
        total_building_area,
        input.building_cost(),
    )?;
    let fair_price = checked_add("fair_price", land_component, building_component)?;
    let stamp_duty = compute_stamp_duty(fair_price, jurisdiction);

    log::debug!(
        "Priced {} m² land and {} m² over {} floor(s): fair price {}, {} duty {}",
        input.land_area(),
        total_building_area,
        floors,
        fair_price,
        jurisdiction,
        stamp_duty
    );

    Ok(PriceResult {
        jurisdiction,
        total_building_area,
        land_component,
        building_component,
        fair_price,
        stamp_duty_rate: jurisdiction.stamp_duty_rate(),
        stamp_duty,
    })
}

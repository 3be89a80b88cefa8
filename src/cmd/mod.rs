pub mod batch;
pub mod quote;
pub mod rates;
pub mod report;
pub mod schema;

use crate::pricing::{self, FloorPlan, Jurisdiction, PriceResult, PropertyInput};
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const DISCLAIMER: &str = "The calculated figures are for informational purposes only. \
They are not guaranteed to be accurate and must not be relied upon for financial, legal or \
investment decisions. Always consult official government resources or a financial adviser.";

const DEFAULT_FLOOR_AREA: Decimal = dec!(75);

/// Land and building details for a single property
#[derive(Args, Debug, Clone)]
pub struct PropertyArgs {
    /// Total land area in square metres (do not subtract the building footprint)
    #[arg(short, long, default_value = "306")]
    land_area: Decimal,

    /// Number of floors (1 for a single-storey home)
    #[arg(short, long)]
    floors: Option<u32>,

    /// Building area of each floor in square metres [default: 75]
    #[arg(short = 'a', long, conflicts_with = "floor_areas")]
    floor_area: Option<Decimal>,

    /// Area of every floor in square metres, ground floor first (e.g. 90,60)
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    floor_areas: Vec<Decimal>,

    /// Land value in dollars per square metre
    #[arg(short = 'v', long, default_value = "3000")]
    land_value: Decimal,

    /// Building cost in dollars per square metre
    #[arg(short, long, default_value = "2500")]
    building_cost: Decimal,

    /// State or territory used for the stamp duty estimate
    #[arg(short, long, value_enum, default_value_t = StateArg::Vic)]
    state: StateArg,
}

impl PropertyArgs {
    pub fn to_input(&self) -> Result<(PropertyInput, Jurisdiction), pricing::PricingError> {
        let floor_plan = if self.floor_areas.is_empty() {
            FloorPlan::from_parts(
                Some(self.floors.unwrap_or(1)),
                Some(self.floor_area.unwrap_or(DEFAULT_FLOOR_AREA)),
                None,
            )?
        } else {
            FloorPlan::from_parts(self.floors, None, Some(self.floor_areas.clone()))?
        };
        let input =
            PropertyInput::new(self.land_area, floor_plan, self.land_value, self.building_cost)?;
        Ok((input, self.state.into()))
    }

    /// Validate the arguments and price the property
    pub fn quote(&self) -> anyhow::Result<(PropertyInput, PriceResult)> {
        let (input, jurisdiction) = self.to_input()?;
        let result = pricing::quote(&input, jurisdiction)?;
        Ok((input, result))
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum StateArg {
    /// Victoria
    #[default]
    Vic,
    /// New South Wales
    Nsw,
    /// Queensland
    Qld,
    /// South Australia
    Sa,
    /// Western Australia
    Wa,
    /// Tasmania
    Tas,
    /// Northern Territory
    Nt,
    /// Australian Capital Territory
    Act,
}

impl From<StateArg> for Jurisdiction {
    fn from(arg: StateArg) -> Self {
        match arg {
            StateArg::Vic => Jurisdiction::Vic,
            StateArg::Nsw => Jurisdiction::Nsw,
            StateArg::Qld => Jurisdiction::Qld,
            StateArg::Sa => Jurisdiction::Sa,
            StateArg::Wa => Jurisdiction::Wa,
            StateArg::Tas => Jurisdiction::Tas,
            StateArg::Nt => Jurisdiction::Nt,
            StateArg::Act => Jurisdiction::Act,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        property: PropertyArgs,
    }

    fn parse(args: &[&str]) -> PropertyArgs {
        TestCli::try_parse_from(std::iter::once("fairprice").chain(args.iter().copied()))
            .unwrap()
            .property
    }

    #[test]
    fn defaults_match_the_form() {
        let (_, result) = parse(&[]).quote().unwrap();
        assert_eq!(result.jurisdiction, Jurisdiction::Vic);
        assert_eq!(result.fair_price, dec!(1105500));
        assert_eq!(result.stamp_duty, dec!(60802.50));
    }

    #[test]
    fn uniform_floors() {
        let (input, result) = parse(&["--floors", "2", "--floor-area", "80"]).quote().unwrap();
        assert_eq!(input.floor_plan().floors(), 2);
        assert_eq!(result.total_building_area, dec!(160));
    }

    #[test]
    fn explicit_floor_areas() {
        let (input, result) = parse(&["--floors", "2", "--floor-areas", "90,60", "--state", "nt"])
            .quote()
            .unwrap();
        assert_eq!(input.floor_plan(), &FloorPlan::PerFloor(vec![dec!(90), dec!(60)]));
        assert_eq!(result.total_building_area, dec!(150));
        assert_eq!(result.jurisdiction, Jurisdiction::Nt);
    }

    #[test]
    fn floor_count_mismatch_rejected() {
        assert!(parse(&["--floors", "3", "--floor-areas", "90,60"]).quote().is_err());
    }

    #[test]
    fn zero_land_area_rejected() {
        let err = parse(&["--land-area", "0"]).to_input().unwrap_err();
        assert!(matches!(err, pricing::PricingError::InvalidInput { ref field, .. } if field == "land_area"));
    }

    #[test]
    fn zero_building_cost_rejected() {
        assert!(parse(&["--building-cost", "0"]).to_input().is_err());
    }

    #[test]
    fn unknown_state_rejected_by_parser() {
        let args = ["fairprice", "--state", "nz"];
        assert!(TestCli::try_parse_from(args).is_err());
    }
}

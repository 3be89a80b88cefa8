use crate::pricing::{FloorPlan, Jurisdiction, PricingError, PropertyInput};
use anyhow::Context;
use fairprice_derive::CsvSchema;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::str::FromStr;

/// Column documentation generated by `#[derive(CsvSchema)]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvField {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// JSON input format for pricing several properties at once
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PropertyBatch {
    pub properties: Vec<PropertyRecord>,
}

/// One property to price, as a CSV row or JSON object
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, CsvSchema)]
pub struct PropertyRecord {
    /// Optional label to identify the property in the output
    #[serde(default)]
    pub id: Option<String>,
    /// Total land area in square metres (do not subtract the building footprint)
    #[serde(default)]
    #[schemars(with = "f64")]
    #[csv(required)]
    pub land_area: Option<Decimal>,
    /// Number of floors (required with floor_area)
    #[serde(default)]
    pub floors: Option<u32>,
    /// Area of each floor in square metres, when all floors are the same size
    #[serde(default)]
    #[schemars(with = "Option<f64>")]
    pub floor_area: Option<Decimal>,
    /// Per-floor areas separated by ';' (e.g. "90;60", or [90, 60] in JSON), instead of floor_area
    #[serde(default)]
    pub floor_areas: Option<FloorAreas>,
    /// Land value in dollars per square metre
    #[serde(default)]
    #[schemars(with = "f64")]
    #[csv(required)]
    pub land_value: Option<Decimal>,
    /// Construction cost in dollars per square metre
    #[serde(default)]
    #[schemars(with = "f64")]
    #[csv(required)]
    pub building_cost: Option<Decimal>,
    /// State or territory code: VIC, NSW, QLD, SA, WA, TAS, NT or ACT
    #[serde(default)]
    #[csv(required)]
    pub jurisdiction: Option<String>,
}

/// Per-floor areas: a JSON array, a single number, or a ';' separated list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FloorAreas {
    #[schemars(with = "Vec<f64>")]
    List(Vec<Decimal>),
    #[schemars(with = "f64")]
    Single(Decimal),
    Text(String),
}

impl FloorAreas {
    /// `None` for a blank list
    fn to_areas(&self) -> Result<Option<Vec<Decimal>>, PricingError> {
        match self {
            FloorAreas::List(areas) => Ok(Some(areas.clone())),
            FloorAreas::Single(area) => Ok(Some(vec![*area])),
            FloorAreas::Text(s) if s.trim().is_empty() => Ok(None),
            FloorAreas::Text(s) => parse_floor_areas(s).map(Some),
        }
    }
}

impl PropertyRecord {
    /// Validate the record into an engine input and its jurisdiction
    pub fn to_input(&self) -> Result<(PropertyInput, Jurisdiction), PricingError> {
        let land_area = self.land_area.ok_or_else(|| PricingError::missing("land_area"))?;
        let land_value = self.land_value.ok_or_else(|| PricingError::missing("land_value"))?;
        let building_cost = self
            .building_cost
            .ok_or_else(|| PricingError::missing("building_cost"))?;

        let floor_areas = match &self.floor_areas {
            Some(areas) => areas.to_areas()?,
            None => None,
        };
        let floor_plan = FloorPlan::from_parts(self.floors, self.floor_area, floor_areas)?;

        let jurisdiction = match self.jurisdiction.as_deref().map(str::trim) {
            Some(tag) if !tag.is_empty() => Jurisdiction::from_str(tag)?,
            _ => return Err(PricingError::missing("jurisdiction")),
        };

        let input = PropertyInput::new(land_area, floor_plan, land_value, building_cost)?;
        Ok((input, jurisdiction))
    }
}

fn parse_floor_areas(s: &str) -> Result<Vec<Decimal>, PricingError> {
    s.split(';')
        .map(str::trim)
        .map(|area| {
            Decimal::from_str(area).map_err(|e| {
                PricingError::invalid("floor_areas", format!("'{area}' is not a number: {e}"))
            })
        })
        .collect()
}

/// Read property records from CSV
pub fn read_csv<R: Read>(reader: R) -> anyhow::Result<Vec<PropertyRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    rdr.deserialize::<PropertyRecord>()
        .enumerate()
        .map(|(i, record)| record.with_context(|| format!("malformed CSV row {}", i + 1)))
        .collect()
}

/// Read property records from JSON
pub fn read_json<R: Read>(reader: R) -> anyhow::Result<Vec<PropertyRecord>> {
    let batch: PropertyBatch = serde_json::from_reader(reader)?;
    Ok(batch.properties)
}

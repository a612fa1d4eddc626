use crate::infra::parse_material;
use clap::Args;
use ecoscore::assessment::{BatchAssessmentImporter, Methodology};
use ecoscore::error::AppError;
use ecoscore::{AssessmentRequest, MaterialComposition, ShippingMode};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Product name echoed in the result
    #[arg(long)]
    pub(crate) product: String,
    /// Material share as name=share; repeat for each material
    #[arg(long, required = true, value_parser = parse_material)]
    pub(crate) material: Vec<(String, f64)>,
    /// Product weight in kilograms
    #[arg(long)]
    pub(crate) weight_kg: f64,
    /// Origin country code or name
    #[arg(long)]
    pub(crate) origin: String,
    /// Destination country code or name
    #[arg(long)]
    pub(crate) destination: String,
    /// Shipping mode: sea, road, rail, or air
    #[arg(long, default_value = "sea")]
    pub(crate) mode: String,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with product_name, materials, weight_kg, origin_country, destination_country
    #[arg(long)]
    pub(crate) input: PathBuf,
}

impl From<AssessArgs> for AssessmentRequest {
    fn from(args: AssessArgs) -> Self {
        Self {
            product_name: args.product,
            material_composition: args.material.into_iter().collect::<MaterialComposition>(),
            weight_kg: args.weight_kg,
            origin_country: args.origin,
            destination_country: args.destination,
            shipping_mode: ShippingMode::from_label(&args.mode),
        }
    }
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let request = AssessmentRequest::from(args);
    request.validate()?;
    let result = request.assess();
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let requests = BatchAssessmentImporter::from_path(&args.input)?;
    for request in &requests {
        println!("{}", serde_json::to_string(&request.assess())?);
    }
    Ok(())
}

pub(crate) fn run_methodology() -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(&Methodology::current())?);
    Ok(())
}

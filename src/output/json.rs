use crate::model::DetectionResult;
use anyhow::Result;

pub fn print_json(result: &DetectionResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{}", json);
    Ok(())
}

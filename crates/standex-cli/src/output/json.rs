use standex_core::error::StandexError;
use standex_core::model::StandardRecord;

pub fn print(records: &[StandardRecord]) -> Result<(), StandexError> {
    let json = serde_json::to_string_pretty(records)?;
    println!("{json}");
    Ok(())
}

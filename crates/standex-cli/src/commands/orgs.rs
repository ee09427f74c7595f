use standex_core::error::StandexError;
use standex_core::orgs;

pub fn list() -> Result<(), StandexError> {
    println!("Known standards developers:\n");
    for org in orgs::KNOWN_ORGS.iter() {
        println!("  {:<8} {}", org.operating_name, org.legal_name);
        if !org.website.is_empty() {
            println!("           {}", org.website);
        }
        println!();
    }
    Ok(())
}

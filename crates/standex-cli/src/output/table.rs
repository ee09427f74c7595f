use standex_core::model::StandardRecord;

pub fn print(records: &[StandardRecord]) {
    if records.is_empty() {
        println!("No records found.");
        return;
    }

    let width = records
        .iter()
        .map(|r| r.document_name.len())
        .max()
        .unwrap_or(12);

    for r in records {
        let marker = if r.is_american_standard { " [ANS]" } else { "" };
        println!("  {:<width$}  {}{}", r.document_name, r.standard_title, marker);
        if !r.publishing_date.is_empty() {
            println!("  {:<width$}  final action: {}", "", r.publishing_date);
        }
        if !r.operating_name.is_empty() {
            println!("  {:<width$}  {} ({})", "", r.operating_name, r.legal_name);
        }
        println!();
    }
    println!("{} record(s)", records.len());
}

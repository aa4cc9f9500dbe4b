//! Display formatting for search results and session state.

use acrodb_store::{AcronymRecord, Result, Session};

/// Prints matched records followed by the final match count.
pub fn print_search_results(matches: &[AcronymRecord]) {
    for record in matches {
        println!("{record}\n");
    }
    println!(
        "Database search found '{}' matching records",
        thousands(matches.len() as i64)
    );
}

/// Prints the database summary block: location, size, last-modified
/// time, record count, the newest acronym, and the five most recent
/// entries.
pub fn print_db_summary(session: &Session) -> Result<()> {
    let location = session.location();
    println!("Database Summary:");
    println!(" - Location: {}", location.path().display());
    println!(" - Size: {} bytes", thousands(location.size() as i64));
    println!(
        " - Last modified: {}",
        location
            .modified_display()
            .unwrap_or_else(|| "(unknown)".to_string())
    );
    println!(
        " - Total record count: {}",
        thousands(session.total_records())
    );
    match session.most_recent()? {
        Some(record) => println!(" - Newest acronym: {}", record.acronym),
        None => println!(" - Newest acronym: (none)"),
    }

    let latest = session.latest(5)?;
    if !latest.is_empty() {
        println!(" - Latest entries:");
        for record in latest {
            println!("     [{}] {} : {}", record.id, record.acronym, record.expansion);
        }
    }
    Ok(())
}

/// Groups digits in threes: 1234567 becomes "1,234,567".
pub fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 { format!("-{grouped}") } else { grouped }
}

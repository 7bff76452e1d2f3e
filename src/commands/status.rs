use crate::core::{
    client::P4Client,
    colors::format_file_line,
    error::Result,
    file_action::FileAction,
    output::{print_info, print_json, print_section_header},
    record::{FieldValue, StatusRecord},
};
use colored::*;

pub async fn execute_stat(client: &P4Client, path: &str, json: bool) -> Result<()> {
    let record = client.stat(path).await?;

    if json {
        return print_json(&record);
    }

    print_section_header(record.text("depotFile").unwrap_or(path));
    print_record_fields(&record);
    Ok(())
}

pub async fn execute_have(client: &P4Client, path: &str, json: bool) -> Result<()> {
    let revision = client.have(path).await?;

    if json {
        return print_json(&serde_json::json!({ "path": path, "haveRev": revision }));
    }

    println!("{}#{}", path.white(), revision.to_string().green());
    Ok(())
}

pub async fn execute_stat_dir(
    client: &mut P4Client,
    dir: Option<&str>,
    recursive: bool,
    json: bool,
) -> Result<()> {
    let records = if recursive {
        client.recursive_stat_dir(dir).await?
    } else {
        client.stat_dir(dir).await?
    };

    if json {
        return print_json(&records);
    }

    if records.is_empty() {
        print_info(&format!("No files in {}", client.pwd().display()));
        return Ok(());
    }

    print_section_header(&client.pwd().display().to_string());
    print_file_list(&records);
    Ok(())
}

/// Numbered listing in report order
pub fn print_file_list(records: &[StatusRecord]) {
    for (i, record) in records.iter().enumerate() {
        let action = FileAction::from_record(record).unwrap_or(FileAction::Unknown);
        let path = record
            .text("depotFile")
            .or_else(|| record.text("clientFile"))
            .unwrap_or("?");
        let revision = record.text("haveRev").or_else(|| record.text("headRev"));
        println!("{}", format_file_line(i + 1, action, path, revision));
    }
    println!();
}

fn print_record_fields(record: &StatusRecord) {
    let width = record.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    for (name, value) in record.iter() {
        match value {
            FieldValue::Group(entries) => {
                println!("  {}", format!("{name}:").blue());
                for entry in entries {
                    let members: Vec<String> = entry
                        .fields
                        .iter()
                        .map(|(member, value)| format!("{member}={value}"))
                        .collect();
                    println!(
                        "    {} {}",
                        format!("[{}]", entry.index).bright_black(),
                        members.join(" ")
                    );
                }
            }
            FieldValue::Flag(_) => println!("  {}", format!("{name:<width$}").blue()),
            other => println!("  {} {}", format!("{name:<width$}").blue(), other),
        }
    }
    println!();
}

use super::intent::Intent;
use crate::store::Row;

pub const NONE_FOUND: &str = "Nenhum encontrado";
const UNKNOWN: &str = "Desconhecido";

/// Render the rows returned for a question as a user-facing answer
pub fn format_answer(intent: Intent, rows: &[Row]) -> String {
    match intent {
        Intent::Count => format_count(rows),
        Intent::List => format_list(rows),
        Intent::Detail => format_detail(rows),
    }
}

fn format_count(rows: &[Row]) -> String {
    let count = rows
        .first()
        .and_then(|row| row.text("count"))
        .unwrap_or_else(|| "0".to_string());
    format!("Total: {}", count)
}

fn format_list(rows: &[Row]) -> String {
    let values: Vec<String> = rows.iter().filter_map(|row| row.text("value")).collect();

    if values.is_empty() {
        NONE_FOUND.to_string()
    } else {
        values.join(", ")
    }
}

fn format_detail(rows: &[Row]) -> String {
    let empty = Row::new();
    let row = rows.first().unwrap_or(&empty);
    let or_unknown = |key: &str| row.text(key).unwrap_or_else(|| UNKNOWN.to_string());

    let mut lines = vec![
        format!("Nome: {}", or_unknown("name")),
        format!("Gênero: {}", or_unknown("gender")),
        format!("Ano de nascimento: {}", or_unknown("birth_year")),
    ];

    if let Some(species) = row.text("species") {
        lines.push(format!("Espécie: {}", species));
    }
    if let Some(planet) = row.text("planet") {
        lines.push(format!("Planeta natal: {}", planet));
    }

    let ships = row.texts("ships");
    if !ships.is_empty() {
        lines.push(format!("Naves: {}", ships.join(", ")));
    }
    let quotes = row.texts("quotes");
    if !quotes.is_empty() {
        lines.push(format!("Citações: {}", quotes.join(", ")));
    }

    lines.join("\n")
}

//! Output formatters for catalog state.
//!
//! Every method returns a complete chunk of output, newline-terminated where
//! the format calls for it, so chunks can be written back to back.

use clap::ValueEnum;
use comfy_table::{Cell, Table};
use giftstore_core::{Catalog, Error, Gift};

/// Separator printed after each gift in text output.
pub const SEPARATOR: &str = "-----------------";

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain console text
    Text,
    /// ASCII table format
    Table,
    /// JSON lines
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Trait for formatting output.
pub trait Formatter {
    /// Format a section header. `first` is set for the first header of a run.
    fn format_section(&self, title: &str, first: bool) -> String;

    /// Format every gift in current order.
    fn format_catalog(&self, catalog: &Catalog) -> String;

    /// Format the running total.
    fn format_total(&self, total: i64) -> String;

    /// Format the outcome of a name lookup.
    fn format_lookup(&self, name: &str, found: Option<(usize, &Gift)>) -> String;

    /// Format a rejected operation.
    fn format_error(&self, error: &Error) -> String;

    /// Format the difference between the running total and the actual sum.
    fn format_drift(&self, catalog: &Catalog) -> String;
}

/// Create a formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Plain console text with Russian labels.
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format_section(&self, title: &str, first: bool) -> String {
        if first {
            format!("\t{}:\n", title)
        } else {
            format!("\n\t{}:\n", title)
        }
    }

    fn format_catalog(&self, catalog: &Catalog) -> String {
        let mut output = String::new();
        for gift in catalog {
            output.push_str(&gift.to_string());
            output.push_str(SEPARATOR);
            output.push('\n');
        }
        output
    }

    fn format_total(&self, total: i64) -> String {
        format!("\tИТОГО: Общее кол-во подарков: {}\n", total)
    }

    fn format_lookup(&self, name: &str, found: Option<(usize, &Gift)>) -> String {
        match found {
            Some((_, gift)) => format!("\tПодарок найден:\n{}", gift),
            None => format!("Подарок по названию: {} не найден.\n\n", name),
        }
    }

    fn format_error(&self, error: &Error) -> String {
        format!("{}\n", error_message(error))
    }

    fn format_drift(&self, catalog: &Catalog) -> String {
        format!(
            "\tРасхождение итога: {} (итог {}, фактически {})\n",
            catalog.drift(),
            catalog.total_units(),
            catalog.actual_units()
        )
    }
}

/// Table formatter using comfy-table.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_section(&self, title: &str, first: bool) -> String {
        let rule = "=".repeat(title.chars().count());
        if first {
            format!("{}\n{}\n", title, rule)
        } else {
            format!("\n{}\n{}\n", title, rule)
        }
    }

    fn format_catalog(&self, catalog: &Catalog) -> String {
        let table = gift_table(catalog.iter().enumerate());
        format!("{}\n{} подарк(ов)\n", table, catalog.len())
    }

    fn format_total(&self, total: i64) -> String {
        format!("ИТОГО: Общее кол-во подарков: {}\n", total)
    }

    fn format_lookup(&self, name: &str, found: Option<(usize, &Gift)>) -> String {
        match found {
            Some(entry) => format!("{}\n", gift_table(std::iter::once(entry))),
            None => format!("Подарок по названию: {} не найден.\n", name),
        }
    }

    fn format_error(&self, error: &Error) -> String {
        format!("{}\n", error_message(error))
    }

    fn format_drift(&self, catalog: &Catalog) -> String {
        let mut table = Table::new();
        table.set_header(vec!["Итог", "Фактически", "Расхождение"]);
        table.add_row(vec![
            catalog.total_units().to_string(),
            catalog.actual_units().to_string(),
            catalog.drift().to_string(),
        ]);
        format!("{}\n", table)
    }
}

/// JSON formatter. Emits one JSON object per line.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_section(&self, title: &str, _first: bool) -> String {
        json_line(serde_json::json!({ "section": title }))
    }

    fn format_catalog(&self, catalog: &Catalog) -> String {
        json_line(serde_json::json!({ "gifts": catalog.gifts() }))
    }

    fn format_total(&self, total: i64) -> String {
        json_line(serde_json::json!({ "total": total }))
    }

    fn format_lookup(&self, name: &str, found: Option<(usize, &Gift)>) -> String {
        let value = match found {
            Some((position, gift)) => serde_json::json!({
                "query": name,
                "position": position,
                "gift": gift,
            }),
            None => serde_json::json!({
                "query": name,
                "gift": null,
            }),
        };
        json_line(value)
    }

    fn format_error(&self, error: &Error) -> String {
        json_line(serde_json::json!({ "error": error.to_string() }))
    }

    fn format_drift(&self, catalog: &Catalog) -> String {
        json_line(serde_json::json!({
            "total": catalog.total_units(),
            "actual": catalog.actual_units(),
            "drift": catalog.drift(),
        }))
    }
}

/// Console message for a rejected operation.
fn error_message(error: &Error) -> String {
    match error {
        Error::InvalidPosition { .. } => "Ошибка: некорректный индекс!".to_string(),
        Error::QuantityUnderflow { name, .. } => format!(
            "Ошибка: количество подарка {} не может стать отрицательным!",
            name
        ),
    }
}

/// Build a table of gifts with their positions.
fn gift_table<'a>(gifts: impl Iterator<Item = (usize, &'a Gift)>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "#",
        "Вид",
        "Название",
        "Количество",
        "Цена",
        "Описание",
    ]);

    for (position, gift) in gifts {
        table.add_row(vec![
            Cell::new(position),
            Cell::new(gift.kind().label()),
            Cell::new(gift.name()),
            Cell::new(gift.quantity()),
            Cell::new(format!("{:.2}", gift.item().price)),
            Cell::new(gift.extra()),
        ]);
    }

    table
}

fn json_line(value: serde_json::Value) -> String {
    format!("{}\n", value)
}

//! Bordered table rendering for `shops display`

use crate::domain::ShopRecord;

const NO_WIDTH: usize = 4;
const NAME_WIDTH: usize = 30;
const PRODUCT_WIDTH: usize = 20;
const PRICE_WIDTH: usize = 8;

fn separator() -> String {
    format!(
        "+-{}-+-{}-+-{}-+-{}-+",
        "-".repeat(NO_WIDTH),
        "-".repeat(NAME_WIDTH),
        "-".repeat(PRODUCT_WIDTH),
        "-".repeat(PRICE_WIDTH)
    )
}

/// Renders records as a table, one separator line after every row
pub fn render(records: &[ShopRecord]) -> String {
    let line = separator();
    let mut out = Vec::with_capacity(records.len() * 2 + 3);

    out.push(line.clone());
    out.push(format!(
        "| {:^nw$} | {:^mw$} | {:^pw$} | {:^cw$} |",
        "No",
        "Name",
        "Product",
        "Price",
        nw = NO_WIDTH,
        mw = NAME_WIDTH,
        pw = PRODUCT_WIDTH,
        cw = PRICE_WIDTH
    ));
    out.push(line.clone());

    for (idx, record) in records.iter().enumerate() {
        out.push(format!(
            "| {:>nw$} | {:<mw$} | {:<pw$} | {:>cw$} |",
            idx + 1,
            record.name,
            record.product,
            record.price.to_string(),
            nw = NO_WIDTH,
            mw = NAME_WIDTH,
            pw = PRODUCT_WIDTH,
            cw = PRICE_WIDTH
        ));
        out.push(line.clone());
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_and_rows() {
        let records = vec![
            ShopRecord::new("Fresh", "Milk", 50),
            ShopRecord::new("Corner", "Bread", 7),
        ];

        let table = render(&records);
        let lines: Vec<&str> = table.lines().collect();

        // header block + two rows, each followed by a separator
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], separator());
        assert!(lines[1].starts_with("|  No  |"));
        assert_eq!(
            lines[3],
            format!("| {:>4} | {:<30} | {:<20} | {:>8} |", 1, "Fresh", "Milk", "50")
        );
        assert!(lines[5].contains("Corner"));
        assert_eq!(lines[6], separator());
    }

    #[test]
    fn all_lines_have_equal_width() {
        let records = vec![ShopRecord::new("Пятёрочка", "Хлеб", 42)];
        let table = render(&records);

        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn rendering_is_deterministic() {
        let records = vec![ShopRecord::new("A", "Bread", 10)];
        assert_eq!(render(&records), render(&records));
    }
}

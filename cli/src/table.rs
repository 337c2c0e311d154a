use job_scraper::StatsTable;

const HEADER: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Render the stats as an ASCII table, the title embedded in the top border when it fits.
pub fn render_table(table: &StatsTable, title: &str) -> String {
    let rows: Vec<[String; 4]> = std::iter::once(HEADER.map(String::from))
        .chain(table.iter().map(|(language, stats)| {
            [
                language.to_owned(),
                stats.found.to_string(),
                stats.processed.to_string(),
                stats.average.to_string(),
            ]
        }))
        .collect();

    let mut widths = [0; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = format!(
        "+{}+",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );
    let line = |row: &[String; 4]| {
        let cells = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!(" {:<width$} ", cell, width = width))
            .collect::<Vec<_>>();
        format!("|{}|", cells.join("|"))
    };

    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(titled_rule(&rule, title));
    lines.push(line(&rows[0]));
    lines.push(rule.clone());
    lines.extend(rows[1..].iter().map(line));
    lines.push(rule);
    lines.join("\n")
}

fn titled_rule(rule: &str, title: &str) -> String {
    let title_len = title.chars().count();
    if title_len + 2 > rule.chars().count() {
        return rule.to_owned();
    }
    format!("+{}{}", title, &rule[1 + title_len..])
}

pub fn print_table(table: &StatsTable, title: &str) {
    println!("{}", render_table(table, title));
}

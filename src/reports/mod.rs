use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use krscore::report::ReportSummary;
use krscore::scorer::{Dimension, Grade, KrScoreResult, ScoreDetails};
use strum::IntoEnumIterator;

fn grade_color(grade: Grade) -> Color {
    match grade {
        Grade::APlus | Grade::A | Grade::AMinus => Color::Green,
        Grade::BPlus | Grade::B | Grade::BMinus => Color::Cyan,
        Grade::CPlus | Grade::C | Grade::CMinus => Color::Yellow,
        Grade::D | Grade::F => Color::Red,
    }
}

fn tier_color(score: u8) -> Color {
    if score >= 75 {
        Color::Green
    } else if score >= 50 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map(|x| format!("{:.3}", x)).unwrap_or_else(|| "-".to_string())
}

pub fn print_score_card(key_result: &str, details: &ScoreDetails, show_feedback: bool) {
    let r = &details.result;
    println!("\nKey Result: {}", key_result);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Dimension").add_attribute(Attribute::Bold),
        Cell::new("Weight"),
        Cell::new("Score"),
        Cell::new("Weighted"),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for dim in Dimension::iter() {
        let score = r.breakdown.get(dim);
        table.add_row(vec![
            Cell::new(dim.to_string()).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", dim.weight())),
            Cell::new(score).fg(tier_color(score)),
            Cell::new(format!("{:.2}", score as f64 * dim.weight())),
        ]);
    }

    table.add_row(vec![
        Cell::new("Overall").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(r.overall).add_attribute(Attribute::Bold),
        Cell::new(r.grade.to_string())
            .fg(grade_color(r.grade))
            .add_attribute(Attribute::Bold),
    ]);
    println!("{}", table);

    let mut signals = Table::new();
    signals.load_preset(ASCII_FULL);
    signals.add_row(vec![
        Cell::new("Metrics"),
        Cell::new(if details.metrics.is_empty() {
            "-".to_string()
        } else {
            details.metrics.join(", ")
        }),
    ]);
    signals.add_row(vec![
        Cell::new("Units / Cadence / Source"),
        Cell::new(format!(
            "{} / {} / {}",
            details.has_units, details.has_cadence, details.has_source
        )),
    ]);
    signals.add_row(vec![
        Cell::new("Baseline -> Target (ratio)"),
        Cell::new(format!(
            "{} -> {} ({})",
            fmt_opt(details.baseline),
            fmt_opt(details.target),
            fmt_opt(details.ratio)
        )),
    ]);
    signals.add_row(vec![
        Cell::new("Objective overlap"),
        Cell::new(fmt_opt(details.overlap)),
    ]);
    println!("{}", signals);

    if show_feedback {
        print_messages("Feedback", &r.feedback);
        print_messages("Improvements", &r.improvements);
    }
}

fn print_messages(title: &str, messages: &[String]) {
    if messages.is_empty() {
        return;
    }
    println!("\n{}:", title);
    for m in messages {
        println!("  • {}", m);
    }
}

pub fn print_batch_report(rows: &[(String, KrScoreResult)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Key Result").add_attribute(Attribute::Bold)];
    header.extend(Dimension::iter().map(|d| Cell::new(d.to_string())));
    header.push(Cell::new("Overall").fg(Color::Cyan));
    header.push(Cell::new("Grade").add_attribute(Attribute::Bold));
    table.add_row(header);

    for i in 1..=7 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (kr, r) in rows {
        let mut row = vec![Cell::new(kr)];
        row.extend(Dimension::iter().map(|d| {
            let s = r.breakdown.get(d);
            Cell::new(s).fg(tier_color(s))
        }));
        row.push(Cell::new(r.overall).fg(Color::Cyan));
        row.push(
            Cell::new(r.grade.to_string())
                .fg(grade_color(r.grade))
                .add_attribute(Attribute::Bold),
        );
        table.add_row(row);
    }
    println!("\n{}", table);
}

pub fn print_suite_report(summary: &ReportSummary) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Suite").add_attribute(Attribute::Bold),
        Cell::new("Weight"),
        Cell::new("Records"),
        Cell::new("Pass %"),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for s in &summary.suites {
        table.add_row(vec![
            Cell::new(&s.name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", s.weight)),
            Cell::new(s.records),
            Cell::new(format!("{:.1}", s.percentage)),
        ]);
    }
    for name in &summary.skipped {
        table.add_row(vec![
            Cell::new(name).fg(Color::DarkGrey),
            Cell::new("-"),
            Cell::new("-"),
            Cell::new("missing").fg(Color::DarkGrey),
        ]);
    }

    let verdict = if summary.passed {
        Cell::new(format!("{:.1} ({}) PASS", summary.overall, summary.grade)).fg(Color::Green)
    } else {
        Cell::new(format!("{:.1} ({}) FAIL", summary.overall, summary.grade)).fg(Color::Red)
    };
    table.add_row(vec![
        Cell::new("Overall").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        verdict.add_attribute(Attribute::Bold),
    ]);
    println!("\n{}", table);
}

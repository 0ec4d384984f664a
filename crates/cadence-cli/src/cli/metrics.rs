use crate::cli::context::Context;
use crate::cli::output::emit;
use anyhow::Result;
use cadence_core::Heatmap;

pub(crate) fn streak(ctx: &Context) -> Result<()> {
    let streak = ctx.store.streak();
    emit(ctx.json, &serde_json::json!({ "streak": streak }), || match streak {
        0 => println!("No active streak"),
        1 => println!("1 day streak"),
        days => println!("{days} day streak"),
    })
}

pub(crate) fn badges(ctx: &Context) -> Result<()> {
    let badges = ctx.store.badges();
    emit(ctx.json, &badges, || {
        for badge in &badges {
            let mark = if badge.achieved { "x" } else { " " };
            println!(
                "[{mark}] {:<14} {:>3}/{:<3}  {}",
                badge.name,
                badge.display_progress(),
                badge.total,
                badge.description
            );
        }
    })
}

const SHADES: [char; 4] = ['.', '░', '▒', '█'];

fn render(map: &Heatmap) -> String {
    let columns = map.columns();
    let mut header = vec![' '; columns + 4];
    let mut free_from = 0;
    for label in &map.months {
        if label.column < free_from {
            continue;
        }
        free_from = label.column + label.name.chars().count() + 1;
        for (offset, c) in label.name.chars().enumerate() {
            if let Some(slot) = header.get_mut(label.column + offset) {
                *slot = c;
            }
        }
    }

    let mut out: String = header.into_iter().collect();
    out = out.trim_end().to_owned();
    out.push('\n');
    for weekday in 0..7 {
        let row: String = (0..columns)
            .map(|column| {
                map.cells
                    .get(column * 7 + weekday)
                    .map_or(' ', |cell| SHADES[usize::from(cell.level.min(3))])
            })
            .collect();
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

pub(crate) fn heatmap(ctx: &Context) -> Result<()> {
    let map = ctx.store.heatmap();
    emit(ctx.json, &map, || print!("{}", render(&map)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::{HeatmapCell, MonthLabel};
    use chrono::NaiveDate;

    #[test]
    fn test_render_lays_out_weeks_as_columns() {
        let start = NaiveDate::from_ymd_opt(2024, 4, 29).unwrap();
        let cells = start
            .iter_days()
            .take(10)
            .enumerate()
            .map(|(index, date)| HeatmapCell {
                date,
                count: u32::from(index == 8),
                level: u8::from(index == 8),
            })
            .collect();
        let map = Heatmap {
            cells,
            months: vec![
                MonthLabel {
                    name: "Apr".to_owned(),
                    column: 0,
                },
                MonthLabel {
                    name: "May".to_owned(),
                    column: 1,
                },
            ],
        };

        let lines: Vec<_> = render(&map).lines().map(str::to_owned).collect();
        assert_eq!(lines[0], "Apr");
        assert_eq!(lines[1], "..");
        assert_eq!(lines[2], ".░");
        assert_eq!(lines[4], ".");
        assert_eq!(lines.len(), 8);
    }
}

//! Plain-text Gantt charts.
//!
//! Renders a schedule as a single bar row with a time axis underneath:
//!
//! ```text
//! | P1  | P2 |----|   P3   |
//! 0     5    8    12       20
//! ```
//!
//! Idle gaps are drawn with `GanttOptions::idle_char`.

use crate::models::Schedule;

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GanttOptions {
    /// Characters per tick. Segments widen further to fit their label.
    pub scale: usize,
    /// Fill character for idle gaps.
    pub idle_char: char,
}

impl Default for GanttOptions {
    fn default() -> Self {
        Self {
            scale: 1,
            idle_char: '-',
        }
    }
}

impl GanttOptions {
    /// Sets characters per tick.
    pub fn with_scale(mut self, scale: usize) -> Self {
        self.scale = scale.max(1);
        self
    }
}

struct Segment<'a> {
    label: Option<&'a str>,
    end_time: i64,
    ticks: i64,
}

/// Renders with default options.
pub fn render(schedule: &Schedule) -> String {
    render_with(schedule, &GanttOptions::default())
}

/// Renders a two-line chart. An empty schedule renders as an empty string.
pub fn render_with(schedule: &Schedule, options: &GanttOptions) -> String {
    let Some(start) = schedule.start_time() else {
        return String::new();
    };

    let mut segments = Vec::with_capacity(schedule.entry_count() * 2);
    let mut cursor = start;
    for entry in &schedule.entries {
        if entry.start_time > cursor {
            segments.push(Segment {
                label: None,
                end_time: entry.start_time,
                ticks: entry.start_time - cursor,
            });
        }
        segments.push(Segment {
            label: Some(entry.process_id.as_str()),
            end_time: entry.end_time,
            ticks: entry.duration(),
        });
        cursor = entry.end_time;
    }

    let scale = options.scale.max(1);
    let mut bar = String::from("|");
    let mut axis = start.to_string();
    let mut bar_col = 0;
    let mut axis_col = axis.len();

    for seg in &segments {
        let ticks = usize::try_from(seg.ticks).unwrap_or(0);
        let width = match seg.label {
            Some(label) => (ticks * scale).max(label.chars().count() + 2),
            None => (ticks * scale).max(1),
        };

        match seg.label {
            Some(label) => bar.push_str(&format!("{label:^width$}|")),
            None => {
                bar.extend(std::iter::repeat(options.idle_char).take(width));
                bar.push('|');
            }
        }
        bar_col += width + 1;

        let mark = seg.end_time.to_string();
        let pad = if axis_col < bar_col { bar_col - axis_col } else { 1 };
        axis.extend(std::iter::repeat(' ').take(pad));
        axis.push_str(&mark);
        axis_col += pad + mark.len();
    }

    format!("{bar}\n{axis}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleEntry;

    fn schedule(entries: &[(&str, i64, i64)]) -> Schedule {
        let mut s = Schedule::new();
        for (i, &(id, start, end)) in entries.iter().enumerate() {
            s.add_entry(ScheduleEntry::new(id, i, start, end));
        }
        s
    }

    #[test]
    fn test_render_exact_layout() {
        let s = schedule(&[("A", 0, 2), ("B", 2, 3)]);
        let chart = render_with(&s, &GanttOptions::default().with_scale(2));
        assert_eq!(chart, "| A  | B |\n0    2   3");
    }

    #[test]
    fn test_render_idle_gap() {
        let s = schedule(&[("A", 0, 1), ("B", 4, 5)]);
        let chart = render(&s);
        let bar = chart.lines().next().unwrap();
        assert!(bar.contains("|---|"));
        assert!(chart.lines().nth(1).unwrap().contains('4'));
    }

    #[test]
    fn test_render_axis_marks_every_boundary() {
        let s = schedule(&[("P1", 0, 5), ("P2", 5, 8), ("P3", 8, 16)]);
        let chart = render(&s);
        let axis: Vec<&str> = chart.lines().nth(1).unwrap().split_whitespace().collect();
        assert_eq!(axis, vec!["0", "5", "8", "16"]);
    }

    #[test]
    fn test_render_starts_at_first_entry() {
        let s = schedule(&[("late", 10, 12)]);
        let chart = render(&s);
        assert!(chart.lines().nth(1).unwrap().starts_with("10"));
    }

    #[test]
    fn test_render_wide_label_centered() {
        let s = schedule(&[("long", 0, 1), ("x", 1, 9)]);
        let chart = render(&s);
        assert_eq!(chart.lines().next().unwrap(), "| long |   x    |");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&Schedule::new()), "");
    }
}

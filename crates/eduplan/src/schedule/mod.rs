//! Schedule-layout engine.
//!
//! Places selected courses on a fixed 15-minute grid (08:00–20:00, five
//! weekday columns) and flags mutually overlapping blocks so the dashboard
//! can offset them. Overlaps are displayed for human judgment, never
//! resolved automatically.

mod parser;
mod types;

pub use parser::{parse_class_time, parse_clock, tokenize_day_run, ClassTime, ClassTimeError, Clock};
pub use types::{
    DayToken, TimeBlock, Weekday, GRID_END_MIN, GRID_START_MIN, SLOTS_PER_DAY, SLOT_MINUTES,
};

use crate::catalog::Course;
use tracing::debug;

/// Number of cosmetic styles available to [`style_for`].
pub const PALETTE_SIZE: usize = 8;

/// Computes the time blocks for one weekday column.
///
/// Only the first `class_times` entry of each course is considered;
/// additional meetings of multi-meeting courses are ignored. Courses whose
/// time string fails every parse step contribute zero blocks. Output order
/// follows the order of `selected`; callers wanting a stable visual order
/// should sort with [`crate::catalog::sort_courses`] first.
pub fn layout_day<'a>(selected: &'a [Course], day: Weekday) -> Vec<TimeBlock<'a>> {
    let mut blocks = Vec::new();

    for course in selected {
        let Some(raw) = course.class_times.first() else {
            continue;
        };

        let parsed = match parser::parse_class_time(raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!(class_id = course.class_id, error = %e, "Skipping unparsable class time");
                continue;
            }
        };

        if !parsed.meets_on(day) {
            continue;
        }

        // Explicit fallback: malformed clock values degrade to 00:00.
        let start_min = parsed.start.minutes_or_zero();
        let end_min = parsed.end.minutes_or_zero();

        // Meetings outside the 08:00-20:00 window are not rendered; the
        // grid does not scroll or clip.
        if start_min < GRID_START_MIN || end_min > GRID_END_MIN {
            continue;
        }

        blocks.push(TimeBlock {
            course,
            start_index: (start_min - GRID_START_MIN) / SLOT_MINUTES,
            end_index: (end_min - GRID_START_MIN) / SLOT_MINUTES,
            has_overlap: false,
            overlap_index: None,
        });
    }

    mark_overlaps(&mut blocks);
    blocks
}

/// Computes blocks for all five weekday columns.
pub fn layout_week(selected: &[Course]) -> Vec<(Weekday, Vec<TimeBlock<'_>>)> {
    Weekday::ALL
        .into_iter()
        .map(|day| (day, layout_day(selected, day)))
        .collect()
}

/// All-pairs overlap marking. Two blocks overlap when their index ranges
/// are not disjoint; both members of a pair are flagged and each stores its
/// own position in the day's list as the offset-rendering hint. n is small
/// (bounded by what a student selects), so O(n²) is fine.
fn mark_overlaps(blocks: &mut [TimeBlock<'_>]) {
    for i in 0..blocks.len() {
        for j in 0..blocks.len() {
            if i == j {
                continue;
            }
            let disjoint = blocks[i].end_index <= blocks[j].start_index
                || blocks[i].start_index >= blocks[j].end_index;
            if !disjoint {
                blocks[i].has_overlap = true;
                blocks[i].overlap_index = Some(i);
                blocks[j].has_overlap = true;
                blocks[j].overlap_index = Some(j);
            }
        }
    }
}

/// Deterministic cosmetic style assignment. Distinct courses may share a
/// style; stability across renders is the only contract.
pub fn style_for(course: &Course) -> usize {
    course.class_id.rem_euclid(PALETTE_SIZE as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(class_id: i64, class_times: &[&str]) -> Course {
        Course {
            class_id,
            course_code: format!("CS {class_id}"),
            title: format!("CS {class_id}"),
            description: String::new(),
            credits: "4".to_string(),
            enrolled: 0,
            max_enroll: 0,
            reserved: 0,
            waitlisted: 0,
            class_times: class_times.iter().map(|s| s.to_string()).collect(),
            url: String::new(),
        }
    }

    #[test]
    fn test_valid_range_yields_one_block_with_exact_span() {
        let courses = [course(1, &["MoWe 10:00-11:30"])];
        let blocks = layout_day(&courses, Weekday::Monday);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].start_index, 8);
        assert_eq!(blocks[0].end_index, 14);
        assert_eq!(blocks[0].end_index - blocks[0].start_index, 90 / SLOT_MINUTES);
        assert!(!blocks[0].has_overlap);
    }

    #[test]
    fn test_course_skipped_on_days_it_does_not_meet() {
        let courses = [course(1, &["MoWe 10:00-11:30"])];
        assert!(layout_day(&courses, Weekday::Tuesday).is_empty());
        assert!(layout_day(&courses, Weekday::Friday).is_empty());
    }

    #[test]
    fn test_unmapped_day_code_contributes_zero_blocks_everywhere() {
        let courses = [course(1, &["Sa 09:00-10:00"])];
        for day in Weekday::ALL {
            assert!(layout_day(&courses, day).is_empty());
        }
    }

    #[test]
    fn test_out_of_window_meetings_are_invisible() {
        let early = [course(1, &["Mo 07:00-09:00"])];
        let late = [course(2, &["Mo 19:00-20:30"])];
        assert!(layout_day(&early, Weekday::Monday).is_empty());
        assert!(layout_day(&late, Weekday::Monday).is_empty());
    }

    #[test]
    fn test_window_edges_are_inclusive() {
        let courses = [course(1, &["Mo 08:00-20:00"])];
        let blocks = layout_day(&courses, Weekday::Monday);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].start_index, 0);
        assert_eq!(blocks[0].end_index, SLOTS_PER_DAY);
    }

    #[test]
    fn test_malformed_time_contributes_zero_blocks() {
        let courses = [
            course(1, &["Mo"]),
            course(2, &[""]),
            course(3, &["Mo xx:00-11:00"]),
        ];
        assert!(layout_day(&courses, Weekday::Monday).is_empty());
    }

    #[test]
    fn test_missing_class_times_contributes_zero_blocks() {
        let courses = [course(1, &[])];
        assert!(layout_day(&courses, Weekday::Monday).is_empty());
    }

    #[test]
    fn test_only_first_meeting_entry_is_used() {
        let courses = [course(1, &["Mo 10:00-11:00", "Fr 14:00-15:00"])];
        assert_eq!(layout_day(&courses, Weekday::Monday).len(), 1);
        assert!(layout_day(&courses, Weekday::Friday).is_empty());
    }

    #[test]
    fn test_overlap_flagged_on_both_members() {
        let courses = [
            course(1, &["MoWe 10:00-11:00"]),
            course(2, &["MoWe 10:30-11:30"]),
        ];
        for day in [Weekday::Monday, Weekday::Wednesday] {
            let blocks = layout_day(&courses, day);
            assert_eq!(blocks.len(), 2);
            assert!(blocks[0].has_overlap);
            assert!(blocks[1].has_overlap);
            assert_eq!(blocks[0].overlap_index, Some(0));
            assert_eq!(blocks[1].overlap_index, Some(1));
        }
    }

    #[test]
    fn test_adjacent_blocks_do_not_overlap() {
        let courses = [
            course(1, &["Mo 10:00-11:00"]),
            course(2, &["Mo 11:00-12:00"]),
        ];
        let blocks = layout_day(&courses, Weekday::Monday);
        assert_eq!(blocks.len(), 2);
        assert!(!blocks[0].has_overlap);
        assert!(!blocks[1].has_overlap);
        assert_eq!(blocks[0].overlap_index, None);
    }

    #[test]
    fn test_single_block_never_overlaps_itself() {
        let courses = [course(1, &["Mo 10:00-11:00"])];
        let blocks = layout_day(&courses, Weekday::Monday);
        assert!(!blocks[0].has_overlap);
    }

    #[test]
    fn test_output_order_follows_input_order() {
        let courses = [
            course(9, &["Mo 14:00-15:00"]),
            course(3, &["Mo 09:00-10:00"]),
        ];
        let blocks = layout_day(&courses, Weekday::Monday);
        assert_eq!(blocks[0].course.class_id, 9);
        assert_eq!(blocks[1].course.class_id, 3);
    }

    #[test]
    fn test_lane_alternates_for_overlapping_blocks() {
        let courses = [
            course(1, &["Mo 10:00-11:00"]),
            course(2, &["Mo 10:00-11:00"]),
        ];
        let blocks = layout_day(&courses, Weekday::Monday);
        assert_eq!(blocks[0].lane(), 0);
        assert_eq!(blocks[1].lane(), 1);
    }

    #[test]
    fn test_style_for_is_deterministic_and_in_palette() {
        let a = course(31718, &[]);
        assert_eq!(style_for(&a), style_for(&a));
        assert!(style_for(&a) < PALETTE_SIZE);
        assert_eq!(style_for(&a), (31718 % 8) as usize);
    }

    #[test]
    fn test_layout_week_covers_all_days() {
        let courses = [course(1, &["MoWeF 13:00-14:00"])];
        let week = layout_week(&courses);
        assert_eq!(week.len(), 5);
        let monday = &week[0];
        assert_eq!(monday.0, Weekday::Monday);
        assert_eq!(monday.1.len(), 1);
        assert_eq!(week[4].1.len(), 1); // Friday
        assert!(week[1].1.is_empty()); // Tuesday
    }
}

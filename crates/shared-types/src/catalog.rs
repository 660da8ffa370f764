//! Mock datasets for the presentational screens.
//!
//! Everything here is literal and rebuilt on every call, so each session
//! starts from the same data and nothing outlives a reload.

use serde::{Deserialize, Serialize};

use crate::router::DashboardKind;
use crate::screen::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Active,
    Pending,
    Overdue,
    Closed,
}

impl RecordStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Pending => "Pending",
            RecordStatus::Overdue => "Overdue",
            RecordStatus::Closed => "Closed",
        }
    }
}

/// One row in a screen's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub title: String,
    pub detail: String,
    pub status: RecordStatus,
}

impl Record {
    fn new(id: u32, title: &str, detail: &str, status: RecordStatus) -> Self {
        Self {
            id,
            title: title.to_string(),
            detail: detail.to_string(),
            status,
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.detail.to_lowercase().contains(needle)
            || self.status.label().to_lowercase().contains(needle)
    }
}

/// Records whose title, detail or status contains `query`, ignoring case.
/// A blank query keeps everything.
pub fn filter_records(records: &[Record], query: &str) -> Vec<Record> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }
    records.iter().filter(|r| r.matches(&needle)).cloned().collect()
}

/// Next free id after the records currently shown.
pub fn next_id(records: &[Record]) -> u32 {
    records.iter().map(|r| r.id).max().unwrap_or(0) + 1
}

/// Seed rows for a screen's list view. Screens without a list return none.
pub fn records_for(screen: Screen) -> Vec<Record> {
    use RecordStatus::*;

    let rows: &[(&str, &str, RecordStatus)] = match screen {
        Screen::Institutions => &[
            ("Greenwood International School", "CBSE · 1,240 students", Active),
            ("St. Mary's Convent", "ICSE · 860 students", Active),
            ("Riverside Public School", "State board · 2,015 students", Pending),
            ("Hillcrest Academy", "IB · 410 students", Closed),
        ],
        Screen::MasterData => &[
            ("Boards", "CBSE, ICSE, IB, State", Active),
            ("Grades", "Nursery to Grade 12", Active),
            ("Subjects", "48 subjects across streams", Active),
            ("Academic years", "2025-26 draft", Pending),
        ],
        Screen::Subscriptions => &[
            ("Greenwood International School", "Enterprise · renews 01 Apr", Active),
            ("Riverside Public School", "Standard · invoice unpaid", Overdue),
            ("Hillcrest Academy", "Starter · cancelled", Closed),
        ],
        Screen::PlatformAnalytics => &[
            ("Daily active users", "18,420 this week", Active),
            ("New institutions", "3 this month", Active),
            ("Support tickets", "12 awaiting reply", Pending),
        ],
        Screen::Students => &[
            ("Aarav Mehta", "Grade 8-A · Roll 14", Active),
            ("Sofia Fernandes", "Grade 8-A · Roll 22", Active),
            ("Kabir Rao", "Grade 9-B · fee due", Overdue),
            ("Zara Khan", "Grade 6-C · transfer in", Pending),
            ("Liam D'Souza", "Grade 10-A · Roll 3", Active),
        ],
        Screen::Teachers => &[
            ("Priya Shah", "Mathematics · class teacher 8-A", Active),
            ("Rahul Verma", "Physics · 18 periods", Active),
            ("Ananya Iyer", "English · on leave", Pending),
        ],
        Screen::Classes => &[
            ("Grade 8-A", "38 students · Priya Shah", Active),
            ("Grade 9-B", "41 students · Rahul Verma", Active),
            ("Grade 6-C", "35 students · vacancy", Pending),
        ],
        Screen::Admissions => &[
            ("Ishaan Gupta", "Grade 1 · interview Monday", Pending),
            ("Meera Nair", "Grade 5 · documents verified", Active),
            ("Arjun Bose", "Grade 11 · withdrawn", Closed),
        ],
        Screen::FeeManagement => &[
            ("Term 2 tuition", "Grade 1-5 · ₹18,000", Active),
            ("Transport", "Route 4 · 12 unpaid", Overdue),
            ("Annual day", "Optional · ₹500", Pending),
        ],
        Screen::Timetable => &[
            ("Grade 8-A", "Mon-Sat · 8 periods", Active),
            ("Grade 9-B", "Clash on Thursday P3", Pending),
        ],
        Screen::Reports => &[
            ("Attendance summary", "October · all sections", Active),
            ("Mid-term results", "Awaiting moderation", Pending),
        ],
        Screen::Gradebook => &[
            ("Unit test 3 · 8-A", "Mathematics · 36/38 entered", Pending),
            ("Mid-term · 8-A", "Mathematics · published", Closed),
            ("Quiz 5 · 9-B", "Mathematics · open", Active),
        ],
        Screen::Attendance => &[
            ("Grade 8-A", "Today · 35 present, 3 absent", Active),
            ("Grade 9-B", "Today · not marked", Overdue),
        ],
        Screen::Assignments => &[
            ("Linear equations worksheet", "8-A · due Friday", Active),
            ("Probability project", "9-B · 12 submissions", Pending),
            ("Fractions recap", "8-A · graded", Closed),
        ],
        Screen::LessonPlans => &[
            ("Quadratic equations", "Week 14 · draft", Pending),
            ("Coordinate geometry", "Week 15 · approved", Active),
        ],
        Screen::MyClasses => &[
            ("Grade 8-A Mathematics", "Mon, Wed, Fri · Room 204", Active),
            ("Grade 9-B Mathematics", "Tue, Thu · Room 118", Active),
        ],
        Screen::MyCourses => &[
            ("Mathematics", "Priya Shah · 72% complete", Active),
            ("Science", "Rahul Verma · 64% complete", Active),
            ("English", "Ananya Iyer · 80% complete", Active),
        ],
        Screen::Grades => &[
            ("Mathematics", "Mid-term · A", Closed),
            ("Science", "Mid-term · B+", Closed),
            ("Social Studies", "Awaiting results", Pending),
        ],
        Screen::Homework => &[
            ("Linear equations worksheet", "Mathematics · due Friday", Active),
            ("Book review", "English · overdue", Overdue),
            ("Lab record", "Science · submitted", Closed),
        ],
        Screen::Schedule => &[
            ("Monday", "Maths, Science, English, PE", Active),
            ("Tuesday", "Hindi, Maths, Art, Library", Active),
        ],
        Screen::Children => &[
            ("Aarav Mehta", "Grade 8-A · attendance 96%", Active),
            ("Anika Mehta", "Grade 3-B · attendance 91%", Active),
        ],
        Screen::FeePayments => &[
            ("Term 2 tuition · Aarav", "₹24,000 · due 15 Nov", Pending),
            ("Transport · Anika", "₹6,500 · overdue", Overdue),
            ("Term 1 tuition · Aarav", "₹24,000 · paid", Closed),
        ],
        Screen::ProgressReports => &[
            ("Aarav · Term 1", "Published by Priya Shah", Closed),
            ("Anika · Term 1", "Awaiting signature", Pending),
        ],
        Screen::Notifications => &[
            ("Parent-teacher meeting", "Saturday 10:00", Active),
            ("Holiday notice", "Diwali break from 30 Oct", Active),
        ],
        Screen::Messages => &[
            ("Priya Shah", "Thanks, I'll share the worksheet.", Active),
            ("Transport desk", "Route 4 is delayed today.", Pending),
        ],
        _ => &[],
    };

    rows.iter()
        .zip(1u32..)
        .map(|((title, detail, status), id)| Record::new(id, title, detail, *status))
        .collect()
}

/// One stat tile on a dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: &'static str,
    pub hint: &'static str,
}

const fn tile(label: &'static str, value: &'static str, hint: &'static str) -> StatTile {
    StatTile { label, value, hint }
}

/// Headline numbers for a dashboard variant.
pub fn dashboard_stats(kind: DashboardKind) -> Vec<StatTile> {
    match kind {
        DashboardKind::SuperAdmin => vec![
            tile("Institutions", "42", "3 onboarding"),
            tile("Active users", "18,420", "+6% this week"),
            tile("Renewals due", "5", "next 30 days"),
            tile("Open tickets", "12", "2 urgent"),
        ],
        DashboardKind::InstitutionAdmin => vec![
            tile("Students", "1,240", "32 new this term"),
            tile("Teachers", "86", "2 on leave"),
            tile("Attendance", "94%", "today"),
            tile("Fees collected", "78%", "term 2"),
        ],
        DashboardKind::Teacher => vec![
            tile("Classes today", "4", "next at 10:40"),
            tile("To grade", "23", "2 assignments"),
            tile("Attendance", "1 pending", "Grade 9-B"),
        ],
        DashboardKind::StudentDesktop | DashboardKind::StudentMobile => vec![
            tile("Homework due", "3", "1 overdue"),
            tile("Attendance", "96%", "this term"),
            tile("Average grade", "A-", "mid-term"),
        ],
        DashboardKind::ParentDesktop | DashboardKind::ParentMobile => vec![
            tile("Children", "2", "enrolled"),
            tile("Fees due", "₹30,500", "1 overdue"),
            tile("Next meeting", "Sat 10:00", "PTM"),
        ],
    }
}

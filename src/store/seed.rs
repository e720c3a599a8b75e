//! Default records for empty collections

use chrono::NaiveDate;

use crate::types::{Member, MemberStatus, Plan, Trainer};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub(super) fn members() -> Vec<Member> {
    vec![
        Member {
            id: "1".into(),
            name: "Alex Johnson".into(),
            email: "alex@example.com".into(),
            phone: "555-0101".into(),
            status: MemberStatus::Active,
            renewal_date: date(2025, 12, 15),
            plan_id: "p1".into(),
            trainer_id: None,
            last_attendance: Some(date(2024, 5, 20)),
        },
        Member {
            id: "2".into(),
            name: "Sarah Miller".into(),
            email: "sarah@example.com".into(),
            phone: "555-0102".into(),
            status: MemberStatus::Active,
            renewal_date: date(2025, 11, 20),
            plan_id: "p2".into(),
            trainer_id: None,
            last_attendance: Some(date(2024, 5, 21)),
        },
    ]
}

pub(super) fn trainers() -> Vec<Trainer> {
    vec![
        Trainer {
            id: "t1".into(),
            name: "Chris Hemsworth".into(),
            specialty: "Bodybuilding".into(),
            assigned_members: 12,
            performance: 95,
            avatar: "https://ui-avatars.com/api/?name=Chris+Hemsworth&background=3b82f6&color=fff"
                .into(),
        },
        Trainer {
            id: "t2".into(),
            name: "Scarlett Johansson".into(),
            specialty: "Cardio & HIIT".into(),
            assigned_members: 8,
            performance: 92,
            avatar:
                "https://ui-avatars.com/api/?name=Scarlett+Johansson&background=3b82f6&color=fff"
                    .into(),
        },
    ]
}

pub(super) fn plans() -> Vec<Plan> {
    vec![
        Plan {
            id: "p1".into(),
            name: "Basic Access".into(),
            price: 29.99,
            duration_months: 1,
        },
        Plan {
            id: "p2".into(),
            name: "Pro Monthly".into(),
            price: 49.99,
            duration_months: 1,
        },
        Plan {
            id: "p3".into(),
            name: "Elite Annual".into(),
            price: 499.99,
            duration_months: 12,
        },
    ]
}

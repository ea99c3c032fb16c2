use chrono::{NaiveDate, TimeZone, Utc};
use planner_core::{
    EducationItem, EducationType, FinancialItem, FinancialType, Fund, Goal, InvestmentItem,
    InvestmentStatus, PlannerData, Status, Target,
};
use serde_json::json;
use uuid::Uuid;

const GOAL_ID: &str = "11111111-2222-4333-8444-555555555555";

#[test]
fn goal_serializes_with_camel_case_and_iso_timestamp() {
    let goal = Goal {
        id: Uuid::parse_str(GOAL_ID).unwrap(),
        title: "Run a marathon".to_string(),
        description: String::new(),
        status: Status::InProgress,
        progress: 40,
        created_at: Utc.with_ymd_and_hms(2026, 1, 5, 9, 30, 0).unwrap(),
        due_date: NaiveDate::from_ymd_opt(2026, 10, 1),
    };

    let value = serde_json::to_value(&goal).unwrap();
    assert_eq!(value["id"], GOAL_ID);
    assert_eq!(value["status"], "in-progress");
    assert_eq!(value["createdAt"], "2026-01-05T09:30:00.000Z");
    assert_eq!(value["dueDate"], "2026-10-01");

    let decoded: Goal = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, goal);
}

#[test]
fn goal_without_due_date_omits_field_and_accepts_empty_string() {
    let stored = json!({
        "id": GOAL_ID,
        "title": "Learn piano",
        "description": "",
        "status": "pending",
        "progress": 0,
        "createdAt": "2025-12-31T23:59:59.123Z",
        "dueDate": ""
    });

    let goal: Goal = serde_json::from_value(stored).unwrap();
    assert_eq!(goal.due_date, None);

    let value = serde_json::to_value(&goal).unwrap();
    assert!(value.get("dueDate").is_none());
}

#[test]
fn kind_discriminators_serialize_as_type() {
    let created_at = "2026-02-01T00:00:00.000Z";
    let education: EducationItem = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "title": "Rust book",
        "type": "certification",
        "description": "",
        "status": "completed",
        "progress": 100,
        "createdAt": created_at
    }))
    .unwrap();
    assert_eq!(education.kind, EducationType::Certification);

    let financial: FinancialItem = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "title": "Rent",
        "description": "",
        "amount": 950.5,
        "type": "expense",
        "category": "housing",
        "createdAt": created_at
    }))
    .unwrap();
    assert_eq!(financial.kind, FinancialType::Expense);
    assert_eq!(serde_json::to_value(&financial).unwrap()["type"], "expense");
}

#[test]
fn unknown_fields_are_ignored_and_missing_description_defaults() {
    let investment: InvestmentItem = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "title": "Index fund",
        "amount": 1000,
        "returnRate": -3.5,
        "status": "active",
        "createdAt": "2026-02-01T00:00:00Z",
        "broker": "legacy field"
    }))
    .unwrap();

    assert_eq!(investment.status, InvestmentStatus::Active);
    assert_eq!(investment.return_rate, -3.5);
    assert_eq!(investment.amount, 1000.0);
    assert!(investment.description.is_empty());
}

#[test]
fn fund_and_target_use_expected_wire_fields() {
    let fund: Fund = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "name": "Emergency",
        "description": "6 months",
        "targetAmount": 6000,
        "currentAmount": 1500.25,
        "createdAt": "2026-02-01T00:00:00.000Z"
    }))
    .unwrap();
    let value = serde_json::to_value(&fund).unwrap();
    assert_eq!(value["targetAmount"], 6000.0);
    assert_eq!(value["currentAmount"], 1500.25);

    let target: Target = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "title": "Ship v1",
        "description": "",
        "status": "pending",
        "progress": 10,
        "deadline": "2026-06-30",
        "createdAt": "2026-02-01T00:00:00.000Z"
    }))
    .unwrap();
    assert_eq!(target.deadline, NaiveDate::from_ymd_opt(2026, 6, 30).unwrap());
}

#[test]
fn aggregate_tolerates_missing_collections() {
    let data: PlannerData = serde_json::from_value(json!({ "goals": [] })).unwrap();
    assert!(data.is_empty());

    let value = serde_json::to_value(PlannerData::default()).unwrap();
    for field in ["goals", "targets", "education", "financial", "investments", "funds"] {
        assert_eq!(value[field], json!([]), "missing collection {field}");
    }
}

#[test]
fn null_amounts_load_as_zero_without_dropping_the_aggregate() {
    let created_at = "2026-03-01T08:00:00.000Z";
    let data: PlannerData = serde_json::from_value(json!({
        "goals": [{
            "id": GOAL_ID,
            "title": "Keep me",
            "description": "",
            "status": "pending",
            "progress": 0,
            "createdAt": created_at
        }],
        "financial": [{
            "id": Uuid::new_v4(),
            "title": "Typo",
            "description": "",
            "amount": null,
            "type": "income",
            "category": "",
            "createdAt": created_at
        }],
        "investments": [{
            "id": Uuid::new_v4(),
            "title": "Moonshot",
            "description": "",
            "amount": 100,
            "returnRate": null,
            "status": "planned",
            "createdAt": created_at
        }],
        "funds": [{
            "id": Uuid::new_v4(),
            "name": "Overflow",
            "description": "",
            "targetAmount": null,
            "currentAmount": null,
            "createdAt": created_at
        }]
    }))
    .unwrap();

    assert_eq!(data.record_count(), 4);
    assert_eq!(data.goals[0].title, "Keep me");
    assert_eq!(data.financial[0].amount, 0.0);
    assert_eq!(data.investments[0].amount, 100.0);
    assert_eq!(data.investments[0].return_rate, 0.0);
    assert_eq!(data.funds[0].target_amount, 0.0);
    assert_eq!(data.funds[0].current_amount, 0.0);
}

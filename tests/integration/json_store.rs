use serde_json::{Value, json};
use tempfile::tempdir;

use shopflow::engine::OrderService;
use shopflow::errors::ShopflowError;
use shopflow::pipeline::{NewOrder, PipelineTemplate};
use shopflow::store::{JsonFileStore, OrderStore};
use shopflow::types::OrderStatus;

fn legacy_file() -> Value {
    json!([
        {
            "id": "1717000000000",
            "customer": "ACME",
            "rep": "Wang",
            "dueDate": "2024-07-01",
            "mfgId": "MFG-7",
            "progress": 0,
            "currentDept": "报价",
            "status": "OK",
            "shipping": { "carrier": "SF" },
            "departments": [
                { "name": "报价", "completed": false, "inProgress": true,
                  "startTime": "2024-05-01T08:00:00.000Z", "employee": "Li",
                  "estimatedHours": 2, "hoursLate": 1.5, "fixture": "V-12" },
                { "name": "生产审批", "completed": false, "inProgress": false, "priority": "medium" }
            ]
        }
    ])
}

#[tokio::test]
async fn unknown_and_optional_fields_survive_a_mutation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.json");
    std::fs::write(&path, serde_json::to_string_pretty(&legacy_file()).unwrap()).unwrap();

    let svc = OrderService::new(JsonFileStore::new(&path), PipelineTemplate::default());
    let order = svc
        .mutate("1717000000000", "报价", "complete", None)
        .await
        .unwrap();
    assert_eq!(order.progress, 50);
    assert_eq!(order.current_dept, "生产审批");

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let o = &written[0];
    assert_eq!(o["shipping"]["carrier"], "SF");
    assert_eq!(o["progress"], 50);
    let d = &o["departments"][0];
    assert_eq!(d["employee"], "Li");
    assert_eq!(d["fixture"], "V-12");
    assert_eq!(d["estimatedHours"], 2.0);
    assert_eq!(d["hoursLate"], 1.5);
    assert_eq!(d["completed"], true);
    assert_eq!(d["inProgress"], false);
    assert!(d["completedTime"].is_string());
    assert_eq!(o["departments"][1]["priority"], "medium");
}

#[tokio::test]
async fn create_persists_to_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("orders.json");
    let svc = OrderService::new(JsonFileStore::new(&path), PipelineTemplate::default());

    let order = svc
        .create(NewOrder {
            customer: "Globex".into(),
            rep: "Zhao".into(),
            due_date: "2024-08-15".into(),
            mfg_id: "MFG-9".into(),
        })
        .await
        .unwrap();

    let reloaded = JsonFileStore::new(&path).load_all().unwrap();
    assert_eq!(reloaded, vec![order]);
    assert_eq!(reloaded[0].status, OrderStatus::Ok);
}

#[tokio::test]
async fn unreadable_store_is_reported_and_not_overwritten() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.json");
    std::fs::write(&path, "[{ broken").unwrap();

    let svc = OrderService::new(JsonFileStore::new(&path), PipelineTemplate::default());
    let err = svc.create(NewOrder::default()).await.unwrap_err();

    assert!(matches!(err, ShopflowError::StoreUnavailable(_)));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[{ broken");
}

#[tokio::test]
async fn hand_written_timestamps_load_and_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.json");
    let file = json!([
        {
            "id": "o1", "customer": "ACME", "rep": "Wang", "dueDate": "12/31",
            "mfgId": "MFG-1", "progress": 0, "currentDept": "报价", "status": "OK",
            "departments": [
                { "name": "报价", "completed": false, "inProgress": true,
                  "startTime": "12/24 08:30" },
                { "name": "生产审批", "completed": true, "inProgress": false,
                  "completedTime": "2024-12-23 17:05:00" }
            ]
        }
    ]);
    std::fs::write(&path, serde_json::to_string_pretty(&file).unwrap()).unwrap();

    let store = JsonFileStore::new(&path);
    let loaded = store.load_all().unwrap();
    assert_eq!(loaded[0].departments[0].start_time.as_deref(), Some("12/24 08:30"));

    store.save_all(&loaded).unwrap();
    let reloaded = store.load_all().unwrap();
    assert_eq!(reloaded, loaded);

    let svc = OrderService::new(JsonFileStore::new(&path), PipelineTemplate::default());
    let order = svc.mutate("o1", "报价", "complete", None).await.unwrap();
    assert_eq!(order.departments[0].start_time.as_deref(), Some("12/24 08:30"));
    assert_eq!(
        order.departments[1].completed_time.as_deref(),
        Some("2024-12-23 17:05:00")
    );
}

use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["5", "42"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 5);
    let records = v["records"].as_array().expect("records array");
    assert_eq!(records.len(), 5);
    for r in records {
        let shots = r["shots"].as_u64().unwrap();
        assert!((17..=100).contains(&shots));
        assert_eq!(r["sinking_order"].as_array().unwrap().len(), 5);
    }
    assert!(v["min_shots"].as_u64().unwrap() <= v["max_shots"].as_u64().unwrap());
}

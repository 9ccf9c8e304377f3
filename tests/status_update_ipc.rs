use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_sheet(prefix: &str, content: &str) -> PathBuf {
    let p = std::env::temp_dir().join(format!(
        "{}-{}.tsv",
        prefix,
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos()
    ));
    std::fs::write(&p, content).expect("write temp sheet");
    p
}

fn spawn_sidecar() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_dormbookd");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn dormbookd");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn request(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    assert!(!line.trim().is_empty(), "empty response for {}", method);
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    value
}

fn error_code(value: &serde_json::Value) -> &str {
    value
        .get("error")
        .and_then(|e| e.get("code"))
        .and_then(|v| v.as_str())
        .unwrap_or("")
}

fn connect(stdin: &mut ChildStdin, reader: &mut BufReader<ChildStdout>, sheet: &Path) {
    let connected = request(
        stdin,
        reader,
        "connect",
        "sheet.connect",
        json!({ "path": sheet.to_string_lossy() }),
    );
    assert_eq!(
        connected.get("ok").and_then(|v| v.as_bool()),
        Some(true),
        "connect failed: {}",
        connected
    );
}

fn sheet_cell(sheet: &Path, row: usize, col: usize) -> String {
    let text = std::fs::read_to_string(sheet).expect("read sheet back");
    let line = text.lines().nth(row - 1).unwrap_or("");
    line.split('\t').nth(col - 1).unwrap_or("").to_string()
}

fn roster_fixture() -> String {
    [
        "연번\t호실\t이름\t상태\t메모\t보호자연락처\t학생연락처\t인강실\t그룹\t담당\t비고\t성별\t입사일",
        "1\tA401\t김철수\t\t\t010-2000-0001\t010-1000-0001\tL-01\t새벽1\t박담임\t\t남\t2025-03-02",
        "2\tB202\t박민준\t정상\t\t010-2000-0003\t010-1000-0003\tL-03\t새벽2\t최담임\t\t남\t2025-03-02",
        "3\tD105\t이수진\t외출\t기존 메모\t010-2000-0004\t010-1000-0004\tL-04\t저녁1\t최담임\t\t여\t2025-03-02",
        "",
    ]
    .join("\n")
}

#[test]
fn update_with_memo_writes_status_and_memo_cells() {
    let sheet = temp_sheet("dormbook-update-memo", &roster_fixture());
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    connect(&mut stdin, &mut reader, &sheet);

    let updated = request(
        &mut stdin,
        &mut reader,
        "1",
        "status.update",
        json!({ "name": "박민준", "status": "외박", "memo": "주말 외박" }),
    );
    assert_eq!(updated.get("ok").and_then(|v| v.as_bool()), Some(true));
    let student = updated
        .get("result")
        .and_then(|r| r.get("student"))
        .expect("student");
    assert_eq!(student.get("rowIndex").and_then(|v| v.as_u64()), Some(3));
    assert_eq!(student.get("status").and_then(|v| v.as_str()), Some("외박"));
    assert_eq!(student.get("memo").and_then(|v| v.as_str()), Some("주말 외박"));
    assert_eq!(
        student.get("roomNumber").and_then(|v| v.as_str()),
        Some("B202")
    );

    // Both cells landed in the backing file, nothing else moved.
    assert_eq!(sheet_cell(&sheet, 3, 4), "외박");
    assert_eq!(sheet_cell(&sheet, 3, 5), "주말 외박");
    assert_eq!(sheet_cell(&sheet, 3, 3), "박민준");
    assert_eq!(sheet_cell(&sheet, 2, 4), "");
    assert_eq!(sheet_cell(&sheet, 4, 4), "외출");

    // The write invalidated the cache: a fresh read sees the new state.
    let found = request(
        &mut stdin,
        &mut reader,
        "2",
        "students.findByName",
        json!({ "name": "박민준" }),
    );
    let hits = found
        .get("result")
        .and_then(|r| r.get("students"))
        .and_then(|v| v.as_array())
        .expect("students array");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].get("status").and_then(|v| v.as_str()), Some("외박"));
    assert_eq!(hits[0].get("memo").and_then(|v| v.as_str()), Some("주말 외박"));

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_file(sheet);
}

#[test]
fn update_without_memo_leaves_the_memo_cell_alone() {
    let sheet = temp_sheet("dormbook-update-nomemo", &roster_fixture());
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    connect(&mut stdin, &mut reader, &sheet);

    let updated = request(
        &mut stdin,
        &mut reader,
        "1",
        "status.update",
        json!({ "name": "이수진", "status": "정상" }),
    );
    assert_eq!(updated.get("ok").and_then(|v| v.as_bool()), Some(true));
    let student = updated
        .get("result")
        .and_then(|r| r.get("student"))
        .expect("student");
    assert_eq!(student.get("status").and_then(|v| v.as_str()), Some("정상"));
    // The prior memo survives an update that carries none.
    assert_eq!(student.get("memo").and_then(|v| v.as_str()), Some("기존 메모"));

    assert_eq!(sheet_cell(&sheet, 4, 4), "정상");
    assert_eq!(sheet_cell(&sheet, 4, 5), "기존 메모");

    // An explicitly empty memo is treated the same as a missing one.
    let updated = request(
        &mut stdin,
        &mut reader,
        "2",
        "status.update",
        json!({ "name": "이수진", "status": "외출", "memo": "" }),
    );
    assert_eq!(updated.get("ok").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(sheet_cell(&sheet, 4, 4), "외출");
    assert_eq!(sheet_cell(&sheet, 4, 5), "기존 메모");

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_file(sheet);
}

#[test]
fn unknown_labels_are_written_through_verbatim() {
    let sheet = temp_sheet("dormbook-update-other", &roster_fixture());
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    connect(&mut stdin, &mut reader, &sheet);

    let updated = request(
        &mut stdin,
        &mut reader,
        "1",
        "status.update",
        json!({ "name": "김철수", "status": "병원" }),
    );
    assert_eq!(updated.get("ok").and_then(|v| v.as_bool()), Some(true));
    let student = updated
        .get("result")
        .and_then(|r| r.get("student"))
        .expect("student");
    assert_eq!(student.get("status").and_then(|v| v.as_str()), Some("병원"));
    assert_eq!(sheet_cell(&sheet, 2, 4), "병원");

    // Off-list labels count every resident as away.
    let stats = request(&mut stdin, &mut reader, "2", "stats.occupancy", json!({}));
    let stats = stats.get("result").expect("result");
    assert_eq!(stats.get("total").and_then(|v| v.as_u64()), Some(3));
    assert_eq!(stats.get("current").and_then(|v| v.as_u64()), Some(1));
    assert_eq!(
        stats
            .get("statusCounts")
            .and_then(|c| c.get("병원"))
            .and_then(|v| v.as_u64()),
        Some(1)
    );

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_file(sheet);
}

#[test]
fn failed_matches_reject_without_writing() {
    let sheet = temp_sheet("dormbook-update-missing", &roster_fixture());
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    connect(&mut stdin, &mut reader, &sheet);

    let before = std::fs::read_to_string(&sheet).expect("read sheet");

    let updated = request(
        &mut stdin,
        &mut reader,
        "1",
        "status.update",
        json!({ "name": "없는사람", "status": "외박", "memo": "메모" }),
    );
    assert_eq!(error_code(&updated), "not_found");

    let updated = request(
        &mut stdin,
        &mut reader,
        "2",
        "status.update",
        json!({ "name": "", "status": "외박" }),
    );
    assert_eq!(error_code(&updated), "bad_params");

    let updated = request(
        &mut stdin,
        &mut reader,
        "3",
        "status.update",
        json!({ "name": "김철수" }),
    );
    assert_eq!(error_code(&updated), "bad_params");

    let after = std::fs::read_to_string(&sheet).expect("read sheet");
    assert_eq!(before, after, "rejected updates must not touch the sheet");

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_file(sheet);
}

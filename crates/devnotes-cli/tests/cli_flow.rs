use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_devnotes"))
}

struct TempHome {
    base: PathBuf,
}

impl TempHome {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time")
            .as_nanos();
        let base = std::env::temp_dir().join(format!(
            "devnotes_{}_{}_{}",
            prefix,
            std::process::id(),
            nanos
        ));
        std::fs::create_dir_all(base.join("config")).expect("create config dir");
        std::fs::create_dir_all(base.join("data")).expect("create data dir");
        Self { base }
    }

    fn store(&self) -> PathBuf {
        self.base.join("notes.json")
    }

    fn config_file(&self) -> PathBuf {
        self.base.join("config").join("devnotes").join("config.toml")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.env("XDG_CONFIG_HOME", self.base.join("config"))
            .env("XDG_DATA_HOME", self.base.join("data"))
            .env("HOME", &self.base)
            .env_remove("DEVNOTES_PATH")
            .env_remove("DEVNOTES_CONFIG")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .stdin(Stdio::null());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        let mut cmd = self.command();
        cmd.arg("--store").arg(self.store()).args(args);
        cmd.output().expect("run devnotes")
    }
}

impl Drop for TempHome {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.base);
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed: stdout={}, stderr={}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn add_note(home: &TempHome, content: &str) -> String {
    let output = home.run(&["--quiet", "add", content]);
    assert_success(&output);
    stdout(&output).trim().to_string()
}

fn list_json(home: &TempHome, args: &[&str]) -> Vec<serde_json::Value> {
    let output = home.run(args);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("parse json");
    value.as_array().expect("json array").clone()
}

fn ids(notes: &[serde_json::Value]) -> Vec<String> {
    notes
        .iter()
        .map(|n| n["id"].as_str().expect("id").to_string())
        .collect()
}

#[test]
fn test_cli_add_list_show() {
    let home = TempHome::new("add_list");

    let id = add_note(&home, "Hello from CLI");
    assert_eq!(id.len(), 7);

    let notes = list_json(&home, &["list", "--json"]);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["id"], id.as_str());
    assert_eq!(notes[0]["content"], "Hello from CLI");
    assert_eq!(notes[0]["fixed"], false);

    let show = home.run(&["show", &id]);
    assert_success(&show);
    let output = stdout(&show);
    assert!(output.contains("Hello from CLI"));
    assert!(output.contains(&format!("id={}", id)));
}

#[test]
fn test_cli_add_reads_stdin() {
    let home = TempHome::new("stdin");

    let mut cmd = home.command();
    cmd.arg("--store")
        .arg(home.store())
        .arg("--quiet")
        .arg("add")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped());
    let mut child = cmd.spawn().expect("spawn");
    {
        use std::io::Write;
        let stdin = child.stdin.as_mut().expect("stdin");
        stdin.write_all(b"piped note\n").expect("write stdin");
    }
    let output = child.wait_with_output().expect("wait");
    assert_success(&output);

    let notes = list_json(&home, &["list", "--json"]);
    assert_eq!(notes[0]["content"], "piped note");
}

#[test]
fn test_cli_empty_content_is_invalid_input() {
    let home = TempHome::new("empty");

    let output = home.run(&["add", ""]);
    assert_eq!(output.status.code(), Some(4));
    assert!(!home.store().exists());
}

#[test]
fn test_cli_pin_orders_list_and_search() {
    let home = TempHome::new("pin");

    let first = add_note(&home, "Buy Milk");
    let second = add_note(&home, "call mom");
    let third = add_note(&home, "milkshake recipe");

    let pin = home.run(&["pin", &third]);
    assert_success(&pin);
    assert!(stdout(&pin).contains("Pinned"));

    let notes = list_json(&home, &["list", "--json"]);
    assert_eq!(ids(&notes), vec![third.clone(), first.clone(), second.clone()]);
    assert_eq!(notes[0]["fixed"], true);

    let hits = list_json(&home, &["search", "MILK", "--json"]);
    assert_eq!(ids(&hits), vec![third.clone(), first.clone()]);

    let plain = home.run(&["list", "--format", "plain"]);
    assert_success(&plain);
    let first_line = stdout(&plain).lines().next().unwrap_or("").to_string();
    assert_eq!(first_line, format!("* {} milkshake recipe", third));

    let unpin = home.run(&["pin", &third]);
    assert!(stdout(&unpin).contains("Unpinned"));
    let notes = list_json(&home, &["list", "--json"]);
    assert_eq!(ids(&notes), vec![first, second, third]);
}

#[test]
fn test_cli_edit_duplicate_delete() {
    let home = TempHome::new("edit");

    let id = add_note(&home, "draft");
    assert_success(&home.run(&["edit", &id, "final text"]));

    let dup = home.run(&["--quiet", "duplicate", &id]);
    assert_success(&dup);
    let copy = stdout(&dup).trim().to_string();
    assert_ne!(copy, id);

    let notes = list_json(&home, &["list", "--json"]);
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[1]["content"], "final text");

    let delete = home.run(&["delete", &id]);
    assert_success(&delete);
    assert!(stdout(&delete).contains("Deleted note"));

    let again = home.run(&["delete", &id]);
    assert_success(&again);
    assert!(stdout(&again).contains("nothing deleted"));

    let notes = list_json(&home, &["list", "--json"]);
    assert_eq!(ids(&notes), vec![copy]);
}

#[test]
fn test_cli_unknown_id_exits_not_found() {
    let home = TempHome::new("missing");
    add_note(&home, "only note");

    for args in [
        vec!["show", "zzzzzzz"],
        vec!["pin", "zzzzzzz"],
        vec!["duplicate", "zzzzzzz"],
        vec!["edit", "zzzzzzz", "text"],
    ] {
        let output = home.run(&args);
        assert_eq!(output.status.code(), Some(3), "args: {:?}", args);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("No note with id"), "stderr: {}", stderr);
        assert!(stderr.contains("Hint:"));
    }

    let notes = list_json(&home, &["list", "--json"]);
    assert_eq!(notes.len(), 1);
}

#[test]
fn test_cli_export_csv_to_file() {
    let home = TempHome::new("export");

    let id = add_note(&home, "He said \"hi\"");
    assert_success(&home.run(&["pin", &id]));
    add_note(&home, "plain");

    let target = home.base.join("out").join("notes.csv");
    let target_str = target.to_string_lossy().to_string();
    let output = home.run(&["export", "--output", &target_str]);
    assert_success(&output);

    let csv = std::fs::read_to_string(&target).expect("read export");
    assert_eq!(
        csv,
        "Content,Fixed\n\"He said \"\"hi\"\"\",true\n\"plain\",false"
    );
}

#[test]
fn test_cli_export_default_file_name() {
    let home = TempHome::new("export_default");
    add_note(&home, "groceries");
    let expected = "Content,Fixed\n\"groceries\",false";

    let out_dir = home.base.join("exports");
    std::fs::create_dir_all(&out_dir).expect("create export dir");
    let out_dir_str = out_dir.to_string_lossy().to_string();
    let into_dir = home.run(&["export", "--output", &out_dir_str]);
    assert_success(&into_dir);
    let csv = std::fs::read_to_string(out_dir.join("notes.csv")).expect("read export");
    assert_eq!(csv, expected);

    let bare = home
        .command()
        .current_dir(&out_dir)
        .arg("--store")
        .arg(home.store())
        .args(["export", "--output"])
        .output()
        .expect("run devnotes");
    assert_success(&bare);
    assert!(String::from_utf8_lossy(&bare.stderr).contains("notes.csv"));
    let csv = std::fs::read_to_string(out_dir.join("notes.csv")).expect("read export");
    assert_eq!(csv, expected);
}

#[test]
fn test_cli_export_json_stdout() {
    let home = TempHome::new("export_json");
    let id = add_note(&home, "one");

    let output = home.run(&["export", "--format", "json"]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(
        value,
        serde_json::json!([{"id": id, "content": "one", "fixed": false}])
    );

    let bad = home.run(&["export", "--format", "xml"]);
    assert_eq!(bad.status.code(), Some(4));
}

#[test]
fn test_cli_malformed_store_lists_empty() {
    let home = TempHome::new("malformed");
    std::fs::write(home.store(), "{\"notes\": \"[not json\"}").expect("write store");

    let notes = list_json(&home, &["list", "--json"]);
    assert!(notes.is_empty());

    add_note(&home, "recovered");
    let notes = list_json(&home, &["list", "--json"]);
    assert_eq!(notes.len(), 1);
}

#[test]
fn test_cli_init_writes_config_used_by_later_commands() {
    let home = TempHome::new("init");
    let store = home.base.join("custom").join("mine.json");
    let store_str = store.to_string_lossy().to_string();

    let mut init = home.command();
    init.arg("init").arg(&store_str);
    let output = init.output().expect("run init");
    assert_success(&output);
    assert!(home.config_file().exists());

    let contents = std::fs::read_to_string(home.config_file()).expect("read config");
    let value: toml::Value = toml::from_str(&contents).expect("parse config");
    assert_eq!(
        value["store"]["path"].as_str(),
        Some(store_str.as_str())
    );

    let mut again = home.command();
    again.arg("init").arg(&store_str);
    assert_eq!(again.output().expect("run init").status.code(), Some(4));

    let mut add = home.command();
    add.args(["--quiet", "add", "via config"]);
    assert_success(&add.output().expect("run add"));
    assert!(store.exists());
    assert!(!home.store().exists());
}


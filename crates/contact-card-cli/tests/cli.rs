use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const NOTE: &str = "# Friends\n\nSome text.\n\n```contact\nName: Jane, Janie\nBirthday: 1990-06-11\nPhone: 5551234567\nEmail: [jane@x.com, broken@@x]\nInsta: @jane\nDiscord: <jane|42>\n```\n\n```contact\nname: Bob\n```\n";

fn run_cmd(home: &Path, args: &[&str]) -> String {
    let output = cargo_bin_cmd!("contact-card")
        .env("XDG_CONFIG_HOME", home)
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(home: &Path, args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("contact-card")
        .env("XDG_CONFIG_HOME", home)
        .arg("--json")
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

fn write_note(temp: &TempDir) -> String {
    let path = temp.path().join("friends.md");
    fs::write(&path, NOTE).expect("write note");
    path.to_str().expect("note path").to_string()
}

#[test]
fn cli_render_prints_cards() {
    let temp = TempDir::new().expect("temp dir");
    let note = write_note(&temp);

    let out = run_cmd(temp.path(), &["render", &note, "--today", "2024-06-10"]);
    assert!(out.contains("Jane\n"));
    assert!(out.contains("  Nickname: Janie\n"));
    assert!(out.contains("  Birthday: Jun 11, 1990 (33 years old)\n"));
    assert!(out.contains("<tel:+1 (555) 123-4567>"));
    assert!(out.contains("📷 @jane  <https://www.instagram.com/jane/>"));
    assert!(out.contains("🎮 jane  <discord:///channels/@me/42>"));
    assert!(!out.contains("broken"));
    assert!(out.contains("\n\nBob\n"));
}

#[test]
fn cli_render_json_includes_contact_and_card() {
    let temp = TempDir::new().expect("temp dir");
    let note = write_note(&temp);

    let value = run_cmd_json(
        temp.path(),
        &["render", &note, "--today", "2024-06-10", "--discord", "web"],
    );
    let blocks = value.as_array().expect("array");
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0]["line"], 5);
    assert_eq!(blocks[0]["contact"]["name"], "Jane");
    assert_eq!(blocks[0]["contact"]["email"], serde_json::json!(["jane@x.com"]));
    assert_eq!(
        blocks[0]["contact"]["discord"][0],
        serde_json::json!({ "handle": "jane", "channel_id": "42" })
    );
    let fields = blocks[0]["card"]["fields"].as_array().expect("fields");
    let discord = fields.last().expect("discord field");
    assert_eq!(discord["href"], "https://discord.com/channels/@me/42");
}

#[test]
fn cli_render_reads_config() {
    let temp = TempDir::new().expect("temp dir");
    let note = write_note(&temp);
    let config_dir = temp.path().join("contact-card");
    fs::create_dir_all(&config_dir).expect("config dir");
    fs::write(
        config_dir.join("config.toml"),
        "[birthday]\nmonth = \"2-digit\"\nday = \"2-digit\"\n[discord]\nclient = false\n",
    )
    .expect("write config");

    let out = run_cmd(temp.path(), &["render", &note, "--today", "2024-06-10"]);
    assert!(out.contains("Birthday: 06/11/1990 (33 years old)"));
    assert!(out.contains("<https://discord.com/channels/@me/42>"));
}

#[test]
fn cli_render_reads_stdin() {
    let temp = TempDir::new().expect("temp dir");
    let output = cargo_bin_cmd!("contact-card")
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["render", "-"])
        .write_stdin("```contact\nname: Piped\n```\n")
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    assert_eq!(String::from_utf8(output.stdout).expect("utf8"), "Piped\n");
}

#[test]
fn cli_render_without_blocks_is_not_found() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("empty.md");
    fs::write(&path, "# Nothing here\n").expect("write note");

    let output = cargo_bin_cmd!("contact-card")
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["render", path.to_str().expect("path")])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("no contact blocks"));
}

#[test]
fn cli_render_rejects_bad_today() {
    let temp = TempDir::new().expect("temp dir");
    let note = write_note(&temp);

    let output = cargo_bin_cmd!("contact-card")
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["render", &note, "--today", "June 10"])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_missing_explicit_config_is_not_found() {
    let temp = TempDir::new().expect("temp dir");
    let note = write_note(&temp);
    let missing = temp.path().join("nope.toml");

    let output = cargo_bin_cmd!("contact-card")
        .args(["--config", missing.to_str().expect("path"), "render", &note])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn cli_parse_prints_contact_and_fields() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("block.txt");
    fs::write(
        &path,
        "Name: Jane, Janie\n\nphone: 555-123-4567\nphone: 123\nno colon here\n",
    )
    .expect("write block");
    let path = path.to_str().expect("path");

    let contact = run_cmd_json(temp.path(), &["parse", path]);
    assert_eq!(contact["name"], "Jane");
    assert_eq!(contact["nickname"], serde_json::json!(["Janie"]));
    assert_eq!(
        contact["phone"],
        serde_json::json!(["+1 (555) 123-4567", "123"])
    );
    assert_eq!(contact["birthday"], "");

    let fields = run_cmd_json(temp.path(), &["parse", "--fields", path]);
    assert_eq!(
        fields,
        serde_json::json!({
            "name": ["Jane", "Janie"],
            "phone": ["555-123-4567", "123"]
        })
    );

    let text = run_cmd(temp.path(), &["parse", path]);
    assert_eq!(
        text,
        "name: Jane\nnickname: Janie\nphone: +1 (555) 123-4567\nphone: 123\n"
    );
}

#[test]
fn cli_render_style_flags_override_config() {
    let temp = TempDir::new().expect("temp dir");
    let note = write_note(&temp);

    let out = run_cmd(
        temp.path(),
        &[
            "render", &note, "--today", "2024-06-10", "--month", "long", "--year", "2-digit",
        ],
    );
    assert!(out.contains("  Birthday: June 11, 90 (33 years old)\n"));
}

#[test]
fn cli_render_rejects_unknown_style() {
    let temp = TempDir::new().expect("temp dir");
    let note = write_note(&temp);

    let output = cargo_bin_cmd!("contact-card")
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["render", &note, "--month", "full"])
        .output()
        .expect("run command");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("invalid month style: full"));
}

#[test]
fn cli_completions_list_subcommands() {
    let temp = TempDir::new().expect("temp dir");

    let out = run_cmd(temp.path(), &["completions", "bash"]);
    assert!(out.contains("contact-card"));
    assert!(out.contains("render"));
    assert!(out.contains("parse"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const NOW: &str = "2022-08-06T21:00:00-03:00";

const FEED: &str = r#"
[[posts]]
id = 1
published_at = "2022-08-06T20:55:00-03:00"

[posts.author]
name = "Ana Souza"
role = "Designer"
avatar_url = "https://example.com/ana.png"

[[posts.content]]
type = "paragraph"
content = "Novo portfólio no ar"

[[posts.content]]
type = "video"
content = "clip.mp4"

[[posts.content]]
type = "link"
content = "example.com/x"
"#;

/// `feedline` with an isolated config location.
#[allow(deprecated)]
fn feedline(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("feedline").unwrap();
    cmd.env("FEEDLINE_CONFIG", dir.path().join("config.toml"));
    cmd
}

#[test]
fn test_render_plain_seed_feed() {
    let dir = TempDir::new().unwrap();

    feedline(&dir)
        .args(["render", "--now", NOW])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Ignite Feed\n"))
        .stdout(predicate::str::contains(
            "há cerca de 1 hora  (6 de agosto às 20:00h)",
        ))
        .stdout(predicate::str::contains("há cerca de 1 dia").not())
        .stdout(predicate::str::contains("há 1 dia"))
        .stdout(predicate::str::contains("  jane.design/doctorcare\n"))
        .stdout(predicate::str::contains("Post muito bacana, hein!"));
}

#[test]
fn test_render_json_view_model() {
    let dir = TempDir::new().unwrap();

    let output = feedline(&dir)
        .args(["render", "--format", "json", "--now", NOW])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let posts = json["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["published"]["relative"], "há cerca de 1 hora");
    assert_eq!(posts[0]["lines"][2]["kind"], "link");
    assert_eq!(posts[0]["lines"][2]["href"], "https://jane.design/doctorcare");
    assert_eq!(posts[0]["form"]["can_publish"], false);
    assert_eq!(posts[0]["comments"][0]["text"], "Post muito bacana, hein!");
    assert_eq!(posts[0]["comments"][0]["likes"], 0);
}

#[test]
fn test_render_feed_file_skips_unknown_blocks() {
    let dir = TempDir::new().unwrap();
    let feed_path = dir.path().join("feed.toml");
    std::fs::write(&feed_path, FEED).unwrap();

    feedline(&dir)
        .args(["render", "--now", NOW, "--feed"])
        .arg(&feed_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[AS] Ana Souza (Designer)"))
        .stdout(predicate::str::contains("há 5 minutos"))
        .stdout(predicate::str::contains("Novo portfólio no ar"))
        .stdout(predicate::str::contains("example.com/x"))
        .stdout(predicate::str::contains("clip.mp4").not());
}

#[test]
fn test_feed_path_and_viewer_from_config() {
    let dir = TempDir::new().unwrap();
    let feed_path = dir.path().join("feed.toml");
    std::fs::write(&feed_path, FEED).unwrap();
    let config = format!(
        "feed_path = {:?}\n\n[viewer]\nname = \"Bruna Lima\"\nrole = \"Tech Lead\"\n",
        feed_path.display().to_string()
    );
    std::fs::write(dir.path().join("config.toml"), config).unwrap();

    feedline(&dir)
        .args(["render", "--now", NOW])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bruna Lima · Tech Lead"))
        .stdout(predicate::str::contains("Ana Souza"))
        .stdout(predicate::str::contains("Bruna Lima · há"));
}

#[test]
fn test_render_rejects_bad_now() {
    let dir = TempDir::new().unwrap();

    feedline(&dir)
        .args(["render", "--now", "yesterday"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: invalid --now timestamp"));
}

#[test]
fn test_render_missing_feed_file_fails() {
    let dir = TempDir::new().unwrap();

    feedline(&dir)
        .args(["render", "--feed"])
        .arg(dir.path().join("missing.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load feed"));
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();

    feedline(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("view"))
        .stdout(predicate::str::contains("--feed"));
}

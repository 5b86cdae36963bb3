//! Env-file discovery and lookup against real files.

use relay_pipeline::{AwsSettings, EnvFile, Environment, PipelineError};
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn write(dir: &std::path::Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn parses_comments_and_quotes() {
    let dir = TempDir::new().unwrap();
    let path = write(
        dir.path(),
        ".env",
        concat!(
            "# AWS credentials\n",
            "AWS_ACCESS_KEY_ID=\"AKIDQUOTED\"\n",
            "AWS_SECRET_ACCESS_KEY='secret value'\n",
            "\n",
            "AWS_DEFAULT_REGION=eu-north-1\n",
        ),
    );

    let file = EnvFile::load(&path).unwrap();

    assert_eq!(file.get("AWS_ACCESS_KEY_ID"), Some("AKIDQUOTED"));
    assert_eq!(file.get("AWS_SECRET_ACCESS_KEY"), Some("secret value"));
    assert_eq!(file.get("AWS_DEFAULT_REGION"), Some("eu-north-1"));
    assert_eq!(file.len(), 3);
}

#[test]
fn malformed_lines_are_skipped_and_kept() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), ".env", "AWS_REGION=eu-west-1\nthis is not valid\nAWS_PROFILE=dev\n");

    let file = EnvFile::load(&path).unwrap();

    assert_eq!(file.get("AWS_REGION"), Some("eu-west-1"));
    assert_eq!(file.get("AWS_PROFILE"), Some("dev"));
    assert_eq!(file.skipped().len(), 1);
}

#[test]
fn discovers_env_file_in_parent_directory() {
    let root = TempDir::new().unwrap();
    write(root.path(), ".env", "AWS_REGION=ca-central-1\n");
    let nested = root.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    let file = EnvFile::discover(None, &nested).unwrap().expect("parent .env should be found");

    assert_eq!(file.path(), root.path().join(".env"));
    assert_eq!(file.get("AWS_REGION"), Some("ca-central-1"));
}

#[test]
fn nearest_env_file_wins() {
    let root = TempDir::new().unwrap();
    write(root.path(), ".env", "AWS_REGION=outer\n");
    let inner = root.path().join("project");
    fs::create_dir_all(&inner).unwrap();
    write(&inner, ".env", "AWS_REGION=inner\n");

    let file = EnvFile::discover(None, &inner).unwrap().unwrap();

    assert_eq!(file.get("AWS_REGION"), Some("inner"));
}

#[test]
fn search_depth_is_limited() {
    let root = TempDir::new().unwrap();
    write(root.path(), ".env", "AWS_REGION=too-far\n");
    let deep = root.path().join("1").join("2").join("3").join("4");
    fs::create_dir_all(&deep).unwrap();

    let candidates = EnvFile::candidates(None, &deep);

    assert_eq!(candidates.len(), 4);
    assert!(!candidates.contains(&root.path().join(".env")));
}

#[test]
fn explicit_path_skips_search() {
    let root = TempDir::new().unwrap();
    write(root.path(), ".env", "AWS_REGION=discovered\n");
    let explicit = write(root.path(), "bedrock.env", "AWS_REGION=explicit\n");

    let file = EnvFile::discover(Some(&explicit), root.path()).unwrap().unwrap();

    assert_eq!(file.get("AWS_REGION"), Some("explicit"));
}

#[test]
fn missing_explicit_path_is_an_error() {
    let root = TempDir::new().unwrap();
    let err = EnvFile::discover(Some(&root.path().join("nope.env")), root.path()).unwrap_err();
    assert!(matches!(err, PipelineError::Configuration(_)));
}

#[test]
fn file_values_take_precedence_over_process() {
    let root = TempDir::new().unwrap();
    let path = write(root.path(), ".env", "AWS_ACCESS_KEY_ID=FROMFILE\n");
    let file = EnvFile::load(&path).unwrap();

    let process = HashMap::from([
        ("AWS_ACCESS_KEY_ID".to_string(), "FROMPROCESS".to_string()),
        ("AWS_SECRET_ACCESS_KEY".to_string(), "PROCESSSECRET".to_string()),
    ]);
    let env = Environment::from_parts(Some(file), process);

    let settings = AwsSettings::from_environment(&env).unwrap();
    assert_eq!(settings.credentials.access_key_id, "FROMFILE");
    assert_eq!(settings.credentials.secret_access_key, "PROCESSSECRET");
    assert_eq!(settings.region, "us-east-1");
}

#[test]
fn missing_credentials_report_searched_file() {
    let root = TempDir::new().unwrap();
    let path = write(root.path(), ".env", "AWS_DEFAULT_REGION=us-west-2\n");
    let env = Environment::from_parts(Some(EnvFile::load(&path).unwrap()), HashMap::new());

    match AwsSettings::from_environment(&env) {
        Err(PipelineError::MissingCredentials { searched }) => assert_eq!(searched, vec![path]),
        other => panic!("expected missing credentials, got {other:?}"),
    }
}
